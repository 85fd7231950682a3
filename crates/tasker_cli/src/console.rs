use crate::theme::Palette;
use std::io::{BufRead, Write};
use tasker_core::date;
use tasker_core::error::AppError;
use tasker_core::menu;
use tasker_core::model::Choice;
use tasker_core::validate::{self, ValidationFlag};
use time::Date;

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

/// One end of the interactive session: a line reader, a writer, and the
/// retry loops that turn raw lines into validated values.
///
/// The reader and writer are generic so the whole prompt layer runs
/// against in-memory buffers in tests; `main` hands in locked stdin and
/// stdout.
pub struct Console<R, W> {
    reader: R,
    writer: W,
    palette: Palette,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(reader: R, writer: W, palette: Palette, clear_screen: bool) -> Self {
        Self {
            reader,
            writer,
            palette,
            clear_screen,
        }
    }

    pub fn clear(&mut self) -> Result<(), AppError> {
        if self.clear_screen {
            write!(self.writer, "{CLEAR_SCREEN}").map_err(|err| AppError::io(err.to_string()))?;
            self.flush()?;
        }
        Ok(())
    }

    pub fn line(&mut self, text: &str) -> Result<(), AppError> {
        writeln!(self.writer, "{text}").map_err(|err| AppError::io(err.to_string()))
    }

    pub fn header(&mut self, text: &str) -> Result<(), AppError> {
        let styled = self.palette.accentize(text);
        self.line(&styled)
    }

    pub fn hint(&mut self, text: &str) -> Result<(), AppError> {
        let styled = self.palette.mutedize(text);
        self.line(&styled)
    }

    fn flush(&mut self) -> Result<(), AppError> {
        self.writer
            .flush()
            .map_err(|err| AppError::io(err.to_string()))
    }

    /// Writes the question and blocks for one line of input.
    ///
    /// The returned string has the line ending stripped but is otherwise
    /// untouched. A closed input stream is an error: no validated prompt
    /// can return without input.
    pub fn ask(&mut self, question: &str) -> Result<String, AppError> {
        write!(self.writer, "{question}").map_err(|err| AppError::io(err.to_string()))?;
        self.flush()?;

        let mut input = String::new();
        let bytes = self
            .reader
            .read_line(&mut input)
            .map_err(|err| AppError::io(err.to_string()))?;
        if bytes == 0 {
            return Err(AppError::io("unexpected end of input"));
        }

        while input.ends_with('\n') || input.ends_with('\r') {
            input.pop();
        }
        Ok(input)
    }

    /// Prints the recoverable message and lets the caller re-ask, or
    /// propagates errors no amount of re-asking can fix.
    fn retry(&mut self, err: AppError) -> Result<(), AppError> {
        if err.is_fatal() {
            return Err(err);
        }
        self.line(&err.message())
    }

    /// Asks until the input satisfies the validation flag.
    pub fn prompt_text(
        &mut self,
        question: &str,
        flag: &ValidationFlag,
    ) -> Result<String, AppError> {
        loop {
            let raw = self.ask(question)?;
            match validate::check_text(flag, &raw) {
                Ok(check) => {
                    if let Some(max) = check.truncated_to {
                        self.line(&format!("Text trimmed to {max} characters."))?;
                    }
                    return Ok(check.value);
                }
                Err(err) => self.retry(err)?,
            }
        }
    }

    /// Asks until the input is a number within `[min, max]`.
    pub fn prompt_menu(&mut self, question: &str, min: i64, max: i64) -> Result<i64, AppError> {
        loop {
            let raw = self.ask(question)?;
            match menu::parse_menu_option(&raw, min, max) {
                Ok(value) => return Ok(value),
                Err(err) => self.retry(err)?,
            }
        }
    }

    /// Lists the members of `T` with their codes, then asks until one of
    /// the codes is entered.
    pub fn prompt_choice<T: Choice>(&mut self) -> Result<T, AppError> {
        for line in T::option_lines() {
            self.line(&line)?;
        }
        loop {
            let raw = self.ask("Choose an option: ")?;
            match T::from_input(&raw) {
                Some(choice) => return Ok(choice),
                None => self.retry(AppError::InvalidOption)?,
            }
        }
    }

    /// Asks for an optional `yyyy/mm/dd` date; a blank line means no date
    /// when `allow_empty` is set.
    pub fn prompt_due_date(
        &mut self,
        question: &str,
        allow_empty: bool,
    ) -> Result<Option<Date>, AppError> {
        loop {
            let raw = self.ask(question)?;
            if allow_empty && raw.trim().is_empty() {
                return Ok(None);
            }
            match date::parse_due_date(&raw) {
                Ok(date) => return Ok(Some(date)),
                Err(err) => self.retry(err)?,
            }
        }
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::Console;
    use crate::theme::Palette;
    use std::io::Cursor;
    use tasker_core::model::{Difficulty, Status};
    use tasker_core::validate;
    use time::macros::date;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            Palette::plain(),
            false,
        )
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_writer()).unwrap()
    }

    #[test]
    fn ask_strips_the_line_ending_only() {
        let mut console = console("  keep spaces  \r\n");
        let raw = console.ask("? ").unwrap();
        assert_eq!(raw, "  keep spaces  ");
    }

    #[test]
    fn ask_fails_on_end_of_input() {
        let mut console = console("");
        let err = console.ask("? ").unwrap_err();
        assert_eq!(err.code(), "io_error");
    }

    #[test]
    fn prompt_text_reasks_until_non_empty() {
        let mut console = console("\n   \nReal title\n");
        let value = console
            .prompt_text("Title: ", &validate::TITLE)
            .unwrap();
        assert_eq!(value, "Real title");

        let written = output(console);
        assert_eq!(written.matches("Input cannot be empty.").count(), 2);
    }

    #[test]
    fn prompt_text_reports_truncation() {
        let long = "a".repeat(120);
        let mut console = console(&format!("{long}\n"));
        let value = console
            .prompt_text("Title: ", &validate::TITLE)
            .unwrap();

        assert_eq!(value.chars().count(), 100);
        assert!(output(console).contains("Text trimmed to 100 characters."));
    }

    #[test]
    fn prompt_menu_reasks_on_bad_input() {
        let mut console = console("abc\n9\n2\n");
        let value = console.prompt_menu("Choose: ", 0, 3).unwrap();
        assert_eq!(value, 2);

        let written = output(console);
        assert!(written.contains("Enter a valid number."));
        assert!(written.contains("Enter a number between 0 and 3."));
    }

    #[test]
    fn prompt_choice_lists_options_and_retries() {
        let mut console = console("7\n\n3\n");
        let status: Status = console.prompt_choice().unwrap();
        assert_eq!(status, Status::Completed);

        let written = output(console);
        assert!(written.contains("1 - pending"));
        assert!(written.contains("4 - cancelled"));
        assert_eq!(written.matches("Invalid option, try again.").count(), 2);
    }

    #[test]
    fn prompt_choice_consumes_repeated_invalid_lines() {
        let mut console = console("0\n5\nx\n2\n");
        let difficulty: Difficulty = console.prompt_choice().unwrap();
        assert_eq!(difficulty, Difficulty::Medium);
        assert_eq!(
            output(console).matches("Invalid option, try again.").count(),
            3
        );
    }

    #[test]
    fn prompt_due_date_accepts_blank_when_allowed() {
        let mut console = console("\n");
        let due = console.prompt_due_date("Due: ", true).unwrap();
        assert_eq!(due, None);
    }

    #[test]
    fn prompt_due_date_rejects_blank_when_required() {
        let mut console = console("\n2026/08/07\n");
        let due = console.prompt_due_date("Due: ", false).unwrap();
        assert_eq!(due, Some(date!(2026 - 08 - 07)));
        assert!(output(console).contains("Invalid format. Use yyyy/mm/dd."));
    }

    #[test]
    fn prompt_due_date_distinguishes_shape_from_calendar_errors() {
        let mut console = console("2024-02/29\n2023/02/29\n2024/02/29\n");
        let due = console.prompt_due_date("Due: ", true).unwrap();
        assert_eq!(due, Some(date!(2024 - 02 - 29)));

        let written = output(console);
        assert!(written.contains("Invalid format. Use yyyy/mm/dd."));
        assert!(written.contains("Invalid date."));
    }

    #[test]
    fn clear_is_a_no_op_when_disabled() {
        let mut console = console("");
        console.clear().unwrap();
        assert!(output(console).is_empty());
    }

    #[test]
    fn header_and_hint_apply_the_palette() {
        let mut console = Console::new(
            Cursor::new(Vec::new()),
            Vec::new(),
            Palette {
                accent: "\x1b[38;5;208m",
                muted: "\x1b[38;5;250m",
                reset: "\x1b[0m",
            },
            false,
        );
        console.header("Title").unwrap();
        console.hint("hint").unwrap();

        let written = output(console);
        assert!(written.contains("\x1b[38;5;208mTitle\x1b[0m"));
        assert!(written.contains("\x1b[38;5;250mhint\x1b[0m"));
    }
}
