use crate::console::Console;
use std::io::{BufRead, Write};
use tabled::builder::Builder;
use tabled::settings::Style;
use tasker_core::date;
use tasker_core::error::AppError;
use tasker_core::menu::{MainChoice, MenuOutcome};
use tasker_core::model::{Choice, Difficulty, Status, Task};
use tasker_core::query;
use tasker_core::validate;

pub fn main_menu_lines(name: &str) -> Vec<String> {
    vec![
        format!("Hello {name}"),
        "What would you like to do?".to_string(),
        "1- View my tasks".to_string(),
        "2- Search for a task".to_string(),
        "3- Add a new task".to_string(),
        "0- Exit".to_string(),
    ]
}

pub fn view_menu_lines() -> Vec<String> {
    vec![
        "Which tasks would you like to see?".to_string(),
        "1- All".to_string(),
        "2- Pending".to_string(),
        "3- In progress".to_string(),
        "4- Completed".to_string(),
        "0- Back".to_string(),
    ]
}

pub fn listing_lines(tasks: &[Task]) -> Vec<String> {
    tasks
        .iter()
        .enumerate()
        .map(|(position, task)| format!("[{}] - {}", position + 1, task.title))
        .collect()
}

/// One full main-menu round: clear, render, read a choice, dispatch.
pub fn main_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tasks: Vec<Task>,
    name: &str,
) -> Result<MenuOutcome, AppError> {
    console.clear()?;
    console.header("=== Task Manager ===")?;
    console.line("")?;

    let mut lines = main_menu_lines(name).into_iter();
    if let Some(greeting) = lines.next() {
        console.header(&greeting)?;
    }
    for line in lines {
        console.line(&line)?;
    }

    let option = console.prompt_menu("Choose an option: ", 0, 3)?;
    dispatch(console, tasks, option)
}

/// Maps a main-menu option to its action. Total over every integer: the
/// bounded prompt never produces an unknown option, but a caller might.
pub fn dispatch<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tasks: Vec<Task>,
    option: i64,
) -> Result<MenuOutcome, AppError> {
    match MainChoice::from_option(option) {
        Some(MainChoice::View) => view_tasks(console, tasks),
        Some(MainChoice::Search) => search_tasks(console, tasks),
        Some(MainChoice::Add) => add_task(console, tasks),
        Some(MainChoice::Exit) => exit_session(console, tasks),
        None => {
            console.line("Invalid option.")?;
            Ok(MenuOutcome::keep(tasks))
        }
    }
}

fn view_tasks<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tasks: Vec<Task>,
) -> Result<MenuOutcome, AppError> {
    console.clear()?;
    for line in view_menu_lines() {
        console.line(&line)?;
    }

    let option = console.prompt_menu("Choose an option: ", 0, 4)?;
    if option == 0 {
        return Ok(MenuOutcome::keep(tasks));
    }

    let filtered = query::filter_by_option(&tasks, option);
    show_listing(console, &filtered, view_label(option))?;
    Ok(MenuOutcome::keep(tasks))
}

fn view_label(option: i64) -> &'static str {
    match option {
        1 => "all",
        2 => "pending",
        3 => "in progress",
        4 => "completed",
        _ => "",
    }
}

fn search_tasks<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tasks: Vec<Task>,
) -> Result<MenuOutcome, AppError> {
    console.clear()?;
    console.header("Search tasks")?;
    let term = console.prompt_text("Enter a task title to search for: ", &validate::TITLE)?;

    let matches = query::filter_by_title(&tasks, &term);
    if matches.is_empty() {
        console.line("")?;
        console.line("No tasks matched your search.")?;
    } else {
        show_listing(console, &matches, &term)?;
    }
    Ok(MenuOutcome::keep(tasks))
}

fn add_task<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tasks: Vec<Task>,
) -> Result<MenuOutcome, AppError> {
    console.clear()?;
    console.header("Add a task")?;

    let task = create_task(console)?;
    let updated = query::add_task(&tasks, task);

    console.line("")?;
    console.line("Task added to the list!")?;
    console.line(&format!("Total tasks: {}", updated.len()))?;
    Ok(MenuOutcome::keep(updated))
}

/// The fixed five-prompt creation sequence. "Now" is captured exactly once,
/// after the last prompt, and handed to the pure constructor.
fn create_task<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Task, AppError> {
    console.line("You are creating a new task")?;

    let title = console.prompt_text("1. Enter the title: ", &validate::TITLE)?;
    let description = console.prompt_text("2. Enter the description: ", &validate::DESCRIPTION)?;

    console.line("")?;
    console.line("3. Select a status:")?;
    let status: Status = console.prompt_choice()?;

    console.line("")?;
    console.line("4. Select a difficulty:")?;
    let difficulty: Difficulty = console.prompt_choice()?;

    let due = console.prompt_due_date("5. Enter a due date (yyyy/mm/dd) or leave blank: ", true)?;

    let created_at = date::local_now();
    let task = Task::new(title, description, status, difficulty, created_at, due);

    console.line("")?;
    console.line("Task saved!")?;
    Ok(task)
}

fn exit_session<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tasks: Vec<Task>,
) -> Result<MenuOutcome, AppError> {
    console.line("Exiting...")?;
    Ok(MenuOutcome::stop(tasks))
}

/// Prints a labelled `[position] - title` listing and offers to open one
/// task's detail view. An empty list short-circuits with a notice.
fn show_listing<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    tasks: &[Task],
    label: &str,
) -> Result<(), AppError> {
    if !label.is_empty() {
        console.line("")?;
        console.header(&format!("Results for: {label}"))?;
    }
    if tasks.is_empty() {
        console.line("No tasks to display.")?;
        return Ok(());
    }

    for line in listing_lines(tasks) {
        console.line(&line)?;
    }

    console.line("")?;
    console.hint("Would you like to see the details of one?")?;
    let index = console.prompt_menu(
        "Enter the task number to view or 0 to go back: ",
        0,
        tasks.len() as i64,
    )?;
    if index == 0 {
        return Ok(());
    }

    if let Some(task) = query::task_at_index(tasks, index) {
        show_detail(console, task)?;
    }
    Ok(())
}

fn show_detail<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    task: &Task,
) -> Result<(), AppError> {
    console.clear()?;
    console.header("This is the task you selected:")?;
    console.line(&detail_table(task)?)?;

    console.line("")?;
    console.hint("Press E to edit, or 0 to go back.")?;
    let choice = console.ask("Choose an option: ")?;
    if choice.trim().eq_ignore_ascii_case("e") {
        console.line("Editing is not yet available.")?;
    }
    Ok(())
}

pub fn detail_table(task: &Task) -> Result<String, AppError> {
    let description = if task.description.is_empty() {
        "No description".to_string()
    } else {
        task.description.clone()
    };
    let due = match task.due {
        Some(due) => date::format_date(due)?,
        None => "No due date".to_string(),
    };

    let mut builder = Builder::default();
    builder.push_record(["Title", task.title.as_str()]);
    builder.push_record(["Description", description.as_str()]);
    builder.push_record(["Status", task.status.label()]);
    builder.push_record(["Difficulty", task.difficulty.label()]);
    builder.push_record(["Due date", due.as_str()]);
    builder.push_record(["Created", date::format_timestamp(task.created_at)?.as_str()]);
    builder.push_record(["Last edited", date::format_timestamp(task.edited_at)?.as_str()]);

    let mut table = builder.build();
    table.with(Style::rounded());
    Ok(table.to_string())
}
