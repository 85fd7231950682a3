use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    EmptyInput,
    InvalidNumber,
    OutOfRange { min: i64, max: i64 },
    InvalidOption,
    InvalidDateFormat,
    InvalidDate,
    InvalidData(String),
    Io(String),
}

impl AppError {
    pub fn invalid_data<M: Into<String>>(message: M) -> Self {
        Self::InvalidData(message.into())
    }

    pub fn io<M: Into<String>>(message: M) -> Self {
        Self::Io(message.into())
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput => "empty_input",
            Self::InvalidNumber => "invalid_number",
            Self::OutOfRange { .. } => "out_of_range",
            Self::InvalidOption => "invalid_option",
            Self::InvalidDateFormat => "invalid_date_format",
            Self::InvalidDate => "invalid_date",
            Self::InvalidData(_) => "invalid_data",
            Self::Io(_) => "io_error",
        }
    }

    /// Message shown to the user before the prompt re-asks.
    pub fn message(&self) -> String {
        match self {
            Self::EmptyInput => "Input cannot be empty.".to_string(),
            Self::InvalidNumber => "Enter a valid number.".to_string(),
            Self::OutOfRange { min, max } => {
                format!("Enter a number between {min} and {max}.")
            }
            Self::InvalidOption => "Invalid option, try again.".to_string(),
            Self::InvalidDateFormat => "Invalid format. Use yyyy/mm/dd.".to_string(),
            Self::InvalidDate => "Invalid date.".to_string(),
            Self::InvalidData(message) => message.clone(),
            Self::Io(message) => message.clone(),
        }
    }

    /// Validation failures re-prompt; `InvalidData` and `Io` end the session.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::InvalidData(_) | Self::Io(_))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.code(), self.message())
    }
}

impl std::error::Error for AppError {}
