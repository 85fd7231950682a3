use crate::error::AppError;

/// Acceptance rule for one text field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationFlag {
    /// Maximum accepted length in characters; `None` means unbounded.
    pub max_length: Option<usize>,
    pub allow_empty: bool,
}

pub const TITLE: ValidationFlag = ValidationFlag {
    max_length: Some(100),
    allow_empty: false,
};

pub const DESCRIPTION: ValidationFlag = ValidationFlag {
    max_length: Some(500),
    allow_empty: true,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextCheck {
    pub value: String,
    /// Set when the input was cut down to the flag's limit.
    pub truncated_to: Option<usize>,
}

/// Applies a flag to a raw input line.
///
/// Emptiness is judged on the trimmed input, but the accepted value keeps
/// the original spacing. Over-length input is not rejected: it is cut to
/// the first `max_length` characters and accepted.
pub fn check_text(flag: &ValidationFlag, raw: &str) -> Result<TextCheck, AppError> {
    if !flag.allow_empty && raw.trim().is_empty() {
        return Err(AppError::EmptyInput);
    }

    if let Some(max) = flag.max_length
        && raw.chars().count() > max
    {
        return Ok(TextCheck {
            value: raw.chars().take(max).collect(),
            truncated_to: Some(max),
        });
    }

    Ok(TextCheck {
        value: raw.to_string(),
        truncated_to: None,
    })
}
