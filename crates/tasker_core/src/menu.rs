use crate::error::AppError;
use crate::model::Task;

/// Main-menu dispatch table: option 0 exits, 1-3 run an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    View,
    Search,
    Add,
    Exit,
}

impl MainChoice {
    pub fn from_option(option: i64) -> Option<Self> {
        match option {
            0 => Some(Self::Exit),
            1 => Some(Self::View),
            2 => Some(Self::Search),
            3 => Some(Self::Add),
            _ => None,
        }
    }
}

/// What a menu action hands back to the loop: the (possibly replaced)
/// task list and whether the session keeps running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOutcome {
    pub tasks: Vec<Task>,
    pub keep_running: bool,
}

impl MenuOutcome {
    pub fn keep(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            keep_running: true,
        }
    }

    pub fn stop(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            keep_running: false,
        }
    }
}

/// Parses one line of menu input into an integer within `[min, max]`.
///
/// Fractional input is truncated toward zero, so `2.9` selects 2. Anything
/// that does not parse to a finite number is rejected before the range
/// check.
pub fn parse_menu_option(raw: &str, min: i64, max: i64) -> Result<i64, AppError> {
    let value: f64 = raw.trim().parse().map_err(|_| AppError::InvalidNumber)?;
    if !value.is_finite() {
        return Err(AppError::InvalidNumber);
    }

    let value = value.trunc() as i64;
    if value < min || value > max {
        return Err(AppError::OutOfRange { min, max });
    }
    Ok(value)
}
