use crate::model::Choice;
use time::{Date, OffsetDateTime};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub title: String,
    pub description: String,
    pub status: Status,
    pub difficulty: Difficulty,
    pub created_at: OffsetDateTime,
    pub edited_at: OffsetDateTime,
    pub due: Option<Date>,
}

impl Task {
    /// Builds a task from already-validated field values.
    ///
    /// `edited_at` starts equal to `created_at`; there is no edit path, so
    /// the two only diverge in a future version.
    pub fn new(
        title: String,
        description: String,
        status: Status,
        difficulty: Difficulty,
        created_at: OffsetDateTime,
        due: Option<Date>,
    ) -> Self {
        Self {
            title,
            description,
            status,
            difficulty,
            created_at,
            edited_at: created_at,
            due,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl Choice for Status {
    const CHOICES: &'static [Self] = &[
        Status::Pending,
        Status::InProgress,
        Status::Completed,
        Status::Cancelled,
    ];

    fn code(self) -> u8 {
        match self {
            Status::Pending => 1,
            Status::InProgress => 2,
            Status::Completed => 3,
            Status::Cancelled => 4,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Status::Pending => "pending",
            Status::InProgress => "in progress",
            Status::Completed => "completed",
            Status::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Choice for Difficulty {
    const CHOICES: &'static [Self] = &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    fn code(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}
