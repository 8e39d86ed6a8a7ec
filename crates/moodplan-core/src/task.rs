//! Task records as received from the caller.
//!
//! [`TaskInput`] is the loose wire shape (urgency optional, integers
//! unchecked). [`Task`] is the validated record the scheduler works with.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::mood::Mood;

/// Default urgency when the caller omits it.
pub const DEFAULT_URGENCY: u8 = 3;

/// Longest accepted task, one full day in minutes.
pub const MAX_DURATION_MINUTES: u32 = 24 * 60;

/// Closed set of task categories, in one-hot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Study,
    Chores,
    Work,
    Exercise,
    Leisure,
    Other,
}

impl TaskType {
    /// All task types in one-hot order.
    pub const ALL: [TaskType; 6] = [
        TaskType::Study,
        TaskType::Chores,
        TaskType::Work,
        TaskType::Exercise,
        TaskType::Leisure,
        TaskType::Other,
    ];

    /// Exact, case-sensitive match against the known categories.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "study" => Some(TaskType::Study),
            "chores" => Some(TaskType::Chores),
            "work" => Some(TaskType::Work),
            "exercise" => Some(TaskType::Exercise),
            "leisure" => Some(TaskType::Leisure),
            "other" => Some(TaskType::Other),
            _ => None,
        }
    }

    /// Position within the one-hot segment.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaskType::Study => "study",
            TaskType::Chores => "chores",
            TaskType::Work => "work",
            TaskType::Exercise => "exercise",
            TaskType::Leisure => "leisure",
            TaskType::Other => "other",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A task as it arrives over the request boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskInput {
    pub name: String,
    pub duration: i64,
    pub difficulty: i64,
    #[serde(default = "default_urgency")]
    pub urgency: i64,
    #[serde(rename = "type")]
    pub task_type: String,
}

fn default_urgency() -> i64 {
    DEFAULT_URGENCY as i64
}

impl TaskInput {
    /// Check ranges and produce a [`Task`].
    ///
    /// # Errors
    ///
    /// Returns an error if duration is not positive or exceeds
    /// [`MAX_DURATION_MINUTES`], or difficulty or urgency fall outside 1..=5.
    pub fn validate(&self) -> Result<Task, ValidationError> {
        if self.duration <= 0 {
            return Err(ValidationError::NonPositiveDuration {
                name: self.name.clone(),
                duration: self.duration,
            });
        }
        if self.duration > i64::from(MAX_DURATION_MINUTES) {
            return Err(ValidationError::DurationTooLong {
                name: self.name.clone(),
                duration: self.duration,
                max: MAX_DURATION_MINUTES,
            });
        }
        let duration = self.duration as u32;
        let difficulty = check_scale(&self.name, "difficulty", self.difficulty)?;
        let urgency = check_scale(&self.name, "urgency", self.urgency)?;

        Ok(Task {
            name: self.name.clone(),
            duration,
            difficulty,
            urgency,
            task_type: self.task_type.clone(),
        })
    }
}

fn check_scale(name: &str, field: &'static str, value: i64) -> Result<u8, ValidationError> {
    if (1..=5).contains(&value) {
        Ok(value as u8)
    } else {
        Err(ValidationError::OutOfRange {
            name: name.to_string(),
            field,
            min: 1,
            max: 5,
            value,
        })
    }
}

/// Validate a whole request, stopping at the first bad task.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
pub fn validate_all(inputs: &[TaskInput]) -> Result<Vec<Task>, ValidationError> {
    inputs.iter().map(TaskInput::validate).collect()
}

/// Request document: tasks plus the reported mood.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanRequest {
    pub tasks: Vec<TaskInput>,
    #[serde(default)]
    pub mood: Mood,
}

/// A validated task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub name: String,
    /// Minutes, 1..=[`MAX_DURATION_MINUTES`] once validated
    pub duration: u32,
    /// 1-5
    pub difficulty: u8,
    /// 1-5
    pub urgency: u8,
    /// Raw category string; may be outside [`TaskType::ALL`]
    #[serde(rename = "type")]
    pub task_type: String,
}

impl Task {
    pub fn new(
        name: impl Into<String>,
        duration: u32,
        difficulty: u8,
        urgency: u8,
        task_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            duration,
            difficulty,
            urgency,
            task_type: task_type.into(),
        }
    }

    /// Known category, or `None` for an unrecognized type string.
    pub fn kind(&self) -> Option<TaskType> {
        TaskType::parse(&self.task_type)
    }
}
