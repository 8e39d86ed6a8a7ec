//! # moodplan Core Library
//!
//! This library turns a list of tasks plus a reported mood into an ordered
//! day timeline with interleaved rest breaks and a short piece of advice.
//! The CLI is a thin layer over the same library.
//!
//! ## Architecture
//!
//! - **Feature encoding**: tasks and mood become a fixed-length numeric vector
//! - **Scoring model**: two regression forests (priority, mental load) fit once
//!   on a synthetic corpus and shared read-only afterwards
//! - **Mood policies**: per-mood ordering, break interval and advice
//! - **Scheduler**: orders scored tasks and lays out a contiguous timeline
//!
//! ## Key Components
//!
//! - [`ScoringModel`]: fitted regressors, built once per process
//! - [`Scheduler`]: builds a [`DayPlan`] from tasks and a [`Mood`]
//! - [`MoodPolicy`]: the static mood table
//! - [`Config`]: application configuration management
//!
//! ```no_run
//! use moodplan_core::{Mood, ModelConfig, Scheduler, ScoringModel, Task};
//!
//! let model = ScoringModel::fit(&ModelConfig::default()).expect("model fit");
//! let scheduler = Scheduler::new(&model);
//! let tasks = vec![
//!     Task::new("essay", 30, 2, 3, "work"),
//!     Task::new("laundry", 20, 1, 2, "chores"),
//! ];
//! let plan = scheduler.plan(&tasks, Mood::Tired);
//! println!("{}", plan.mood_advice);
//! ```

pub mod error;
pub mod features;
pub mod model;
pub mod mood;
pub mod policy;
pub mod scheduler;
pub mod storage;
pub mod task;

pub use error::{ConfigError, CoreError, ModelError, ValidationError};
pub use features::{encode, FeatureVector, FEATURE_LEN};
pub use model::{ModelConfig, Score, ScoredTask, ScoringModel};
pub use mood::Mood;
pub use policy::{MoodPolicy, OrderingKey};
pub use scheduler::{BlockKind, DayPlan, PlanSummary, ScheduledBlock, Scheduler, TimelineConfig};
pub use storage::{Config, DisplayConfig};
pub use task::{validate_all, PlanRequest, Task, TaskInput, TaskType};
