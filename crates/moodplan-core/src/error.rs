//! Core error types for moodplan-core.
//!
//! This module defines the error hierarchy using thiserror. Scheduling itself
//! is infallible; errors come from fitting the scoring model, loading
//! configuration and validating task input at the boundary.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for moodplan-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Scoring model errors
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while fitting the scoring model.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ModelError {
    /// The synthetic corpus would be empty
    #[error("Cannot fit a forest on an empty training corpus")]
    EmptyCorpus,

    /// The forest would have no trees
    #[error("Forest must contain at least one tree")]
    NoTrees,

    /// Feature rows and targets disagree in length
    #[error("Training data mismatch: {features} feature rows but {targets} targets")]
    ShapeMismatch { features: usize, targets: usize },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dotted configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Home directory could not be located
    #[error("Could not determine configuration directory")]
    NoConfigDir,
}

/// Validation errors for incoming task records.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// Duration must be strictly positive
    #[error("Task '{name}' has non-positive duration {duration}")]
    NonPositiveDuration { name: String, duration: i64 },

    /// Duration above the per-task ceiling
    #[error("Task '{name}' lasts {duration} minutes, more than the {max} minute limit")]
    DurationTooLong { name: String, duration: i64, max: u32 },

    /// Value outside an inclusive range
    #[error("Task '{name}': {field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        name: String,
        field: &'static str,
        min: i64,
        max: i64,
        value: i64,
    },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
