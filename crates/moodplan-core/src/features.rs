//! Feature encoding for the scoring model.
//!
//! Layout: `[duration, difficulty, urgency, mood_code, one_hot(type)...]`.

use crate::mood::Mood;
use crate::task::{Task, TaskType};

/// Number of leading scalar features before the one-hot segment.
pub const SCALAR_FEATURES: usize = 4;

/// Total feature vector length.
pub const FEATURE_LEN: usize = SCALAR_FEATURES + TaskType::ALL.len();

/// Fixed-length numeric encoding of a task under a mood.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector(pub [f64; FEATURE_LEN]);

impl FeatureVector {
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// Encode raw attributes. Shared by request encoding and corpus generation.
///
/// `kind == None` leaves the one-hot segment all zero.
pub fn encode_parts(
    duration: u32,
    difficulty: u8,
    urgency: u8,
    mood: Mood,
    kind: Option<TaskType>,
) -> FeatureVector {
    let mut values = [0.0; FEATURE_LEN];
    values[0] = duration as f64;
    values[1] = difficulty as f64;
    values[2] = urgency as f64;
    values[3] = mood.code() as f64;
    if let Some(kind) = kind {
        values[SCALAR_FEATURES + kind.index()] = 1.0;
    }
    FeatureVector(values)
}

/// Encode a task for inference.
pub fn encode(task: &Task, mood: Mood) -> FeatureVector {
    encode_parts(task.duration, task.difficulty, task.urgency, mood, task.kind())
}
