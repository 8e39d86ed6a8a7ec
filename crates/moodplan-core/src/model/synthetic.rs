//! Synthetic training corpus.
//!
//! Samples draw every attribute uniformly from its domain and label it with
//! a hand-written "ground truth" formula. The generator takes its RNG from
//! the caller so a seeded fit is reproducible.

use rand::Rng;

use crate::features::{encode_parts, FeatureVector};
use crate::mood::Mood;
use crate::task::TaskType;

/// Duration domain for generated tasks (minutes).
pub const DURATION_RANGE: std::ops::RangeInclusive<u32> = 15..=180;

/// Difficulty and urgency domain.
pub const SCALE_RANGE: std::ops::RangeInclusive<u8> = 1..=5;

/// Priority label noise, inclusive on both ends.
pub const PRIORITY_NOISE: std::ops::RangeInclusive<i32> = -2..=2;

/// One labelled sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub features: FeatureVector,
    pub priority: f64,
    pub mental_load: f64,
}

/// Column-oriented training data for both regressors.
#[derive(Debug, Clone, Default)]
pub struct TrainingCorpus {
    pub features: Vec<FeatureVector>,
    pub priority: Vec<f64>,
    pub mental_load: Vec<f64>,
}

impl TrainingCorpus {
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    fn push(&mut self, sample: Sample) {
        self.features.push(sample.features);
        self.priority.push(sample.priority);
        self.mental_load.push(sample.mental_load);
    }
}

/// `urgency*10 + difficulty*(mood_code+1) + noise`
pub fn priority_target(urgency: u8, difficulty: u8, mood: Mood, noise: i32) -> f64 {
    let urgency = urgency as f64;
    let difficulty = difficulty as f64;
    let mood_code = mood.code() as f64;
    urgency * 10.0 + difficulty * (mood_code + 1.0) + noise as f64
}

/// `difficulty*2 + duration/60 - mood_code/2`
pub fn mental_load_target(difficulty: u8, duration: u32, mood: Mood) -> f64 {
    difficulty as f64 * 2.0 + duration as f64 / 60.0 - mood.code() as f64 / 2.0
}

/// Draw one sample.
pub fn generate_sample<R: Rng + ?Sized>(rng: &mut R) -> Sample {
    let duration = rng.gen_range(DURATION_RANGE);
    let difficulty = rng.gen_range(SCALE_RANGE);
    let urgency = rng.gen_range(SCALE_RANGE);
    let mood = Mood::ALL[rng.gen_range(0..Mood::ALL.len())];
    let kind = TaskType::ALL[rng.gen_range(0..TaskType::ALL.len())];
    let noise = rng.gen_range(PRIORITY_NOISE);

    Sample {
        features: encode_parts(duration, difficulty, urgency, mood, Some(kind)),
        priority: priority_target(urgency, difficulty, mood, noise),
        mental_load: mental_load_target(difficulty, duration, mood),
    }
}

/// Draw `n` samples.
pub fn generate_corpus<R: Rng + ?Sized>(n: usize, rng: &mut R) -> TrainingCorpus {
    let mut corpus = TrainingCorpus {
        features: Vec::with_capacity(n),
        priority: Vec::with_capacity(n),
        mental_load: Vec::with_capacity(n),
    };
    for _ in 0..n {
        corpus.push(generate_sample(rng));
    }
    corpus
}
