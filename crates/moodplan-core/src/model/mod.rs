//! Scoring model: priority and mental-load regressors.
//!
//! Both regressors are fit once against a synthetic corpus and are read-only
//! afterwards. A [`ScoringModel`] is an ordinary value; build it at startup
//! and lend it to every [`crate::Scheduler`].

pub mod forest;
pub mod synthetic;

use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_pcg::Mcg128Xsl64;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::features::{encode, FeatureVector};
use crate::mood::Mood;
use crate::task::Task;

pub use forest::{ForestParams, RandomForest, RegressionTree};
pub use synthetic::{generate_corpus, generate_sample, Sample, TrainingCorpus};

/// Model-fitting configuration (`[model]` in config.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelConfig {
    /// Synthetic samples to generate
    #[serde(default = "default_samples")]
    pub samples: usize,
    /// Trees per forest
    #[serde(default = "default_trees")]
    pub trees: usize,
    /// Seed for tree construction, shared by both forests
    #[serde(default = "default_forest_seed")]
    pub forest_seed: u64,
    /// Seed for corpus generation (None = OS entropy)
    #[serde(default)]
    pub corpus_seed: Option<u64>,
    /// Optional tree depth limit
    #[serde(default)]
    pub max_depth: Option<usize>,
    #[serde(default = "default_min_samples_split")]
    pub min_samples_split: usize,
}

fn default_samples() -> usize {
    2000
}
fn default_trees() -> usize {
    80
}
fn default_forest_seed() -> u64 {
    42
}
fn default_min_samples_split() -> usize {
    2
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            trees: default_trees(),
            forest_seed: default_forest_seed(),
            corpus_seed: None,
            max_depth: None,
            min_samples_split: default_min_samples_split(),
        }
    }
}

impl ModelConfig {
    fn forest_params(&self) -> ForestParams {
        ForestParams {
            n_trees: self.trees,
            max_depth: self.max_depth,
            min_samples_split: self.min_samples_split,
            seed: self.forest_seed,
        }
    }
}

/// Model output for one task.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub priority_score: f64,
    pub mental_load: f64,
}

/// A task together with its model scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTask {
    pub task: Task,
    pub priority_score: f64,
    pub mental_load: f64,
}

/// Two independent forests, one per target.
#[derive(Debug, Clone)]
pub struct ScoringModel {
    priority: RandomForest,
    mental_load: RandomForest,
    corpus_size: usize,
}

impl ScoringModel {
    /// Generate a corpus and fit both forests.
    ///
    /// The corpus RNG is seeded from `config.corpus_seed` when present and
    /// from OS entropy otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the corpus or forest would be empty.
    pub fn fit(config: &ModelConfig) -> Result<Self, ModelError> {
        let mut rng = match config.corpus_seed {
            Some(seed) => Mcg128Xsl64::seed_from_u64(seed),
            None => Mcg128Xsl64::from_entropy(),
        };
        Self::fit_with_rng(config, &mut rng)
    }

    /// Fit with a caller-supplied corpus RNG.
    ///
    /// # Errors
    ///
    /// Returns an error if the corpus or forest would be empty.
    pub fn fit_with_rng<R: Rng + ?Sized>(
        config: &ModelConfig,
        rng: &mut R,
    ) -> Result<Self, ModelError> {
        if config.samples == 0 {
            return Err(ModelError::EmptyCorpus);
        }
        let corpus = generate_corpus(config.samples, rng);
        Self::fit_corpus(&corpus, config)
    }

    /// Fit both forests on an existing corpus.
    ///
    /// # Errors
    ///
    /// Returns an error if the corpus is empty, inconsistent, or no trees
    /// are requested.
    pub fn fit_corpus(corpus: &TrainingCorpus, config: &ModelConfig) -> Result<Self, ModelError> {
        let started = Instant::now();
        let params = config.forest_params();

        let priority = RandomForest::fit(&corpus.features, &corpus.priority, &params)?;
        let mental_load = RandomForest::fit(&corpus.features, &corpus.mental_load, &params)?;

        tracing::info!(
            samples = corpus.len(),
            trees = params.n_trees,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "scoring model fitted"
        );

        Ok(Self {
            priority,
            mental_load,
            corpus_size: corpus.len(),
        })
    }

    pub fn score(&self, features: &FeatureVector) -> Score {
        Score {
            priority_score: self.priority.predict(features),
            mental_load: self.mental_load.predict(features),
        }
    }

    /// Encode and score a task under a mood.
    pub fn score_task(&self, task: &Task, mood: Mood) -> ScoredTask {
        if task.kind().is_none() {
            tracing::warn!(
                task = %task.name,
                task_type = %task.task_type,
                "unrecognized task type, one-hot segment left empty"
            );
        }
        let score = self.score(&encode(task, mood));
        ScoredTask {
            task: task.clone(),
            priority_score: score.priority_score,
            mental_load: score.mental_load,
        }
    }

    pub fn corpus_size(&self) -> usize {
        self.corpus_size
    }

    pub fn n_trees(&self) -> usize {
        self.priority.n_trees()
    }
}
