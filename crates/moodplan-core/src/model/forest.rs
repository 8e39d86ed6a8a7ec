//! Bagged regression trees.
//!
//! Each tree is a CART regressor grown on a bootstrap resample of the
//! training rows, splitting on squared error and considering every feature at
//! every node. A forest predicts the mean of its trees.

use rand::{Rng, SeedableRng};
use rand_pcg::Mcg128Xsl64;

use crate::error::ModelError;
use crate::features::FeatureVector;

/// Variance below which a node is treated as pure.
const PURITY_EPSILON: f64 = 1e-12;

/// Hyperparameters for a forest.
#[derive(Debug, Clone, PartialEq)]
pub struct ForestParams {
    /// Number of trees
    pub n_trees: usize,
    /// Depth limit (None = grow until pure or too small to split)
    pub max_depth: Option<usize>,
    /// Minimum samples a node needs before it may split
    pub min_samples_split: usize,
    /// Seed for bootstrap resampling
    pub seed: u64,
}

impl Default for ForestParams {
    fn default() -> Self {
        Self {
            n_trees: 80,
            max_depth: None,
            min_samples_split: 2,
            seed: 42,
        }
    }
}

#[derive(Debug, Clone)]
enum Node {
    Leaf(f64),
    Split {
        feature: usize,
        threshold: f64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

/// A single regression tree.
#[derive(Debug, Clone)]
pub struct RegressionTree {
    root: Node,
}

struct Builder<'a> {
    rows: &'a [FeatureVector],
    targets: &'a [f64],
    max_depth: Option<usize>,
    min_samples_split: usize,
}

#[derive(Debug, Clone, Copy)]
struct BestSplit {
    feature: usize,
    threshold: f64,
    score: f64,
}

impl Builder<'_> {
    fn build(&self, indices: &[usize], depth: usize) -> Node {
        let n = indices.len();
        let (sum, sum_sq) = indices.iter().fold((0.0, 0.0), |(s, sq), &i| {
            let y = self.targets[i];
            (s + y, sq + y * y)
        });
        let mean = sum / n as f64;

        let depth_exhausted = self.max_depth.is_some_and(|max| depth >= max);
        let variance = sum_sq / n as f64 - mean * mean;
        if n < self.min_samples_split || depth_exhausted || variance <= PURITY_EPSILON {
            return Node::Leaf(mean);
        }

        let Some(best) = self.best_split(indices, sum) else {
            return Node::Leaf(mean);
        };

        let (left, right): (Vec<usize>, Vec<usize>) = indices
            .iter()
            .partition(|&&i| self.rows[i].0[best.feature] <= best.threshold);

        Node::Split {
            feature: best.feature,
            threshold: best.threshold,
            left: Box::new(self.build(&left, depth + 1)),
            right: Box::new(self.build(&right, depth + 1)),
        }
    }

    /// Maximize `sum_l^2/n_l + sum_r^2/n_r`, which minimizes the children's
    /// summed squared error.
    fn best_split(&self, indices: &[usize], total: f64) -> Option<BestSplit> {
        let n = indices.len();
        let parent_score = total * total / n as f64;
        let mut best: Option<BestSplit> = None;
        let mut order = indices.to_vec();

        let n_features = self.rows.first().map_or(0, |r| r.0.len());
        for feature in 0..n_features {
            order.sort_by(|&a, &b| self.rows[a].0[feature].total_cmp(&self.rows[b].0[feature]));

            let mut left_sum = 0.0;
            for k in 1..n {
                left_sum += self.targets[order[k - 1]];
                let lo = self.rows[order[k - 1]].0[feature];
                let hi = self.rows[order[k]].0[feature];
                if lo >= hi {
                    continue;
                }
                let right_sum = total - left_sum;
                let score = left_sum * left_sum / k as f64 + right_sum * right_sum / (n - k) as f64;
                if best.map_or(true, |b| score > b.score) {
                    best = Some(BestSplit {
                        feature,
                        threshold: (lo + hi) / 2.0,
                        score,
                    });
                }
            }
        }

        best.filter(|b| b.score > parent_score + PURITY_EPSILON)
    }
}

impl RegressionTree {
    /// Grow a tree over the given (possibly repeated) row indices.
    fn grow(
        rows: &[FeatureVector],
        targets: &[f64],
        indices: &[usize],
        params: &ForestParams,
    ) -> Self {
        let builder = Builder {
            rows,
            targets,
            max_depth: params.max_depth,
            min_samples_split: params.min_samples_split.max(2),
        };
        Self {
            root: builder.build(indices, 0),
        }
    }

    pub fn predict(&self, x: &FeatureVector) -> f64 {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf(value) => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    node = if x.0[*feature] <= *threshold { left } else { right };
                }
            }
        }
    }

    /// Longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        fn walk(node: &Node) -> usize {
            match node {
                Node::Leaf(_) => 0,
                Node::Split { left, right, .. } => 1 + walk(left).max(walk(right)),
            }
        }
        walk(&self.root)
    }
}

/// Ensemble of bootstrap-trained regression trees.
#[derive(Debug, Clone)]
pub struct RandomForest {
    trees: Vec<RegressionTree>,
}

impl RandomForest {
    /// Fit a forest.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, no trees requested, or the
    /// rows and targets differ in length.
    pub fn fit(
        rows: &[FeatureVector],
        targets: &[f64],
        params: &ForestParams,
    ) -> Result<Self, ModelError> {
        if rows.len() != targets.len() {
            return Err(ModelError::ShapeMismatch {
                features: rows.len(),
                targets: targets.len(),
            });
        }
        if rows.is_empty() {
            return Err(ModelError::EmptyCorpus);
        }
        if params.n_trees == 0 {
            return Err(ModelError::NoTrees);
        }

        let mut rng = Mcg128Xsl64::seed_from_u64(params.seed);
        let n = rows.len();
        let trees = (0..params.n_trees)
            .map(|_| {
                let bootstrap: Vec<usize> = (0..n).map(|_| rng.gen_range(0..n)).collect();
                RegressionTree::grow(rows, targets, &bootstrap, params)
            })
            .collect();

        Ok(Self { trees })
    }

    pub fn predict(&self, x: &FeatureVector) -> f64 {
        let total: f64 = self.trees.iter().map(|t| t.predict(x)).sum();
        total / self.trees.len() as f64
    }

    pub fn n_trees(&self) -> usize {
        self.trees.len()
    }
}
