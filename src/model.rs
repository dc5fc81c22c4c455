//! Learned state of the factorization.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::math::{dot, Vector};

/// Trained parameters of the biased matrix factorization.
///
/// Predictions decompose into the global bias, the additive row and column
/// biases and the inner product of the two latent embeddings.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Model {
    /// Overall average rating estimate.
    /// Drawn once at construction, never touched by the update rule.
    pub global_bias: f64,

    pub row_biases: Vec<f64>,
    pub col_biases: Vec<f64>,

    /// Latent embeddings, one vector of `n_topics` factors per row.
    pub row_factors: Vec<Vector>,

    /// Latent embeddings, one vector of `n_topics` factors per column.
    pub col_factors: Vec<Vector>,
}

impl Model {
    /// Allocates the model and initializes every parameter to an independent
    /// uniform draw from `[0, 1)` using the caller's generator.
    pub fn new(rng: &mut impl Rng, n_rows: usize, n_cols: usize, n_topics: usize) -> Self {
        Self {
            global_bias: rng.gen(),
            row_biases: random_biases(rng, n_rows),
            col_biases: random_biases(rng, n_cols),
            row_factors: random_factors(rng, n_rows, n_topics),
            col_factors: random_factors(rng, n_cols, n_topics),
        }
    }

    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.row_biases.len()
    }

    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.col_biases.len()
    }

    /// Predicts the score of the `(row, col)` entry.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    #[must_use]
    pub fn predict(&self, row: usize, col: usize) -> f64 {
        self.global_bias
            + self.row_biases[row]
            + self.col_biases[col]
            + dot(&self.row_factors[row], &self.col_factors[col])
    }
}

fn random_biases(rng: &mut impl Rng, n: usize) -> Vec<f64> {
    (0..n).map(|_| rng.gen()).collect()
}

fn random_factors(rng: &mut impl Rng, n: usize, n_topics: usize) -> Vec<Vector> {
    (0..n).map(|_| random_biases(rng, n_topics)).collect()
}
