//! Fits the row and column parameters to the observed ratings.
//! Implements a stochastic gradient descent for matrix factorization.
//!
//! https://blog.insightdatascience.com/explicit-matrix-factorization-als-sgd-and-all-that-jazz-b00e4d9b21ea

use itertools::Itertools;
use rand::Rng;

use crate::math::Vector;
use crate::model::Model;
use crate::prelude::*;
use crate::trainer::metrics::Rmse;
use crate::trainer::rating::Rating;

pub mod metrics;
pub mod rating;

/// Owns the hyperparameters and runs the training sweeps.
pub struct Trainer {
    n_topics: usize,
    regularization: f64,
    learning_rate: f64,
}

impl Trainer {
    /// Stores the hyperparameters verbatim.
    ///
    /// No validation is performed: zero `n_topics` or negative
    /// `regularization`/`learning_rate` are accepted and simply train
    /// degenerately or diverge.
    #[must_use]
    pub const fn new(n_topics: usize, regularization: f64, learning_rate: f64) -> Self {
        Self {
            n_topics,
            regularization,
            learning_rate,
        }
    }

    /// Constructs a randomly initialized [`Model`] and performs
    /// `n_iterations` full sweeps over `ratings`, in the given order,
    /// adjusting the parameters in place after every rating.
    ///
    /// With `n_iterations == 0` the freshly initialized model is returned
    /// as is. Fails on the first rating whose indices fall outside
    /// `n_rows`/`n_cols`, applying no update for that rating.
    #[instrument(skip(self, rng, ratings))]
    pub fn train(
        &self,
        rng: &mut impl Rng,
        ratings: &[Rating],
        n_rows: usize,
        n_cols: usize,
        n_iterations: usize,
    ) -> Result<Model> {
        debug!(
            n_ratings = ratings.len(),
            n_distinct_rows = ratings.iter().map(|rating| rating.row).unique().count(),
            n_distinct_cols = ratings.iter().map(|rating| rating.col).unique().count(),
        );

        let mut model = Model::new(rng, n_rows, n_cols, self.n_topics);
        for n_sweep in 1..=n_iterations {
            let rmse = self.sweep(&mut model, ratings)?;
            info!(n_sweep, rmse, "swept");
        }
        Ok(model)
    }

    /// Applies the per-rating update once for every rating, in order.
    /// Returns the root-mean-square residual error over the sweep.
    fn sweep(&self, model: &mut Model, ratings: &[Rating]) -> Result<f64> {
        let mut rmse = Rmse::default();
        for rating in ratings {
            rmse.push(self.step(model, rating)?);
        }
        Ok(rmse.finalise())
    }

    /// Single online SGD step: measures the residual error of the current
    /// parameters on one rating and adjusts that row's and that column's
    /// bias and factors. Returns the residual error.
    fn step(&self, model: &mut Model, rating: &Rating) -> Result<f64> {
        let Rating { row, col, score } = *rating;
        ensure!(
            row < model.n_rows(),
            "rating row {} is out of bounds ({} rows)",
            row,
            model.n_rows(),
        );
        ensure!(
            col < model.n_cols(),
            "rating column {} is out of bounds ({} columns)",
            col,
            model.n_cols(),
        );

        let residual_error = score - model.predict(row, col);

        model.row_biases[row] = self.update_bias(model.row_biases[row], residual_error);
        model.col_biases[col] = self.update_bias(model.col_biases[col], residual_error);

        // Both factor updates share the one residual error, so the column
        // update must see the row factors as they were before the row update.
        let frozen_row_factors = model.row_factors[row].clone();
        self.update_factors(&mut model.row_factors[row], &model.col_factors[col], residual_error);
        self.update_factors(&mut model.col_factors[col], &frozen_row_factors, residual_error);

        Ok(residual_error)
    }

    fn update_bias(&self, bias: f64, residual_error: f64) -> f64 {
        bias + self.learning_rate * (residual_error - self.regularization * bias)
    }

    // userValue[user] += lrate * (err * movieValue[movie] - K * userValue[user]);
    // movieValue[movie] += lrate * (err * userValue[user] - K * movieValue[movie]);
    fn update_factors(&self, factors: &mut Vector, other: &[f64], residual_error: f64) {
        for (factor, other) in factors.iter_mut().zip(other) {
            *factor += self.learning_rate * (residual_error * other - self.regularization * *factor);
        }
    }
}
