//! Biased probabilistic matrix factorization for sparse rating data.
//!
//! Learns a low-rank factorization of observed `(row, column, score)`
//! triples by online stochastic gradient descent with L2 regularization,
//! and predicts unobserved entries from the learned biases and latent
//! factors.
//!
//! ```
//! use pmf::{Rating, Trainer};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let ratings = vec![
//!     Rating { row: 0, col: 0, score: 5.0 },
//!     Rating { row: 1, col: 1, score: 1.0 },
//! ];
//! let trainer = Trainer::new(2, 0.02, 0.005);
//! let model = trainer.train(&mut StdRng::seed_from_u64(42), &ratings, 2, 2, 10)?;
//! assert!(model.predict(0, 1).is_finite());
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod math;
pub mod model;
pub mod prelude;
pub mod trainer;

pub use crate::model::Model;
pub use crate::trainer::rating::Rating;
pub use crate::trainer::Trainer;
