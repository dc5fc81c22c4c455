use serde::{Deserialize, Serialize};

/// Single observed entry of the sparse rating matrix.
///
/// Indices are 0-based and bounded by the model's row and column counts.
/// The same `(row, col)` pair may appear more than once in a rating set;
/// every occurrence is applied.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Rating {
    pub row: usize,
    pub col: usize,
    pub score: f64,
}
