/// Accumulates squared residual errors over one training sweep.
///
/// Side channel only: the trainer reports the finalised value through the
/// log and never feeds it back into the updates.
#[derive(Default)]
pub struct Rmse {
    sum_of_squares: f64,
    count: usize,
}

impl Rmse {
    pub fn push(&mut self, residual_error: f64) {
        self.sum_of_squares += residual_error * residual_error;
        self.count += 1;
    }

    #[must_use]
    pub fn finalise(&self) -> f64 {
        (self.sum_of_squares / self.count.max(1) as f64).sqrt()
    }
}
