use pmf::{Model, Rating, Trainer};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Ratings sampled from an additive structure, so a biased low-rank model
/// can fit them well.
fn synthetic_ratings() -> Vec<Rating> {
    let mut ratings = Vec::new();
    for row in 0..3 {
        for col in 0..3 {
            // Skip one entry per row to keep the matrix sparse.
            if row != col {
                ratings.push(Rating {
                    row,
                    col,
                    score: 1.0 + row as f64 + 0.5 * col as f64,
                });
            }
        }
    }
    ratings
}

fn mean_squared_error(model: &Model, ratings: &[Rating]) -> f64 {
    let sum = ratings
        .iter()
        .map(|rating| (rating.score - model.predict(rating.row, rating.col)).powi(2))
        .sum::<f64>();
    sum / ratings.len() as f64
}

#[test]
fn training_reduces_the_prediction_error() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let ratings = synthetic_ratings();
    let trainer = Trainer::new(2, 0.02, 0.01);

    let untrained = trainer.train(&mut StdRng::seed_from_u64(9), &ratings, 3, 3, 0)?;
    let trained = trainer.train(&mut StdRng::seed_from_u64(9), &ratings, 3, 3, 500)?;

    let baseline = mean_squared_error(&untrained, &ratings);
    let fitted = mean_squared_error(&trained, &ratings);
    assert!(fitted < baseline, "fitted = {fitted}, baseline = {baseline}");
    assert!(fitted < 0.5, "fitted = {fitted}");
    Ok(())
}

#[test]
fn trained_parameters_stay_finite() -> anyhow::Result<()> {
    let ratings = synthetic_ratings();
    let trainer = Trainer::new(4, 0.1, 0.05);

    let model = trainer.train(&mut StdRng::seed_from_u64(1), &ratings, 3, 3, 100)?;

    for row in 0..3 {
        for col in 0..3 {
            assert!(model.predict(row, col).is_finite());
        }
    }
    Ok(())
}
