use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::Record;
use crate::error::{PlotError, PlotResult};

/// Normal-distribution parameters for one synthetic condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyntheticCondition {
    pub name: String,
    pub count: usize,
    pub x_mean: f64,
    pub x_sd: f64,
    pub y_mean: f64,
    pub y_sd: f64,
}

impl SyntheticCondition {
    #[must_use]
    pub fn new(name: impl Into<String>, count: usize, x: (f64, f64), y: (f64, f64)) -> Self {
        Self {
            name: name.into(),
            count,
            x_mean: x.0,
            x_sd: x.1,
            y_mean: y.0,
            y_sd: y.1,
        }
    }
}

/// Three conditions of 150 records each, shaped like the wing-disc mock set.
#[must_use]
pub fn default_synthetic_conditions() -> Vec<SyntheticCondition> {
    vec![
        SyntheticCondition::new("Standard", 150, (1.7, 0.20), (1.0, 0.15)),
        SyntheticCondition::new("Hypoxia", 150, (1.9, 0.25), (1.4, 0.18)),
        SyntheticCondition::new("LowTemp", 150, (2.2, 0.30), (1.7, 0.20)),
    ]
}

/// Samples records for every condition from a seeded generator.
///
/// The same seed always yields the same records.
pub fn generate_records(conditions: &[SyntheticCondition], seed: u64) -> PlotResult<Vec<Record>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let total = conditions.iter().map(|condition| condition.count).sum();
    let mut records = Vec::with_capacity(total);

    for condition in conditions {
        let x_dist = normal(condition.x_mean, condition.x_sd)?;
        let y_dist = normal(condition.y_mean, condition.y_sd)?;
        for _ in 0..condition.count {
            records.push(Record::new(
                x_dist.sample(&mut rng),
                y_dist.sample(&mut rng),
                condition.name.as_str(),
            )?);
        }
    }

    debug!(records = records.len(), seed, "generated synthetic records");
    Ok(records)
}

fn normal(mean: f64, sd: f64) -> PlotResult<Normal<f64>> {
    Normal::new(mean, sd).map_err(|err| {
        PlotError::InvalidData(format!("invalid normal distribution ({mean}, {sd}): {err}"))
    })
}
