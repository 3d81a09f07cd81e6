use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Numeric dimension of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Categorical experimental group label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Condition(String);

impl Condition {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for Condition {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Condition {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Condition {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One observation: two measurements plus the condition it was taken under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub x: f64,
    pub y: f64,
    pub condition: Condition,
}

impl Record {
    /// Builds a record, rejecting non-finite measurements.
    pub fn new(x: f64, y: f64, condition: impl Into<Condition>) -> PlotResult<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(PlotError::InvalidData(
                "record measurements must be finite".to_owned(),
            ));
        }
        Ok(Self {
            x,
            y,
            condition: condition.into(),
        })
    }

    #[must_use]
    pub fn value(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Drops records with NaN or infinite measurements.
///
/// Returns the kept records and the number that were dropped.
#[must_use]
pub fn retain_finite(records: Vec<Record>) -> (Vec<Record>, usize) {
    let original = records.len();
    let kept: Vec<Record> = records.into_iter().filter(Record::is_finite).collect();
    let dropped = original - kept.len();
    (kept, dropped)
}
