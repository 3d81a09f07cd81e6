use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

use super::scale::{lerp, normalize};

/// Count of values falling into `[x0, x1)`.
///
/// The last bin of a sequence is closed on the right so the domain maximum
/// is counted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    pub x0: f64,
    pub x1: f64,
    pub count: usize,
}

impl Bin {
    #[must_use]
    pub fn midpoint(self) -> f64 {
        self.x0 * 0.5 + self.x1 * 0.5
    }
}

/// Fixed-width bin boundaries over a domain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinLayout {
    lo: f64,
    hi: f64,
    bin_count: usize,
}

impl BinLayout {
    pub fn new(domain: (f64, f64), bin_count: usize) -> PlotResult<Self> {
        let (lo, hi) = domain;
        if bin_count == 0 {
            return Err(PlotError::InvalidData(
                "bin count must be > 0".to_owned(),
            ));
        }
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(PlotError::InvalidData(format!(
                "bin domain must be finite and increasing, got [{lo}, {hi}]"
            )));
        }
        Ok(Self { lo, hi, bin_count })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.lo, self.hi)
    }

    #[must_use]
    pub fn bin_count(self) -> usize {
        self.bin_count
    }

    /// Boundary `index` in `0..=bin_count`; the last boundary is exactly `hi`.
    #[must_use]
    pub fn edge(self, index: usize) -> f64 {
        if index >= self.bin_count {
            return self.hi;
        }
        let span = self.hi - self.lo;
        if span.is_finite() {
            self.lo + index as f64 * span / self.bin_count as f64
        } else {
            lerp(self.lo, self.hi, index as f64 / self.bin_count as f64)
        }
    }

    /// Bin index for `value`, or `None` when it is outside the domain.
    #[must_use]
    pub fn index_of(self, value: f64) -> Option<usize> {
        if !value.is_finite() || value < self.lo || value > self.hi {
            return None;
        }
        let last = self.bin_count - 1;
        if value == self.hi {
            return Some(last);
        }

        let raw = (normalize(value, self.lo, self.hi) * self.bin_count as f64).floor();
        let mut index = (raw.max(0.0) as usize).min(last);
        // Floating error can land one slot off the computed edges.
        if index > 0 && value < self.edge(index) {
            index -= 1;
        } else if index < last && value >= self.edge(index + 1) {
            index += 1;
        }
        Some(index)
    }

    /// Empty bins carrying this layout's boundaries.
    #[must_use]
    pub fn empty_bins(self) -> Vec<Bin> {
        (0..self.bin_count)
            .map(|index| Bin {
                x0: self.edge(index),
                x1: self.edge(index + 1),
                count: 0,
            })
            .collect()
    }

    /// Counts `values` into this layout. Out-of-domain values are dropped.
    #[must_use]
    pub fn bin<I>(self, values: I) -> Vec<Bin>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut bins = self.empty_bins();
        for value in values {
            if let Some(index) = self.index_of(value) {
                bins[index].count += 1;
            }
        }
        bins
    }
}

/// Partitions `domain` into `bin_count` equal bins and counts `values`.
pub fn bin_values<I>(values: I, domain: (f64, f64), bin_count: usize) -> PlotResult<Vec<Bin>>
where
    I: IntoIterator<Item = f64>,
{
    Ok(BinLayout::new(domain, bin_count)?.bin(values))
}

#[must_use]
pub fn max_count(bins: &[Bin]) -> usize {
    bins.iter().map(|bin| bin.count).max().unwrap_or(0)
}
