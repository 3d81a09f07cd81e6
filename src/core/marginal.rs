use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::PlotResult;

use super::bins::{Bin, BinLayout, max_count};
use super::{Axis, Condition, LinearScale, Record, VisibilitySet};

/// How the count axis of a marginal histogram is scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CountScaleMode {
    /// One count scale per axis, fit to the tallest bin among visible conditions.
    #[default]
    SharedVisible,
    /// Every condition is fit to its own tallest bin.
    PerCondition,
}

/// Bins for one condition along one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionBins {
    pub condition: Condition,
    pub bins: Vec<Bin>,
}

impl ConditionBins {
    #[must_use]
    pub fn max_count(&self) -> usize {
        max_count(&self.bins)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }
}

/// Per-condition histograms along one axis, all sharing one bin layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginalHistogram {
    pub axis: Axis,
    pub layout: BinLayout,
    pub series: Vec<ConditionBins>,
}

impl MarginalHistogram {
    /// Bins every visible condition in `conditions` order.
    ///
    /// The bin domain is taken from `scale`, never from the subset, so
    /// boundaries are identical for every condition. Conditions without
    /// records are skipped.
    pub fn compute(
        records: &[Record],
        conditions: &[Condition],
        visibility: &VisibilitySet,
        axis: Axis,
        scale: LinearScale,
        bin_count: usize,
    ) -> PlotResult<Self> {
        let (d0, d1) = scale.domain();
        let layout = BinLayout::new((d0.min(d1), d0.max(d1)), bin_count)?;

        let visible: Vec<&Condition> = conditions
            .iter()
            .filter(|condition| visibility.is_visible(condition.as_str()))
            .collect();

        let bin_condition = |condition: &&Condition| -> Option<ConditionBins> {
            let mut values = records
                .iter()
                .filter(|record| record.condition == **condition)
                .map(|record| record.value(axis))
                .peekable();
            values.peek()?;
            Some(ConditionBins {
                condition: (*condition).clone(),
                bins: layout.bin(values),
            })
        };

        #[cfg(feature = "parallel-binning")]
        let series: Vec<ConditionBins> = {
            use rayon::prelude::*;
            visible.par_iter().filter_map(bin_condition).collect()
        };
        #[cfg(not(feature = "parallel-binning"))]
        let series: Vec<ConditionBins> = visible.iter().filter_map(bin_condition).collect();

        trace!(?axis, bin_count, series = series.len(), "computed marginal histogram");
        Ok(Self {
            axis,
            layout,
            series,
        })
    }

    /// Tallest bin across all series.
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.series
            .iter()
            .map(ConditionBins::max_count)
            .max()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn series_for(&self, condition: &str) -> Option<&ConditionBins> {
        self.series
            .iter()
            .find(|series| series.condition.as_str() == condition)
    }
}

/// Pixel band reserved for a marginal outside the plot area.
///
/// `edge` is the plot boundary the marginal grows from: the plot top for the
/// X marginal (growing upward), the plot right for the Y marginal (growing
/// rightward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarginalBand {
    pub edge: f64,
    pub extent_px: f64,
}

impl MarginalBand {
    /// Count scale for `axis` with domain `[0, max_count]`.
    ///
    /// A zero maximum is widened to one so empty histograms stay flat on
    /// the edge.
    pub fn count_scale(self, axis: Axis, max_count: usize) -> PlotResult<LinearScale> {
        let far = match axis {
            Axis::X => self.edge - self.extent_px,
            Axis::Y => self.edge + self.extent_px,
        };
        LinearScale::new((0.0, max_count.max(1) as f64), (self.edge, far))
    }
}

/// Bar geometry for one bin of one condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginalBar {
    pub condition: Condition,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Filled area through bin midpoints for one condition.
///
/// `points` run along the axis in bin order; `baseline` is the plot edge the
/// area closes against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarginalArea {
    pub condition: Condition,
    pub axis: Axis,
    pub points: Vec<(f64, f64)>,
    pub baseline: f64,
}

/// Resolves the count scale for every series of `histogram`.
fn count_scales(
    histogram: &MarginalHistogram,
    band: MarginalBand,
    mode: CountScaleMode,
) -> PlotResult<Vec<LinearScale>> {
    match mode {
        CountScaleMode::SharedVisible => {
            let shared = band.count_scale(histogram.axis, histogram.max_count())?;
            Ok(vec![shared; histogram.series.len()])
        }
        CountScaleMode::PerCondition => histogram
            .series
            .iter()
            .map(|series| band.count_scale(histogram.axis, series.max_count()))
            .collect(),
    }
}

/// Projects histogram bins into bars aligned with the scatter scale.
///
/// Empty bins produce no bar.
pub fn project_marginal_bars(
    histogram: &MarginalHistogram,
    along: LinearScale,
    band: MarginalBand,
    mode: CountScaleMode,
) -> PlotResult<Vec<MarginalBar>> {
    let scales = count_scales(histogram, band, mode)?;
    let mut bars = Vec::new();

    for (series, count_scale) in histogram.series.iter().zip(scales) {
        for bin in series.bins.iter().filter(|bin| bin.count > 0) {
            let start = along.to_pixel(bin.x0)?;
            let end = along.to_pixel(bin.x1)?;
            let reach = count_scale.to_pixel(bin.count as f64)?;
            let bar = match histogram.axis {
                Axis::X => MarginalBar {
                    condition: series.condition.clone(),
                    x: start,
                    y: reach,
                    width: end - start,
                    height: band.edge - reach,
                },
                Axis::Y => MarginalBar {
                    condition: series.condition.clone(),
                    x: band.edge,
                    y: end,
                    width: reach - band.edge,
                    height: (start - end).max(1.0),
                },
            };
            bars.push(bar);
        }
    }

    Ok(bars)
}

/// Projects histogram bins into area outlines through bin midpoints.
pub fn project_marginal_areas(
    histogram: &MarginalHistogram,
    along: LinearScale,
    band: MarginalBand,
    mode: CountScaleMode,
) -> PlotResult<Vec<MarginalArea>> {
    let scales = count_scales(histogram, band, mode)?;

    histogram
        .series
        .iter()
        .zip(scales)
        .map(|(series, count_scale)| {
            let points = series
                .bins
                .iter()
                .map(|bin| {
                    let position = along.to_pixel(bin.midpoint())?;
                    let reach = count_scale.to_pixel(bin.count as f64)?;
                    Ok(match histogram.axis {
                        Axis::X => (position, reach),
                        Axis::Y => (reach, position),
                    })
                })
                .collect::<PlotResult<Vec<_>>>()?;
            Ok(MarginalArea {
                condition: series.condition.clone(),
                axis: histogram.axis,
                points,
                baseline: band.edge,
            })
        })
        .collect()
}
