use serde::{Deserialize, Serialize};

use crate::core::{Axis, Condition, MarginalHistogram, VisibilitySet, Viewport};
use crate::error::PlotResult;
use crate::render::Renderer;

use super::ScatterPlotEngine;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSnapshot {
    pub viewport: Viewport,
    pub record_count: usize,
    pub visible_record_count: usize,
    pub conditions: Vec<Condition>,
    pub visibility: VisibilitySet,
    pub x_domain: (f64, f64),
    pub y_domain: (f64, f64),
    pub x_marginal: MarginalHistogram,
    pub y_marginal: MarginalHistogram,
}

impl<R: Renderer> ScatterPlotEngine<R> {
    pub fn snapshot(&self) -> PlotResult<PlotSnapshot> {
        Ok(PlotSnapshot {
            viewport: self.config.viewport,
            record_count: self.records.len(),
            visible_record_count: self.visible_records().count(),
            conditions: self.conditions.clone(),
            visibility: self.visibility.clone(),
            x_domain: self.x_scale.domain(),
            y_domain: self.y_scale.domain(),
            x_marginal: self.marginal_histogram(Axis::X)?,
            y_marginal: self.marginal_histogram(Axis::Y)?,
        })
    }

    pub fn snapshot_json_pretty(&self) -> PlotResult<String> {
        self.snapshot()?.to_json_contract_v1_pretty()
    }
}
