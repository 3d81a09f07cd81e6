use tracing::{debug, warn};

use crate::core::{Condition, Record, retain_finite};
use crate::error::PlotResult;
use crate::render::Renderer;

use super::ScatterPlotEngine;
use super::engine::fit_scales;

impl<R: Renderer> ScatterPlotEngine<R> {
    /// Replaces the record set and refits the shared scales.
    ///
    /// Records with non-finite measurements are dropped; the number dropped
    /// is returned. Visibility flags of known conditions are kept, new
    /// conditions start visible.
    pub fn set_records(&mut self, records: Vec<Record>) -> PlotResult<usize> {
        let original_count = records.len();
        let (records, dropped) = retain_finite(records);
        if dropped > 0 {
            warn!(dropped, "dropping records with non-finite measurements");
        }

        let (x_scale, y_scale) = fit_scales(&self.config, &records)?;
        self.conditions = conditions_in_order(&records);
        self.visibility.register(&self.conditions);
        self.records = records;
        self.x_scale = x_scale;
        self.y_scale = y_scale;

        debug!(
            original_count,
            kept = self.records.len(),
            conditions = self.conditions.len(),
            x_domain = ?self.x_scale.domain(),
            y_domain = ?self.y_scale.domain(),
            "set records"
        );
        Ok(dropped)
    }

    pub fn clear_records(&mut self) -> PlotResult<()> {
        self.set_records(Vec::new()).map(|_| ())
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Conditions in the order they first appear in the record set.
    #[must_use]
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Records of visible conditions, in record order.
    pub fn visible_records(&self) -> impl Iterator<Item = &Record> {
        self.records
            .iter()
            .filter(|record| self.visibility.is_visible(record.condition.as_str()))
    }
}

fn conditions_in_order(records: &[Record]) -> Vec<Condition> {
    let mut conditions: Vec<Condition> = Vec::new();
    for record in records {
        if !conditions.contains(&record.condition) {
            conditions.push(record.condition.clone());
        }
    }
    conditions
}
