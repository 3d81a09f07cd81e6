use tracing::debug;

use crate::core::{Condition, VisibilitySet};
use crate::interaction::{PlotEvent, hit_test_legend};
use crate::render::Renderer;

use super::ScatterPlotEngine;

impl<R: Renderer> ScatterPlotEngine<R> {
    #[must_use]
    pub fn visibility(&self) -> &VisibilitySet {
        &self.visibility
    }

    /// Replaces the visibility flags wholesale.
    ///
    /// Conditions present in the records but missing from `visibility`
    /// are registered as visible.
    pub fn set_visibility(&mut self, visibility: VisibilitySet) {
        self.visibility = visibility;
        self.visibility.register(&self.conditions);
    }

    #[must_use]
    pub fn is_condition_visible(&self, condition: &str) -> bool {
        self.visibility.is_visible(condition)
    }

    /// Flips a condition's visibility and returns the new state.
    ///
    /// Scales are left untouched; only the next render pass changes.
    pub fn toggle_condition(&mut self, condition: &str) -> bool {
        let visible = self.visibility.toggle(condition);
        debug!(condition, visible, "toggled condition visibility");
        visible
    }

    pub fn set_condition_visible(&mut self, condition: &str, visible: bool) {
        self.visibility.set_visible(condition, visible);
    }

    pub fn show_all_conditions(&mut self) {
        self.visibility.show_all();
    }

    pub fn apply_event(&mut self, event: &PlotEvent) {
        match event {
            PlotEvent::ToggleCondition(condition) => {
                self.toggle_condition(condition.as_str());
            }
            PlotEvent::ShowAll => self.show_all_conditions(),
        }
    }

    /// Toggles the condition whose legend row contains the pointer.
    ///
    /// Returns the toggled condition, or `None` when the click missed the
    /// legend.
    pub fn pointer_click(&mut self, x: f64, y: f64) -> Option<Condition> {
        let boxes = self.legend_hit_boxes();
        let condition = hit_test_legend(&boxes, x, y)?.clone();
        self.apply_event(&PlotEvent::ToggleCondition(condition.clone()));
        Some(condition)
    }
}
