use serde::{Deserialize, Serialize};

use crate::core::Condition;

/// Clickable legend row that toggles one condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendHitBox {
    pub condition: Condition,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LegendHitBox {
    #[must_use]
    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }
}

/// Discrete user input the plot reacts to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlotEvent {
    ToggleCondition(Condition),
    ShowAll,
}

/// Returns the condition of the first legend row containing the pointer.
#[must_use]
pub fn hit_test_legend(boxes: &[LegendHitBox], px: f64, py: f64) -> Option<&Condition> {
    if !px.is_finite() || !py.is_finite() {
        return None;
    }
    boxes
        .iter()
        .find(|hit_box| hit_box.contains(px, py))
        .map(|hit_box| &hit_box.condition)
}
