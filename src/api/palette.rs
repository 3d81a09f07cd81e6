use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::Condition;
use crate::render::Color;

/// Condition → color mapping.
///
/// Lookups ignore ASCII case, so `cold` and `Cold` share an entry.
/// Unknown conditions fall back to `fallback`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionPalette {
    entries: IndexMap<String, Color>,
    fallback: Color,
}

impl Default for ConditionPalette {
    fn default() -> Self {
        let orange = Color::from_rgb8(0xd9, 0x5f, 0x02);
        let purple = Color::from_rgb8(0x75, 0x70, 0xb3);
        let teal = Color::from_rgb8(0x1b, 0x9e, 0x77);

        Self::new(Color::from_rgb8(0x99, 0x99, 0x99))
            .with_color("Normoxia", orange)
            .with_color("Standard", orange)
            .with_color("Hypoxia", purple)
            .with_color("Cold", teal)
            .with_color("LowTemp", teal)
    }
}

impl ConditionPalette {
    #[must_use]
    pub fn new(fallback: Color) -> Self {
        Self {
            entries: IndexMap::new(),
            fallback,
        }
    }

    #[must_use]
    pub fn with_color(mut self, condition: impl Into<String>, color: Color) -> Self {
        self.set_color(condition, color);
        self
    }

    pub fn set_color(&mut self, condition: impl Into<String>, color: Color) {
        self.entries.insert(condition.into(), color);
    }

    #[must_use]
    pub fn fallback(&self) -> Color {
        self.fallback
    }

    #[must_use]
    pub fn color_for(&self, condition: &Condition) -> Color {
        let name = condition.as_str();
        self.entries
            .get(name)
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(name))
                    .map(|(_, color)| color)
            })
            .copied()
            .unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case_and_falls_back() {
        let palette = ConditionPalette::default();
        assert_eq!(
            palette.color_for(&Condition::new("hypoxia")),
            palette.color_for(&Condition::new("Hypoxia"))
        );
        assert_eq!(
            palette.color_for(&Condition::new("Unknown")),
            palette.fallback()
        );
    }
}
