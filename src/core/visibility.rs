use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::Condition;

/// Per-condition visibility flags.
///
/// Conditions that were never registered or toggled count as visible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisibilitySet {
    flags: IndexMap<Condition, bool>,
}

impl VisibilitySet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers conditions as visible, keeping existing flags.
    pub fn register<'a, I>(&mut self, conditions: I)
    where
        I: IntoIterator<Item = &'a Condition>,
    {
        for condition in conditions {
            self.flags.entry(condition.clone()).or_insert(true);
        }
    }

    #[must_use]
    pub fn is_visible(&self, condition: &str) -> bool {
        self.flags.get(condition).copied().unwrap_or(true)
    }

    pub fn set_visible(&mut self, condition: impl Into<Condition>, visible: bool) {
        self.flags.insert(condition.into(), visible);
    }

    /// Flips the flag and returns the new visibility.
    pub fn toggle(&mut self, condition: impl Into<Condition>) -> bool {
        let flag = self.flags.entry(condition.into()).or_insert(true);
        *flag = !*flag;
        *flag
    }

    pub fn show_all(&mut self) {
        for flag in self.flags.values_mut() {
            *flag = true;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Condition, bool)> {
        self.flags.iter().map(|(condition, visible)| (condition, *visible))
    }

    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.flags.values().filter(|visible| !**visible).count()
    }
}
