use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{CanvasError, CanvasResult};

use super::ComputedStyle;

/// Explicit set of computed custom-property values.
///
/// Stands in for a live computed style on platforms without one; a theme
/// switch is a new snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeSnapshot {
    properties: IndexMap<String, String>,
}

impl ThemeSnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_property(name, value);
        self
    }

    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }

    pub fn remove_property(&mut self, name: &str) -> Option<String> {
        self.properties.shift_remove(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Parses a flat JSON object of `"--property": "value"` pairs.
    pub fn from_json_str(input: &str) -> CanvasResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| CanvasError::InvalidConfig(format!("failed to parse theme snapshot: {e}")))
    }

    pub fn to_json_pretty(&self) -> CanvasResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            CanvasError::InvalidConfig(format!("failed to serialize theme snapshot: {e}"))
        })
    }
}

impl ComputedStyle for ThemeSnapshot {
    fn property_value(&self, name: &str) -> Option<String> {
        self.properties.get(name).cloned()
    }
}
