use serde::{Deserialize, Serialize};

use crate::error::{CanvasError, CanvasResult};

pub const DEFAULT_SURFACE_HEIGHT_PX: f64 = 200.0;
pub const DEFAULT_SURFACE_ROLE: &str = "application";

fn default_height() -> f64 {
    DEFAULT_SURFACE_HEIGHT_PX
}

fn default_role() -> String {
    DEFAULT_SURFACE_ROLE.to_owned()
}

/// Host-facing configuration of a [`super::SurfaceContainer`].
///
/// Serializable so controls can persist or ship their surface setup as JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceContainerProps {
    /// Fixed logical height; ignored while `responsive` is set.
    #[serde(default = "default_height")]
    pub height: f64,
    /// Track the container's size instead of using `height`.
    #[serde(default)]
    pub responsive: bool,
    /// Dims the surface and removes it from the tab order.
    #[serde(default)]
    pub disabled: bool,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default)]
    pub aria_label: Option<String>,
    #[serde(default)]
    pub aria_roledescription: Option<String>,
    /// Message for assistive technology, announced politely.
    #[serde(default)]
    pub live_announcement: Option<String>,
}

impl Default for SurfaceContainerProps {
    fn default() -> Self {
        Self {
            height: default_height(),
            responsive: false,
            disabled: false,
            role: default_role(),
            aria_label: None,
            aria_roledescription: None,
            live_announcement: None,
        }
    }
}

impl SurfaceContainerProps {
    #[must_use]
    pub fn with_height(mut self, height: f64) -> Self {
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_responsive(mut self, responsive: bool) -> Self {
        self.responsive = responsive;
        self
    }

    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    #[must_use]
    pub fn with_aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_aria_roledescription(mut self, description: impl Into<String>) -> Self {
        self.aria_roledescription = Some(description.into());
        self
    }

    pub fn validate(&self) -> CanvasResult<()> {
        if !self.height.is_finite() || self.height < 0.0 {
            return Err(CanvasError::InvalidConfig(format!(
                "surface height must be finite and >= 0, got {}",
                self.height
            )));
        }
        if self.role.trim().is_empty() {
            return Err(CanvasError::InvalidConfig(
                "surface role must not be empty".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> CanvasResult<Self> {
        let props: Self = serde_json::from_str(input).map_err(|e| {
            CanvasError::InvalidConfig(format!("failed to parse surface container props: {e}"))
        })?;
        props.validate()?;
        Ok(props)
    }

    pub fn to_json_pretty(&self) -> CanvasResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            CanvasError::InvalidConfig(format!("failed to serialize surface container props: {e}"))
        })
    }
}
