use serde::{Deserialize, Serialize};

use super::SurfaceContainerProps;

/// Opacity applied to a disabled surface.
pub const DISABLED_OPACITY: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WrapperHeight {
    Fixed(f64),
    /// Fills whatever height the parent layout gives it.
    Fill,
}

/// Relatively positioned, full-width box around the surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WrapperView {
    pub height: WrapperHeight,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceView {
    /// `Some(0)` when keyboard focusable.
    pub tab_index: Option<i32>,
    pub opacity: f64,
    /// Shows a ring when focused from the keyboard.
    pub focus_visible_ring: bool,
    pub role: String,
    pub aria_label: Option<String>,
    pub aria_roledescription: Option<String>,
    pub aria_disabled: bool,
}

/// Visually hidden, polite live region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveRegionView {
    pub text: String,
    pub aria_live: String,
    pub aria_atomic: bool,
    pub visually_hidden: bool,
}

/// Everything a host needs to materialize a surface container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerView {
    pub wrapper: WrapperView,
    pub surface: SurfaceView,
    pub live_region: LiveRegionView,
}

impl ContainerView {
    #[must_use]
    pub fn from_props(props: &SurfaceContainerProps) -> Self {
        let height = if props.responsive {
            WrapperHeight::Fill
        } else {
            WrapperHeight::Fixed(props.height)
        };
        Self {
            wrapper: WrapperView { height },
            surface: SurfaceView {
                tab_index: (!props.disabled).then_some(0),
                opacity: if props.disabled { DISABLED_OPACITY } else { 1.0 },
                focus_visible_ring: !props.disabled,
                role: props.role.clone(),
                aria_label: props.aria_label.clone(),
                aria_roledescription: props.aria_roledescription.clone(),
                aria_disabled: props.disabled,
            },
            live_region: LiveRegionView {
                text: props.live_announcement.clone().unwrap_or_default(),
                aria_live: "polite".to_owned(),
                aria_atomic: true,
                visually_hidden: true,
            },
        }
    }
}
