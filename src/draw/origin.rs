use serde::{Deserialize, Serialize};

use crate::core::{Viewport, domain_to_canvas};
use crate::render::DrawingContext;
use crate::theme::ResolvedThemeColors;

use super::{default_opacity, pixel_snap};

const ORIGIN_AXIS_ALPHA: f64 = 0.4;
const ORIGIN_AXIS_LINE_WIDTH: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OriginAxesOptions {
    pub viewport: Viewport,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

impl OriginAxesOptions {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            opacity: default_opacity(),
        }
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

/// Draws the `x = 0` and `y = 0` lines, each only when zero is in view.
pub fn draw_origin_axes<C: DrawingContext + ?Sized>(
    context: &mut C,
    width: f64,
    height: f64,
    theme: &ResolvedThemeColors,
    options: &OriginAxesOptions,
) {
    let viewport = options.viewport;
    let origin = domain_to_canvas(0.0, 0.0, viewport, width, height);

    context.set_stroke_style(&theme.text);
    context.set_line_width(ORIGIN_AXIS_LINE_WIDTH);
    context.set_global_alpha((ORIGIN_AXIS_ALPHA * options.opacity).clamp(0.0, 1.0));

    if viewport.view_x.contains(0.0) {
        let px = pixel_snap(origin.px);
        context.stroke_line(px, 0.0, px, height);
    }
    if viewport.view_y.contains(0.0) {
        let py = pixel_snap(origin.py);
        context.stroke_line(0.0, py, width, py);
    }

    context.set_global_alpha(1.0);
}
