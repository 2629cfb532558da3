use serde::{Deserialize, Serialize};

use crate::core::{Point2D, Viewport, domain_to_canvas};
use crate::render::DrawingContext;
use crate::theme::ResolvedThemeColors;

use super::{default_opacity, pixel_snap};

/// On/off lengths of the dashed crosshair pattern.
pub const CROSSHAIR_DASH: [f64; 2] = [4.0, 4.0];

/// Half length of each line when the crosshair does not span the surface.
pub const CROSSHAIR_HALF_SPAN_PX: f64 = 20.0;

const CROSSHAIR_ALPHA: f64 = 0.6;
const CROSSHAIR_LINE_WIDTH: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrosshairOptions {
    pub viewport: Viewport,
    pub point: Point2D,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default = "default_true")]
    pub dashed: bool,
    #[serde(default = "default_true")]
    pub full_span: bool,
}

fn default_true() -> bool {
    true
}

impl CrosshairOptions {
    /// Dashed, full-span crosshair at full opacity.
    #[must_use]
    pub fn new(viewport: Viewport, point: Point2D) -> Self {
        Self {
            viewport,
            point,
            opacity: default_opacity(),
            dashed: true,
            full_span: true,
        }
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    #[must_use]
    pub fn with_dashed(mut self, dashed: bool) -> Self {
        self.dashed = dashed;
        self
    }

    #[must_use]
    pub fn with_full_span(mut self, full_span: bool) -> Self {
        self.full_span = full_span;
        self
    }
}

pub fn draw_crosshair<C: DrawingContext + ?Sized>(
    context: &mut C,
    width: f64,
    height: f64,
    theme: &ResolvedThemeColors,
    options: &CrosshairOptions,
) {
    let position = domain_to_canvas(
        options.point.x,
        options.point.y,
        options.viewport,
        width,
        height,
    );
    let x = pixel_snap(position.px);
    let y = pixel_snap(position.py);

    context.set_stroke_style(&theme.accent);
    context.set_line_width(CROSSHAIR_LINE_WIDTH);
    context.set_global_alpha((CROSSHAIR_ALPHA * options.opacity).clamp(0.0, 1.0));
    let dash: &[f64] = if options.dashed { &CROSSHAIR_DASH } else { &[] };
    context.set_line_dash(dash);

    if options.full_span {
        context.stroke_line(x, 0.0, x, height);
        context.stroke_line(0.0, y, width, y);
    } else {
        context.stroke_line(x, y - CROSSHAIR_HALF_SPAN_PX, x, y + CROSSHAIR_HALF_SPAN_PX);
        context.stroke_line(x - CROSSHAIR_HALF_SPAN_PX, y, x + CROSSHAIR_HALF_SPAN_PX, y);
    }

    context.set_line_dash(&[]);
    context.set_global_alpha(1.0);
}
