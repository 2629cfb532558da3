use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::core::{Point2D, Viewport, domain_to_canvas};
use crate::render::DrawingContext;
use crate::theme::ResolvedThemeColors;

pub const INNER_DOT_RADIUS_PX: f64 = 2.0;

const DEFAULT_MARKER_RADIUS_PX: f64 = 6.0;
const ACTIVE_RADIUS_GROWTH_PX: f64 = 2.0;
const RING_LINE_WIDTH: f64 = 2.0;

fn default_radius() -> f64 {
    DEFAULT_MARKER_RADIUS_PX
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointMarkerOptions {
    pub viewport: Viewport,
    pub point: Point2D,
    #[serde(default = "default_radius")]
    pub radius: f64,
    #[serde(default)]
    pub hovered: bool,
    #[serde(default)]
    pub dragging: bool,
}

impl PointMarkerOptions {
    #[must_use]
    pub fn new(viewport: Viewport, point: Point2D) -> Self {
        Self {
            viewport,
            point,
            radius: DEFAULT_MARKER_RADIUS_PX,
            hovered: false,
            dragging: false,
        }
    }

    #[must_use]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    #[must_use]
    pub fn with_hovered(mut self, hovered: bool) -> Self {
        self.hovered = hovered;
        self
    }

    #[must_use]
    pub fn with_dragging(mut self, dragging: bool) -> Self {
        self.dragging = dragging;
        self
    }

    /// Outer ring radius, grown while hovered or dragged.
    #[must_use]
    pub fn ring_radius(&self) -> f64 {
        if self.hovered || self.dragging {
            self.radius + ACTIVE_RADIUS_GROWTH_PX
        } else {
            self.radius
        }
    }
}

/// Draws a filled, accent-stroked ring with an accent dot in its center.
pub fn draw_point_marker<C: DrawingContext + ?Sized>(
    context: &mut C,
    width: f64,
    height: f64,
    theme: &ResolvedThemeColors,
    options: &PointMarkerOptions,
) {
    let center = domain_to_canvas(
        options.point.x,
        options.point.y,
        options.viewport,
        width,
        height,
    );
    let ring_fill = if options.dragging {
        &theme.accent
    } else {
        &theme.background_secondary
    };

    context.set_global_alpha(1.0);
    context.begin_path();
    context.arc(center.px, center.py, options.ring_radius().max(0.0), 0.0, TAU);
    context.set_fill_style(ring_fill);
    context.fill();
    context.set_stroke_style(&theme.accent);
    context.set_line_width(RING_LINE_WIDTH);
    context.stroke();

    context.begin_path();
    context.arc(center.px, center.py, INNER_DOT_RADIUS_PX, 0.0, TAU);
    context.set_fill_style(&theme.accent);
    context.fill();
}
