use serde::{Deserialize, Serialize};

use crate::core::{DomainBounds, Viewport, domain_to_canvas};
use crate::render::DrawingContext;
use crate::theme::ResolvedThemeColors;

use super::{default_opacity, pixel_snap, step_value};

const GRID_LINE_WIDTH: f64 = 1.0;
const GRID_EDGE_ALPHA: f64 = 0.25;
const GRID_INTERIOR_ALPHA: f64 = 0.12;

const BOUNDS_LINE_WIDTH: f64 = 1.5;
const BOUNDS_ALPHA: f64 = 0.35;

/// Grid parameters. `subdivisions` is the number of equal steps per axis;
/// `0` is treated as `1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridOptions {
    pub viewport: Viewport,
    pub domain: DomainBounds,
    pub subdivisions: u32,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
}

impl GridOptions {
    #[must_use]
    pub fn new(viewport: Viewport, domain: DomainBounds, subdivisions: u32) -> Self {
        Self {
            viewport,
            domain,
            subdivisions,
            opacity: default_opacity(),
        }
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub(super) fn steps(&self) -> u32 {
        self.subdivisions.max(1)
    }
}

/// Domain bounds take the same parameters as the grid; `subdivisions` and
/// `opacity` are ignored.
pub type DomainBoundsOptions = GridOptions;

/// Strokes `subdivisions + 1` vertical and as many horizontal lines.
///
/// The outermost line on each axis is drawn stronger than interior ones.
pub fn draw_grid<C: DrawingContext + ?Sized>(
    context: &mut C,
    width: f64,
    height: f64,
    theme: &ResolvedThemeColors,
    options: &GridOptions,
) {
    let steps = options.steps();
    let viewport = options.viewport;

    context.set_stroke_style(&theme.text);
    context.set_line_width(GRID_LINE_WIDTH);

    for index in 0..=steps {
        context.set_global_alpha(line_alpha(index, steps, options.opacity));
        let x = step_value(options.domain.domain_x, index, steps);
        let px = pixel_snap(domain_to_canvas(x, 0.0, viewport, width, height).px);
        context.stroke_line(px, 0.0, px, height);
    }

    for index in 0..=steps {
        context.set_global_alpha(line_alpha(index, steps, options.opacity));
        let y = step_value(options.domain.domain_y, index, steps);
        let py = pixel_snap(domain_to_canvas(0.0, y, viewport, width, height).py);
        context.stroke_line(0.0, py, width, py);
    }

    context.set_global_alpha(1.0);
}

fn line_alpha(index: u32, steps: u32, opacity: f64) -> f64 {
    let base = if index == 0 || index == steps {
        GRID_EDGE_ALPHA
    } else {
        GRID_INTERIOR_ALPHA
    };
    (base * opacity).clamp(0.0, 1.0)
}

/// Strokes the four lines at the domain edges.
pub fn draw_domain_bounds<C: DrawingContext + ?Sized>(
    context: &mut C,
    width: f64,
    height: f64,
    theme: &ResolvedThemeColors,
    options: &DomainBoundsOptions,
) {
    let viewport = options.viewport;
    let domain = options.domain;

    context.set_stroke_style(&theme.text);
    context.set_line_width(BOUNDS_LINE_WIDTH);
    context.set_global_alpha(BOUNDS_ALPHA);

    for x in [domain.domain_x.start, domain.domain_x.end] {
        let px = pixel_snap(domain_to_canvas(x, 0.0, viewport, width, height).px);
        context.stroke_line(px, 0.0, px, height);
    }
    for y in [domain.domain_y.start, domain.domain_y.end] {
        let py = pixel_snap(domain_to_canvas(0.0, y, viewport, width, height).py);
        context.stroke_line(0.0, py, width, py);
    }

    context.set_global_alpha(1.0);
}
