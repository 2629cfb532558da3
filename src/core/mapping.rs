//! Domain ↔ surface pixel mapping and pointer hit testing.
//!
//! Every function here is pure: the viewport and surface size are passed in
//! explicitly, so the same call gives the same answer from any surface.

use crate::core::events::PointerEvent;
use crate::core::scale::AxisScale;
use crate::core::types::{CanvasPoint, Point2D, Viewport};

/// Distance reported by [`hit_test_point`] when the pointer misses.
///
/// Compares greater than every real distance, so a `min` over candidates
/// never selects a miss.
pub const NO_HIT: f64 = f64::INFINITY;

/// Hit radius used by point pickers and curve editors.
pub const DEFAULT_HIT_TOLERANCE_PX: f64 = 10.0;

/// Anything with an on-screen position that pointer coordinates are relative to.
pub trait ClientRect {
    /// Current top-left corner in viewport ("client") coordinates.
    fn client_origin(&self) -> CanvasPoint;
}

#[must_use]
pub fn domain_to_canvas(
    domain_x: f64,
    domain_y: f64,
    viewport: Viewport,
    width: f64,
    height: f64,
) -> CanvasPoint {
    CanvasPoint::new(
        AxisScale::horizontal(viewport.view_x, width).domain_to_pixel(domain_x),
        AxisScale::vertical(viewport.view_y, height).domain_to_pixel(domain_y),
    )
}

#[must_use]
pub fn canvas_to_domain(
    px: f64,
    py: f64,
    viewport: Viewport,
    width: f64,
    height: f64,
) -> Point2D {
    Point2D::new(
        AxisScale::horizontal(viewport.view_x, width).pixel_to_domain(px),
        AxisScale::vertical(viewport.view_y, height).pixel_to_domain(py),
    )
}

/// Pixel distance between `(px, py)` and `point`, or [`NO_HIT`] when farther
/// than `tolerance_px`. A distance exactly equal to the tolerance is a hit.
#[must_use]
pub fn hit_test_point(
    px: f64,
    py: f64,
    point: Point2D,
    viewport: Viewport,
    width: f64,
    height: f64,
    tolerance_px: f64,
) -> f64 {
    let projected = domain_to_canvas(point.x, point.y, viewport, width, height);
    let distance = projected.distance_to(CanvasPoint::new(px, py));
    if distance <= tolerance_px {
        distance
    } else {
        NO_HIT
    }
}

/// Index and distance of the closest candidate within `tolerance_px`.
///
/// Ties keep the earliest candidate.
#[must_use]
pub fn nearest_hit(
    px: f64,
    py: f64,
    candidates: &[Point2D],
    viewport: Viewport,
    width: f64,
    height: f64,
    tolerance_px: f64,
) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (index, candidate) in candidates.iter().enumerate() {
        let distance = hit_test_point(px, py, *candidate, viewport, width, height, tolerance_px);
        if distance == NO_HIT {
            continue;
        }
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((index, distance));
        }
    }
    best
}

/// Converts a pointer event's client coordinates into surface-relative pixels.
///
/// The surface origin is read on every call; surfaces move when the page
/// scrolls or reflows.
#[must_use]
pub fn pointer_surface_position(event: &PointerEvent, surface: &impl ClientRect) -> CanvasPoint {
    let origin = surface.client_origin();
    CanvasPoint::new(event.client_x - origin.px, event.client_y - origin.py)
}
