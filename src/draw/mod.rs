//! Stateless drawing primitives shared by every canvas control.
//!
//! Each primitive takes a drawing context, the logical surface size, the
//! frame's resolved theme and a fully specified option record, and only
//! paints. Later calls paint over earlier ones. Every primitive leaves global
//! alpha at 1 and the dash pattern solid when it returns.

mod crosshair;
mod grid;
mod labels;
mod marker;
mod origin;

pub use crosshair::{CROSSHAIR_DASH, CROSSHAIR_HALF_SPAN_PX, CrosshairOptions, draw_crosshair};
pub use grid::{DomainBoundsOptions, GridOptions, draw_domain_bounds, draw_grid};
pub use labels::{AxisLabelLayout, AxisLabelOptions, draw_axis_labels, format_label};
pub use marker::{INNER_DOT_RADIUS_PX, PointMarkerOptions, draw_point_marker};
pub use origin::{OriginAxesOptions, draw_origin_axes};

use crate::core::AxisRange;

/// Centers a 1px stroke on a device pixel: `round(value) + 0.5`.
///
/// Halves round up, so `2.5` snaps to `3.5`.
#[must_use]
pub fn pixel_snap(value: f64) -> f64 {
    (value + 0.5).floor() + 0.5
}

fn default_opacity() -> f64 {
    1.0
}

/// Domain value of boundary `index` when `range` is cut into `steps` parts.
fn step_value(range: AxisRange, index: u32, steps: u32) -> f64 {
    if index == steps {
        return range.end;
    }
    range.start + range.span() * (f64::from(index) / f64::from(steps))
}

/// Clamps without panicking when the bounds cross; `max` wins then.
fn clamp_between(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_snap_centers_on_pixel() {
        assert_eq!(pixel_snap(10.0), 10.5);
        assert_eq!(pixel_snap(10.4), 10.5);
        assert_eq!(pixel_snap(10.5), 11.5);
        assert_eq!(pixel_snap(-0.5), 0.5);
    }

    #[test]
    fn step_value_hits_both_ends_exactly() {
        let range = AxisRange::new(0.1, 0.7);
        assert_eq!(step_value(range, 0, 3), 0.1);
        assert_eq!(step_value(range, 3, 3), 0.7);
    }

    #[test]
    fn crossed_clamp_prefers_upper_bound() {
        assert_eq!(clamp_between(5.0, 10.0, 2.0), 2.0);
    }
}
