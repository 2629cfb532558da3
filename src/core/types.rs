use serde::{Deserialize, Serialize};

/// Location in domain (logical, unscaled) space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Location in logical surface pixels, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasPoint {
    pub px: f64,
    pub py: f64,
}

impl CanvasPoint {
    #[must_use]
    pub const fn new(px: f64, py: f64) -> Self {
        Self { px, py }
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.px - other.px).hypot(self.py - other.py)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.px.is_finite() && self.py.is_finite()
    }
}

/// Inclusive `[start, end]` pair on one axis.
///
/// The pair is kept as given: `start > end` (reversed) and `start == end`
/// (degenerate) are both representable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub start: f64,
    pub end: f64,
}

impl AxisRange {
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Signed extent `end - start`.
    #[must_use]
    pub fn span(self) -> f64 {
        self.end - self.start
    }

    /// Returns `true` when `value` lies between both ends, whichever is larger.
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        let (lo, hi) = if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        };
        (lo..=hi).contains(&value)
    }
}

impl From<[f64; 2]> for AxisRange {
    fn from(value: [f64; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

/// Currently visible domain sub-range on each axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub view_x: AxisRange,
    pub view_y: AxisRange,
}

impl Viewport {
    #[must_use]
    pub fn new(view_x: impl Into<AxisRange>, view_y: impl Into<AxisRange>) -> Self {
        Self {
            view_x: view_x.into(),
            view_y: view_y.into(),
        }
    }

    /// Viewport showing exactly the given domain bounds.
    #[must_use]
    pub fn from_domain(domain: DomainBounds) -> Self {
        Self {
            view_x: domain.domain_x,
            view_y: domain.domain_y,
        }
    }
}

/// Full logical range a control represents, independent of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainBounds {
    pub domain_x: AxisRange,
    pub domain_y: AxisRange,
}

impl DomainBounds {
    #[must_use]
    pub fn new(domain_x: impl Into<AxisRange>, domain_y: impl Into<AxisRange>) -> Self {
        Self {
            domain_x: domain_x.into(),
            domain_y: domain_y.into(),
        }
    }
}

/// Logical (CSS-pixel) dimensions of a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }
}

/// Device-pixel dimensions of a surface's backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct BackingSize {
    pub width: u32,
    pub height: u32,
}

impl BackingSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Backing dimensions for `logical` at `device_pixel_ratio`.
    #[must_use]
    pub fn for_logical(logical: SurfaceSize, device_pixel_ratio: f64) -> Self {
        Self {
            width: to_device_pixels(logical.width * device_pixel_ratio),
            height: to_device_pixels(logical.height * device_pixel_ratio),
        }
    }
}

fn to_device_pixels(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        return 0;
    }
    // Saturating float-to-int cast.
    value.round() as u32
}
