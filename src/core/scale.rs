use crate::core::types::AxisRange;

/// Linear mapping between one domain axis and one pixel axis.
///
/// Unlike a validated scale this never fails: a zero-length domain or pixel
/// extent is replaced by a span of 1 so every finite input maps to a finite
/// output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScale {
    domain: AxisRange,
    pixel_start: f64,
    pixel_end: f64,
}

impl AxisScale {
    #[must_use]
    pub const fn new(domain: AxisRange, pixel_start: f64, pixel_end: f64) -> Self {
        Self {
            domain,
            pixel_start,
            pixel_end,
        }
    }

    /// Maps `domain` left to right onto `[0, width]`.
    #[must_use]
    pub const fn horizontal(domain: AxisRange, width: f64) -> Self {
        Self::new(domain, 0.0, width)
    }

    /// Maps `domain` bottom to top onto `[height, 0]`: larger values sit higher.
    #[must_use]
    pub const fn vertical(domain: AxisRange, height: f64) -> Self {
        Self::new(domain, height, 0.0)
    }

    #[must_use]
    pub fn domain(self) -> AxisRange {
        self.domain
    }

    #[must_use]
    pub fn domain_to_pixel(self, value: f64) -> f64 {
        let normalized = (value - self.domain.start) / non_degenerate(self.domain.span());
        self.pixel_start + normalized * (self.pixel_end - self.pixel_start)
    }

    #[must_use]
    pub fn pixel_to_domain(self, pixel: f64) -> f64 {
        let normalized = (pixel - self.pixel_start) / non_degenerate(self.pixel_end - self.pixel_start);
        self.domain.start + normalized * non_degenerate(self.domain.span())
    }
}

fn non_degenerate(span: f64) -> f64 {
    if span == 0.0 { 1.0 } else { span }
}
