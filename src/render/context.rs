use crate::render::{TextAlign, TextBaseline, Transform};

/// Immediate-mode 2D command surface that drawing primitives paint into.
///
/// The model follows the HTML canvas 2D context: state setters stick until
/// changed, the current path persists across `fill`/`stroke` until the next
/// `begin_path`, and colors are CSS color strings exactly as the theme
/// resolved them. Backends that cannot understand a color keep the previous
/// one, so a bad token shows up as a wrong color and never as a failure.
///
/// Coordinates are logical pixels once the surface setup has applied the
/// device-pixel-ratio transform.
pub trait DrawingContext {
    fn set_transform(&mut self, transform: Transform);
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn set_stroke_style(&mut self, color: &str);
    fn set_fill_style(&mut self, color: &str);
    fn set_global_alpha(&mut self, alpha: f64);
    fn set_line_width(&mut self, width: f64);
    /// Alternating on/off lengths; an empty slice means solid.
    fn set_line_dash(&mut self, segments: &[f64]);

    fn set_font(&mut self, size_px: f64, family: &str);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Clockwise arc around `(x, y)`; angles in radians.
    fn arc(&mut self, x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64);
    fn fill(&mut self);
    fn stroke(&mut self);

    fn fill_text(&mut self, text: &str, x: f64, y: f64);
    /// Advance width of `text` in the current font, in logical pixels.
    fn measure_text(&self, text: &str) -> f64;

    /// Strokes a single straight segment as its own path.
    fn stroke_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.begin_path();
        self.move_to(x1, y1);
        self.line_to(x2, y2);
        self.stroke();
    }
}
