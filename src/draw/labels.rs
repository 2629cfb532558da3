use serde::{Deserialize, Serialize};

use crate::core::domain_to_canvas;
use crate::render::{DrawingContext, TextAlign, TextBaseline};
use crate::theme::{DEFAULT_FONT_FAMILY, ResolvedThemeColors};

use super::{GridOptions, clamp_between, step_value};

/// Spacing constants for tick and axis-name labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLabelLayout {
    /// Gap kept between the Y label column and the X tick row.
    pub axis_gap: f64,
    /// Inset from every surface edge.
    pub side_padding: f64,
}

impl Default for AxisLabelLayout {
    fn default() -> Self {
        Self {
            axis_gap: 6.0,
            side_padding: 4.0,
        }
    }
}

/// Tick labels for a grid, plus optional axis names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabelOptions {
    pub grid: GridOptions,
    #[serde(default)]
    pub label_x: Option<String>,
    #[serde(default)]
    pub label_y: Option<String>,
    #[serde(default)]
    pub layout: AxisLabelLayout,
}

impl AxisLabelOptions {
    #[must_use]
    pub fn new(grid: GridOptions) -> Self {
        Self {
            grid,
            label_x: None,
            label_y: None,
            layout: AxisLabelLayout::default(),
        }
    }

    #[must_use]
    pub fn with_label_x(mut self, label: impl Into<String>) -> Self {
        self.label_x = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_label_y(mut self, label: impl Into<String>) -> Self {
        self.label_y = Some(label.into());
        self
    }
}

/// Formats a tick value with precision chosen from the axis range.
///
/// Integers never show decimals. Otherwise a range up to 1 shows two
/// decimals (one when the second is zero), a range up to 10 shows one, and
/// wider ranges show none.
#[must_use]
pub fn format_label(value: f64, domain_range: f64) -> String {
    let rounded = (value * 1e10).round() / 1e10;
    let text = if rounded.fract() == 0.0 {
        fixed(rounded, 0)
    } else if domain_range <= 1.0 {
        let hundredths = fixed(rounded, 2);
        if hundredths.ends_with('0') {
            fixed(rounded, 1)
        } else {
            hundredths
        }
    } else if domain_range <= 10.0 {
        fixed(rounded, 1)
    } else {
        fixed(rounded, 0)
    };
    strip_negative_zero(text)
}

/// Fixed-point text with halves rounded away from zero.
fn fixed(value: f64, decimals: u8) -> String {
    let factor = 10_f64.powi(i32::from(decimals));
    let value = (value * factor).round() / factor;
    let precision = usize::from(decimals);
    format!("{value:.precision$}")
}

fn strip_negative_zero(text: String) -> String {
    match text.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_owned(),
        _ => text,
    }
}

/// Draws X tick labels along the bottom edge and Y tick labels down the left
/// edge, one per grid boundary.
///
/// The Y column stops `axis_gap` above the X tick row, so the two never
/// overlap. Axis names sit inside the plot: the X name right-aligned above
/// the tick row, the Y name at the top, right of the Y column.
pub fn draw_axis_labels<C: DrawingContext + ?Sized>(
    context: &mut C,
    width: f64,
    height: f64,
    theme: &ResolvedThemeColors,
    options: &AxisLabelOptions,
) {
    let grid = &options.grid;
    let steps = grid.steps();
    let viewport = grid.viewport;
    let font_size = theme.font_size;
    let padding = options.layout.side_padding;
    let gap = options.layout.axis_gap;

    context.set_font(font_size, DEFAULT_FONT_FAMILY);
    context.set_fill_style(&theme.text_muted);
    context.set_global_alpha(grid.opacity.clamp(0.0, 1.0));

    let tick_row_baseline = height - padding;
    let tick_row_top = tick_row_baseline - font_size;

    let x_range = grid.domain.domain_x.span().abs();
    context.set_text_baseline(TextBaseline::Bottom);
    for index in 0..=steps {
        let value = step_value(grid.domain.domain_x, index, steps);
        let px = domain_to_canvas(value, 0.0, viewport, width, height).px;
        let align = if index == 0 {
            TextAlign::Left
        } else if index == steps {
            TextAlign::Right
        } else {
            TextAlign::Center
        };
        context.set_text_align(align);
        let x = clamp_between(px, padding, width - padding);
        context.fill_text(&format_label(value, x_range), x, tick_row_baseline);
    }

    let y_range = grid.domain.domain_y.span().abs();
    let column_top = padding;
    let column_bottom = tick_row_top - gap;
    let mut column_width: f64 = 0.0;
    context.set_text_align(TextAlign::Left);
    for index in 0..=steps {
        let value = step_value(grid.domain.domain_y, index, steps);
        let py = domain_to_canvas(0.0, value, viewport, width, height).py;
        let (baseline, min_y, max_y) = if index == 0 {
            (TextBaseline::Bottom, column_top + font_size, column_bottom)
        } else if index == steps {
            (TextBaseline::Top, column_top, column_bottom - font_size)
        } else {
            let half = font_size / 2.0;
            (TextBaseline::Middle, column_top + half, column_bottom - half)
        };
        let text = format_label(value, y_range);
        column_width = column_width.max(context.measure_text(&text));
        context.set_text_baseline(baseline);
        context.fill_text(&text, padding, clamp_between(py, min_y, max_y));
    }

    context.set_fill_style(&theme.text);
    if let Some(label_x) = options.label_x.as_deref().filter(|label| !label.is_empty()) {
        context.set_text_align(TextAlign::Right);
        context.set_text_baseline(TextBaseline::Bottom);
        context.fill_text(label_x, width - padding, tick_row_top - gap);
    }
    if let Some(label_y) = options.label_y.as_deref().filter(|label| !label.is_empty()) {
        context.set_text_align(TextAlign::Left);
        context.set_text_baseline(TextBaseline::Top);
        let x = clamp_between(padding + column_width + gap, padding, width - padding);
        context.fill_text(label_y, x, padding);
    }

    context.set_global_alpha(1.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_zero_renders_as_zero() {
        assert_eq!(format_label(-0.0, 1.0), "0");
        assert_eq!(format_label(-1e-12, 0.5), "0");
        assert_eq!(format_label(-0.001, 1.0), "0.0");
    }

    #[test]
    fn floating_noise_is_rounded_away() {
        assert_eq!(format_label(0.1 + 0.2, 1.0), "0.3");
        assert_eq!(format_label(2.9999999999999996, 100.0), "3");
    }
}
