use serde::{Deserialize, Serialize};

use crate::error::{CanvasError, CanvasResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Same color with alpha multiplied by `factor`.
    #[must_use]
    pub fn with_alpha_factor(self, factor: f64) -> Self {
        Self {
            alpha: (self.alpha * factor).clamp(0.0, 1.0),
            ..self
        }
    }

    /// Parses the CSS color forms theme tokens resolve to: `#rgb`, `#rgba`,
    /// `#rrggbb`, `#rrggbbaa`, `rgb(...)`/`rgba(...)` with comma or space
    /// separators, and the keywords `black`, `white`, `transparent`.
    pub fn parse_css(input: &str) -> CanvasResult<Self> {
        let value = input.trim().to_ascii_lowercase();
        let color = match value.as_str() {
            "black" => Some(Self::BLACK),
            "white" => Some(Self::WHITE),
            "transparent" => Some(Self::TRANSPARENT),
            _ => None,
        };
        if let Some(color) = color {
            return Ok(color);
        }

        if let Some(hex) = value.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| invalid_color(input));
        }

        let body = value
            .strip_prefix("rgba(")
            .or_else(|| value.strip_prefix("rgb("))
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| invalid_color(input))?;
        parse_rgb_function(body).ok_or_else(|| invalid_color(input))
    }
}

fn invalid_color(input: &str) -> CanvasError {
    CanvasError::InvalidData(format!("unsupported css color `{input}`"))
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |digits: &str| -> Option<f64> {
        let raw = u8::from_str_radix(digits, 16).ok()?;
        Some(f64::from(raw) / 255.0)
    };
    let short = |index: usize| -> Option<f64> {
        let digit = &hex[index..=index];
        channel(&format!("{digit}{digit}"))
    };
    match hex.len() {
        3 => Some(Color::rgb(short(0)?, short(1)?, short(2)?)),
        4 => Some(Color::rgba(short(0)?, short(1)?, short(2)?, short(3)?)),
        6 => Some(Color::rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        8 => Some(Color::rgba(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
            channel(&hex[6..8])?,
        )),
        _ => None,
    }
}

fn parse_rgb_function(body: &str) -> Option<Color> {
    let parts: Vec<&str> = body
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    if !(3..=4).contains(&parts.len()) {
        return None;
    }

    let rgb_channel = |part: &str| -> Option<f64> {
        let value = match part.strip_suffix('%') {
            Some(percent) => percent.parse::<f64>().ok()? / 100.0,
            None => part.parse::<f64>().ok()? / 255.0,
        };
        value.is_finite().then_some(value.clamp(0.0, 1.0))
    };
    let alpha_channel = |part: &str| -> Option<f64> {
        let value = match part.strip_suffix('%') {
            Some(percent) => percent.parse::<f64>().ok()? / 100.0,
            None => part.parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value.clamp(0.0, 1.0))
    };

    let alpha = match parts.get(3) {
        Some(part) => alpha_channel(part)?,
        None => 1.0,
    };
    Some(Color::rgba(
        rgb_channel(parts[0])?,
        rgb_channel(parts[1])?,
        rgb_channel(parts[2])?,
        alpha,
    ))
}

/// Horizontal text anchor relative to the `x` passed to `fill_text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical text anchor relative to the `y` passed to `fill_text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TextBaseline {
    Top,
    Middle,
    #[default]
    Alphabetic,
    Bottom,
}

/// 2D affine transform in canvas `setTransform(a, b, c, d, e, f)` order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Transform {
    pub const IDENTITY: Self = Self::scale(1.0);

    #[must_use]
    pub const fn scale(factor: f64) -> Self {
        Self {
            a: factor,
            b: 0.0,
            c: 0.0,
            d: factor,
            e: 0.0,
            f: 0.0,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
