//! Resolution of abstract theme tokens into concrete drawing values.
//!
//! Tokens are CSS custom-property references such as
//! `var(--canvas-accent)`. They are resolved against a [`ComputedStyle`] at
//! draw time, every frame, because the active theme can change between
//! frames. A token that cannot be resolved comes back unchanged.

mod snapshot;

pub use snapshot::ThemeSnapshot;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Font size used when the size token does not resolve to a number.
pub const DEFAULT_FONT_SIZE_PX: f64 = 11.0;

/// Font family used for canvas text.
pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";

/// Live style lookup for the element a surface is mounted in.
pub trait ComputedStyle {
    /// Computed value of a property such as `--canvas-accent`.
    fn property_value(&self, name: &str) -> Option<String>;
}

impl<T: ComputedStyle + ?Sized> ComputedStyle for &T {
    fn property_value(&self, name: &str) -> Option<String> {
        (**self).property_value(name)
    }
}

/// Resolves one token; literals and unresolvable references pass through.
#[must_use]
pub fn resolve_token(style: &impl ComputedStyle, token: &str) -> String {
    let Some(property) = custom_property_name(token) else {
        return token.to_owned();
    };
    match style.property_value(property) {
        Some(value) if !value.trim().is_empty() => value.trim().to_owned(),
        _ => token.to_owned(),
    }
}

/// Extracts `--name` from `var(--name)` or `var(--name, fallback)`.
fn custom_property_name(token: &str) -> Option<&str> {
    let inner = token.trim().strip_prefix("var(")?.strip_suffix(')')?;
    let name = inner.split(',').next()?.trim();
    (name.starts_with("--") && name.len() > 2).then_some(name)
}

/// Abstract references for every value the drawing primitives consume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeTokens {
    pub background: String,
    pub background_secondary: String,
    pub border: String,
    pub text: String,
    pub text_muted: String,
    pub accent: String,
    pub font_size: String,
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self {
            background: "var(--canvas-background)".to_owned(),
            background_secondary: "var(--canvas-background-secondary)".to_owned(),
            border: "var(--canvas-border)".to_owned(),
            text: "var(--canvas-text)".to_owned(),
            text_muted: "var(--canvas-text-muted)".to_owned(),
            accent: "var(--canvas-accent)".to_owned(),
            font_size: "var(--canvas-font-size-xs)".to_owned(),
        }
    }
}

/// Concrete colors and font size for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedThemeColors {
    pub background: String,
    pub background_secondary: String,
    pub border: String,
    pub text: String,
    pub text_muted: String,
    pub accent: String,
    pub font_size: f64,
}

impl ResolvedThemeColors {
    /// Fixed palette for headless rendering and tests.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            background: "#ffffff".to_owned(),
            background_secondary: "#f4f4f5".to_owned(),
            border: "#d4d4d8".to_owned(),
            text: "#18181b".to_owned(),
            text_muted: "#71717a".to_owned(),
            accent: "#2563eb".to_owned(),
            font_size: DEFAULT_FONT_SIZE_PX,
        }
    }
}

/// Resolves every token in `tokens` against `style`. Never cached.
#[must_use]
pub fn resolve_theme(style: &impl ComputedStyle, tokens: &ThemeTokens) -> ResolvedThemeColors {
    let font_size_value = resolve_token(style, &tokens.font_size);
    let font_size = parse_font_size(&font_size_value).unwrap_or_else(|| {
        warn!(
            token = %tokens.font_size,
            resolved = %font_size_value,
            fallback = DEFAULT_FONT_SIZE_PX,
            "theme font size is not numeric"
        );
        DEFAULT_FONT_SIZE_PX
    });

    ResolvedThemeColors {
        background: resolve_token(style, &tokens.background),
        background_secondary: resolve_token(style, &tokens.background_secondary),
        border: resolve_token(style, &tokens.border),
        text: resolve_token(style, &tokens.text),
        text_muted: resolve_token(style, &tokens.text_muted),
        accent: resolve_token(style, &tokens.accent),
        font_size,
    }
}

/// Parses `"12px"` or `"12"` into a positive pixel size.
#[must_use]
pub fn parse_font_size(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
    let parsed = number.parse::<f64>().ok()?;
    (parsed.is_finite() && parsed > 0.0).then_some(parsed)
}
