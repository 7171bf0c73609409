//! Configuration constants and settings for theme generation.

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Minimum WCAG contrast ratio for body text (AA).
pub const DEFAULT_MIN_CONTRAST: f64 = 4.5;

/// Maximum lightness steps taken while correcting contrast.
pub const MAX_CONTRAST_ATTEMPTS: usize = 10;

/// Lightness change per correction step, in HSL percentage points.
pub const LIGHTNESS_STEP: f64 = 10.0;

/// Shade keys of a color scale, lightest first.
pub const SHADES: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// Shade key that holds the base color.
pub const BASE_SHADE: u16 = 500;

/// Default primary brand color.
pub const DEFAULT_PRIMARY: &str = "#3b82f6";

/// Default secondary brand color.
pub const DEFAULT_SECONDARY: &str = "#8b5cf6";

/// Default accent color.
pub const DEFAULT_ACCENT: &str = "#f59e0b";

/// Default base spacing unit in pixels.
pub const DEFAULT_BASE_SPACING: f64 = 4.0;

/// Default base border radius in pixels.
pub const DEFAULT_BASE_RADIUS: f64 = 8.0;

/// Default body font stack.
pub const DEFAULT_FONT_SANS: &str = "Inter, system-ui, sans-serif";

/// Default heading font stack.
pub const DEFAULT_FONT_HEADING: &str = "\"Cal Sans\", Inter, system-ui, sans-serif";

/// Default monospace font stack.
pub const DEFAULT_FONT_MONO: &str = "\"JetBrains Mono\", ui-monospace, monospace";

/// Color mode of a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    /// Parse a mode name.
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Some(Mode::Light),
            "dark" => Some(Mode::Dark),
            _ => None,
        }
    }

    /// Check if this is the dark mode.
    pub fn is_dark(&self) -> bool {
        matches!(self, Mode::Dark)
    }

    /// CSS selector the mode's variables are scoped to in a combined stylesheet.
    pub fn selector(&self) -> &'static str {
        match self {
            Mode::Light => ":root",
            Mode::Dark => ".dark",
        }
    }
}

impl std::str::FromStr for Mode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::from_name(s).ok_or_else(|| ThemeError::InvalidMode {
            value: s.to_string(),
        })
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Light => write!(f, "light"),
            Mode::Dark => write!(f, "dark"),
        }
    }
}

/// Font family choices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Body text font stack.
    pub sans: String,
    /// Heading font stack.
    pub heading: String,
    /// Code font stack.
    pub mono: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            sans: DEFAULT_FONT_SANS.to_string(),
            heading: DEFAULT_FONT_HEADING.to_string(),
            mono: DEFAULT_FONT_MONO.to_string(),
        }
    }
}

/// Theme input. Colors stay raw strings until generation so validation can
/// report every bad field at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Primary brand color (hex).
    pub primary: String,
    /// Secondary brand color (hex).
    pub secondary: String,
    /// Accent color (hex).
    pub accent: String,
    /// Light or dark mode.
    pub mode: Mode,
    /// Font families.
    pub fonts: FontConfig,
    /// Base spacing unit in pixels.
    pub base_spacing: f64,
    /// Base border radius in pixels.
    pub base_radius: f64,
    /// Minimum contrast ratio enforced on foreground/background pairs.
    pub min_contrast_ratio: f64,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary: DEFAULT_PRIMARY.to_string(),
            secondary: DEFAULT_SECONDARY.to_string(),
            accent: DEFAULT_ACCENT.to_string(),
            mode: Mode::Light,
            fonts: FontConfig::default(),
            base_spacing: DEFAULT_BASE_SPACING,
            base_radius: DEFAULT_BASE_RADIUS,
            min_contrast_ratio: DEFAULT_MIN_CONTRAST,
        }
    }
}

impl ThemeConfig {
    /// Create a config from a primary color, keeping every other default.
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            ..Default::default()
        }
    }

    /// Same config with a different mode.
    pub fn with_mode(&self, mode: Mode) -> Self {
        Self {
            mode,
            ..self.clone()
        }
    }
}

/// Characters a font stack may not contain. They would end the declaration,
/// the rule block, or the enclosing `<style>` element.
pub const FONT_STACK_FORBIDDEN: [char; 5] = [';', '{', '}', '<', '>'];

/// Check a font stack before it is written into a stylesheet.
pub fn check_font_stack(value: &str) -> std::result::Result<(), String> {
    if value.trim().is_empty() {
        return Err("font stack is empty".to_string());
    }
    match value.chars().find(|c| FONT_STACK_FORBIDDEN.contains(c)) {
        Some(c) => Err(format!("'{}' contains '{}', which would break the stylesheet", value, c)),
        None => Ok(()),
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Clamp a percentage to [0, 100].
    #[inline]
    pub fn clamp_percent(value: f64) -> f64 {
        value.clamp(0.0, 100.0)
    }
}

/// Utility functions for hue angles.
pub mod angle {
    /// Normalize angle to 0-360 range (exclusive of 360).
    #[inline]
    pub fn normalize_degrees(angle: f64) -> f64 {
        let mut a = angle % 360.0;
        if a < 0.0 {
            a += 360.0;
        }
        if a >= 360.0 || a == 0.0 {
            a = 0.0;
        }
        a
    }
}
