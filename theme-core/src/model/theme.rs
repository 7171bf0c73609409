//! Generated theme: every token derived from a [`ThemeConfig`](crate::ThemeConfig).

use serde::Serialize;

use super::ColorScale;
use crate::color::Rgb;
use crate::config::Mode;

/// A named token value, emitted as one CSS custom property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub name: String,
    pub value: String,
}

impl Token {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Semantic color tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SemanticColors {
    pub background: Rgb,
    pub foreground: Rgb,
    pub card: Rgb,
    pub card_foreground: Rgb,
    pub popover: Rgb,
    pub popover_foreground: Rgb,
    pub primary: Rgb,
    pub primary_foreground: Rgb,
    pub secondary: Rgb,
    pub secondary_foreground: Rgb,
    pub accent: Rgb,
    pub accent_foreground: Rgb,
    pub muted: Rgb,
    pub muted_foreground: Rgb,
    pub border: Rgb,
    pub input: Rgb,
    pub ring: Rgb,
    pub success: Rgb,
    pub success_foreground: Rgb,
    pub warning: Rgb,
    pub warning_foreground: Rgb,
    pub destructive: Rgb,
    pub destructive_foreground: Rgb,
    pub info: Rgb,
    pub info_foreground: Rgb,
}

impl SemanticColors {
    /// All tokens in output order, with their CSS names.
    pub fn entries(&self) -> Vec<(&'static str, Rgb)> {
        vec![
            ("background", self.background),
            ("foreground", self.foreground),
            ("card", self.card),
            ("card-foreground", self.card_foreground),
            ("popover", self.popover),
            ("popover-foreground", self.popover_foreground),
            ("primary", self.primary),
            ("primary-foreground", self.primary_foreground),
            ("secondary", self.secondary),
            ("secondary-foreground", self.secondary_foreground),
            ("accent", self.accent),
            ("accent-foreground", self.accent_foreground),
            ("muted", self.muted),
            ("muted-foreground", self.muted_foreground),
            ("border", self.border),
            ("input", self.input),
            ("ring", self.ring),
            ("success", self.success),
            ("success-foreground", self.success_foreground),
            ("warning", self.warning),
            ("warning-foreground", self.warning_foreground),
            ("destructive", self.destructive),
            ("destructive-foreground", self.destructive_foreground),
            ("info", self.info),
            ("info-foreground", self.info_foreground),
        ]
    }

    /// Text-on-surface pairs that must stay readable: `(name, fg, bg)`.
    pub fn text_pairs(&self) -> Vec<(&'static str, Rgb, Rgb)> {
        vec![
            ("foreground", self.foreground, self.background),
            ("card-foreground", self.card_foreground, self.card),
            ("popover-foreground", self.popover_foreground, self.popover),
            ("primary-foreground", self.primary_foreground, self.primary),
            ("secondary-foreground", self.secondary_foreground, self.secondary),
            ("accent-foreground", self.accent_foreground, self.accent),
            ("muted-foreground", self.muted_foreground, self.muted),
            ("success-foreground", self.success_foreground, self.success),
            ("warning-foreground", self.warning_foreground, self.warning),
            ("destructive-foreground", self.destructive_foreground, self.destructive),
            ("info-foreground", self.info_foreground, self.info),
        ]
    }
}

/// The four derived color scales.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scales {
    pub primary: ColorScale,
    pub secondary: ColorScale,
    pub accent: ColorScale,
    pub neutral: ColorScale,
}

impl Scales {
    /// Scales with their CSS name prefixes.
    pub fn entries(&self) -> [(&'static str, &ColorScale); 4] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
            ("neutral", &self.neutral),
        ]
    }
}

/// Font families and type scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Typography {
    pub font_sans: String,
    pub font_heading: String,
    pub font_mono: String,
    pub sizes: Vec<Token>,
    pub weights: Vec<Token>,
    pub line_heights: Vec<Token>,
}

/// A fully derived theme.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedTheme {
    pub mode: Mode,
    pub colors: SemanticColors,
    pub scales: Scales,
    pub typography: Typography,
    pub spacing: Vec<Token>,
    pub radius: Vec<Token>,
    pub shadows: Vec<Token>,
    pub speeds: Vec<Token>,
}
