//! Theme derivation from a [`ThemeConfig`].

use tracing::{debug, warn};

use super::scale::generate_color_scale;
use crate::color::{contrast_ratio, ensure_contrast_ratio, Hsl, Rgb};
use crate::config::{check_font_stack, Mode, ThemeConfig};
use crate::error::{Result, ThemeError};
use crate::model::{ColorScale, GeneratedTheme, Scales, SemanticColors, Token, Typography};

/// Base colors for the status tokens.
const SUCCESS: Rgb = Rgb::new(0x22, 0xc5, 0x5e);
const WARNING: Rgb = Rgb::new(0xf5, 0x9e, 0x0b);
const DESTRUCTIVE: Rgb = Rgb::new(0xef, 0x44, 0x44);
const INFO: Rgb = Rgb::new(0x0e, 0xa5, 0xe9);

/// Saturation cap for the neutral scale, in percent.
const NEUTRAL_MAX_SATURATION: f64 = 12.0;

/// Lightness of the neutral base color, in percent.
const NEUTRAL_LIGHTNESS: f64 = 46.0;

/// Spacing scale steps, in multiples of the base unit.
const SPACING_STEPS: [u32; 13] = [0, 1, 2, 3, 4, 5, 6, 8, 10, 12, 16, 20, 24];

/// Derive a complete theme from `config`.
pub fn generate_theme(config: &ThemeConfig) -> Result<GeneratedTheme> {
    let primary = parse_color("primary", &config.primary)?;
    let secondary = parse_color("secondary", &config.secondary)?;
    let accent = parse_color("accent", &config.accent)?;

    for (field, value) in [
        ("fonts.sans", &config.fonts.sans),
        ("fonts.heading", &config.fonts.heading),
        ("fonts.mono", &config.fonts.mono),
    ] {
        check_font(field, value)?;
    }

    check_positive("base_spacing", config.base_spacing)?;
    check_positive("base_radius", config.base_radius)?;
    if !(1.0..=21.0).contains(&config.min_contrast_ratio) {
        return Err(ThemeError::InvalidValue {
            field: "min_contrast_ratio".to_string(),
            expected: "a ratio between 1 and 21".to_string(),
            value: config.min_contrast_ratio.to_string(),
        });
    }

    debug!(
        "Generating {} theme from primary={} secondary={} accent={}",
        config.mode, primary, secondary, accent
    );

    let scales = Scales {
        primary: generate_color_scale(primary),
        secondary: generate_color_scale(secondary),
        accent: generate_color_scale(accent),
        neutral: generate_color_scale(neutral_base(primary)),
    };

    let colors = semantic_colors(&scales, config.mode, config.min_contrast_ratio);

    for (name, fg, bg) in colors.text_pairs() {
        let ratio = contrast_ratio(fg, bg);
        if ratio < config.min_contrast_ratio {
            warn!(
                "{} {} on {} has contrast {:.2}, below {}",
                name, fg, bg, ratio, config.min_contrast_ratio
            );
        }
    }

    Ok(GeneratedTheme {
        mode: config.mode,
        colors,
        scales,
        typography: typography(config),
        spacing: spacing(config.base_spacing),
        radius: radius(config.base_radius),
        shadows: shadows(config.mode),
        speeds: speeds(),
    })
}

fn parse_color(field: &str, value: &str) -> Result<Rgb> {
    Rgb::from_hex(value).map_err(|_| ThemeError::InvalidValue {
        field: field.to_string(),
        expected: "a hex color like #3b82f6".to_string(),
        value: value.to_string(),
    })
}

fn check_font(field: &str, value: &str) -> Result<()> {
    check_font_stack(value).map_err(|_| ThemeError::InvalidValue {
        field: field.to_string(),
        expected: "a non-empty font stack without ; { } < or >".to_string(),
        value: value.to_string(),
    })
}

fn check_positive(field: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ThemeError::InvalidValue {
            field: field.to_string(),
            expected: "a positive number".to_string(),
            value: value.to_string(),
        })
    }
}

/// Low-saturation gray tinted with the primary hue.
fn neutral_base(primary: Rgb) -> Rgb {
    let hsl = primary.to_hsl();
    Hsl::new(hsl.h, hsl.s.min(NEUTRAL_MAX_SATURATION), NEUTRAL_LIGHTNESS).to_rgb()
}

/// Readable text for `surface`, starting from the lightest tint of its scale.
fn on_color(scale: &ColorScale, surface: Rgb, min_ratio: f64) -> Rgb {
    ensure_contrast_ratio(scale[50], surface, min_ratio)
}

fn semantic_colors(scales: &Scales, mode: Mode, min_ratio: f64) -> SemanticColors {
    let neutral = &scales.neutral;

    let (background, foreground, surface, muted, muted_text, border, ring) = match mode {
        Mode::Light => (
            Rgb::WHITE,
            neutral[950],
            Rgb::WHITE,
            neutral[100],
            neutral[500],
            neutral[200],
            scales.primary[500],
        ),
        Mode::Dark => (
            neutral[950],
            neutral[50],
            neutral[900],
            neutral[800],
            neutral[400],
            neutral[800],
            scales.primary[400],
        ),
    };

    let foreground = ensure_contrast_ratio(foreground, background, min_ratio);
    let surface_foreground = ensure_contrast_ratio(foreground, surface, min_ratio);

    let status = |base: Rgb| {
        let scale = generate_color_scale(base);
        let fill = if mode.is_dark() { scale[400] } else { scale[500] };
        (fill, on_color(&scale, fill, min_ratio))
    };
    let (success, success_foreground) = status(SUCCESS);
    let (warning, warning_foreground) = status(WARNING);
    let (destructive, destructive_foreground) = status(DESTRUCTIVE);
    let (info, info_foreground) = status(INFO);

    let primary = scales.primary.base();
    let secondary = scales.secondary.base();
    let accent = scales.accent.base();

    SemanticColors {
        background,
        foreground,
        card: surface,
        card_foreground: surface_foreground,
        popover: surface,
        popover_foreground: surface_foreground,
        primary,
        primary_foreground: on_color(&scales.primary, primary, min_ratio),
        secondary,
        secondary_foreground: on_color(&scales.secondary, secondary, min_ratio),
        accent,
        accent_foreground: on_color(&scales.accent, accent, min_ratio),
        muted,
        muted_foreground: ensure_contrast_ratio(muted_text, muted, min_ratio),
        border,
        input: border,
        ring,
        success,
        success_foreground,
        warning,
        warning_foreground,
        destructive,
        destructive_foreground,
        info,
        info_foreground,
    }
}

fn typography(config: &ThemeConfig) -> Typography {
    let sizes = [
        ("xs", "0.75rem"),
        ("sm", "0.875rem"),
        ("base", "1rem"),
        ("lg", "1.125rem"),
        ("xl", "1.25rem"),
        ("2xl", "1.5rem"),
        ("3xl", "1.875rem"),
        ("4xl", "2.25rem"),
        ("5xl", "3rem"),
    ];
    let weights = [
        ("normal", "400"),
        ("medium", "500"),
        ("semibold", "600"),
        ("bold", "700"),
    ];
    let line_heights = [("tight", "1.25"), ("normal", "1.5"), ("relaxed", "1.75")];

    Typography {
        font_sans: config.fonts.sans.clone(),
        font_heading: config.fonts.heading.clone(),
        font_mono: config.fonts.mono.clone(),
        sizes: sizes
            .iter()
            .map(|(k, v)| Token::new(format!("text-{k}"), *v))
            .collect(),
        weights: weights
            .iter()
            .map(|(k, v)| Token::new(format!("font-weight-{k}"), *v))
            .collect(),
        line_heights: line_heights
            .iter()
            .map(|(k, v)| Token::new(format!("leading-{k}"), *v))
            .collect(),
    }
}

fn spacing(base: f64) -> Vec<Token> {
    SPACING_STEPS
        .iter()
        .map(|&step| Token::new(format!("spacing-{step}"), px(base * f64::from(step))))
        .collect()
}

fn radius(base: f64) -> Vec<Token> {
    let mut tokens: Vec<Token> = [
        ("none", 0.0),
        ("sm", 0.5),
        ("md", 1.0),
        ("lg", 1.5),
        ("xl", 2.0),
        ("2xl", 3.0),
    ]
    .iter()
    .map(|(k, factor)| Token::new(format!("radius-{k}"), px(base * factor)))
    .collect();
    tokens.push(Token::new("radius-full", "9999px"));
    tokens
}

fn shadows(mode: Mode) -> Vec<Token> {
    // Dark surfaces need heavier shadows to read at all.
    let alpha = if mode.is_dark() { 0.4 } else { 0.1 };
    let a = format_number(alpha);
    let half = format_number(alpha / 2.0);
    vec![
        Token::new("shadow-sm", format!("0 1px 2px 0 rgb(0 0 0 / {half})")),
        Token::new(
            "shadow-md",
            format!("0 4px 6px -1px rgb(0 0 0 / {a}), 0 2px 4px -2px rgb(0 0 0 / {a})"),
        ),
        Token::new(
            "shadow-lg",
            format!("0 10px 15px -3px rgb(0 0 0 / {a}), 0 4px 6px -4px rgb(0 0 0 / {a})"),
        ),
        Token::new(
            "shadow-xl",
            format!("0 20px 25px -5px rgb(0 0 0 / {a}), 0 8px 10px -6px rgb(0 0 0 / {a})"),
        ),
    ]
}

fn speeds() -> Vec<Token> {
    vec![
        Token::new("speed-fast", "150ms"),
        Token::new("speed-normal", "300ms"),
        Token::new("speed-slow", "500ms"),
    ]
}

fn px(value: f64) -> String {
    format!("{}px", format_number(value))
}

/// Format with at most three decimals and no trailing zeros.
fn format_number(value: f64) -> String {
    let formatted = format!("{:.3}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" || trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
