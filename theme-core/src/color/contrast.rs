//! WCAG contrast computation and correction.
//!
//! Luminance and ratios follow WCAG 2.x. Correction walks HSL lightness in
//! fixed steps toward whichever extreme contrasts more with the background,
//! so a pair that cannot be fixed still ends up no worse than it started.

use tracing::debug;

use super::rgb::Rgb;
use crate::config::{DEFAULT_MIN_CONTRAST, LIGHTNESS_STEP, MAX_CONTRAST_ATTEMPTS};
use crate::error::Result;

/// WCAG conformance targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WcagLevel {
    /// AA, body text.
    AaNormal,
    /// AA, large or bold text.
    AaLarge,
    /// AAA, body text.
    AaaNormal,
    /// AAA, large or bold text.
    AaaLarge,
}

impl WcagLevel {
    /// Minimum contrast ratio required at this level.
    pub fn min_ratio(&self) -> f64 {
        match self {
            WcagLevel::AaNormal => DEFAULT_MIN_CONTRAST,
            WcagLevel::AaLarge => 3.0,
            WcagLevel::AaaNormal => 7.0,
            WcagLevel::AaaLarge => 4.5,
        }
    }
}

/// Relative luminance per WCAG 2.x, in [0, 1].
pub fn relative_luminance(color: Rgb) -> f64 {
    let linear = |channel: u8| {
        let c = f64::from(channel) / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    0.2126 * linear(color.r) + 0.7152 * linear(color.g) + 0.0722 * linear(color.b)
}

/// Contrast ratio between two colors, in [1, 21]. Order does not matter.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two hex colors.
pub fn contrast_ratio_hex(a: &str, b: &str) -> Result<f64> {
    Ok(contrast_ratio(Rgb::from_hex(a)?, Rgb::from_hex(b)?))
}

/// Check a pair against a WCAG level.
pub fn meets(fg: Rgb, bg: Rgb, level: WcagLevel) -> bool {
    contrast_ratio(fg, bg) >= level.min_ratio()
}

/// Adjust `fg` until it reaches `min_ratio` against `bg`.
///
/// Takes at most [`MAX_CONTRAST_ATTEMPTS`] lightness steps and returns the
/// best candidate seen, which is `fg` itself when no step improves on it.
pub fn ensure_contrast_ratio(fg: Rgb, bg: Rgb, min_ratio: f64) -> Rgb {
    let initial = contrast_ratio(fg, bg);
    if initial >= min_ratio {
        return fg;
    }

    let step = if best_text_color(bg) == Rgb::WHITE {
        LIGHTNESS_STEP
    } else {
        -LIGHTNESS_STEP
    };

    let mut best = fg;
    let mut best_ratio = initial;
    let mut current = fg;

    for attempt in 1..=MAX_CONTRAST_ATTEMPTS {
        current = current.adjust_lightness(step);
        let ratio = contrast_ratio(current, bg);
        if ratio > best_ratio {
            best = current;
            best_ratio = ratio;
        }
        if ratio >= min_ratio {
            debug!(
                "Contrast {} on {} reached {:.2} after {} step(s)",
                best, bg, best_ratio, attempt
            );
            break;
        }
    }

    best
}

/// Hex form of [`ensure_contrast_ratio`].
pub fn ensure_contrast_ratio_hex(fg: &str, bg: &str, min_ratio: f64) -> Result<String> {
    let fg = Rgb::from_hex(fg)?;
    let bg = Rgb::from_hex(bg)?;
    Ok(ensure_contrast_ratio(fg, bg, min_ratio).to_hex())
}

/// Black or white, whichever reads better on `bg`.
pub fn best_text_color(bg: Rgb) -> Rgb {
    if contrast_ratio(Rgb::WHITE, bg) >= contrast_ratio(Rgb::BLACK, bg) {
        Rgb::WHITE
    } else {
        Rgb::BLACK
    }
}
