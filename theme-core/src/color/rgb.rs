//! RGB and HSL color representations and conversions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::{angle, float_cmp};
use crate::error::{Result, ThemeError};

/// An 8-bit sRGB color.
///
/// Serializes as a lowercase `#rrggbb` string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color.
    ///
    /// Accepts `#rrggbb`, `#rgb`, and the same forms without the leading `#`,
    /// in any letter case.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || ThemeError::InvalidHex {
            value: hex.to_string(),
        };

        let digits = hex.trim();
        let digits = digits.strip_prefix('#').unwrap_or(digits);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let expanded: String = match digits.len() {
            6 => digits.to_string(),
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            _ => return Err(invalid()),
        };

        let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| invalid());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to HSL.
    pub fn to_hsl(&self) -> Hsl {
        let r = f64::from(self.r) / 255.0;
        let g = f64::from(self.g) / 255.0;
        let b = f64::from(self.b) / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if float_cmp::approx_eq(max, min) {
            return Hsl::new(0.0, 0.0, l * 100.0);
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsl::new(h * 60.0, s * 100.0, l * 100.0)
    }

    /// Blend toward `other`; `weight` 0 keeps `self`, 1 yields `other`.
    pub fn mix(&self, other: Rgb, weight: f64) -> Rgb {
        let w = weight.clamp(0.0, 1.0);
        let blend = |a: u8, b: u8| {
            let a = f64::from(a);
            (a + (f64::from(b) - a) * w).round() as u8
        };
        Rgb::new(
            blend(self.r, other.r),
            blend(self.g, other.g),
            blend(self.b, other.b),
        )
    }

    /// Same color with HSL lightness shifted by `amount` points.
    pub fn adjust_lightness(&self, amount: f64) -> Rgb {
        let hsl = self.to_hsl();
        Hsl::new(hsl.h, hsl.s, hsl.l + amount).to_rgb()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        Rgb::from_hex(s)
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for Rgb {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self> {
        Rgb::from_hex(&value)
    }
}

/// A color in HSL space: hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    /// Create an HSL color, normalizing hue and clamping the percentages.
    pub fn new(h: f64, s: f64, l: f64) -> Self {
        Self {
            h: angle::normalize_degrees(h),
            s: float_cmp::clamp_percent(s),
            l: float_cmp::clamp_percent(l),
        }
    }

    /// Convert to 8-bit RGB.
    pub fn to_rgb(&self) -> Rgb {
        let s = self.s / 100.0;
        let l = self.l / 100.0;

        if s <= 0.0 {
            let v = to_channel(l);
            return Rgb::new(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let h = self.h / 360.0;

        Rgb::new(
            to_channel(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            to_channel(hue_to_rgb(p, q, h)),
            to_channel(hue_to_rgb(p, q, h - 1.0 / 3.0)),
        )
    }

    /// Shadcn-style channel triple, e.g. `217.2 91.2% 59.8%`.
    pub fn to_css_channels(&self) -> String {
        format!(
            "{} {}% {}%",
            round1(self.h),
            round1(self.s),
            round1(self.l)
        )
    }
}

fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

#[inline]
fn to_channel(unit: f64) -> u8 {
    (unit.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[inline]
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Parse a hex string into RGB.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    Rgb::from_hex(hex)
}

/// Format RGB as lowercase `#rrggbb`.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_hex()
}

/// Parse a hex string into HSL.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    Ok(Rgb::from_hex(hex)?.to_hsl())
}

/// Format an HSL color as hex.
pub fn hsl_to_hex(hsl: Hsl) -> String {
    hsl.to_rgb().to_hex()
}

/// Shift a hex color's HSL lightness by `amount` points, clamped to [0, 100].
pub fn adjust_lightness(hex: &str, amount: f64) -> Result<String> {
    Ok(Rgb::from_hex(hex)?.adjust_lightness(amount).to_hex())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::float_cmp::approx_eq;

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(Rgb::from_hex("#3b82f6").unwrap(), Rgb::new(0x3b, 0x82, 0xf6));
        assert_eq!(Rgb::from_hex("3B82F6").unwrap(), Rgb::new(0x3b, 0x82, 0xf6));
        assert_eq!(Rgb::from_hex("#fff").unwrap(), Rgb::WHITE);
        assert_eq!(Rgb::from_hex(" #0a0 ").unwrap(), Rgb::new(0, 0xaa, 0));
    }

    #[test]
    fn test_parse_hex_rejects_malformed() {
        for bad in ["", "#", "#12345", "#1234567", "#gggggg", "blue", "#12 456"] {
            let err = Rgb::from_hex(bad).unwrap_err();
            assert!(matches!(err, ThemeError::InvalidHex { .. }), "{bad}");
        }
    }

    #[test]
    fn test_hex_rgb_hex_identity() {
        for hex in ["#000000", "#ffffff", "#3b82f6", "#8b5cf6", "#f59e0b", "#0f172a", "#7f7f80"] {
            assert_eq!(rgb_to_hex(hex_to_rgb(hex).unwrap()), hex);
        }
        assert_eq!(rgb_to_hex(hex_to_rgb("#ABCDEF").unwrap()), "#abcdef");
    }

    #[test]
    fn test_hex_to_hsl_primaries() {
        let red = hex_to_hsl("#ff0000").unwrap();
        assert!(approx_eq(red.h, 0.0));
        assert!(approx_eq(red.s, 100.0));
        assert!(approx_eq(red.l, 50.0));

        let blue = hex_to_hsl("#0000ff").unwrap();
        assert!(approx_eq(blue.h, 240.0));

        let white = hex_to_hsl("#ffffff").unwrap();
        assert!(approx_eq(white.s, 0.0));
        assert!(approx_eq(white.l, 100.0));
    }

    #[test]
    fn test_hsl_to_hex() {
        assert_eq!(hsl_to_hex(Hsl::new(0.0, 100.0, 50.0)), "#ff0000");
        assert_eq!(hsl_to_hex(Hsl::new(120.0, 100.0, 25.0)), "#008000");
        assert_eq!(hsl_to_hex(Hsl::new(0.0, 0.0, 100.0)), "#ffffff");
        assert_eq!(hsl_to_hex(Hsl::new(360.0, 100.0, 50.0)), "#ff0000");
    }

    #[test]
    fn test_hsl_round_trip_for_pure_colors() {
        for hex in ["#ff0000", "#00ff00", "#0000ff", "#ffff00", "#000000", "#808080"] {
            assert_eq!(hsl_to_hex(hex_to_hsl(hex).unwrap()), hex);
        }
    }

    #[test]
    fn test_adjust_lightness_clamps() {
        assert_eq!(adjust_lightness("#ff0000", 100.0).unwrap(), "#ffffff");
        assert_eq!(adjust_lightness("#ff0000", -100.0).unwrap(), "#000000");
        assert_eq!(adjust_lightness("#ff0000", 0.0).unwrap(), "#ff0000");
        assert_eq!(adjust_lightness("#ff0000", -25.0).unwrap(), "#800000");
    }

    #[test]
    fn test_mix() {
        assert_eq!(Rgb::BLACK.mix(Rgb::WHITE, 0.0), Rgb::BLACK);
        assert_eq!(Rgb::BLACK.mix(Rgb::WHITE, 1.0), Rgb::WHITE);
        assert_eq!(Rgb::BLACK.mix(Rgb::WHITE, 0.5), Rgb::new(128, 128, 128));
    }

    #[test]
    fn test_css_channels() {
        assert_eq!(Hsl::new(0.0, 100.0, 50.0).to_css_channels(), "0 100% 50%");
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Rgb::new(255, 0, 16)).unwrap();
        assert_eq!(json, "\"#ff0010\"");
        let parsed: Rgb = serde_json::from_str("\"#0F0\"").unwrap();
        assert_eq!(parsed, Rgb::new(0, 255, 0));
        assert!(serde_json::from_str::<Rgb>("\"nope\"").is_err());
    }
}
