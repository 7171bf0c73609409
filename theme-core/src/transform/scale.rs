//! Color scale derivation.

use crate::color::{Hsl, Rgb};
use crate::config::{BASE_SHADE, SHADES};
use crate::error::Result;
use crate::model::ColorScale;

/// Lightness factor per shade, aligned with [`SHADES`].
///
/// Positive factors move lightness that fraction of the way toward 100,
/// negative ones that fraction of the way toward 0.
const SHADE_FACTORS: [f64; 11] = [
    0.95,  // 50
    0.90,  // 100
    0.75,  // 200
    0.60,  // 300
    0.30,  // 400
    0.0,   // 500
    -0.15, // 600
    -0.30, // 700
    -0.45, // 800
    -0.60, // 900
    -0.75, // 950
];

/// Derive an eleven-shade scale from `base`. Shade 500 is `base` itself.
pub fn generate_color_scale(base: Rgb) -> ColorScale {
    let hsl = base.to_hsl();
    let mut shades = [base; SHADES.len()];

    for ((shade, factor), slot) in SHADES.iter().zip(SHADE_FACTORS).zip(shades.iter_mut()) {
        if *shade == BASE_SHADE {
            continue;
        }
        let lightness = if factor > 0.0 {
            hsl.l + (100.0 - hsl.l) * factor
        } else {
            hsl.l * (1.0 + factor)
        };
        *slot = Hsl::new(hsl.h, hsl.s, lightness).to_rgb();
    }

    ColorScale::from_shades(shades)
}

/// Hex form of [`generate_color_scale`].
pub fn generate_color_scale_hex(base: &str) -> Result<ColorScale> {
    Ok(generate_color_scale(Rgb::from_hex(base)?))
}
