//! Color spaces, conversions and WCAG contrast.

mod contrast;
mod rgb;

pub use contrast::{
    best_text_color, contrast_ratio, contrast_ratio_hex, ensure_contrast_ratio,
    ensure_contrast_ratio_hex, meets, relative_luminance, WcagLevel,
};
pub use rgb::{adjust_lightness, hex_to_hsl, hex_to_rgb, hsl_to_hex, rgb_to_hex, Hsl, Rgb};
