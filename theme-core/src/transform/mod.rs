//! Derivation of scales and themes from brand colors.

mod scale;
mod theme;

pub use scale::{generate_color_scale, generate_color_scale_hex};
pub use theme::generate_theme;
