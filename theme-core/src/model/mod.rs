//! Data model types for generated themes.

mod scale;
mod theme;

pub use scale::ColorScale;
pub use theme::{GeneratedTheme, Scales, SemanticColors, Token, Typography};
