//! Stylesheet generation and document injection.

mod apply;
mod css;

pub use apply::{apply_theme, apply_theme_to_file, STYLE_ELEMENT_ID};
pub use css::{
    generate_stylesheet, generate_theme_css, generate_theme_css_with, ColorFormat, CssOptions,
    CssWriter,
};
