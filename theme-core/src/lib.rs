//! theme-core - Core library for accessible theme tokens and CSS generation.
//!
//! This library derives color scales and semantic color tokens from a few
//! brand colors, enforces WCAG contrast on every text/surface pair, and
//! renders the result as CSS custom properties.
//!
//! # Example
//!
//! ```no_run
//! use theme_core::{generate_theme, generate_theme_css, ThemeConfig};
//!
//! let theme = generate_theme(&ThemeConfig::new("#e11d48")).unwrap();
//! let css = generate_theme_css(&theme);
//! println!("{}", css);
//! ```

pub mod color;
pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod parser;
pub mod transform;
pub mod validation;

// Re-exports for convenience
pub use color::{
    adjust_lightness, contrast_ratio, ensure_contrast_ratio, hex_to_hsl, hex_to_rgb, hsl_to_hex,
    rgb_to_hex, Hsl, Rgb, WcagLevel,
};
pub use config::{FontConfig, Mode, ThemeConfig};
pub use error::{Result, ThemeError};
pub use generator::{
    apply_theme, apply_theme_to_file, generate_stylesheet, generate_theme_css,
    generate_theme_css_with, ColorFormat, CssOptions,
};
pub use model::{ColorScale, GeneratedTheme, SemanticColors, Token};
pub use parser::load_theme_config;
pub use transform::{generate_color_scale, generate_theme};
pub use validation::{audit_contrast, validate_config, ValidationResult};

/// Load a theme config file and render its stylesheet.
///
/// This is the high-level pipeline:
/// 1. Load the JSON config
/// 2. Validate it
/// 3. Generate the theme
/// 4. Render the CSS
pub fn build_stylesheet(config_path: &std::path::Path) -> Result<String> {
    let config = load_theme_config(config_path)?;

    let validation = validate_config(&config);
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }
    for err in &validation.errors {
        tracing::error!("{}", err);
    }
    if !validation.passed {
        return Err(ThemeError::ValidationFailed {
            message: validation.errors.join("; "),
        });
    }

    let theme = generate_theme(&config)?;
    Ok(generate_theme_css(&theme))
}
