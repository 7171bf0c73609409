//! Validation of theme configs and generated themes.

use crate::color::{contrast_ratio, Rgb};
use crate::config::{check_font_stack, ThemeConfig};
use crate::model::GeneratedTheme;

/// Validation result with warnings.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Whether validation passed.
    pub passed: bool,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Error messages.
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Create a passing result.
    pub fn ok() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    /// Create a failing result with an error.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            errors: vec![message.into()],
            ..Default::default()
        }
    }

    /// Add a warning.
    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// Add an error.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.passed = false;
    }

    /// Merge another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
        if !other.passed {
            self.passed = false;
        }
    }
}

/// A text/surface pair below its contrast target.
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastIssue {
    pub name: &'static str,
    pub foreground: Rgb,
    pub background: Rgb,
    pub ratio: f64,
}

/// Validate a config before generation.
pub fn validate_config(config: &ThemeConfig) -> ValidationResult {
    let mut result = ValidationResult::ok();

    for (field, value) in [
        ("primary", &config.primary),
        ("secondary", &config.secondary),
        ("accent", &config.accent),
    ] {
        result.merge(validate_color(field, value));
    }

    for (field, value) in [
        ("base_spacing", config.base_spacing),
        ("base_radius", config.base_radius),
    ] {
        if !value.is_finite() || value <= 0.0 {
            result.add_error(format!("{}: must be a positive number, got {}", field, value));
        } else if value > 64.0 {
            result.add_warning(format!("{}: {}px is unusually large", field, value));
        }
    }

    let ratio = config.min_contrast_ratio;
    if !(1.0..=21.0).contains(&ratio) {
        result.add_error(format!(
            "min_contrast_ratio: must be between 1 and 21, got {}",
            ratio
        ));
    } else if ratio < 4.5 {
        result.add_warning(format!(
            "min_contrast_ratio: {} is below WCAG AA for body text (4.5)",
            ratio
        ));
    }

    for (field, value) in [
        ("fonts.sans", &config.fonts.sans),
        ("fonts.heading", &config.fonts.heading),
        ("fonts.mono", &config.fonts.mono),
    ] {
        if let Err(problem) = check_font_stack(value) {
            result.add_error(format!("{}: {}", field, problem));
        }
    }

    result
}

/// Validate one color field.
pub fn validate_color(field: &str, value: &str) -> ValidationResult {
    match Rgb::from_hex(value) {
        Ok(_) => {
            let mut result = ValidationResult::ok();
            let digits = value.trim().trim_start_matches('#');
            if digits.len() == 3 {
                result.add_warning(format!(
                    "{}: shorthand '{}' will be expanded to 6 digits",
                    field, value
                ));
            }
            result
        }
        Err(err) => ValidationResult::error(format!("{}: {}", field, err)),
    }
}

/// List text pairs in `theme` whose contrast is below `min_ratio`.
pub fn audit_contrast(theme: &GeneratedTheme, min_ratio: f64) -> Vec<ContrastIssue> {
    theme
        .colors
        .text_pairs()
        .into_iter()
        .filter_map(|(name, foreground, background)| {
            let ratio = contrast_ratio(foreground, background);
            (ratio < min_ratio).then_some(ContrastIssue {
                name,
                foreground,
                background,
                ratio,
            })
        })
        .collect()
}

/// Quick validation that fails on the first error.
pub fn quick_validate(config: &ThemeConfig) -> Result<(), String> {
    let result = validate_config(config);
    match result.errors.into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
