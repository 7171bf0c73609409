//! JSON theme config reader.

use std::path::Path;

use tracing::debug;

use crate::config::ThemeConfig;
use crate::error::{Result, ThemeError};

/// Parse a theme config from JSON text. Missing fields take their defaults.
pub fn parse_theme_config(content: &str) -> Result<ThemeConfig> {
    let config: ThemeConfig = serde_json::from_str(content)?;
    Ok(config)
}

/// Load a theme config from a JSON file.
pub fn load_theme_config(path: &Path) -> Result<ThemeConfig> {
    if !path.exists() {
        return Err(ThemeError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(ThemeError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let config = parse_theme_config(&content)?;
    debug!("Loaded {} theme config from {}", config.mode, path.display());
    Ok(config)
}
