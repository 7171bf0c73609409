//! Theme config loading.

mod json;

pub use json::{load_theme_config, parse_theme_config};
