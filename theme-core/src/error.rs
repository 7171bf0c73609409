//! Error types for theme generation.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for theme processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// Config could not be parsed (-3)
    ParseError = -3,
    /// Malformed hex color (E100)
    InvalidColor = 100,
    /// Value outside its allowed range (E101)
    OutOfRange = 101,
    /// Shade key not part of the scale (E200)
    UnknownShade = 200,
    /// Document could not be updated (E300)
    DocumentError = 300,
}

/// Main error type for theme generation.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Invalid theme config: {message}")]
    ConfigParse { message: String },

    #[error("Invalid hex color '{value}': expected #rgb or #rrggbb")]
    InvalidHex { value: String },

    #[error("Invalid mode '{value}': expected 'light' or 'dark'")]
    InvalidMode { value: String },

    #[error("Invalid value for '{field}': expected {expected}, got '{value}'")]
    InvalidValue {
        field: String,
        expected: String,
        value: String,
    },

    #[error("Theme config failed validation: {message}")]
    ValidationFailed { message: String },

    #[error("Unknown shade {shade}: expected one of 50, 100..900, 950")]
    UnknownShade { shade: u16 },

    #[error("Malformed theme style element: {message}")]
    MalformedDocument { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for ThemeError {
    fn from(err: serde_json::Error) -> Self {
        ThemeError::ConfigParse {
            message: err.to_string(),
        }
    }
}

impl ThemeError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ThemeError::FileNotFound { .. } => ErrorCode::FileNotFound,
            ThemeError::EmptyFile { .. } => ErrorCode::EmptyFile,
            ThemeError::ConfigParse { .. } => ErrorCode::ParseError,
            ThemeError::InvalidHex { .. } => ErrorCode::InvalidColor,
            ThemeError::InvalidMode { .. } => ErrorCode::ParseError,
            ThemeError::InvalidValue { .. } => ErrorCode::OutOfRange,
            ThemeError::ValidationFailed { .. } => ErrorCode::OutOfRange,
            ThemeError::UnknownShade { .. } => ErrorCode::UnknownShade,
            ThemeError::MalformedDocument { .. } => ErrorCode::DocumentError,
            ThemeError::Io(_) => ErrorCode::FileNotFound,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = ThemeError::InvalidHex {
            value: "#zzz".to_string(),
        };
        assert_eq!(err.code(), ErrorCode::InvalidColor);
        assert_eq!(err.code_value(), 100);

        let err = ThemeError::UnknownShade { shade: 150 };
        assert_eq!(err.code_value(), 200);
    }

    #[test]
    fn test_json_error_maps_to_parse_error() {
        let err: ThemeError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert_eq!(err.code(), ErrorCode::ParseError);
        assert!(err.to_string().starts_with("Invalid theme config"));
    }
}
