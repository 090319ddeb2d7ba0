//! Error types for Silhouette

use thiserror::Error;

/// The main error type for Silhouette operations
#[derive(Debug, Error)]
pub enum SilhouetteError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("Invalid bounds: ({x0}, {y0}) .. ({x1}, {y1}) is empty or inverted")]
    InvalidBounds { x0: f32, y0: f32, x1: f32, y1: f32 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),

    #[error("Input script error: {0}")]
    ScriptError(String),
}

/// Result type alias for Silhouette operations
pub type Result<T> = std::result::Result<T, SilhouetteError>;

impl From<toml::de::Error> for SilhouetteError {
    fn from(err: toml::de::Error) -> Self {
        SilhouetteError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for SilhouetteError {
    fn from(err: toml::ser::Error) -> Self {
        SilhouetteError::TomlSerError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_errors_convert() {
        let err: SilhouetteError = toml::from_str::<toml::Table>("= broken").unwrap_err().into();
        assert!(matches!(err, SilhouetteError::TomlParseError(_)));
    }

    #[test]
    fn range_message_names_field() {
        let err = SilhouetteError::ValueOutOfRange {
            field: "follow_factor".into(),
            min: 0.0,
            max: 1.0,
            value: 2.0,
        };
        assert!(err.to_string().contains("follow_factor"));
    }
}
