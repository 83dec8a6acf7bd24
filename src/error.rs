//! Error types for polysoundex.
//!
//! Every message carries the `PhoneticEncoder:` prefix so failures can be
//! attributed in logs without extra context.

use thiserror::Error;

/// Phonetic encoder error type
#[derive(Error, Debug)]
pub enum PhoneticError {
    /// No configured detection rule matched the input.
    #[error("PhoneticEncoder: No configuration found for the input script: '{0}'")]
    UnsupportedScript(String),

    /// A configuration is unusable (empty mapping, bad digit class, overlapping classes).
    #[error("PhoneticEncoder: Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Normalization removed every character of the input.
    #[error("PhoneticEncoder: Input '{0}' is empty after normalization")]
    EmptyAfterNormalization(String),

    #[error("PhoneticEncoder: Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("PhoneticEncoder: IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PhoneticEncoder: Config error: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for phonetic operations
pub type PhoneticResult<T> = Result<T, PhoneticError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = PhoneticError::UnsupportedScript("Ωμέγα".to_string());
        assert_eq!(
            err.to_string(),
            "PhoneticEncoder: No configuration found for the input script: 'Ωμέγα'"
        );

        let err = PhoneticError::InvalidConfiguration("mapping must be provided".to_string());
        assert_eq!(
            err.to_string(),
            "PhoneticEncoder: Invalid configuration: mapping must be provided"
        );

        let err = PhoneticError::EmptyAfterNormalization("--".to_string());
        assert_eq!(
            err.to_string(),
            "PhoneticEncoder: Input '--' is empty after normalization"
        );
    }

    #[test]
    fn test_every_variant_is_prefixed() {
        let io = PhoneticError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(io.to_string().starts_with("PhoneticEncoder: "));

        let source = regex::Regex::new("[").unwrap_err();
        let pattern = PhoneticError::InvalidPattern {
            pattern: "[".to_string(),
            source,
        };
        assert!(pattern.to_string().starts_with("PhoneticEncoder: Invalid pattern '['"));
    }
}
