//! Custom error types distinguishing transport failures from malformed
//! API responses.

use thiserror::Error;

/// Main error type for changelog generation.
#[derive(Error, Debug)]
pub enum ChangelogError {
    // Cli args errors
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    // Network/API errors
    #[error("Network request failed: {0}")]
    Transport(String),

    /// The API responded, but the body was not the expected compare shape.
    #[error("Malformed compare response: {0}")]
    MalformedResponse(String),

    // Rendering errors
    #[error("Template rendering failed: {0}")]
    TemplateError(#[from] tera::Error),

    #[error("URL parse error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] log::SetLoggerError),
}

/// Result type alias using ChangelogError
pub type Result<T> = std::result::Result<T, ChangelogError>;

impl ChangelogError {
    /// Create an invalid arguments error
    pub fn invalid_args(msg: impl Into<String>) -> Self {
        Self::InvalidArgs(msg.into())
    }

    /// Create a malformed response error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedResponse(msg.into())
    }
}

// Implement From for reqwest errors: decode failures mean the body was
// not valid JSON, everything else is a transport failure
impl From<reqwest::Error> for ChangelogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::MalformedResponse(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

// Implement From for serde_json errors: a body that fails to parse is a
// malformed response, not a transport failure
impl From<serde_json::Error> for ChangelogError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_formats() {
        let err = ChangelogError::malformed("missing commits array");
        assert_eq!(
            err.to_string(),
            "Malformed compare response: missing commits array"
        );

        let err = ChangelogError::invalid_args("bad repo slug");
        assert_eq!(err.to_string(), "Invalid arguments: bad repo slug");

        let err = ChangelogError::Transport("connection refused".into());
        assert_eq!(
            err.to_string(),
            "Network request failed: connection refused"
        );
    }

    #[test]
    fn test_from_serde_json_is_malformed_response() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json");
        assert!(json_err.is_err());
        let err: ChangelogError = json_err.unwrap_err().into();
        assert!(matches!(err, ChangelogError::MalformedResponse(_)));
    }

    #[test]
    fn test_error_helpers() {
        let err = ChangelogError::invalid_args("missing owner");
        assert!(matches!(err, ChangelogError::InvalidArgs(_)));

        let err = ChangelogError::malformed("unexpected shape");
        assert!(matches!(err, ChangelogError::MalformedResponse(_)));
    }
}
