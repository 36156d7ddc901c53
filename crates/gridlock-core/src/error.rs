//! Error types for Gridlock.

/// Result type alias for Gridlock operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when configuring or feeding the pattern lock.
///
/// Gesture-level conditions (a drag that misses every dot, a release with
/// nothing connected) are not errors; they simply have no effect. Only
/// structural misuse surfaces here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A serialized pattern value could not be parsed.
    #[error("malformed pattern value: {message}")]
    Format { message: String },

    /// A configuration value was rejected at construction time.
    #[error("invalid configuration: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create a format error.
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::format("token `x` is not of the form `row-column`");
        assert_eq!(
            err.to_string(),
            "malformed pattern value: token `x` is not of the form `row-column`"
        );

        let err = Error::configuration("cell count must be at least 1");
        assert_eq!(
            err.to_string(),
            "invalid configuration: cell count must be at least 1"
        );
    }
}
