//! Error types for the list persistence layer.

use std::fmt;

/// Result type for list persistence operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for list persistence.
///
/// None of these ever reach a caller of [`ListCache::load_list`] or
/// [`ListCache::save_list`]: those degrade to an empty list or a logged
/// overwrite failure. They surface through the diagnostic variants
/// (`load_list_detailed`, `try_save_list`) and through the store and seed
/// traits directly.
///
/// [`ListCache::load_list`]: crate::cache::ListCache::load_list
/// [`ListCache::save_list`]: crate::cache::ListCache::save_list
#[derive(Debug, Clone)]
pub enum Error {
    /// Serialization failed when converting a list to stored text.
    SerializationError(String),

    /// Deserialization failed when converting stored or seeded text to a list.
    ///
    /// Common causes:
    /// - Stored value was written by another program or truncated
    /// - Seed payload is not a JSON array
    /// - A record is missing a required field
    DeserializationError(String),

    /// A record failed `Record::validate()` after deserialization.
    ValidationError(String),

    /// Collection key is empty or cannot be used by the store.
    InvalidKey(String),

    /// Local store failure (disk full, permissions, unavailable).
    StoreError(String),

    /// Seed fetch failed at the transport level.
    SeedError(String),

    /// Seed fetch returned a non-success status.
    SeedStatus {
        /// Status code returned by the seed origin
        status: u16,
        /// Seed location that was requested
        location: String,
    },

    /// Invalid configuration (bad base URL, missing directory).
    ConfigError(String),

    /// Feature not implemented or not enabled.
    NotImplemented(String),

    /// Generic error with custom message.
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            Error::DeserializationError(msg) => write!(f, "Deserialization error: {}", msg),
            Error::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            Error::InvalidKey(msg) => write!(f, "Invalid collection key: {}", msg),
            Error::StoreError(msg) => write!(f, "Store error: {}", msg),
            Error::SeedError(msg) => write!(f, "Seed error: {}", msg),
            Error::SeedStatus { status, location } => {
                write!(f, "Seed fetch for {} returned status {}", location, status)
            }
            Error::ConfigError(msg) => write!(f, "Config error: {}", msg),
            Error::NotImplemented(msg) => write!(f, "Not implemented: {}", msg),
            Error::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ============================================================================
// Conversions from other error types
// ============================================================================

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        if e.is_io() {
            Error::StoreError(e.to_string())
        } else if e.is_syntax() || e.is_data() || e.is_eof() {
            Error::DeserializationError(e.to_string())
        } else {
            Error::SerializationError(e.to_string())
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::StoreError(e.to_string())
    }
}

impl From<String> for Error {
    fn from(e: String) -> Self {
        Error::Other(e)
    }
}

impl From<&str> for Error {
    fn from(e: &str) -> Self {
        Error::Other(e.to_string())
    }
}

#[cfg(feature = "http")]
impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => Error::SeedStatus {
                status: status.as_u16(),
                location: e.url().map(|u| u.to_string()).unwrap_or_default(),
            },
            None => Error::SeedError(format!("HTTP error: {}", e)),
        }
    }
}

#[cfg(feature = "http")]
impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::ConfigError(format!("Invalid seed URL: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ValidationError("Test".to_string());
        assert_eq!(err.to_string(), "Validation error: Test");
    }

    #[test]
    fn test_seed_status_display() {
        let err = Error::SeedStatus {
            status: 404,
            location: "/data/orders.json".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Seed fetch for /data/orders.json returned status 404"
        );
    }

    #[test]
    fn test_error_from_string() {
        let err: Error = "test error".into();
        assert!(matches!(err, Error::Other(_)));
    }

    #[test]
    fn test_error_from_json_syntax() {
        let json_err = serde_json::from_str::<Vec<u8>>("[1, 2").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::DeserializationError(_)));
    }

    #[test]
    fn test_error_from_json_shape() {
        let json_err = serde_json::from_str::<Vec<u8>>("{\"a\": 1}").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::DeserializationError(_)));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::StoreError(_)));
    }
}
