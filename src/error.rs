use std::error::Error as StdError;
use std::io;
use thiserror::Error;

/// Boxed error for wrapping driver-specific errors
pub type BoxedError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Error)]
pub enum SnippetsError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The database could not be reached or opened
    #[error("connection failed: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<BoxedError>,
    },

    /// A statement against the snippets table failed
    #[error("query failed: {message}")]
    Query {
        message: String,
        #[source]
        source: Option<BoxedError>,
    },

    /// Creating the snippets table failed
    #[error("schema setup failed: {message}")]
    Schema {
        message: String,
        #[source]
        source: Option<BoxedError>,
    },

    #[error("unsupported database URL: {0} (expected postgres://, postgresql:// or sqlite:)")]
    UnsupportedDatabaseUrl(String),
}

impl SnippetsError {
    pub fn connection(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::Connection {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn query(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::Query {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn schema(
        message: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::Schema {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

pub type Result<T> = std::result::Result<T, SnippetsError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_query_error_keeps_source() {
        let source = io::Error::new(io::ErrorKind::Other, "relation does not exist");
        let err = SnippetsError::query("failed to fetch snippet", source);

        match &err {
            SnippetsError::Query { message, source } => {
                assert_eq!(message, "failed to fetch snippet");
                assert!(source.is_some());
            }
            _ => panic!("Expected Query variant"),
        }
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "query failed: failed to fetch snippet");
    }

    #[test]
    fn test_connection_error_message() {
        let source = io::Error::new(io::ErrorKind::ConnectionRefused, "refused");
        let err = SnippetsError::connection("could not connect to postgres", source);
        assert_eq!(
            err.to_string(),
            "connection failed: could not connect to postgres"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let err: SnippetsError = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, SnippetsError::Io(_)));
    }
}
