use thiserror::Error;

/// Failure reported by a `CatalogSource` for a single request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    /// The server answered with a non-success HTTP status
    #[error("HTTP {0}")]
    Status(u16),
    /// The request never produced a response (DNS, TLS, connection reset...)
    #[error("{0}")]
    Transport(String),
    /// The response body could not be read or parsed
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Failure while retrieving one page of the catalog.
/// The `Display` output is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListFetchError {
    #[error("List request failed: HTTP {http_status}")]
    Status { http_status: u16 },
    #[error("List request failed: {message}")]
    Transport { message: String },
}

impl From<SourceError> for ListFetchError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::Status(http_status) => Self::Status { http_status },
            other => Self::Transport {
                message: other.to_string(),
            },
        }
    }
}

/// Failure while retrieving a single entity record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DetailFetchError {
    #[error("Detail request failed: HTTP {http_status}")]
    Status { http_status: u16 },
    #[error("Detail request failed: {message}")]
    Transport { message: String },
    #[error("Detail request failed: no entity name given")]
    EmptyName,
}

impl From<SourceError> for DetailFetchError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::Status(http_status) => Self::Status { http_status },
            other => Self::Transport {
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message_names_code() {
        let err = DetailFetchError::from(SourceError::Status(404));
        assert_eq!(err, DetailFetchError::Status { http_status: 404 });
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_decode_folds_into_transport() {
        let err = ListFetchError::from(SourceError::Decode("expected value".into()));
        assert_eq!(
            err.to_string(),
            "List request failed: malformed response: expected value"
        );
    }
}
