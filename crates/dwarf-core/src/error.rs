use thiserror::Error;

/// Result type for mapping store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// A short code failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidCode {
    #[error("code cannot be empty")]
    Empty,
    #[error("code must contain only ascii letters: '{0}'")]
    Charset(String),
}

/// Failures talking to the key-value backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error("backend unavailable: {0}")]
    Unavailable(String),
    #[error("backend operation timed out: {0}")]
    Timeout(String),
    #[error("backend operation failed: {0}")]
    Operation(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No URL is stored under the requested code.
    #[error("no url stored for code '{0}'")]
    NotFound(String),
    #[error("backend unavailable: {0}")]
    BackendUnavailable(#[from] BackendError),
    /// The reverse-index write failed after the forward entry was written.
    /// `rollback` carries the error of the compensating delete, if it failed too.
    #[error("partial write: {source}{}", rollback_suffix(.rollback))]
    PartialWrite {
        source: BackendError,
        rollback: Option<BackendError>,
    },
    #[error("no free code found up to length {max_length}")]
    KeyspaceExhausted { max_length: usize },
}

fn rollback_suffix(rollback: &Option<BackendError>) -> String {
    match rollback {
        Some(err) => format!(" (rollback failed: {err})"),
        None => String::new(),
    }
}

impl StoreError {
    /// True for every failure caused by the backend, including partial writes.
    pub fn is_backend_failure(&self) -> bool {
        matches!(
            self,
            StoreError::BackendUnavailable(_) | StoreError::PartialWrite { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_write_mentions_failed_rollback() {
        let err = StoreError::PartialWrite {
            source: BackendError::Operation("set refused".into()),
            rollback: Some(BackendError::Unavailable("connection reset".into())),
        };
        let msg = err.to_string();
        assert!(msg.contains("set refused"));
        assert!(msg.contains("rollback failed: backend unavailable: connection reset"));
    }

    #[test]
    fn partial_write_without_rollback_error() {
        let err = StoreError::PartialWrite {
            source: BackendError::Operation("set refused".into()),
            rollback: None,
        };
        assert!(!err.to_string().contains("rollback"));
        assert!(err.is_backend_failure());
    }

    #[test]
    fn not_found_is_not_a_backend_failure() {
        assert!(!StoreError::NotFound("zz".into()).is_backend_failure());
        assert!(!StoreError::KeyspaceExhausted { max_length: 8 }.is_backend_failure());
    }

    #[test]
    fn backend_error_converts() {
        let err: StoreError = BackendError::Timeout("get".into()).into();
        assert!(matches!(err, StoreError::BackendUnavailable(BackendError::Timeout(_))));
    }
}
