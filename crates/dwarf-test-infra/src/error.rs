use thiserror::Error;

/// Failures while bringing up a disposable backend for tests.
#[derive(Debug, Error)]
pub enum TestInfraError {
    #[error("failed to start container: {0}")]
    Container(#[from] testcontainers::TestcontainersError),

    #[error("redis client error: {0}")]
    Redis(#[from] redis::RedisError),

    /// The container started but never answered a `PING`.
    #[error("redis not ready after {attempts} attempts: {last_error}")]
    NotReady { attempts: usize, last_error: String },
}

pub type Result<T> = std::result::Result<T, TestInfraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_ready_names_attempts_and_cause() {
        let err = TestInfraError::NotReady {
            attempts: 20,
            last_error: "connection refused".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "redis not ready after 20 attempts: connection refused"
        );
    }
}
