use async_trait::async_trait;
use dwarf_core::{BackendError, BackendResult, KvBackend};
use redis::AsyncCommands;
use tracing::{debug, trace, warn};

/// A Redis implementation of [`KvBackend`].
///
/// Holds one multiplexed connection for the whole process. Cloning the
/// connection per call is cheap and reuses the same socket, so the backend
/// can be shared by every request task.
#[derive(Clone)]
pub struct RedisBackend {
    conn: redis::aio::MultiplexedConnection,
}

impl std::fmt::Debug for RedisBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisBackend").finish_non_exhaustive()
    }
}

fn map_redis_error(operation: &str, err: redis::RedisError) -> BackendError {
    let message = format!("{operation}: {err}");
    if err.is_timeout() {
        BackendError::Timeout(message)
    } else if err.is_io_error() || err.is_connection_dropped() || err.is_connection_refusal() {
        BackendError::Unavailable(message)
    } else {
        BackendError::Operation(message)
    }
}

impl RedisBackend {
    /// Wraps an already established connection.
    ///
    /// # Arguments
    ///
    /// * `conn` - A multiplexed connection; clones of the backend share it.
    pub fn new(conn: redis::aio::MultiplexedConnection) -> Self {
        Self { conn }
    }

    /// Opens a connection to `url` and verifies it with a `PING`, so a
    /// misconfigured address fails at startup rather than on the first request.
    ///
    /// # Arguments
    ///
    /// * `url` - Connection url such as `redis://:secret@127.0.0.1:6379/0`.
    pub async fn connect(url: &str) -> BackendResult<Self> {
        let client = redis::Client::open(url)
            .map_err(|e| map_redis_error("failed to create Redis client", e))?;
        let mut conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| map_redis_error("failed to connect to Redis", e))?;

        redis::cmd("PING")
            .query_async::<String>(&mut conn)
            .await
            .map_err(|e| map_redis_error("failed to ping Redis", e))?;

        debug!("Connected to Redis");
        Ok(Self::new(conn))
    }
}

#[async_trait]
impl KvBackend for RedisBackend {
    async fn get(&self, key: &str) -> BackendResult<Option<String>> {
        trace!(key, "GET");
        let mut conn = self.conn.clone();
        conn.get::<_, Option<String>>(key).await.map_err(|e| {
            warn!(key, error = %e, "Redis error on get");
            map_redis_error("failed to fetch value from Redis", e)
        })
    }

    async fn set(&self, key: &str, value: &str) -> BackendResult<()> {
        trace!(key, "SET");
        let mut conn = self.conn.clone();
        conn.set::<_, _, ()>(key, value).await.map_err(|e| {
            warn!(key, error = %e, "Redis error on set");
            map_redis_error("failed to write value to Redis", e)
        })
    }

    async fn delete(&self, key: &str) -> BackendResult<()> {
        trace!(key, "DEL");
        let mut conn = self.conn.clone();
        conn.del::<_, ()>(key).await.map_err(|e| {
            warn!(key, error = %e, "Redis error on delete");
            map_redis_error("failed to delete value from Redis", e)
        })
    }

    async fn exists(&self, key: &str) -> BackendResult<bool> {
        trace!(key, "EXISTS");
        let mut conn = self.conn.clone();
        conn.exists::<_, bool>(key).await.map_err(|e| {
            warn!(key, error = %e, "Redis error on exists");
            map_redis_error("failed to check key in Redis", e)
        })
    }
}
