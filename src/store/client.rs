//! Store connection handling.

use redis::aio::ConnectionManager;
use redis::RedisResult;

/// Handle to the key-value store.
///
/// Created once at process startup and attached to the router as an
/// `Extension`, so ownership of the connection is explicit rather than a
/// lazily-initialized module global. Cloning hands out the same managed,
/// multiplexed connection; the whole process shares one store link.
#[derive(Clone)]
pub struct StoreClient {
    manager: ConnectionManager,
}

impl StoreClient {
    /// Opens the store connection.
    ///
    /// Connection events are logged here; a failed initial connect is
    /// returned to the caller and aborts startup, there is no degraded
    /// mode. No explicit teardown exists, the connection lives for the
    /// process lifetime.
    pub async fn connect(url: &str) -> RedisResult<Self> {
        let client = redis::Client::open(url)?;

        match ConnectionManager::new(client).await {
            Ok(manager) => {
                tracing::info!("Store connected at {}", url);
                Ok(Self { manager })
            }
            Err(e) => {
                tracing::error!("Store connection failed: {}", e);
                Err(e)
            }
        }
    }

    /// Cheap clone of the managed connection for one operation.
    pub fn connection(&self) -> ConnectionManager {
        self.manager.clone()
    }
}
