//! Reclamation Sweep Task
//!
//! Background task that periodically evicts expired cart contexts. The sweep
//! bounds memory growth from abandoned carts that are never read again; its
//! cadence is independent of the context TTL.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cart::CartStore;

/// Spawns a background task that periodically evicts expired cart contexts.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweeps. Each sweep acquires the write lock on the cart store and
/// evicts every context whose expiry has passed.
///
/// # Arguments
/// * `cart` - Arc<RwLock<CartStore>> shared reference to the store
/// * `interval_secs` - Interval in seconds between sweeps
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let store = Arc::new(RwLock::new(CartStore::new(900, Arc::new(SystemClock))));
/// let handle = spawn_reclamation_task(store.clone(), 2400);
/// // Later, during shutdown:
/// handle.abort();
/// ```
pub fn spawn_reclamation_task(
    cart: Arc<RwLock<CartStore>>,
    interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting reclamation task with interval of {} seconds",
            interval_secs
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Acquire write lock and evict expired contexts
            let removed = {
                let mut store = cart.write().await;
                store.reclaim_expired()
            };

            if removed > 0 {
                info!("Reclamation sweep: evicted {} expired cart contexts", removed);
            } else {
                debug!("Reclamation sweep: no expired cart contexts found");
            }
        }
    })
}
