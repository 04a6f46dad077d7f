//! # Catalog
//!
//! Featured products from the remote catalog service.
//!
//! The real service is not wired up yet; the fetch completes after a short
//! deferred delay with a fixed feature list, which is enough for callers to
//! build against the asynchronous shape of the API.

use std::time::Duration;

use tracing::debug;

/// Simulated round-trip time to the catalog service.
const FETCH_DELAY: Duration = Duration::from_millis(100);

/// Fetches the ids of the currently featured products.
///
/// Completes once, after a deferred delay. Never fails; the fixture list
/// is always available.
pub async fn fetch_featured_ids() -> Vec<i64> {
    tokio::time::sleep(FETCH_DELAY).await;

    let ids = vec![1, 2, 3];
    debug!(count = ids.len(), "fetched featured product ids");
    ids
}

// =============================================================================
// Unit Tests
// =============================================================================
