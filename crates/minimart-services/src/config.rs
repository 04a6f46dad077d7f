//! # Store Configuration
//!
//! Configuration for a Minimart deployment.
//!
//! ## Configuration File Format
//! ```toml
//! # store.toml
//! store_name = "Downtown Minimart"
//! base_currency = "USD"
//!
//! [hours]
//! open = "08:00:00"
//! close = "20:00:00"
//! ```
//!
//! Every field is optional; missing fields fall back to the defaults
//! (store "Minimart", USD pricing, trading 08:00 to 20:00).

use minimart_core::types::StoreHours;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ServiceResult;

/// Currency all list prices are stored in.
pub const DEFAULT_BASE_CURRENCY: &str = "USD";

// =============================================================================
// Store Config
// =============================================================================

/// Deployment-level store configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Name printed on receipts and in notification mail.
    pub store_name: String,

    /// ISO currency code list prices are stored in.
    pub base_currency: String,

    /// Daily trading hours.
    pub hours: StoreHours,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            store_name: "Minimart".to_string(),
            base_currency: DEFAULT_BASE_CURRENCY.to_string(),
            hours: StoreHours::default(),
        }
    }
}

impl StoreConfig {
    /// Parses a configuration from a TOML document.
    ///
    /// ## Errors
    /// [`crate::ServiceError::ConfigParseFailed`] when the document is not
    /// valid TOML or a field has the wrong shape.
    pub fn from_toml_str(raw: &str) -> ServiceResult<Self> {
        let config: StoreConfig = toml::from_str(raw)?;
        debug!(
            store_name = %config.store_name,
            base_currency = %config.base_currency,
            "loaded store config"
        );
        Ok(config)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
