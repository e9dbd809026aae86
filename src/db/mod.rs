//! Threshold store: one switch record per composite key.
//!
//! Backends must give read-after-write consistency on a single key and must
//! report I/O failures as `BackendUnavailable`, never as a missing record.

mod memory;
mod sqlite;

use std::sync::Arc;

use alloy_primitives::U256;
use async_trait::async_trait;

use crate::error::Result;
use crate::key::SwitchKey;
use crate::models::ThresholdRecord;

pub use memory::InMemoryThresholdStore;
pub use sqlite::SqliteThresholdStore;

/// Single-key read and overwrite of switch records.
#[async_trait]
pub trait ThresholdStore: Send + Sync {
    /// Fetch the record at `key`, or `None` if no switch was ever written.
    async fn get(&self, key: &SwitchKey) -> Result<Option<ThresholdRecord>>;

    /// Overwrite the record at `key`. Never merges with the previous value.
    async fn put(&self, key: &SwitchKey, lower_bound: U256, enabled: bool) -> Result<()>;
}

#[async_trait]
impl<S: ThresholdStore + ?Sized> ThresholdStore for Arc<S> {
    async fn get(&self, key: &SwitchKey) -> Result<Option<ThresholdRecord>> {
        (**self).get(key).await
    }

    async fn put(&self, key: &SwitchKey, lower_bound: U256, enabled: bool) -> Result<()> {
        (**self).put(key, lower_bound, enabled).await
    }
}
