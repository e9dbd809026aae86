//! In-process threshold store for tests and local wiring.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use alloy_primitives::U256;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{info, warn, Span};

use crate::error::{Result, SwitchError};
use crate::key::SwitchKey;
use crate::models::ThresholdRecord;

use super::ThresholdStore;

/// Threshold store held in a map, with a switchable outage.
pub struct InMemoryThresholdStore {
    records: RwLock<HashMap<SwitchKey, ThresholdRecord>>,
    unavailable: AtomicBool,
    span: Span,
}

impl InMemoryThresholdStore {
    pub fn new(span: Span) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            unavailable: AtomicBool::new(false),
            span,
        }
    }

    /// Simulate a backend outage: while set, every get and put fails.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
        warn!(parent: &self.span, unavailable, "In-memory store availability changed");
    }

    /// Number of stored switches.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(SwitchError::backend("in-memory store marked unavailable"));
        }
        Ok(())
    }
}

impl Default for InMemoryThresholdStore {
    fn default() -> Self {
        Self::new(Span::none())
    }
}

#[async_trait]
impl ThresholdStore for InMemoryThresholdStore {
    async fn get(&self, key: &SwitchKey) -> Result<Option<ThresholdRecord>> {
        self.check_available()?;
        Ok(self.records.read().await.get(key).cloned())
    }

    async fn put(&self, key: &SwitchKey, lower_bound: U256, enabled: bool) -> Result<()> {
        self.check_available()?;

        let record = ThresholdRecord {
            key: key.clone(),
            lower_bound,
            enabled,
            updated_at: Utc::now(),
        };
        self.records.write().await.insert(key.clone(), record);

        info!(parent: &self.span, pk = %key, lower = %lower_bound, enabled, "Switch written");
        Ok(())
    }
}
