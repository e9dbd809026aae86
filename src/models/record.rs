//! Threshold records and the requests evaluated against them.

use alloy_primitives::U256;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::key::SwitchKey;

use super::{TradeAmount, TradeIdentity};

/// The single stored switch for one trade identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdRecord {
    /// Canonical composite key
    pub key: SwitchKey,

    /// Minimum amount (smallest token unit) at which `enabled` takes effect
    #[serde(with = "crate::models::amount::decimal")]
    pub lower_bound: U256,

    pub enabled: bool,

    /// When the administrative write landed
    pub updated_at: DateTime<Utc>,
}

impl ThresholdRecord {
    /// Returns true if synthetic quoting applies to a trade of `amount`.
    pub fn admits(&self, amount: TradeAmount) -> bool {
        self.enabled && amount.at_least(self.lower_bound)
    }
}

/// Trade request as handed over by the serving layer.
///
/// `amount` stays a raw string so a malformed value is reported per request
/// instead of failing deserialization of the whole payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeRequest {
    #[serde(flatten)]
    pub identity: TradeIdentity,

    pub amount: String,
}

impl TradeRequest {
    pub fn new(identity: TradeIdentity, amount: impl Into<String>) -> Self {
        Self {
            identity,
            amount: amount.into(),
        }
    }
}
