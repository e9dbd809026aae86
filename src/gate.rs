//! Gate evaluator: decides whether synthetic quoting is enabled for a trade.
//!
//! Each evaluation is one store read plus an exact integer comparison. The gate
//! holds no mutable state, so one instance can serve any number of concurrent
//! requests.

use tracing::{debug, info, Span};

use crate::db::ThresholdStore;
use crate::error::Result;
use crate::key::SwitchKey;
use crate::models::{parse_amount, parse_trade_amount, TradeIdentity, TradeRequest};

/// Threshold-gated switch over a [`ThresholdStore`].
pub struct SwitchGate<S> {
    store: S,
    span: Span,
}

impl<S: ThresholdStore> SwitchGate<S> {
    /// Create a gate over `store`. Events are emitted as children of `span`.
    pub fn new(store: S, span: Span) -> Self {
        Self { store, span }
    }

    /// Returns true if the stored switch for this trade is enabled and the
    /// amount is at or above its lower bound.
    ///
    /// A trade with no stored switch is disabled. Backend failures, an
    /// address containing the key delimiter, and a non-integer amount are
    /// errors, never a `false` decision. Negative amounts are below every
    /// bound; amounts past `U256::MAX` are above every bound.
    pub async fn evaluate(&self, request: &TradeRequest) -> Result<bool> {
        request.identity.validate()?;
        let key = SwitchKey::compose(&request.identity);

        let Some(record) = self.store.get(&key).await? else {
            info!(parent: &self.span, pk = %key, "No row found");
            return Ok(false);
        };

        let amount = parse_trade_amount(&request.amount)?;
        let enabled = record.admits(amount);

        debug!(
            parent: &self.span,
            pk = %key,
            amount = %amount,
            lower = %record.lower_bound,
            switch_enabled = record.enabled,
            enabled,
            "Evaluated synth switch"
        );

        Ok(enabled)
    }

    /// Overwrite the switch for `identity` (administrative write).
    ///
    /// `lower_bound` is a decimal integer in the input token's smallest unit.
    pub async fn put_switch(
        &self,
        identity: &TradeIdentity,
        lower_bound: &str,
        enabled: bool,
    ) -> Result<()> {
        identity.validate()?;
        let lower_bound = parse_amount(lower_bound)?;
        let key = SwitchKey::compose(identity);

        self.store.put(&key, lower_bound, enabled).await
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}
