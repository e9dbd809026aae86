//! Synthetic Quote Switch
//!
//! Decides whether the synthetic quoting path is enabled for a trade. Each
//! trade identity (token pair, chain pair, trade type) maps to exactly one
//! stored switch: a lower bound on the trade amount and an enabled flag.
//!
//! ```no_run
//! # async fn run() -> anyhow::Result<()> {
//! use synth_switch::{SqliteThresholdStore, SwitchConfig, SwitchGate, TradeIdentity, TradeRequest, TradeType};
//!
//! let config = SwitchConfig::from_env()?;
//! let span = tracing::info_span!("synth_switch");
//! let store = SqliteThresholdStore::connect(&config, span.clone()).await?;
//! let gate = SwitchGate::new(store, span);
//!
//! let identity = TradeIdentity::new("0xA0b8...", 1, "0xC02a...", 1, TradeType::ExactInput);
//! gate.put_switch(&identity, "1000000", true).await?;
//! let enabled = gate.evaluate(&TradeRequest::new(identity, "2000000")).await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod gate;
pub mod key;
pub mod models;

pub use config::SwitchConfig;
pub use db::{InMemoryThresholdStore, SqliteThresholdStore, ThresholdStore};
pub use error::{Result, SwitchError};
pub use gate::SwitchGate;
pub use key::{SwitchKey, KEY_DELIMITER};
pub use models::{
    parse_amount, parse_trade_amount, ThresholdRecord, TradeAmount, TradeIdentity, TradeRequest,
    TradeType,
};
