//! Data models for trade identities, amounts, and switch records.

pub mod amount;
mod identity;
mod record;

pub use amount::{parse_amount, parse_trade_amount, TradeAmount};
pub use identity::{TradeIdentity, TradeType};
pub use record::{ThresholdRecord, TradeRequest};
