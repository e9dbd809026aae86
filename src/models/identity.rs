//! Trade identity: the tuple a switch decision is keyed on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, SwitchError};
use crate::key::{SwitchKey, KEY_DELIMITER};

/// Trade type, matching the router's exact-in / exact-out distinction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeType {
    ExactInput,
    ExactOutput,
}

impl TradeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeType::ExactInput => "EXACT_INPUT",
            TradeType::ExactOutput => "EXACT_OUTPUT",
        }
    }
}

impl fmt::Display for TradeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TradeType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "EXACT_INPUT" => Ok(TradeType::ExactInput),
            "EXACT_OUTPUT" => Ok(TradeType::ExactOutput),
            other => Err(format!("unknown trade type {:?}", other)),
        }
    }
}

/// Token pair, chain pair and trade type identifying a routing decision.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeIdentity {
    /// Input token address (case-insensitive)
    #[serde(deserialize_with = "address")]
    pub token_in: String,

    pub token_in_chain_id: u64,

    /// Output token address (case-insensitive)
    #[serde(deserialize_with = "address")]
    pub token_out: String,

    pub token_out_chain_id: u64,

    #[serde(rename = "type")]
    pub trade_type: TradeType,
}

impl TradeIdentity {
    pub fn new(
        token_in: impl Into<String>,
        token_in_chain_id: u64,
        token_out: impl Into<String>,
        token_out_chain_id: u64,
        trade_type: TradeType,
    ) -> Self {
        Self {
            token_in: token_in.into(),
            token_in_chain_id,
            token_out: token_out.into(),
            token_out_chain_id,
            trade_type,
        }
    }

    /// Same identity with both addresses lowercased.
    pub fn canonical(&self) -> Self {
        Self {
            token_in: self.token_in.to_lowercase(),
            token_out: self.token_out.to_lowercase(),
            ..self.clone()
        }
    }

    /// Returns true if both addresses are already in canonical form.
    pub fn is_canonical(&self) -> bool {
        self.token_in == self.token_in.to_lowercase()
            && self.token_out == self.token_out.to_lowercase()
    }

    /// Rejects addresses that are empty or contain the key delimiter.
    ///
    /// Such an identity has no unambiguous composite key.
    pub fn validate(&self) -> Result<()> {
        for address in [&self.token_in, &self.token_out] {
            if let Some(reason) = address_problem(address) {
                return Err(SwitchError::invalid_key(SwitchKey::compose(self).as_str(), reason));
            }
        }
        Ok(())
    }

    /// Composite storage key for this identity.
    pub fn key(&self) -> SwitchKey {
        SwitchKey::compose(self)
    }
}

fn address_problem(address: &str) -> Option<String> {
    if address.is_empty() {
        Some("empty token address".to_string())
    } else if address.contains(KEY_DELIMITER) {
        Some(format!("token address {:?} contains {:?}", address, KEY_DELIMITER))
    } else {
        None
    }
}

fn address<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    let raw = String::deserialize(deserializer)?;
    match address_problem(&raw) {
        Some(reason) => Err(serde::de::Error::custom(reason)),
        None => Ok(raw),
    }
}
