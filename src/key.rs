//! Composite key codec.
//!
//! A switch is addressed by `tokenIn#tokenInChainId#tokenOut#tokenOutChainId#type`
//! with both addresses lowercased. `#` never appears in an address, a chain id,
//! or a trade type name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Result, SwitchError};
use crate::models::{TradeIdentity, TradeType};

pub const KEY_DELIMITER: char = '#';

const SEGMENT_COUNT: usize = 5;

/// Canonical composite key of a [`TradeIdentity`].
///
/// Only built by [`SwitchKey::compose`] (or `FromStr`, which parses and
/// recomposes), so a `SwitchKey` is always in canonical lowercase form. Keys
/// are unambiguous only for identities that pass [`TradeIdentity::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SwitchKey(String);

impl SwitchKey {
    /// Build the canonical key for an identity.
    ///
    /// Addresses must not contain [`KEY_DELIMITER`]; the gate validates this
    /// before composing.
    pub fn compose(identity: &TradeIdentity) -> Self {
        SwitchKey(format!(
            "{}{d}{}{d}{}{d}{}{d}{}",
            identity.token_in.to_lowercase(),
            identity.token_in_chain_id,
            identity.token_out.to_lowercase(),
            identity.token_out_chain_id,
            identity.trade_type,
            d = KEY_DELIMITER,
        ))
    }

    /// Split a composite key back into its identity.
    ///
    /// Addresses come back exactly as written in the key; case is not restored.
    pub fn parse(key: &str) -> Result<TradeIdentity> {
        let segments: Vec<&str> = key.split(KEY_DELIMITER).collect();

        if segments.len() < SEGMENT_COUNT || segments.iter().any(|s| s.is_empty()) {
            return Err(SwitchError::invalid_key(
                key,
                format!("expected {} non-empty segments", SEGMENT_COUNT),
            ));
        }
        if segments.len() > SEGMENT_COUNT {
            return Err(SwitchError::invalid_key(
                key,
                format!("expected {} segments, found {}", SEGMENT_COUNT, segments.len()),
            ));
        }

        let trade_type = segments[4]
            .parse::<TradeType>()
            .map_err(|reason| SwitchError::invalid_key(key, reason))?;

        Ok(TradeIdentity {
            token_in: segments[0].to_string(),
            token_in_chain_id: parse_chain_id(key, segments[1])?,
            token_out: segments[2].to_string(),
            token_out_chain_id: parse_chain_id(key, segments[3])?,
            trade_type,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn parse_chain_id(key: &str, segment: &str) -> Result<u64> {
    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SwitchError::invalid_key(
            key,
            format!("chain id {:?} is not an integer", segment),
        ));
    }
    segment.parse::<u64>().map_err(|e| {
        SwitchError::invalid_key(key, format!("chain id {:?}: {}", segment, e))
    })
}

impl fmt::Display for SwitchKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SwitchKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for SwitchKey {
    type Err = SwitchError;

    fn from_str(s: &str) -> Result<Self> {
        SwitchKey::parse(s).map(|identity| SwitchKey::compose(&identity))
    }
}

impl Serialize for SwitchKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for SwitchKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
