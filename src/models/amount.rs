//! Token amounts in the token's smallest unit.
//!
//! Stored lower bounds are exact 256-bit unsigned integers, accepted only as
//! plain decimal strings: no sign, no hex prefix, no separators, no fraction.
//! Requested trade amounts may be any decimal integer; they are only ever
//! compared against a lower bound, so negatives and values past 2^256 - 1
//! keep their ordering without being materialized.

use std::fmt;

use alloy_primitives::U256;
use serde::{Deserialize, Deserializer, Serializer};

use crate::error::{Result, SwitchError};

/// Parse a decimal amount string into an exact integer.
pub fn parse_amount(raw: &str) -> Result<U256> {
    let invalid = || SwitchError::InvalidAmount {
        amount: raw.to_string(),
    };

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    // Overflow past 2^256 - 1 is the only remaining failure.
    U256::from_str_radix(raw, 10).map_err(|_| invalid())
}

/// Requested trade amount, positioned relative to the `U256` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeAmount {
    /// Strictly below zero
    Negative,
    Exact(U256),
    /// Greater than `U256::MAX`
    AboveMax,
}

impl TradeAmount {
    /// Returns true if this amount is at or above `bound`.
    pub fn at_least(&self, bound: U256) -> bool {
        match self {
            TradeAmount::Negative => false,
            TradeAmount::Exact(amount) => *amount >= bound,
            TradeAmount::AboveMax => true,
        }
    }
}

impl fmt::Display for TradeAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeAmount::Negative => f.write_str("<0"),
            TradeAmount::Exact(amount) => write!(f, "{}", amount),
            TradeAmount::AboveMax => f.write_str(">U256::MAX"),
        }
    }
}

/// Parse a requested amount: an optional leading `-` followed by decimal digits.
pub fn parse_trade_amount(raw: &str) -> Result<TradeAmount> {
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SwitchError::InvalidAmount {
            amount: raw.to_string(),
        });
    }

    if digits.bytes().all(|b| b == b'0') {
        return Ok(TradeAmount::Exact(U256::ZERO));
    }
    if negative {
        return Ok(TradeAmount::Negative);
    }

    // Digits are validated, so a parse failure can only be overflow.
    Ok(U256::from_str_radix(digits, 10)
        .map(TradeAmount::Exact)
        .unwrap_or(TradeAmount::AboveMax))
}

/// Serde adapter keeping amounts as decimal strings on the wire.
pub mod decimal {
    use super::*;

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<U256, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_amount(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_decimal() {
        assert_eq!(parse_amount("0").unwrap(), U256::ZERO);
        assert_eq!(parse_amount("1000000").unwrap(), U256::from(1_000_000u64));
        assert_eq!(parse_amount("000042").unwrap(), U256::from(42u64));
    }

    #[test]
    fn test_parse_beyond_u128_stays_exact() {
        // 2^128 and 2^128 + 1 collapse to the same f64; they must not here.
        let a = parse_amount("340282366920938463463374607431768211456").unwrap();
        let b = parse_amount("340282366920938463463374607431768211457").unwrap();
        assert!(b > a);
        assert_eq!(b - a, U256::from(1u64));

        let max = parse_amount(&U256::MAX.to_string()).unwrap();
        assert_eq!(max, U256::MAX);
    }

    #[test]
    fn test_reject_non_integer_forms() {
        for raw in ["", " 1", "1 ", "-1", "-0", "+1", "1.5", "1e18", "0x10", "1_000", "abc"] {
            assert!(
                matches!(parse_amount(raw), Err(SwitchError::InvalidAmount { .. })),
                "accepted {:?}",
                raw
            );
        }
    }

    // 2^256
    const TWO_POW_256: &str =
        "115792089237316195423570985008687907853269984665640564039457584007913129639936";

    #[test]
    fn test_lower_bound_past_u256_is_rejected() {
        assert!(matches!(
            parse_amount(TWO_POW_256),
            Err(SwitchError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_trade_amount_ordering() {
        assert_eq!(parse_trade_amount("1000").unwrap(), TradeAmount::Exact(U256::from(1000u64)));
        assert_eq!(parse_trade_amount("-5").unwrap(), TradeAmount::Negative);
        assert_eq!(parse_trade_amount("-000").unwrap(), TradeAmount::Exact(U256::ZERO));
        assert_eq!(parse_trade_amount(TWO_POW_256).unwrap(), TradeAmount::AboveMax);

        assert!(TradeAmount::AboveMax.at_least(U256::MAX));
        assert!(!TradeAmount::Negative.at_least(U256::ZERO));
        assert!(TradeAmount::Exact(U256::ZERO).at_least(U256::ZERO));
    }

    #[test]
    fn test_trade_amount_rejects_non_integers() {
        for raw in ["", "-", "--5", "+5", "- 5", "1.5", "-1.5", "0x10", "1e18"] {
            assert!(
                matches!(parse_trade_amount(raw), Err(SwitchError::InvalidAmount { .. })),
                "accepted {:?}",
                raw
            );
        }
    }
}
