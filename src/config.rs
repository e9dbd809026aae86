//! Storage configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DATABASE_URL_VAR: &str = "SYNTH_SWITCH_DATABASE_URL";
pub const MAX_CONNECTIONS_VAR: &str = "SYNTH_SWITCH_MAX_CONNECTIONS";

/// Configuration for the threshold store backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwitchConfig {
    /// SQLite connection URL
    pub database_url: String,

    /// Pool size (forced to 1 for in-memory databases)
    pub max_connections: u32,
}

impl Default for SwitchConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite:./synth_switch.db?mode=rwc".to_string(),
            max_connections: 5,
        }
    }
}

impl SwitchConfig {
    /// Load from the process environment, reading a `.env` file first if present.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup(DATABASE_URL_VAR) {
            config.database_url = url;
        }

        if let Some(raw) = lookup(MAX_CONNECTIONS_VAR) {
            config.max_connections = raw
                .trim()
                .parse()
                .with_context(|| format!("{} must be a positive integer, got {:?}", MAX_CONNECTIONS_VAR, raw))?;
        }

        if config.max_connections == 0 {
            anyhow::bail!("{} must be at least 1", MAX_CONNECTIONS_VAR);
        }

        Ok(config)
    }

    /// Returns true if the URL points at a private in-memory SQLite database.
    pub fn is_in_memory(&self) -> bool {
        self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = SwitchConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SwitchConfig::default());
        assert!(!config.is_in_memory());
    }

    #[test]
    fn test_overrides_from_env() {
        let config = SwitchConfig::from_lookup(lookup(&[
            (DATABASE_URL_VAR, "sqlite::memory:"),
            (MAX_CONNECTIONS_VAR, "8"),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.max_connections, 8);
        assert!(config.is_in_memory());
    }

    #[test]
    fn test_rejects_bad_pool_size() {
        assert!(SwitchConfig::from_lookup(lookup(&[(MAX_CONNECTIONS_VAR, "many")])).is_err());
        assert!(SwitchConfig::from_lookup(lookup(&[(MAX_CONNECTIONS_VAR, "0")])).is_err());
    }
}
