//! SQLite-backed threshold store.
//!
//! One row per composite key in `synthetic_switch`. The lower bound is kept as
//! a decimal string so no integer width limit of the database applies.

use std::time::Duration;

use alloy_primitives::U256;
use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use tracing::{debug, info, Span};

use crate::config::SwitchConfig;
use crate::error::{Result, SwitchError};
use crate::key::SwitchKey;
use crate::models::{parse_amount, ThresholdRecord};

use super::ThresholdStore;

/// Threshold store over a SQLite connection pool.
pub struct SqliteThresholdStore {
    pool: SqlitePool,
    span: Span,
}

/// Stored switch row.
#[derive(Debug, Clone, sqlx::FromRow)]
struct StoredSwitch {
    pk: String,
    lower: String,
    enabled: bool,
    updated_at: DateTime<Utc>,
}

impl StoredSwitch {
    fn into_record(self, key: &SwitchKey) -> Result<ThresholdRecord> {
        let lower_bound = parse_amount(&self.lower).map_err(|_| SwitchError::CorruptRecord {
            key: self.pk.clone(),
            reason: format!("lower bound {:?} is not a decimal integer", self.lower),
        })?;

        Ok(ThresholdRecord {
            key: key.clone(),
            lower_bound,
            enabled: self.enabled,
            updated_at: self.updated_at,
        })
    }
}

impl SqliteThresholdStore {
    /// Connect to the configured database and create the switch table if needed.
    ///
    /// Events are emitted as children of `span`.
    pub async fn connect(config: &SwitchConfig, span: Span) -> anyhow::Result<Self> {
        let mut options = SqlitePoolOptions::new().max_connections(config.max_connections);

        // Each connection to `:memory:` opens its own empty database.
        if config.is_in_memory() {
            options = options
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>);
        }

        let pool = options
            .connect(&config.database_url)
            .await
            .context("Failed to connect to database")?;

        let store = Self { pool, span };
        store.run_migrations().await?;

        info!(parent: &store.span, url = %config.database_url, "Threshold store ready");
        Ok(store)
    }

    async fn run_migrations(&self) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS synthetic_switch (
                pk TEXT PRIMARY KEY,
                lower TEXT NOT NULL,
                enabled INTEGER NOT NULL,
                updated_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .context("Failed to create synthetic_switch table")?;

        Ok(())
    }

    /// Get the connection pool (for advanced queries).
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl ThresholdStore for SqliteThresholdStore {
    async fn get(&self, key: &SwitchKey) -> Result<Option<ThresholdRecord>> {
        let row = sqlx::query_as::<_, StoredSwitch>(
            "SELECT pk, lower, enabled, updated_at FROM synthetic_switch WHERE pk = ?",
        )
        .bind(key.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(SwitchError::backend)?;

        debug!(parent: &self.span, pk = %key, found = row.is_some(), "Fetched switch row");

        row.map(|r| r.into_record(key)).transpose()
    }

    async fn put(&self, key: &SwitchKey, lower_bound: U256, enabled: bool) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO synthetic_switch (pk, lower, enabled, updated_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(pk) DO UPDATE SET
                lower = excluded.lower,
                enabled = excluded.enabled,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key.as_str())
        .bind(lower_bound.to_string())
        .bind(enabled)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(SwitchError::backend)?;

        info!(parent: &self.span, pk = %key, lower = %lower_bound, enabled, "Switch written");
        Ok(())
    }
}
