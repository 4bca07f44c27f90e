//! Postgres layout store — one jsonb row per user.
//!
//! DESIGN
//! ======
//! `dashboard_layouts` keys on `user_id` and holds the layout as a jsonb
//! array of `{id, visible, size}`. Save is an upsert; clear deletes the
//! row, which is how "absent" is represented. The adapter takes an
//! existing pool — connection setup belongs to the embedding app.
//!
//! ERROR HANDLING
//! ==============
//! A row whose jsonb no longer decodes as a layout is logged and reported
//! absent rather than failing the load: the user gets defaults instead of
//! a broken dashboard, and the next save overwrites the bad value.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::layout::{LayoutEntry, StoredEntry};
use crate::store::{LayoutStore, StoreError};

/// Apply this crate's schema migrations.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

#[derive(Clone)]
pub struct PgLayoutStore {
    pool: PgPool,
}

impl PgLayoutStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LayoutStore for PgLayoutStore {
    async fn load(&self, user_id: Uuid) -> Result<Option<Vec<StoredEntry>>, StoreError> {
        let row: Option<(serde_json::Value,)> =
            sqlx::query_as("SELECT layout FROM dashboard_layouts WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;

        let Some((value,)) = row else {
            debug!(%user_id, "no stored layout");
            return Ok(None);
        };

        match serde_json::from_value::<Vec<StoredEntry>>(value) {
            Ok(entries) => {
                debug!(%user_id, count = entries.len(), "loaded stored layout");
                Ok(Some(entries))
            }
            Err(e) => {
                warn!(%user_id, error = %e, "stored layout undecodable; treating as absent");
                Ok(None)
            }
        }
    }

    async fn save(&self, user_id: Uuid, layout: &[LayoutEntry]) -> Result<(), StoreError> {
        let value = serde_json::to_value(layout)?;
        sqlx::query(
            "INSERT INTO dashboard_layouts (user_id, layout, updated_at)
             VALUES ($1, $2, now())
             ON CONFLICT (user_id) DO UPDATE SET layout = EXCLUDED.layout, updated_at = now()",
        )
        .bind(user_id)
        .bind(&value)
        .execute(&self.pool)
        .await?;

        debug!(%user_id, count = layout.len(), "saved layout");
        Ok(())
    }

    async fn clear(&self, user_id: Uuid) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM dashboard_layouts WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        debug!(%user_id, "cleared stored layout");
        Ok(())
    }
}

#[cfg(test)]
#[path = "postgres_test.rs"]
mod tests;
