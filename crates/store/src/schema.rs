//! Schema and seed bootstrap.
//!
//! Both scripts are plain multi-statement SQL files executed as a single
//! batch inside a transaction, so neither may issue its own `BEGIN`/`COMMIT`.
//! The schema script must be idempotent (`CREATE TABLE IF NOT EXISTS`, ...).

use std::path::Path;

use tracing::{debug, info};

use crate::{DbPool, StoreError};

/// Keys for the transaction-scoped advisory locks taken while bootstrapping.
/// Any constants work as long as every instance agrees on them.
const SCHEMA_LOCK_KEY: i64 = 0x7363_6865_6d61_5f73;
const SEED_LOCK_KEY: i64 = 0x7365_6564_5f73_6974;

/// Result of [`seed_if_empty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// `site_settings` was empty and the seed script ran.
    Seeded,
    /// Content already present; nothing was executed.
    AlreadySeeded,
}

async fn read_script(path: &Path) -> Result<String, StoreError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| StoreError::Script {
            path: path.to_path_buf(),
            source,
        })
}

async fn lock(conn: &mut sqlx::PgConnection, key: i64) -> Result<(), StoreError> {
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(key)
        .execute(conn)
        .await?;
    Ok(())
}

/// Execute the schema script at `path`.
///
/// The script is read before any connection is taken, so a missing file
/// never reaches the database.
pub async fn ensure_schema(pool: &DbPool, path: &Path) -> Result<(), StoreError> {
    info!("Applying schema from {}", path.display());
    let script = read_script(path).await?;

    let mut tx = pool.begin().await?;
    lock(&mut *tx, SCHEMA_LOCK_KEY).await?;
    sqlx::raw_sql(&script)
        .execute(&mut *tx)
        .await
        .map_err(StoreError::Schema)?;
    tx.commit().await?;

    info!("Schema is up to date");
    Ok(())
}

/// Execute the seed script at `path` if `site_settings` has no rows.
///
/// The emptiness check and the seed run share one transaction that holds a
/// Postgres advisory lock, so instances starting at the same time seed at
/// most once between them.
pub async fn seed_if_empty(pool: &DbPool, path: &Path) -> Result<SeedOutcome, StoreError> {
    let mut tx = pool.begin().await?;

    lock(&mut *tx, SEED_LOCK_KEY).await?;

    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM site_settings")
        .fetch_one(&mut *tx)
        .await?;
    debug!(count, "site_settings rows before seeding");

    if count > 0 {
        tx.commit().await?;
        info!("Content already seeded, skipping {}", path.display());
        return Ok(SeedOutcome::AlreadySeeded);
    }

    info!("Seeding content from {}", path.display());
    let script = read_script(path).await?;
    sqlx::raw_sql(&script)
        .execute(&mut *tx)
        .await
        .map_err(StoreError::Schema)?;
    tx.commit().await?;

    Ok(SeedOutcome::Seeded)
}
