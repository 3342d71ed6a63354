//! `site_settings` lookups.

use tracing::debug;

use crate::{
    models::{SettingRow, Settings},
    DbPool, StoreError,
};

/// Return every key/value pair in `site_settings`.
pub async fn get_settings(pool: &DbPool) -> Result<Settings, StoreError> {
    let rows = sqlx::query_as::<_, SettingRow>("SELECT key, value FROM site_settings")
        .fetch_all(pool)
        .await?;

    debug!(rows = rows.len(), "Loaded site settings");
    Ok(rows.into_iter().map(|r| (r.key, r.value)).collect())
}
