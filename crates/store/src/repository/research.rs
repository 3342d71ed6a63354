//! Research listing and detail pages.

use tracing::debug;

use crate::{
    models::{ResearchItem, ResearchPage},
    DbPool, StoreError,
};

/// Return all research listing entries ordered by position.
pub async fn list_research_items(pool: &DbPool) -> Result<Vec<ResearchItem>, StoreError> {
    let rows = sqlx::query_as::<_, ResearchItem>(
        r#"SELECT title, slug, meta, summary FROM research_items ORDER BY position"#,
    )
    .fetch_all(pool)
    .await?;

    debug!(rows = rows.len(), "Loaded research items");
    Ok(rows)
}

/// Fetch a single research page by its slug.
///
/// Returns `StoreError::NotFound` if no page has that slug.
pub async fn get_research_page(pool: &DbPool, slug: &str) -> Result<ResearchPage, StoreError> {
    let row = sqlx::query_as::<_, ResearchPage>(
        r#"
        SELECT title, slug, meta, description, content_html
        FROM research_pages
        WHERE slug = $1
        "#,
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?
    .ok_or(StoreError::NotFound)?;

    Ok(row)
}
