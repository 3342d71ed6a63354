//! Landing-page listings: about text, showcase, skills, badges, blog posts
//! and experiences.

use tracing::debug;

use crate::{
    models::{Badge, BlogPost, Experience, ShowcaseItem, SkillGroup},
    DbPool, StoreError,
};

/// Return the about-section paragraphs in display order.
pub async fn list_about_paragraphs(pool: &DbPool) -> Result<Vec<String>, StoreError> {
    let rows = sqlx::query_scalar::<_, String>(
        r#"SELECT content FROM about_paragraphs ORDER BY position"#,
    )
    .fetch_all(pool)
    .await?;

    debug!(rows = rows.len(), "Loaded about paragraphs");
    Ok(rows)
}

pub async fn list_showcase_items(pool: &DbPool) -> Result<Vec<ShowcaseItem>, StoreError> {
    let rows = sqlx::query_as::<_, ShowcaseItem>(
        r#"
        SELECT title, meta, body, why, diagram_mermaid
        FROM showcase_items
        ORDER BY position
        "#,
    )
    .fetch_all(pool)
    .await?;

    debug!(rows = rows.len(), "Loaded showcase items");
    Ok(rows)
}

pub async fn list_skill_groups(pool: &DbPool) -> Result<Vec<SkillGroup>, StoreError> {
    let rows = sqlx::query_as::<_, SkillGroup>(
        r#"SELECT title, content, anchor_id FROM skills_groups ORDER BY position"#,
    )
    .fetch_all(pool)
    .await?;

    debug!(rows = rows.len(), "Loaded skill groups");
    Ok(rows)
}

pub async fn list_trust_badges(pool: &DbPool) -> Result<Vec<Badge>, StoreError> {
    let rows = sqlx::query_as::<_, Badge>(
        r#"SELECT image, alt FROM trust_badges ORDER BY position"#,
    )
    .fetch_all(pool)
    .await?;

    debug!(rows = rows.len(), "Loaded trust badges");
    Ok(rows)
}

/// Return blog post teasers in display order.
pub async fn list_blog_posts(pool: &DbPool) -> Result<Vec<BlogPost>, StoreError> {
    let rows = sqlx::query_as::<_, BlogPost>(
        r#"SELECT title, published_label, summary FROM blog_posts ORDER BY position"#,
    )
    .fetch_all(pool)
    .await?;

    debug!(rows = rows.len(), "Loaded blog posts");
    Ok(rows)
}

pub async fn list_experiences(pool: &DbPool) -> Result<Vec<Experience>, StoreError> {
    let rows = sqlx::query_as::<_, Experience>(
        r#"SELECT company, role, description, years FROM experiences ORDER BY position"#,
    )
    .fetch_all(pool)
    .await?;

    debug!(rows = rows.len(), "Loaded experiences");
    Ok(rows)
}
