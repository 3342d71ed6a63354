//! Row structs that map 1-to-1 onto the content tables.
//!
//! Every struct is a read-only snapshot of one row. Column names that differ
//! from the Rust field are mapped with `#[sqlx(rename)]`; nullable columns
//! are `Option<String>`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// site_settings
// ---------------------------------------------------------------------------

/// All `site_settings` pairs, keyed by setting name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings(BTreeMap<String, String>);

impl Settings {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Value for `key`, or `default` when the setting is absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for Settings {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One `site_settings` row, as fetched before folding into [`Settings`].
#[derive(Debug, Clone, FromRow)]
pub(crate) struct SettingRow {
    pub key: String,
    pub value: String,
}

// ---------------------------------------------------------------------------
// showcase_items
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ShowcaseItem {
    pub title: String,
    pub meta: String,
    #[sqlx(rename = "body")]
    pub body_html: String,
    #[sqlx(rename = "why")]
    pub why_html: String,
    /// Mermaid source for the optional architecture diagram.
    pub diagram_mermaid: Option<String>,
}

// ---------------------------------------------------------------------------
// skills_groups
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct SkillGroup {
    pub title: String,
    #[sqlx(rename = "content")]
    pub content_html: String,
    /// In-page anchor, when the group is linked to directly.
    pub anchor_id: Option<String>,
}

// ---------------------------------------------------------------------------
// trust_badges
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Badge {
    pub image: String,
    pub alt: String,
}

// ---------------------------------------------------------------------------
// blog_posts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct BlogPost {
    pub title: String,
    /// Human-readable date, stored pre-formatted (e.g. "March 2024").
    pub published_label: String,
    pub summary: String,
}

// ---------------------------------------------------------------------------
// research_items / research_pages
// ---------------------------------------------------------------------------

/// Listing entry; `slug` resolves to a [`ResearchPage`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ResearchItem {
    pub title: String,
    pub slug: String,
    pub meta: String,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ResearchPage {
    pub title: String,
    pub slug: String,
    pub meta: String,
    pub description: String,
    pub content_html: String,
}

// ---------------------------------------------------------------------------
// experiences
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Experience {
    pub company: String,
    pub role: String,
    pub description: String,
    pub years: String,
}

// ---------------------------------------------------------------------------
// aggregate
// ---------------------------------------------------------------------------

/// Everything the landing page renders, loaded in one call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomePage {
    pub settings: Settings,
    pub about: Vec<String>,
    pub showcase: Vec<ShowcaseItem>,
    pub skills: Vec<SkillGroup>,
    pub badges: Vec<Badge>,
    pub blog_posts: Vec<BlogPost>,
    pub research: Vec<ResearchItem>,
    pub experiences: Vec<Experience>,
}
