//! `content-store` crate — read model for the portfolio site.
//!
//! Provides a connection pool, typed row structs, repository functions for
//! every content table, and the schema/seed bootstrap run at startup.
//! Nothing here writes content outside of the two bootstrap scripts.

pub mod config;
pub mod error;
pub mod models;
pub mod pool;
pub mod repository;
pub mod schema;
pub mod store;

pub use config::StoreConfig;
pub use error::StoreError;
pub use models::{
    Badge, BlogPost, Experience, HomePage, ResearchItem, ResearchPage, Settings, ShowcaseItem,
    SkillGroup,
};
pub use pool::{DbPool, CONNECT_TIMEOUT};
pub use schema::SeedOutcome;
pub use store::Store;
