//! `portfolio-store` CLI entry-point.
//!
//! Available sub-commands:
//! - `check`    — connect and ping the database.
//! - `init`     — apply the schema and seed an empty database.
//! - `show`     — print one content listing as JSON.
//! - `home`     — print everything the landing page renders as JSON.
//! - `research` — print a research page by slug as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use content_store::{SeedOutcome, Store, StoreConfig, StoreError};
use serde_json::Value;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "portfolio-store",
    about = "Content store for the portfolio site",
    version
)]
struct Cli {
    #[command(flatten)]
    db: DbArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct DbArgs {
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    #[arg(long, default_value_t = content_store::config::DEFAULT_MAX_CONNECTIONS)]
    max_connections: u32,

    /// Schema script applied by `init`.
    #[arg(long, default_value = content_store::config::DEFAULT_SCHEMA_PATH)]
    schema: PathBuf,

    /// Seed script applied by `init` when the database is empty.
    #[arg(long, default_value = content_store::config::DEFAULT_SEED_PATH)]
    seed: PathBuf,
}

impl DbArgs {
    fn config(&self) -> StoreConfig {
        StoreConfig::new(&self.database_url)
            .with_max_connections(self.max_connections)
            .with_schema_path(&self.schema)
            .with_seed_path(&self.seed)
    }
}

#[derive(Subcommand)]
enum Command {
    /// Check that the database is reachable.
    Check,
    /// Apply the schema and seed the content if the database is empty.
    Init,
    /// Print one content listing as JSON.
    Show {
        #[arg(value_enum)]
        kind: Kind,
    },
    /// Print the full landing-page content as JSON.
    Home,
    /// Print a research page as JSON.
    Research {
        slug: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Settings,
    About,
    Showcase,
    Skills,
    Badges,
    Blog,
    Research,
    Experiences,
}

async fn listing(store: &Store, kind: Kind) -> Result<Value> {
    let value = match kind {
        Kind::Settings => serde_json::to_value(store.settings().await?)?,
        Kind::About => serde_json::to_value(store.about_paragraphs().await?)?,
        Kind::Showcase => serde_json::to_value(store.showcase_items().await?)?,
        Kind::Skills => serde_json::to_value(store.skill_groups().await?)?,
        Kind::Badges => serde_json::to_value(store.trust_badges().await?)?,
        Kind::Blog => serde_json::to_value(store.blog_posts().await?)?,
        Kind::Research => serde_json::to_value(store.research_items().await?)?,
        Kind::Experiences => serde_json::to_value(store.experiences().await?)?,
    };
    Ok(value)
}

async fn run(cli: Cli, store: &Store) -> Result<()> {
    match cli.command {
        Command::Check => {
            println!("Database is reachable.");
        }
        Command::Init => {
            store.ensure_schema().await.context("applying schema")?;
            match store.seed_if_empty().await.context("seeding content")? {
                SeedOutcome::Seeded => println!("Schema applied, content seeded."),
                SeedOutcome::AlreadySeeded => println!("Schema applied, content already present."),
            }
        }
        Command::Show { kind } => {
            let value = listing(store, kind).await?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        Command::Home => {
            let page = store.home_page().await?;
            println!("{}", serde_json::to_string_pretty(&page)?);
        }
        Command::Research { slug } => match store.research_page(&slug).await {
            Ok(page) => println!("{}", serde_json::to_string_pretty(&page)?),
            Err(StoreError::NotFound) => anyhow::bail!("no research page with slug '{slug}'"),
            Err(e) => return Err(e.into()),
        },
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.db.config();

    info!("Opening content store");
    let store = Store::open(&config)
        .await
        .context("failed to connect to database")?;

    let result = run(cli, &store).await;
    store.close().await;
    result
}
