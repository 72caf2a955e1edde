//! Command-line interface for the pokedex.
//!
//! Thin presentation layer: every command builds the catalog client and/or
//! the favorites store once, calls into them, and prints the result.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::adapters::HttpTransport;
use crate::catalog::{CatalogClient, DEFAULT_PAGE_SIZE};
use crate::config;
use crate::domain::{Entry, EntryDetail, Page};
use crate::favorites::{FavoritesStore, SlotStorage};

/// pokedex - browse the creature catalog and keep favorites
#[derive(Parser, Debug)]
#[command(name = "pokedex")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Print results as JSON instead of tables
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List a page of the catalog
    List {
        /// Entries per page
        #[arg(short, long, default_value_t = DEFAULT_PAGE_SIZE)]
        limit: u32,

        /// Entries to skip
        #[arg(short, long, default_value_t = 0)]
        offset: u32,
    },

    /// Show details for one entry
    Show {
        /// Entry id
        id: u32,
    },

    /// Look up an entry by exact name or id
    Search {
        /// Name or id
        query: String,
    },

    /// List gameplay types
    Types,

    /// Manage favorites
    Favorites {
        #[command(subcommand)]
        command: FavoritesCommands,
    },

    /// Show resolved configuration (debug)
    Config,
}

#[derive(Subcommand, Debug)]
pub enum FavoritesCommands {
    /// List favorites in bookmarking order
    List,

    /// Bookmark an entry by name or id
    Add {
        /// Name or id
        query: String,
    },

    /// Remove a favorite
    Remove {
        /// Entry id
        id: u32,
    },

    /// Check whether an id is a favorite
    Check {
        /// Entry id
        id: u32,
    },
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let json = self.json;
        match self.command {
            Commands::List { limit, offset } => list_page(limit, offset, json).await,
            Commands::Show { id } => show_details(id, json).await,
            Commands::Search { query } => search(&query, json).await,
            Commands::Types => list_types(json).await,
            Commands::Favorites { command } => execute_favorites(command, json).await,
            Commands::Config => show_config(),
        }
    }
}

/// Build a catalog client from configuration
fn catalog_client() -> Result<CatalogClient> {
    let config = config::config()?;
    let transport =
        HttpTransport::new(config.timeout).context("Failed to create HTTP transport")?;
    Ok(CatalogClient::new(
        Arc::new(transport),
        config.catalog.clone(),
    ))
}

/// Open the favorites store from configuration
fn favorites_store() -> Result<FavoritesStore> {
    Ok(FavoritesStore::load(SlotStorage::open_default()?))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_entries<'a>(entries: impl IntoIterator<Item = &'a Entry>) {
    println!("{:<6} {:<24} {:<20} {:<4}", "ID", "NAME", "TYPES", "GEN");
    println!("{}", "-".repeat(56));

    for entry in entries {
        println!(
            "{:<6} {:<24} {:<20} {:<4}",
            entry.id,
            entry.name,
            entry.types.join("/"),
            entry.generation
        );
    }
}

/// List one page of the catalog
async fn list_page(limit: u32, offset: u32, json: bool) -> Result<()> {
    let client = catalog_client()?;
    let page: Page = client.fetch_list(limit, offset).await?;

    if json {
        return print_json(&page);
    }

    print_entries(&page.results);
    println!(
        "\n{} of {} (offset {}){}",
        page.results.len(),
        page.total,
        offset,
        if page.has_more { ", more available" } else { "" }
    );

    Ok(())
}

/// Show the detail view for one entry
async fn show_details(id: u32, json: bool) -> Result<()> {
    let client = catalog_client()?;
    let detail: EntryDetail = client.fetch_details(id).await?;

    if json {
        return print_json(&detail);
    }

    let favorite = favorites_store()?.is_favorite(id);
    let entry = &detail.entry;

    println!("#{} {}{}", entry.id, entry.name, if favorite { " ★" } else { "" });
    println!("Types: {}", entry.types.join(", "));
    println!("Generation: {}", entry.generation);
    println!("Height: {}  Weight: {}", detail.height, detail.weight);
    if let Some(image) = &entry.image {
        println!("Image: {}", image);
    }
    if !detail.description.is_empty() {
        println!("\n{}", detail.description.split_whitespace().collect::<Vec<_>>().join(" "));
    }

    println!("\nStats:");
    for stat in &detail.stats {
        println!("  {:<18} {}", stat.name, stat.value);
    }

    if !detail.evolution_chain.is_empty() {
        let chain: Vec<String> = detail
            .evolution_chain
            .iter()
            .map(|step| format!("{} (#{})", step.name, step.id))
            .collect();
        println!("\nEvolution: {}", chain.join(" → "));
    }

    Ok(())
}

/// Search by name or id
async fn search(query: &str, json: bool) -> Result<()> {
    let client = catalog_client()?;
    let result = client.search(query).await;

    if json {
        return print_json(&result);
    }

    match result {
        Some(entry) => print_entries([&entry]),
        None => println!("No match for '{}'", query),
    }

    Ok(())
}

/// List gameplay types
async fn list_types(json: bool) -> Result<()> {
    let client = catalog_client()?;
    let types = client.list_types().await?;

    if json {
        return print_json(&types);
    }

    for name in types {
        println!("{}", name);
    }

    Ok(())
}

/// Execute favorites subcommands
async fn execute_favorites(command: FavoritesCommands, json: bool) -> Result<()> {
    let mut store = favorites_store()?;

    match command {
        FavoritesCommands::List => {
            if json {
                return print_json(&store.list());
            }
            if store.is_empty() {
                println!("No favorites yet");
                return Ok(());
            }
            print_entries(store.list());
        }
        FavoritesCommands::Add { query } => {
            let client = catalog_client()?;
            let entry = client
                .search(&query)
                .await
                .with_context(|| format!("No entry found for '{}'", query))?;

            let name = entry.name.clone();
            if store.add(entry)? {
                println!("Added {} to favorites", name);
            } else {
                println!("{} is already a favorite", name);
            }
        }
        FavoritesCommands::Remove { id } => {
            if store.remove(id)? {
                println!("Removed #{} from favorites", id);
            } else {
                println!("#{} was not a favorite", id);
            }
        }
        FavoritesCommands::Check { id } => {
            let favorite = store.is_favorite(id);
            if json {
                return print_json(&favorite);
            }
            println!("#{} {}", id, if favorite { "is a favorite" } else { "is not a favorite" });
        }
    }

    Ok(())
}

/// Show resolved configuration
fn show_config() -> Result<()> {
    let config = config::config()?;

    println!("Home: {}", config.home.display());
    println!("API: {}", config.catalog.base_url);
    println!(
        "Locales: {} (fallback {})",
        config.catalog.primary_locale, config.catalog.fallback_locale
    );
    println!("Timeout: {:?}", config.timeout);
    match &config.config_file {
        Some(path) => println!("Config file: {}", path.display()),
        None => println!("Config file: (none, using defaults)"),
    }

    Ok(())
}
