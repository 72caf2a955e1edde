//! Configuration for the pokedex.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (POKEDEX_HOME, POKEDEX_API_URL)
//! 2. Config file (.pokedex/config.yaml)
//! 3. Defaults (~/.pokedex, https://pokeapi.co/api/v2)
//!
//! Config file discovery:
//! - Searches current directory and parents for .pokedex/config.yaml
//! - `storage.home` is relative to the .pokedex/ directory

use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::adapters::http::DEFAULT_TIMEOUT;
use crate::catalog::CatalogSettings;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub primary_locale: Option<String>,
    pub fallback_locale: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StorageConfig {
    /// Favorites directory (relative to .pokedex/)
    pub home: Option<String>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Directory holding the favorites slot
    pub home: PathBuf,
    /// Catalog endpoint and locales
    pub catalog: CatalogSettings,
    /// Per-request timeout
    pub timeout: Duration,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".pokedex").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the config directory
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Merge file settings and environment over defaults
fn resolve(
    file: Option<(&Path, ConfigFile)>,
    env_home: Option<String>,
    env_api_url: Option<String>,
) -> Result<ResolvedConfig> {
    let defaults = CatalogSettings::default();
    let (config_file, api, storage) = match file {
        Some((path, config)) => (Some(path.to_path_buf()), config.api, config.storage),
        None => (None, ApiConfig::default(), StorageConfig::default()),
    };

    let home = match (env_home, &storage.home, &config_file) {
        (Some(env), _, _) => PathBuf::from(env),
        (None, Some(home), Some(path)) => {
            let pokedex_dir = path.parent().unwrap_or(Path::new("."));
            resolve_path(pokedex_dir, home)
        }
        _ => dirs::home_dir()
            .context("Failed to determine home directory")?
            .join(".pokedex"),
    };

    let catalog = CatalogSettings {
        base_url: env_api_url
            .or(api.base_url)
            .unwrap_or(defaults.base_url),
        primary_locale: api.primary_locale.unwrap_or(defaults.primary_locale),
        fallback_locale: api.fallback_locale.unwrap_or(defaults.fallback_locale),
    };

    let timeout = api
        .timeout_seconds
        .map(Duration::from_secs)
        .unwrap_or(DEFAULT_TIMEOUT);

    Ok(ResolvedConfig {
        home,
        catalog,
        timeout,
        config_file,
    })
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let config_file = find_config_file();
    let file = match &config_file {
        Some(path) => Some((path.as_path(), load_config_file(path)?)),
        None => None,
    };

    resolve(
        file,
        std::env::var("POKEDEX_HOME").ok(),
        std::env::var("POKEDEX_API_URL").ok(),
    )
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}

/// Get the pokedex home directory (favorites storage).
pub fn pokedex_home() -> Result<PathBuf> {
    Ok(config()?.home.clone())
}
