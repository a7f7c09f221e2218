//! # Configuration
//!
//! Every setting resolves through the same override chain, weakest first:
//! built-in defaults, then `~/.stacks/config.toml`, then env vars, then CLI
//! flags.
//!
//! On first run the config file is written as an all-comments template, so
//! `cat` shows every available option without changing any behavior.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::library::{Category, SearchWindow};

// ============================================================================
// File-Shaped Structs (every field Option<T>, so sparse TOML parses)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StacksConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub library: LibraryConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_client: Option<String>,
    pub default_category: Option<Category>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LibraryConfig {
    pub base_url: Option<String>,
    pub from_date_received: Option<String>,
    pub to_date_received: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LIBRARY_BASE_URL: &str = "https://library.konkuk.ac.kr";

// ============================================================================
// Resolved Config (what the rest of the app actually consumes)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub client: String,
    pub category: Category,
    pub library_base_url: String,
    pub window: SearchWindow,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.stacks/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".stacks").join("config.toml"))
}

/// Load config from `~/.stacks/config.toml`.
///
/// A missing file is not an error: the template gets written and
/// `StacksConfig::default()` comes back. A file that exists but fails to
/// parse is `ConfigError::Parse`.
pub fn load_config() -> Result<StacksConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(StacksConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(StacksConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: StacksConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Write the all-comments config template at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Stacks Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_client = "pyxis"            # "pyxis" (live catalog) or "fixture" (offline)
# default_category = "general-works"  # "philosophy", "literature", "history", ...

# [library]
# base_url = "https://library.konkuk.ac.kr"  # or the LIBRARY_BASE_URL env var
# from_date_received = "202302"       # chart window start (YYYYMM)
# to_date_received = "202304"         # chart window end (YYYYMM)
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Collapse the sparse config into concrete values, applying
/// defaults, then the config file, then env vars, then CLI flags.
///
/// `cli_client` comes from the `--client` flag (None = not specified).
pub fn resolve(config: &StacksConfig, cli_client: Option<&str>) -> ResolvedConfig {
    // Client: CLI → env → config → default
    let client = cli_client
        .map(|s| s.to_string())
        .or_else(|| std::env::var("STACKS_CLIENT").ok())
        .or_else(|| config.general.default_client.clone())
        .unwrap_or_else(|| "pyxis".to_string());

    // Category: config → default
    let category = config.general.default_category.unwrap_or_default();

    // Base URL: env → config → default
    let library_base_url = std::env::var("LIBRARY_BASE_URL")
        .ok()
        .or_else(|| config.library.base_url.clone())
        .unwrap_or_else(|| DEFAULT_LIBRARY_BASE_URL.to_string());

    // Chart window: config → default
    let default_window = SearchWindow::default();
    let window = SearchWindow {
        from: config
            .library
            .from_date_received
            .clone()
            .unwrap_or(default_window.from),
        to: config
            .library
            .to_date_received
            .clone()
            .unwrap_or(default_window.to),
    };

    ResolvedConfig {
        client,
        category,
        library_base_url,
        window,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = StacksConfig::default();
        assert!(config.general.default_client.is_none());
        assert!(config.general.default_category.is_none());
        assert!(config.library.base_url.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = StacksConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.client, "pyxis");
        assert_eq!(resolved.category, Category::GeneralWorks);
        assert_eq!(resolved.library_base_url, DEFAULT_LIBRARY_BASE_URL);
        assert_eq!(resolved.window, SearchWindow::default());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = StacksConfig {
            general: GeneralConfig {
                default_client: Some("fixture".to_string()),
                default_category: Some(Category::NaturalScience),
            },
            library: LibraryConfig {
                base_url: Some("https://mirror.example".to_string()),
                from_date_received: Some("202001".to_string()),
                to_date_received: Some("202003".to_string()),
            },
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.client, "fixture");
        assert_eq!(resolved.category, Category::NaturalScience);
        assert_eq!(resolved.library_base_url, "https://mirror.example");
        assert_eq!(resolved.window.from, "202001");
        assert_eq!(resolved.window.to, "202003");
    }

    #[test]
    fn test_resolve_cli_client_wins() {
        let config = StacksConfig {
            general: GeneralConfig {
                default_client: Some("fixture".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some("pyxis"));
        assert_eq!(resolved.client, "pyxis");
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
default_client = "fixture"
default_category = "literature"

[library]
base_url = "http://localhost:8080"
from_date_received = "202302"
to_date_received = "202304"
"#;
        let config: StacksConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_client.as_deref(), Some("fixture"));
        assert_eq!(
            config.general.default_category,
            Some(Category::Literature)
        );
        assert_eq!(
            config.library.base_url.as_deref(),
            Some("http://localhost:8080")
        );
        assert_eq!(config.library.from_date_received.as_deref(), Some("202302"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing; everything else stays default
        let toml_str = r#"
[library]
from_date_received = "202309"
"#;
        let config: StacksConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.library.from_date_received.as_deref(), Some("202309"));
        assert!(config.library.to_date_received.is_none());
        assert!(config.general.default_client.is_none());

        let resolved = resolve(&config, None);
        assert_eq!(resolved.window.from, "202309");
        assert_eq!(resolved.window.to, "202304", "unset half keeps its default");
    }

    #[test]
    fn test_unknown_category_spelling_is_a_parse_error() {
        let toml_str = r#"
[general]
default_category = "fiction"
"#;
        assert!(toml::from_str::<StacksConfig>(toml_str).is_err());
    }
}
