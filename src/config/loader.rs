//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::ShelfConfig;
use crate::error::{Result, ShelfError};

/// Default config location: `<config_dir>/bookshelf/config.yml`.
pub fn default_config_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("bookshelf").join("config.yml"))
}

/// Default storage location: `<data_local_dir>/bookshelf`.
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("bookshelf")
}

/// Parse YAML content into a config.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<ShelfConfig> {
    serde_yaml::from_str(content).map_err(|e| ShelfError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load a single config file, resolving relative paths against its directory.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<ShelfConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ShelfError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ShelfError::Io(e)
        }
    })?;

    let mut config = parse_config(&content, path)?;
    if let Some(base) = path.parent() {
        config.resolve_relative(base);
    }

    tracing::debug!("Loaded config from {:?}", path);
    Ok(config)
}

/// Load config with optional path override.
///
/// An explicit path must exist. Without one, the default location is used
/// if present and an empty config otherwise.
pub fn load_config(config_override: Option<&Path>) -> Result<ShelfConfig> {
    if let Some(path) = config_override {
        return load_config_file(path);
    }

    match default_config_path() {
        Some(path) if path.exists() => load_config_file(&path),
        _ => Ok(ShelfConfig::default()),
    }
}

/// Where state and catalog come from after applying all overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Storage directory.
    pub data_dir: PathBuf,
    /// Catalog file, `None` for the built-in catalog.
    pub catalog: Option<PathBuf>,
}

impl ResolvedPaths {
    /// Apply precedence: explicit override, then config, then defaults.
    pub fn resolve(
        config: &ShelfConfig,
        data_dir_override: Option<&Path>,
        catalog_override: Option<&Path>,
    ) -> Self {
        let data_dir = data_dir_override
            .map(Path::to_path_buf)
            .or_else(|| config.data_dir.clone())
            .unwrap_or_else(default_data_dir);
        let catalog = catalog_override
            .map(Path::to_path_buf)
            .or_else(|| config.catalog.clone());

        Self { data_dir, catalog }
    }
}
