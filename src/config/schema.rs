//! Configuration schema.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings read from `config.yml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShelfConfig {
    /// Directory holding the persisted keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// YAML or JSON file replacing the built-in catalog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// Default output verbosity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<OutputMode>,
}

impl ShelfConfig {
    /// Make relative paths relative to `base` (the config file's directory).
    pub fn resolve_relative(&mut self, base: &Path) {
        for path in [&mut self.data_dir, &mut self.catalog].into_iter().flatten() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

/// Output verbosity as spelled in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    Verbose,
    #[default]
    Normal,
    Quiet,
    Silent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_is_default() {
        let config: ShelfConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, ShelfConfig::default());
    }

    #[test]
    fn parses_all_fields() {
        let yaml = "data_dir: /var/shelf\ncatalog: books.yml\noutput: quiet\n";
        let config: ShelfConfig = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.data_dir, Some(PathBuf::from("/var/shelf")));
        assert_eq!(config.catalog, Some(PathBuf::from("books.yml")));
        assert_eq!(config.output, Some(OutputMode::Quiet));
    }

    #[test]
    fn rejects_unknown_fields() {
        let result: Result<ShelfConfig, _> = serde_yaml::from_str("colour: blue");
        assert!(result.is_err());
    }

    #[test]
    fn resolve_relative_keeps_absolute_paths() {
        let mut config = ShelfConfig {
            data_dir: Some(PathBuf::from("/abs/data")),
            catalog: Some(PathBuf::from("books.yml")),
            output: None,
        };
        config.resolve_relative(Path::new("/etc/bookshelf"));

        assert_eq!(config.data_dir, Some(PathBuf::from("/abs/data")));
        assert_eq!(
            config.catalog,
            Some(PathBuf::from("/etc/bookshelf/books.yml"))
        );
    }
}
