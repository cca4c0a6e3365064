//! Configuration loading for bookshelf.
//!
//! - Schema definitions in [`schema`]
//! - File discovery, loading and path precedence in [`loader`]
//!
//! # Example
//!
//! ```
//! use bookshelf::config::{load_config, ResolvedPaths};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join("config.yml");
//! fs::write(&path, "data_dir: state").unwrap();
//!
//! let config = load_config(Some(&path)).unwrap();
//! let paths = ResolvedPaths::resolve(&config, None, None);
//! assert_eq!(paths.data_dir, temp.path().join("state"));
//! ```
//!
//! # Precedence
//!
//! 1. `--data-dir` / `BOOKSHELF_DATA_DIR`, `--catalog`
//! 2. `config.yml` (`--config`, or `<config_dir>/bookshelf/config.yml`)
//! 3. Built-in defaults (`<data_local_dir>/bookshelf`, built-in catalog)

pub mod loader;
pub mod schema;

pub use loader::{
    default_config_path, default_data_dir, load_config, load_config_file, parse_config,
    ResolvedPaths,
};
pub use schema::{OutputMode, ShelfConfig};
