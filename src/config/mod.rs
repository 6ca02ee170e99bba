//! Configuration loading and parsing.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use update_notifier::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".update-notifier.yml"), "package_name: my-cli").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.package_name, Some("my-cli".to_string()));
//! ```
//!
//! # Configuration File Locations
//!
//! 1. The path given with `--config` (must exist)
//! 2. `.update-notifier.yml` in the current directory
//!
//! Command-line flags override anything set in the file.

pub mod loader;
pub mod schema;

pub use loader::{find_config, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::NotifierConfig;
