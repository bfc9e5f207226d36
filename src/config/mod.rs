//! Configuration loading and parsing for doc-include.
//!
//! This module handles:
//! - TOML config file parsing
//! - Directory cascade discovery
//! - Building the dialect table from built-ins and config layers

pub mod cascade;
pub mod parser;
pub mod types;

pub use cascade::{
	CONFIG_FILE_NAME, build_dialect_table, discover_configs, discover_project_configs,
	load_dialect_table, user_config_path,
};
pub use parser::{parse_config_file, parse_config_str};
pub use types::{Config, DialectConfig, LoadedConfig};
