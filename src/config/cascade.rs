use crate::config::parser::parse_config_file;
use crate::config::types::LoadedConfig;
use crate::dialect::DialectTable;
use crate::error::{IncludeError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Name of the config file looked up in each directory.
pub const CONFIG_FILE_NAME: &str = ".doc-include.toml";

/// Walk up from `start_dir` collecting `.doc-include.toml` files.
///
/// Stops after the first config with `root = true`.
/// Returns configs most specific first.
pub fn discover_project_configs(start_dir: &Path) -> Result<Vec<LoadedConfig>> {
	let mut configs = Vec::new();
	let mut current_dir = Some(start_dir);

	while let Some(dir) = current_dir {
		let config_path = dir.join(CONFIG_FILE_NAME);

		if config_path.is_file() {
			debug!(path = %config_path.display(), "Loading config");
			let config = parse_config_file(&config_path)?;
			let is_root = config.root;

			configs.push(LoadedConfig {
				config,
				path: config_path,
			});

			if is_root {
				break;
			}
		}

		current_dir = dir.parent();
	}

	Ok(configs)
}

/// Discover all config files in the cascade.
///
/// The cascade order is:
/// 1. Start from `start_dir` and look for `.doc-include.toml`
/// 2. Continue up the directory tree until a config with `root = true`
/// 3. Finally, check ~/.doc-include.toml
///
/// Returns configs in cascade order (most specific first).
pub fn discover_configs(start_dir: &Path) -> Result<Vec<LoadedConfig>> {
	let mut configs = discover_project_configs(start_dir)?;

	if let Some(user_config) = load_user_config(&configs)? {
		configs.push(user_config);
	}

	Ok(configs)
}

/// Load the user's ~/.doc-include.toml if it exists and wasn't already found.
fn load_user_config(existing_configs: &[LoadedConfig]) -> Result<Option<LoadedConfig>> {
	let Ok(user_config_path) = user_config_path() else {
		debug!("No home directory, skipping user config");
		return Ok(None);
	};

	if existing_configs
		.iter()
		.any(|loaded| loaded.path == user_config_path)
	{
		return Ok(None);
	}

	if user_config_path.is_file() {
		debug!(path = %user_config_path.display(), "Loading user config");
		let config = parse_config_file(&user_config_path)?;
		Ok(Some(LoadedConfig {
			config,
			path: user_config_path,
		}))
	} else {
		Ok(None)
	}
}

/// Build the dialect table from built-ins plus configs in cascade order.
///
/// Configs are applied least specific first, so the nearest definition of a
/// key wins.
pub fn build_dialect_table(configs: &[LoadedConfig]) -> Result<DialectTable> {
	let mut table = DialectTable::builtin()?;

	for loaded in configs.iter().rev() {
		for (key, dialect) in &loaded.config.dialects {
			let descriptor = dialect.compile(key)?;
			if table.insert(descriptor).is_some() {
				debug!(dialect = key.as_str(), path = %loaded.path.display(), "Dialect overridden");
			}
		}
	}

	Ok(table)
}

/// Convenience function to discover configs and build the dialect table.
pub fn load_dialect_table(start_dir: &Path) -> Result<DialectTable> {
	let configs = discover_configs(start_dir)?;
	build_dialect_table(&configs)
}

/// Get the path to the user's config file.
pub fn user_config_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(IncludeError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(CONFIG_FILE_NAME))
}
