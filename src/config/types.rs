use crate::dialect::DialectDescriptor;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Top-level configuration from a `.doc-include.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
	/// If true, stop the upward directory search here.
	/// The user config in the home directory is still applied.
	#[serde(default)]
	pub root: bool,

	/// Dialects keyed by file extension (without the dot).
	/// A key that matches a built-in dialect replaces it.
	#[serde(default)]
	pub dialects: BTreeMap<String, DialectConfig>,
}

/// A dialect defined in a config file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct DialectConfig {
	/// Regex with named groups `title` and `rel_path`.
	pub pattern: String,

	/// Output template using `{title}` and `{path}`.
	pub template: String,

	/// Extensions removed from `rel_path` before rendering.
	/// Defaults to `.rst` then `.md`.
	pub strip_extensions: Option<Vec<String>>,
}

/// A loaded configuration with its source path for debugging/display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from.
	pub path: PathBuf,
}

impl DialectConfig {
	/// Compile this entry into a descriptor for `key`.
	pub fn compile(&self, key: &str) -> crate::error::Result<DialectDescriptor> {
		let descriptor = DialectDescriptor::new(key, &self.pattern, &self.template)?;
		Ok(match &self.strip_extensions {
			Some(extensions) => descriptor.with_strip_extensions(extensions.clone()),
			None => descriptor,
		})
	}
}

impl Config {
	/// Validate that every dialect compiles.
	pub fn validate(&self) -> Result<(), crate::error::IncludeError> {
		for (key, dialect) in &self.dialects {
			dialect.compile(key)?;
		}
		Ok(())
	}
}
