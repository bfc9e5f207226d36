use std::path::PathBuf;

/// Library-level structured errors for doc-include.
///
/// Use `thiserror` for structured errors that library consumers can match on.
/// The CLI binary wraps these with `anyhow` for rich context chains.
#[derive(Debug, thiserror::Error)]
pub enum IncludeError {
	#[error("Filename must not be empty")]
	EmptyFilename,

	#[error("Failed to read source file: {path}")]
	SourceRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Source file is not valid UTF-8: {path}")]
	Decode {
		path: PathBuf,
		#[source]
		source: std::string::FromUtf8Error,
	},

	#[error("Failed to write destination file: {path}")]
	DestinationWrite {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Invalid regex pattern for dialect {dialect}: {pattern}")]
	InvalidRegex {
		dialect: String,
		pattern: String,
		#[source]
		source: regex::Error,
	},

	#[error("Pattern for dialect {dialect} has no capture group named {group}")]
	MissingCaptureGroup { dialect: String, group: String },

	#[error("Invalid output template for dialect {dialect}: {template} ({reason})")]
	InvalidTemplate {
		dialect: String,
		template: String,
		reason: String,
	},

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

/// Result type alias using IncludeError.
pub type Result<T> = std::result::Result<T, IncludeError>;
