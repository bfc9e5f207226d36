//! Copying documentation files into the working docs tree.
//!
//! This module handles:
//! - Reading a file from the source directory (the parent by default)
//! - Rewriting its links under the dialect chosen by extension
//! - Writing the result under the destination directory (the current one)
//! - Processing a batch of filenames in order

pub mod batch;

use crate::dialect::{DialectTable, extension_key, rewrite_counted};
use crate::error::{IncludeError, Result};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

pub use batch::{BatchReport, FileReport, include_all};

/// Where files are read from and written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
	/// Directory filenames are resolved against for reading.
	pub source_dir: PathBuf,

	/// Directory filenames are resolved against for writing.
	pub dest_dir: PathBuf,
}

impl Default for Layout {
	/// Read from `..`, write to `.`.
	fn default() -> Self {
		Layout {
			source_dir: PathBuf::from(".."),
			dest_dir: PathBuf::from("."),
		}
	}
}

impl Layout {
	pub fn new(source_dir: impl Into<PathBuf>, dest_dir: impl Into<PathBuf>) -> Self {
		Layout {
			source_dir: source_dir.into(),
			dest_dir: dest_dir.into(),
		}
	}

	pub fn source_path(&self, filename: &str) -> PathBuf {
		self.source_dir.join(filename)
	}

	pub fn dest_path(&self, filename: &str) -> PathBuf {
		self.dest_dir.join(filename)
	}
}

/// What happened to a successfully included file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncludeOutcome {
	/// The file matched a dialect; `links` links were rewritten.
	Rewritten { dialect: String, links: usize },

	/// No dialect for this extension; the file was copied unchanged.
	PassedThrough { extension: String },
}

/// Read the full source file as UTF-8. The handle is closed on return.
fn read_source(path: &Path) -> Result<String> {
	let bytes = std::fs::read(path).map_err(|source| IncludeError::SourceRead {
		path: path.to_path_buf(),
		source,
	})?;

	String::from_utf8(bytes).map_err(|source| IncludeError::Decode {
		path: path.to_path_buf(),
		source,
	})
}

/// Include a single file.
///
/// Reads `filename` relative to `layout.source_dir`, rewrites its links if the
/// extension names a dialect in `table`, and writes the result to `filename`
/// relative to `layout.dest_dir`, creating or truncating it. Parent
/// directories of the destination are not created.
pub fn include_file(
	filename: &str,
	table: &DialectTable,
	layout: &Layout,
) -> Result<IncludeOutcome> {
	if filename.is_empty() {
		return Err(IncludeError::EmptyFilename);
	}

	let source_path = layout.source_path(filename);
	let content = read_source(&source_path)?;
	let key = extension_key(filename);

	let (output, outcome) = match table.get(key) {
		Some(descriptor) => {
			let (rewritten, links) = rewrite_counted(&content, descriptor);
			let outcome = IncludeOutcome::Rewritten {
				dialect: key.to_string(),
				links,
			};
			(rewritten, outcome)
		}
		None => {
			warn!(
				extension = key,
				file = filename,
				"Unrecognized extension {key:?}, copying {filename} unchanged"
			);
			let outcome = IncludeOutcome::PassedThrough {
				extension: key.to_string(),
			};
			(content, outcome)
		}
	};

	let dest_path = layout.dest_path(filename);
	std::fs::write(&dest_path, output).map_err(|source| IncludeError::DestinationWrite {
		path: dest_path.clone(),
		source,
	})?;

	match &outcome {
		IncludeOutcome::Rewritten { dialect, links } => info!(
			file = filename,
			dialect = dialect.as_str(),
			links,
			"Wrote {}",
			dest_path.display()
		),
		IncludeOutcome::PassedThrough { .. } => {
			info!(file = filename, "Copied {}", dest_path.display())
		}
	}

	Ok(outcome)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	/// A temp tree with a `docs` destination inside the source directory.
	fn setup() -> (tempfile::TempDir, Layout) {
		let temp_dir = tempfile::tempdir().unwrap();
		let docs = temp_dir.path().join("docs");
		fs::create_dir(&docs).unwrap();
		let layout = Layout::new(temp_dir.path(), &docs);
		(temp_dir, layout)
	}

	#[test]
	fn test_default_layout() {
		let layout = Layout::default();
		assert_eq!(layout.source_path("a.md"), PathBuf::from("../a.md"));
		assert_eq!(layout.dest_path("a.md"), PathBuf::from("./a.md"));
	}

	#[test]
	fn test_include_rewrites_md() {
		let (_temp, layout) = setup();
		fs::write(
			layout.source_path("README.md"),
			"See [Install](/docs/install.md) and [API](/docs/api/index.md).\n",
		)
		.unwrap();

		let table = DialectTable::builtin().unwrap();
		let outcome = include_file("README.md", &table, &layout).unwrap();

		assert_eq!(
			outcome,
			IncludeOutcome::Rewritten {
				dialect: "md".to_string(),
				links: 2
			}
		);
		assert_eq!(
			fs::read_to_string(layout.dest_path("README.md")).unwrap(),
			"See [Install](install) and [API](api/index).\n"
		);
	}

	#[test]
	fn test_include_passes_through_unknown_extension() {
		let (_temp, layout) = setup();
		let content = "line one\r\n`X</docs/x.rst>`__ [Y](/docs/y.md)\n\u{feff}tail";
		fs::write(layout.source_path("notes.txt"), content).unwrap();

		let table = DialectTable::builtin().unwrap();
		let outcome = include_file("notes.txt", &table, &layout).unwrap();

		assert_eq!(
			outcome,
			IncludeOutcome::PassedThrough {
				extension: "txt".to_string()
			}
		);
		assert_eq!(
			fs::read(layout.dest_path("notes.txt")).unwrap(),
			content.as_bytes()
		);
	}

	#[test]
	fn test_include_without_extension_passes_through() {
		let (_temp, layout) = setup();
		fs::write(layout.source_path("LICENSE"), "[L](/docs/l.md)").unwrap();

		let table = DialectTable::builtin().unwrap();
		let outcome = include_file("LICENSE", &table, &layout).unwrap();

		assert_eq!(
			outcome,
			IncludeOutcome::PassedThrough {
				extension: "LICENSE".to_string()
			}
		);
		assert_eq!(
			fs::read_to_string(layout.dest_path("LICENSE")).unwrap(),
			"[L](/docs/l.md)"
		);
	}

	#[test]
	fn test_include_overwrites_destination() {
		let (_temp, layout) = setup();
		fs::write(layout.source_path("a.md"), "new").unwrap();
		fs::write(layout.dest_path("a.md"), "old content that is longer").unwrap();

		let table = DialectTable::builtin().unwrap();
		include_file("a.md", &table, &layout).unwrap();

		assert_eq!(fs::read_to_string(layout.dest_path("a.md")).unwrap(), "new");
	}

	#[test]
	fn test_same_source_and_destination() {
		let temp_dir = tempfile::tempdir().unwrap();
		let layout = Layout::new(temp_dir.path(), temp_dir.path());
		fs::write(layout.source_path("a.md"), "[A](/docs/a.md)").unwrap();

		let table = DialectTable::builtin().unwrap();
		include_file("a.md", &table, &layout).unwrap();

		assert_eq!(fs::read_to_string(layout.dest_path("a.md")).unwrap(), "[A](a)");
	}

	#[test]
	fn test_missing_source() {
		let (_temp, layout) = setup();
		let table = DialectTable::builtin().unwrap();

		match include_file("missing.md", &table, &layout).unwrap_err() {
			IncludeError::SourceRead { path, source } => {
				assert!(path.ends_with("missing.md"));
				assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
			}
			other => panic!("Expected SourceRead error, got {other:?}"),
		}
		assert!(!layout.dest_path("missing.md").exists());
	}

	#[test]
	fn test_invalid_utf8() {
		let (_temp, layout) = setup();
		fs::write(layout.source_path("image.md"), b"\xff\xfe\x00\x80").unwrap();

		let table = DialectTable::builtin().unwrap();
		let result = include_file("image.md", &table, &layout);

		assert!(matches!(result, Err(IncludeError::Decode { .. })));
		assert!(!layout.dest_path("image.md").exists());
	}

	#[test]
	fn test_destination_directory_missing() {
		let (_temp, layout) = setup();
		fs::create_dir(layout.source_dir.join("guides")).unwrap();
		fs::write(layout.source_path("guides/a.md"), "text").unwrap();

		let table = DialectTable::builtin().unwrap();
		let result = include_file("guides/a.md", &table, &layout);

		assert!(matches!(
			result,
			Err(IncludeError::DestinationWrite { .. })
		));
	}

	#[test]
	fn test_empty_filename() {
		let (_temp, layout) = setup();
		let table = DialectTable::builtin().unwrap();
		assert!(matches!(
			include_file("", &table, &layout),
			Err(IncludeError::EmptyFilename)
		));
	}
}
