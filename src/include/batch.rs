use crate::dialect::DialectTable;
use crate::error::{IncludeError, Result};
use crate::include::{IncludeOutcome, Layout, include_file};

/// Result of including one filename from a batch.
#[derive(Debug)]
pub struct FileReport {
	pub filename: String,
	pub result: Result<IncludeOutcome>,
}

/// Per-file results of a batch, in invocation order.
#[derive(Debug, Default)]
pub struct BatchReport {
	pub files: Vec<FileReport>,
}

impl BatchReport {
	/// Files that failed, with their errors.
	pub fn failures(&self) -> impl Iterator<Item = (&str, &IncludeError)> {
		self.files.iter().filter_map(|report| match &report.result {
			Ok(_) => None,
			Err(e) => Some((report.filename.as_str(), e)),
		})
	}

	/// Files copied unchanged because no dialect matched their extension.
	pub fn passed_through(&self) -> impl Iterator<Item = &str> {
		self.files.iter().filter_map(|report| match &report.result {
			Ok(IncludeOutcome::PassedThrough { .. }) => Some(report.filename.as_str()),
			_ => None,
		})
	}

	pub fn succeeded(&self) -> usize {
		self.files.iter().filter(|report| report.result.is_ok()).count()
	}

	pub fn is_success(&self) -> bool {
		self.failures().next().is_none()
	}
}

/// Include every filename in order.
///
/// A failure on one file is recorded and processing continues with the next.
pub fn include_all<I, S>(filenames: I, table: &DialectTable, layout: &Layout) -> BatchReport
where
	I: IntoIterator<Item = S>,
	S: AsRef<str>,
{
	let files = filenames
		.into_iter()
		.map(|filename| {
			let filename = filename.as_ref();
			FileReport {
				filename: filename.to_string(),
				result: include_file(filename, table, layout),
			}
		})
		.collect();

	BatchReport { files }
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	#[test]
	fn test_batch_mixed_dialects() {
		let temp_dir = tempfile::tempdir().unwrap();
		let docs = temp_dir.path().join("docs");
		fs::create_dir(&docs).unwrap();
		let layout = Layout::new(temp_dir.path(), &docs);

		fs::write(layout.source_path("a.rst"), "See `A</docs/a.rst>`__.").unwrap();
		fs::write(layout.source_path("b.md"), "See [B](/docs/b.md).").unwrap();
		fs::write(layout.source_path("c.txt"), "See [C](/docs/c.md).").unwrap();

		let table = DialectTable::builtin().unwrap();
		let report = include_all(["a.rst", "b.md", "c.txt"], &table, &layout);

		assert!(report.is_success());
		assert_eq!(report.succeeded(), 3);
		assert_eq!(report.passed_through().collect::<Vec<_>>(), vec!["c.txt"]);

		assert_eq!(
			fs::read_to_string(layout.dest_path("a.rst")).unwrap(),
			"See :doc:`A<a>`."
		);
		assert_eq!(
			fs::read_to_string(layout.dest_path("b.md")).unwrap(),
			"See [B](b)."
		);
		assert_eq!(
			fs::read_to_string(layout.dest_path("c.txt")).unwrap(),
			"See [C](/docs/c.md)."
		);
	}

	#[test]
	fn test_batch_continues_after_failure() {
		let temp_dir = tempfile::tempdir().unwrap();
		let docs = temp_dir.path().join("docs");
		fs::create_dir(&docs).unwrap();
		let layout = Layout::new(temp_dir.path(), &docs);

		fs::write(layout.source_path("last.md"), "[L](/docs/l.md)").unwrap();

		let table = DialectTable::builtin().unwrap();
		let report = include_all(
			vec!["missing.md".to_string(), "last.md".to_string()],
			&table,
			&layout,
		);

		assert!(!report.is_success());
		assert_eq!(report.succeeded(), 1);

		let failures: Vec<_> = report.failures().collect();
		assert_eq!(failures.len(), 1);
		assert_eq!(failures[0].0, "missing.md");
		assert!(matches!(failures[0].1, IncludeError::SourceRead { .. }));

		assert_eq!(
			fs::read_to_string(layout.dest_path("last.md")).unwrap(),
			"[L](l)"
		);
	}

	#[test]
	fn test_empty_batch() {
		let table = DialectTable::builtin().unwrap();
		let report = include_all(Vec::<String>::new(), &table, &Layout::default());
		assert!(report.is_success());
		assert!(report.files.is_empty());
	}
}
