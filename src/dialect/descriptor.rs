use crate::dialect::template::Template;
use crate::error::{IncludeError, Result};
use regex::Regex;
use std::collections::HashMap;

/// Source-markup extensions stripped from rewritten paths, in order.
pub const DEFAULT_STRIP_EXTENSIONS: &[&str] = &[".rst", ".md"];

/// Capture group holding the link's display text.
pub const TITLE_GROUP: &str = "title";

/// Capture group holding the path below `/docs/`.
pub const REL_PATH_GROUP: &str = "rel_path";

const RST_PATTERN: &str = r"`(?P<title>[^`<]*)</docs/(?P<rel_path>[^>]*)>`__";
const RST_TEMPLATE: &str = ":doc:`{title}<{path}>`";

const MD_PATTERN: &str = r"\[(?P<title>[^\]]*)\]\(/docs/(?P<rel_path>[^)]*)\)";
const MD_TEMPLATE: &str = "[{title}]({path})";

/// How one markup dialect spells a `/docs/`-rooted link, and how to rewrite it.
#[derive(Debug, Clone)]
pub struct DialectDescriptor {
	key: String,
	pattern: Regex,
	template: Template,
	strip_extensions: Vec<String>,
}

impl DialectDescriptor {
	/// Build a descriptor, checking that the pattern compiles with both
	/// `title` and `rel_path` groups and that the template parses.
	pub fn new(key: &str, pattern: &str, template: &str) -> Result<Self> {
		let regex = Regex::new(pattern).map_err(|source| IncludeError::InvalidRegex {
			dialect: key.to_string(),
			pattern: pattern.to_string(),
			source,
		})?;

		for group in [TITLE_GROUP, REL_PATH_GROUP] {
			if !regex.capture_names().flatten().any(|name| name == group) {
				return Err(IncludeError::MissingCaptureGroup {
					dialect: key.to_string(),
					group: group.to_string(),
				});
			}
		}

		Ok(DialectDescriptor {
			key: key.to_string(),
			pattern: regex,
			template: Template::parse(key, template)?,
			strip_extensions: DEFAULT_STRIP_EXTENSIONS
				.iter()
				.map(|s| s.to_string())
				.collect(),
		})
	}

	/// Replace the list of extensions stripped from rewritten paths.
	pub fn with_strip_extensions(mut self, extensions: Vec<String>) -> Self {
		self.strip_extensions = extensions;
		self
	}

	/// reStructuredText: `` `Title</docs/path.rst>`__ `` to `` :doc:`Title<path>` ``.
	pub fn rst() -> Result<Self> {
		Self::new("rst", RST_PATTERN, RST_TEMPLATE)
	}

	/// Markdown: `[Title](/docs/path.md)` to `[Title](path)`.
	pub fn md() -> Result<Self> {
		Self::new("md", MD_PATTERN, MD_TEMPLATE)
	}

	pub fn key(&self) -> &str {
		&self.key
	}

	pub fn pattern(&self) -> &Regex {
		&self.pattern
	}

	pub fn template(&self) -> &Template {
		&self.template
	}

	pub fn strip_extensions(&self) -> &[String] {
		&self.strip_extensions
	}
}

/// Extension key for a filename: everything after the final `.`.
///
/// A filename without a dot is its own key.
pub fn extension_key(filename: &str) -> &str {
	filename
		.rsplit_once('.')
		.map_or(filename, |(_, extension)| extension)
}

/// Immutable mapping from extension key to dialect.
#[derive(Debug, Clone, Default)]
pub struct DialectTable {
	dialects: HashMap<String, DialectDescriptor>,
}

impl DialectTable {
	/// Table with no dialects; every file passes through unchanged.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Table holding the built-in `rst` and `md` dialects.
	pub fn builtin() -> Result<Self> {
		let mut table = Self::empty();
		table.insert(DialectDescriptor::rst()?);
		table.insert(DialectDescriptor::md()?);
		Ok(table)
	}

	/// Add a dialect, returning any descriptor previously held for its key.
	pub fn insert(&mut self, descriptor: DialectDescriptor) -> Option<DialectDescriptor> {
		self.dialects
			.insert(descriptor.key().to_string(), descriptor)
	}

	pub fn get(&self, key: &str) -> Option<&DialectDescriptor> {
		self.dialects.get(key)
	}

	/// Look up the dialect for a filename by its extension key.
	pub fn for_filename(&self, filename: &str) -> Option<&DialectDescriptor> {
		self.get(extension_key(filename))
	}

	/// Registered keys, sorted.
	pub fn keys(&self) -> Vec<&str> {
		let mut keys: Vec<&str> = self.dialects.keys().map(String::as_str).collect();
		keys.sort_unstable();
		keys
	}

	pub fn len(&self) -> usize {
		self.dialects.len()
	}

	pub fn is_empty(&self) -> bool {
		self.dialects.is_empty()
	}
}
