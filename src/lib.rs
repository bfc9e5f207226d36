//! doc-include - copy documentation files into a docs tree, rewriting links.
//!
//! Files keep cross-references of the form `/docs/<path>` while they live
//! outside the documentation directory. Including them rewrites those
//! references into links to sibling files, with source-markup extensions
//! stripped, so the copy stays consistent inside its new tree.
//!
//! This library provides:
//! - Dialect descriptors and the dialect table (`rst` and `md` built in)
//! - A pure link rewriter
//! - Single-file and batch inclusion
//! - Configuration file parsing and cascade discovery
//!
//! # Example
//!
//! ```no_run
//! use doc_include::config::load_dialect_table;
//! use doc_include::include::{Layout, include_all};
//!
//! let cwd = std::env::current_dir().unwrap();
//! let table = load_dialect_table(&cwd).unwrap();
//!
//! let report = include_all(["README.md", "CHANGELOG.rst"], &table, &Layout::default());
//! for (filename, error) in report.failures() {
//!     eprintln!("{filename}: {error}");
//! }
//! ```

pub mod config;
pub mod dialect;
pub mod error;
pub mod include;

pub use error::{IncludeError, Result};
