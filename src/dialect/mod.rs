//! Markup dialects and link rewriting for doc-include.
//!
//! This module handles:
//! - Dialect descriptors (match pattern + output template) and the dialect table
//! - Output template parsing
//! - Rewriting `/docs/`-rooted links into sibling-relative links

pub mod descriptor;
pub mod rewriter;
pub mod template;

pub use descriptor::{DEFAULT_STRIP_EXTENSIONS, DialectDescriptor, DialectTable, extension_key};
pub use rewriter::{clean_rel_path, rewrite, rewrite_counted};
pub use template::{Segment, Template};
