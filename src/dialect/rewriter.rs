use crate::dialect::descriptor::{DialectDescriptor, REL_PATH_GROUP, TITLE_GROUP};
use regex::Captures;

/// Remove every occurrence of each extension from `rel_path`, in list order.
///
/// Occurrences anywhere in the path are removed, not just a trailing one.
pub fn clean_rel_path(rel_path: &str, strip_extensions: &[String]) -> String {
	strip_extensions
		.iter()
		.filter(|ext| !ext.is_empty())
		.fold(rel_path.to_string(), |path, ext| path.replace(ext.as_str(), ""))
}

/// Rewrite every link matching the dialect's pattern.
pub fn rewrite(content: &str, descriptor: &DialectDescriptor) -> String {
	rewrite_counted(content, descriptor).0
}

/// Like [`rewrite`], also returning how many links were rewritten.
///
/// Matches are found in a single left-to-right pass over the original
/// content, so substituted text is never matched again.
pub fn rewrite_counted(content: &str, descriptor: &DialectDescriptor) -> (String, usize) {
	let mut links = 0;
	let rewritten = descriptor
		.pattern()
		.replace_all(content, |caps: &Captures<'_>| {
			links += 1;
			let title = caps.name(TITLE_GROUP).map_or("", |m| m.as_str());
			let rel_path = caps.name(REL_PATH_GROUP).map_or("", |m| m.as_str());
			let path = clean_rel_path(rel_path, descriptor.strip_extensions());
			descriptor.template().render(title, &path)
		});

	(rewritten.into_owned(), links)
}
