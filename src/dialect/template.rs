use crate::error::{IncludeError, Result};

/// One piece of a parsed output template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
	Literal(String),
	Title,
	Path,
}

/// Output template for a rewritten link.
///
/// Templates use `{title}` and `{path}` placeholders. Literal braces are
/// written `{{` and `}}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
	source: String,
	segments: Vec<Segment>,
}

impl Template {
	/// Parse a template string. `dialect` is only used for error reporting.
	pub fn parse(dialect: &str, input: &str) -> Result<Self> {
		let invalid = |reason: &str| IncludeError::InvalidTemplate {
			dialect: dialect.to_string(),
			template: input.to_string(),
			reason: reason.to_string(),
		};

		let mut segments = Vec::new();
		let mut literal = String::new();
		let mut chars = input.chars().peekable();

		while let Some(c) = chars.next() {
			match c {
				'{' if chars.peek() == Some(&'{') => {
					chars.next();
					literal.push('{');
				}
				'{' => {
					let mut name = String::new();
					let mut closed = false;
					for n in chars.by_ref() {
						if n == '}' {
							closed = true;
							break;
						}
						name.push(n);
					}
					if !closed {
						return Err(invalid("unclosed placeholder"));
					}

					let placeholder = match name.as_str() {
						"title" => Segment::Title,
						"path" => Segment::Path,
						_ => return Err(invalid(&format!("unknown placeholder {{{name}}}"))),
					};

					if !literal.is_empty() {
						segments.push(Segment::Literal(std::mem::take(&mut literal)));
					}
					segments.push(placeholder);
				}
				'}' if chars.peek() == Some(&'}') => {
					chars.next();
					literal.push('}');
				}
				'}' => return Err(invalid("unmatched '}'")),
				c => literal.push(c),
			}
		}

		if !literal.is_empty() {
			segments.push(Segment::Literal(literal));
		}

		Ok(Template {
			source: input.to_string(),
			segments,
		})
	}

	/// Render the template with the given title and path.
	pub fn render(&self, title: &str, path: &str) -> String {
		let mut out = String::new();
		for segment in &self.segments {
			match segment {
				Segment::Literal(text) => out.push_str(text),
				Segment::Title => out.push_str(title),
				Segment::Path => out.push_str(path),
			}
		}
		out
	}

	/// The template as originally written.
	pub fn as_str(&self) -> &str {
		&self.source
	}

	pub fn segments(&self) -> &[Segment] {
		&self.segments
	}
}
