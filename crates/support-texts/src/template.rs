//! Named-placeholder substitution for text templates.
//!
//! A template is plain text with `{name}` tokens, where `name` is made of
//! ASCII letters, digits and `_`. `{{` and `}}` produce literal braces. Any
//! other brace is copied through unchanged. Substitution is a single pass:
//! values are never re-scanned for tokens.

use serde::{Deserialize, Serialize};

use crate::error::TextError;

/// What to do with a `{name}` token that has no argument.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceholderPolicy {
    /// Leave the token in the output verbatim.
    #[default]
    Keep,
    /// Fail with [`TextError::UnresolvedPlaceholder`].
    Error,
}

impl PlaceholderPolicy {
    pub fn display_name(&self) -> &str {
        match self {
            Self::Keep => "keep",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    /// Token name plus the raw `{name}` text.
    Placeholder(&'a str, &'a str),
    /// `{` with no closing brace; byte offset of the `{`.
    Unterminated(usize, &'a str),
}

struct Segments<'a> {
    template: &'a str,
    pos: usize,
}

fn segments(template: &str) -> Segments<'_> {
    Segments { template, pos: 0 }
}

fn is_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        let template = self.template;
        let rest = &template[self.pos..];
        if rest.is_empty() {
            return None;
        }
        let start = self.pos;

        let Some(brace) = rest.find(&['{', '}'][..]) else {
            self.pos = template.len();
            return Some(Segment::Literal(rest));
        };
        if brace > 0 {
            self.pos += brace;
            return Some(Segment::Literal(&rest[..brace]));
        }

        // `rest` starts with a brace.
        if rest.starts_with("{{") || rest.starts_with("}}") {
            self.pos += 2;
            return Some(Segment::Literal(&rest[..1]));
        }
        if rest.starts_with('}') {
            self.pos += 1;
            return Some(Segment::Literal("}"));
        }
        match rest[1..].find('}') {
            Some(end) if is_name(&rest[1..1 + end]) => {
                self.pos += end + 2;
                Some(Segment::Placeholder(&rest[1..1 + end], &rest[..end + 2]))
            }
            Some(_) => {
                self.pos += 1;
                Some(Segment::Literal("{"))
            }
            None => {
                self.pos = template.len();
                Some(Segment::Unterminated(start, rest))
            }
        }
    }
}

/// Substitute `{name}` tokens with the matching `(name, value)` argument.
///
/// The first argument with a given name wins.
pub fn render(
    template: &str,
    args: &[(&str, &str)],
    policy: PlaceholderPolicy,
) -> Result<String, TextError> {
    let mut out = String::with_capacity(template.len());
    for segment in segments(template) {
        match segment {
            Segment::Literal(s) => out.push_str(s),
            Segment::Placeholder(name, raw) => {
                match args.iter().find(|(n, _)| *n == name) {
                    Some((_, value)) => out.push_str(value),
                    None if policy == PlaceholderPolicy::Keep => out.push_str(raw),
                    None => {
                        return Err(TextError::UnresolvedPlaceholder {
                            name: name.to_string(),
                        })
                    }
                }
            }
            Segment::Unterminated(position, raw) => {
                if policy == PlaceholderPolicy::Error {
                    return Err(TextError::MalformedTemplate { position });
                }
                out.push_str(raw);
            }
        }
    }
    Ok(out)
}

/// Placeholder names in order of first appearance.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for segment in segments(template) {
        if let Segment::Placeholder(name, _) = segment {
            if !names.contains(&name) {
                names.push(name);
            }
        }
    }
    names
}

/// Escape a value for Telegram HTML parse mode.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
