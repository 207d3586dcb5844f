use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// One field mapping pulled out of an entry: the form-field name and the
/// value expression copied through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMapping {
    pub name: String,
    pub value: String,
}

impl FieldMapping {
    /// The registration statement the generated script runs for this field.
    /// The value expression is emitted as-is, without escaping or validation.
    pub fn statement(&self) -> String {
        format!("mapper.field('all', '{}', {});", self.name, self.value)
    }
}

/// Derives the field name and value expression from one extracted entry.
///
/// The entry is unwrapped from its delimiters, its whitespace collapsed, then
/// partitioned on the first comma: the left side carries the quoted field
/// name after its colon, the right side carries the value expression after
/// its own colon (or in full, when it has none).
///
/// Entries missing the key/value comma, or a colon inside the key segment,
/// cannot be split meaningfully; those return `None` so the caller can report
/// them instead of emitting garbage statements.
pub fn parse_entry(entry: &str) -> Option<FieldMapping> {
    let body = entry
        .trim()
        .trim_end_matches(['}', ','])
        .trim_start_matches('{')
        .trim();
    let body = WHITESPACE_RUN.replace_all(body, " ");

    let (key_part, value_part) = body.split_once(',')?;

    let value = match value_part.split_once(':') {
        Some((_, after_colon)) => after_colon,
        None => value_part,
    }
    .trim();

    let name = key_part
        .split(':')
        .nth(1)?
        .trim()
        .trim_matches(['[', ']', '"', '\''])
        .trim();
    if name.is_empty() {
        return None;
    }

    Some(FieldMapping {
        name: name.to_string(),
        value: value.to_string(),
    })
}

#[cfg(test)]
#[path = "test_render.rs"]
mod tests;
