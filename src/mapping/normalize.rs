use once_cell::sync::Lazy;
use regex::Regex;

// Does not survive a `*` inside the comment body; mapping files in the wild
// never contain one.
static BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"/\*[^*]+\*/").unwrap());
static LINE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\r\n]").unwrap());
static BRACE_COMMA: Lazy<Regex> = Lazy::new(|| Regex::new(r"\}\s*,").unwrap());

/// Flattens a raw mapping file into a single line ready for extraction:
/// block comments erased, line breaks replaced by spaces, each closing brace
/// pulled tight against the comma that follows it, and the `@` context
/// shorthand expanded to `actor.`.
///
/// The `@` substitution is a blind prefix rewrite, not a rename; it applies
/// anywhere in the text, including inside tokens.
pub fn normalize(raw: &str) -> String {
    let text = BLOCK_COMMENT.replace_all(raw, "");
    let text = LINE_BREAK.replace_all(&text, " ");
    let text = BRACE_COMMA.replace_all(&text, "},");
    text.replace('@', "actor.")
}

#[cfg(test)]
#[path = "test_normalize.rs"]
mod tests;
