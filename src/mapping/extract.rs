/// Splits normalized mapping text into entries: a brace group followed by any
/// run of non-comma characters and a terminating comma. Returned slices keep
/// their own delimiters and appear in source order.
///
/// Brace groups are matched by depth, so a nested group runs to its true
/// closing brace instead of the first `}` encountered. A group that is never
/// followed by a comma, or left unclosed at end of input, yields no entry.
pub fn entries(normalized: &str) -> Vec<&str> {
    let bytes = normalized.as_bytes();
    let mut found = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'{' {
            i += 1;
            continue;
        }

        let start = i;
        let mut depth = 0usize;
        let mut close = None;
        while i < bytes.len() {
            match bytes[i] {
                b'{' => depth += 1,
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        close = Some(i);
                        break;
                    }
                }
                _ => {}
            }
            i += 1;
        }

        let Some(close) = close else {
            break;
        };

        // Trailing material between the group and its comma belongs to the
        // entry, mirroring the `}[^,]*,` tail of the original pattern.
        let mut end = close + 1;
        while end < bytes.len() && bytes[end] != b',' {
            end += 1;
        }

        if end < bytes.len() {
            found.push(&normalized[start..=end]);
            i = end + 1;
        } else {
            i = close + 1;
        }
    }

    found
}

#[cfg(test)]
#[path = "test_extract.rs"]
mod tests;
