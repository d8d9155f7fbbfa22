//! Minimal front matter extraction for node and file text.
//!
//! Canvas text nodes and referenced files may start with a metadata
//! block delimited by `---` lines:
//!
//! ```text
//! ---
//! role: system
//! ---
//! You are a helpful assistant.
//! ```
//!
//! Context reconstruction only ever reads the `role` field, so this
//! module deliberately parses a flat `key: value` shape rather than
//! pulling in a full YAML implementation. Unknown keys are ignored;
//! an opener without a closing delimiter is treated as plain body.

/// A text split into its optional declared role and trimmed body.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedDoc {
    /// Value of the `role` front matter field, if declared non-empty.
    pub role: Option<String>,
    /// Text after the front matter block, trimmed.
    pub body: String,
}

/// Splits text into `(front matter block, body)`.
///
/// The block is present only when the text starts with a `---` line
/// and a closing `---` line follows; the returned block excludes both
/// delimiters. Without a well-formed block the whole input is body.
#[must_use]
pub fn split(text: &str) -> (Option<&str>, &str) {
    let rest = match text.strip_prefix("---") {
        Some(rest) => rest,
        None => return (None, text),
    };
    // The opener must be a full line: "---\n" or "---\r\n".
    let rest = match rest.strip_prefix('\n') {
        Some(r) => r,
        None => match rest.strip_prefix("\r\n") {
            Some(r) => r,
            None => return (None, text),
        },
    };
    for (idx, line) in line_spans(rest) {
        if line.trim_end_matches('\r') == "---" {
            let block = &rest[..idx];
            let body_start = idx + line.len();
            let body = rest[body_start..].strip_prefix('\n').unwrap_or("");
            return (Some(block), body);
        }
    }
    (None, text)
}

/// Returns the trimmed value of the first `key: value` line in a
/// front matter block, or `None` when the key is absent or its value
/// is empty.
#[must_use]
pub fn field<'a>(block: &'a str, key: &str) -> Option<&'a str> {
    for line in block.lines() {
        let Some((name, value)) = line.split_once(':') else {
            continue;
        };
        if name.trim() == key {
            let value = value.trim();
            if value.is_empty() {
                return None;
            }
            return Some(value);
        }
    }
    None
}

/// Parses text into its declared role and trimmed body.
#[must_use]
pub fn parse(text: &str) -> ParsedDoc {
    let (block, body) = split(text);
    ParsedDoc {
        role: block
            .and_then(|b| field(b, "role"))
            .map(|r| r.to_string()),
        body: body.trim().to_string(),
    }
}

/// Iterates `(byte offset, line including terminator-less text)` for
/// each `\n`-separated line of `text`, where `line.len()` counts the
/// terminator so offsets can be advanced past it.
fn line_spans(text: &str) -> impl Iterator<Item = (usize, &str)> {
    let mut offset = 0;
    std::iter::from_fn(move || {
        if offset >= text.len() {
            return None;
        }
        let rest = &text[offset..];
        let (line, len) = match rest.find('\n') {
            Some(pos) => (&rest[..pos], pos),
            None => (rest, rest.len()),
        };
        let start = offset;
        offset += len + 1;
        Some((start, line))
    })
}
