//! Text helpers for raw token text.

/// Strip a single layer of matching surrounding quotes (`'…'` or `"…"`).
///
/// ```
/// use syster_model::base::text::strip_quotes;
///
/// assert_eq!(strip_quotes("'My Part'"), "My Part");
/// assert_eq!(strip_quotes("\"\"x\"\""), "\"x\"");
/// assert_eq!(strip_quotes("plain"), "plain");
/// ```
pub fn strip_quotes(text: &str) -> &str {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if first == last && (first == b'\'' || first == b'"') {
            return &text[1..text.len() - 1];
        }
    }
    text
}

/// Extract the payload of a `/* … */` long comment, trimmed of whitespace.
///
/// Text without the delimiters is returned trimmed.
pub fn strip_comment_delimiters(text: &str) -> &str {
    let inner = text.strip_prefix("/*").unwrap_or(text);
    let inner = inner.strip_suffix("*/").unwrap_or(inner);
    inner.trim()
}
