//! DOT escaping for rendered graph descriptions.

/// Escapes a string for safe use inside a DOT label attribute.
///
/// Handles the characters with special meaning in quoted DOT strings: backslashes,
/// double quotes, and line breaks.
///
/// # Examples
///
/// ```rust
/// use cfgcore::graph::escape_dot;
///
/// assert_eq!(escape_dot("while.cond"), "while.cond");
/// assert_eq!(escape_dot("say \"hi\""), "say \\\"hi\\\"");
/// ```
#[must_use]
pub fn escape_dot(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "")
}
