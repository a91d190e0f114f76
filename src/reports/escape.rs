//! Escaping utilities for table-based report dialects.
//!
//! Metadata text comes from third-party artifacts and may contain characters
//! that break table structure: cell separators, line breaks, or inline markup.
//! All document-provided data must be escaped before embedding it in a table.

/// Escape a string for safe inclusion in Markdown table cells.
///
/// Markdown tables use `|` as column separators and can be broken
/// by unescaped pipe characters. This function also handles newlines
/// and backticks that could break formatting.
///
/// # Examples
///
/// ```
/// use config_metadata_diff::reports::escape::escape_markdown_table;
///
/// assert_eq!(escape_markdown_table("a | b"), "a \\| b");
/// assert_eq!(escape_markdown_table("line1\nline2"), "line1 line2");
/// assert_eq!(escape_markdown_table("`code`"), "\\`code\\`");
/// ```
pub fn escape_markdown_table(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '|' => result.push_str("\\|"),
            '\n' => result.push(' '),
            '\r' => {}
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            _ => result.push(c),
        }
    }
    result
}

/// Render a string as a Markdown code span inside a table cell.
///
/// The fence grows when the value itself contains backticks.
///
/// ```
/// use config_metadata_diff::reports::escape::markdown_code;
///
/// assert_eq!(markdown_code("server.port"), "`server.port`");
/// assert_eq!(markdown_code("a`b"), "`` a`b ``");
/// assert_eq!(markdown_code("a|b"), "`a\\|b`");
/// ```
pub fn markdown_code(s: &str) -> String {
    let flat = s.replace('\r', "").replace('\n', " ").replace('|', "\\|");
    if flat.contains('`') {
        format!("`` {flat} ``")
    } else {
        format!("`{flat}`")
    }
}

/// Escape a string for safe inclusion in AsciiDoc table cells.
///
/// ```
/// use config_metadata_diff::reports::escape::escape_asciidoc_table;
///
/// assert_eq!(escape_asciidoc_table("a | b"), "a \\| b");
/// assert_eq!(escape_asciidoc_table("line1\r\nline2"), "line1 line2");
/// ```
pub fn escape_asciidoc_table(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '|' => result.push_str("\\|"),
            '\n' => result.push(' '),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

/// Render a string as literal monospace text inside an AsciiDoc table cell.
///
/// The `+` passthrough keeps markup characters in the value from being
/// interpreted.
///
/// ```
/// use config_metadata_diff::reports::escape::asciidoc_code;
///
/// assert_eq!(asciidoc_code("server.port"), "`+server.port+`");
/// assert_eq!(asciidoc_code("*.{a,b}"), "`+*.{a,b}+`");
/// ```
pub fn asciidoc_code(s: &str) -> String {
    format!("`+{}+`", escape_asciidoc_table(s))
}
