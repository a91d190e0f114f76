//! Short description extraction.

use regex::Regex;
use std::sync::LazyLock;

/// A period followed by whitespace or the end of the text.
static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(\s|$)").expect("static regex"));

/// A line break together with the whitespace around it.
static LINE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\r?\n\s*").expect("static regex"));

/// Extract the first sentence of a description.
///
/// Line breaks inside that sentence collapse to a single space. When the
/// description has no sentence boundary, its first line is returned instead.
///
/// ```
/// use config_metadata_diff::parsers::extract_short_description;
///
/// assert_eq!(
///     extract_short_description(Some("My short\ndescription.\nMore stuff.")).as_deref(),
///     Some("My short description.")
/// );
/// assert_eq!(
///     extract_short_description(Some("My short description")).as_deref(),
///     Some("My short description")
/// );
/// assert_eq!(extract_short_description(None), None);
/// ```
#[must_use]
pub fn extract_short_description(description: Option<&str>) -> Option<String> {
    let description = description?;
    match SENTENCE_END.find(description) {
        Some(boundary) => {
            let sentence = &description[..=boundary.start()];
            Some(LINE_BREAK.replace_all(sentence, " ").trim().to_string())
        }
        None => {
            let first_line = description.lines().next().unwrap_or_default();
            Some(first_line.trim().to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short(text: &str) -> Option<String> {
        extract_short_description(Some(text))
    }

    #[test]
    fn test_first_sentence() {
        assert_eq!(
            short("My short description. More stuff.").as_deref(),
            Some("My short description.")
        );
    }

    #[test]
    fn test_new_line_before_dot() {
        assert_eq!(
            short("My short\ndescription.\nMore stuff.").as_deref(),
            Some("My short description.")
        );
    }

    #[test]
    fn test_new_line_before_dot_with_spaces() {
        assert_eq!(
            short("My short  \n description.  \nMore stuff.").as_deref(),
            Some("My short description.")
        );
    }

    #[test]
    fn test_no_dot() {
        assert_eq!(
            short("My short description").as_deref(),
            Some("My short description")
        );
    }

    #[test]
    fn test_no_dot_multiple_lines() {
        assert_eq!(
            short("My short description  \n More stuff").as_deref(),
            Some("My short description")
        );
    }

    #[test]
    fn test_dot_inside_word_is_not_a_boundary() {
        assert_eq!(
            short("Use version 1.5 or later. Older ones break.").as_deref(),
            Some("Use version 1.5 or later.")
        );
    }

    #[test]
    fn test_windows_line_endings() {
        assert_eq!(
            short("My short\r\ndescription.\r\nMore.").as_deref(),
            Some("My short description.")
        );
    }

    #[test]
    fn test_none() {
        assert_eq!(extract_short_description(None), None);
    }

    #[test]
    fn test_empty() {
        assert_eq!(short("").as_deref(), Some(""));
    }
}
