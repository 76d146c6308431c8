//! Whitespace used for trimming and word splitting
//!
//! Unicode `White_Space` plus the ASCII information separators
//! U+001C..=U+001F. Other runtimes strip and split on those too, and the
//! content hash must not depend on which one computed it.

/// True for chars that trimming removes and word splitting breaks on
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Removes leading and trailing separators
pub fn trim_value(raw: &str) -> &str {
    raw.trim_matches(is_separator)
}

/// Maximal runs of non-separator chars
pub fn words(value: &str) -> impl Iterator<Item = &str> {
    value.split(is_separator).filter(|word| !word.is_empty())
}
