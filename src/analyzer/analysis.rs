//! Property computation over a trimmed string

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use super::hash::sha256_hex;
use super::whitespace::{trim_value, words};

/// Occurrence count per distinct character.
///
/// Ordered by character so serialized output is deterministic.
pub type CharacterFrequency = BTreeMap<char, usize>;

/// Derived properties of a trimmed string
///
/// Field names on the wire follow the public API (`sha256_hash`,
/// `unique_characters`, `character_frequency_map`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringProperties {
    /// Number of chars
    pub length: usize,
    /// Case-folded value equals its reverse
    pub is_palindrome: bool,
    /// Number of distinct chars, whitespace and punctuation included
    #[serde(rename = "unique_characters")]
    pub unique_character_count: usize,
    /// Number of whitespace-separated tokens
    pub word_count: usize,
    /// Hex SHA-256 of the trimmed value
    #[serde(rename = "sha256_hash")]
    pub content_hash: String,
    /// Occurrences of every char
    #[serde(rename = "character_frequency_map")]
    pub character_frequency: CharacterFrequency,
}

/// Result of analyzing one input string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    value: String,
    properties: StringProperties,
}

impl AnalysisResult {
    /// The trimmed value every property was computed from
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn properties(&self) -> &StringProperties {
        &self.properties
    }

    pub fn content_hash(&self) -> &str {
        &self.properties.content_hash
    }

    /// Splits the result into the trimmed value and its properties
    pub fn into_parts(self) -> (String, StringProperties) {
        (self.value, self.properties)
    }
}

/// Analyzes `raw`, trimming leading and trailing separators first.
pub fn analyze(raw: &str) -> AnalysisResult {
    let value = trim_value(raw);

    let properties = StringProperties {
        length: value.chars().count(),
        is_palindrome: is_palindrome(value),
        unique_character_count: value.chars().collect::<HashSet<char>>().len(),
        word_count: words(value).count(),
        content_hash: sha256_hex(value),
        character_frequency: character_frequency(value),
    };

    AnalysisResult {
        value: value.to_string(),
        properties,
    }
}

fn is_palindrome(value: &str) -> bool {
    let folded = value.to_lowercase();
    folded.chars().eq(folded.chars().rev())
}

fn character_frequency(value: &str) -> CharacterFrequency {
    let mut frequency = CharacterFrequency::new();
    for c in value.chars() {
        *frequency.entry(c).or_insert(0) += 1;
    }
    frequency
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string() {
        let result = analyze("");
        let props = result.properties();

        assert_eq!(result.value(), "");
        assert_eq!(props.length, 0);
        assert!(props.is_palindrome);
        assert_eq!(props.unique_character_count, 0);
        assert_eq!(props.word_count, 0);
        assert!(props.character_frequency.is_empty());
    }

    #[test]
    fn test_whitespace_only_trims_to_empty() {
        let result = analyze(" \t\n ");
        assert_eq!(result.value(), "");
        assert_eq!(result.properties().word_count, 0);
        assert_eq!(result.content_hash(), analyze("").content_hash());
    }

    #[test]
    fn test_information_separators_trim_and_split() {
        let result = analyze("\u{1f}ab\u{1c}cd\u{1f}");

        assert_eq!(result.value(), "ab\u{1c}cd");
        assert_eq!(result.properties().length, 5);
        assert_eq!(result.properties().word_count, 2);
        assert_eq!(
            result.content_hash(),
            "5bb935874c4fb4949f39fea1b98824b61b5b9d0ad0370440ba47901efbe342ef"
        );
    }

    #[test]
    fn test_mixed_case_palindrome() {
        let result = analyze("Racecar");
        assert!(result.properties().is_palindrome);
        assert_eq!(result.properties().length, 7);
    }

    #[test]
    fn test_palindrome_counts_spaces() {
        // Spaces are not stripped before the comparison.
        assert!(!analyze("nurses run").properties().is_palindrome);
        assert!(analyze("a b a").properties().is_palindrome);
    }

    #[test]
    fn test_repeated_word() {
        let props = analyze("a a").properties().clone();

        assert_eq!(props.word_count, 2);
        assert_eq!(props.unique_character_count, 2);
        assert_eq!(props.character_frequency.get(&'a'), Some(&2));
        assert_eq!(props.character_frequency.get(&' '), Some(&1));
        assert_eq!(props.character_frequency.len(), 2);
    }

    #[test]
    fn test_consecutive_whitespace_collapses() {
        let props = analyze("  hello   big\tworld  ").properties().clone();
        assert_eq!(props.word_count, 3);
        assert_eq!(props.length, "hello   big\tworld".chars().count());
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let props = analyze("héllo").properties().clone();
        assert_eq!(props.length, 5);
        assert_eq!(props.unique_character_count, 4);
    }

    #[test]
    fn test_frequency_sums_to_length() {
        let props = analyze("the quick brown fox").properties().clone();
        let total: usize = props.character_frequency.values().sum();
        assert_eq!(total, props.length);
        assert_eq!(props.character_frequency.len(), props.unique_character_count);
    }

    #[test]
    fn test_wire_field_names() {
        let json = serde_json::to_value(analyze("a a").properties()).unwrap();

        assert_eq!(json["length"], 3);
        assert_eq!(json["is_palindrome"], true);
        assert_eq!(json["unique_characters"], 2);
        assert_eq!(json["word_count"], 2);
        assert_eq!(json["character_frequency_map"]["a"], 2);
        assert_eq!(json["character_frequency_map"][" "], 1);
        assert!(json["sha256_hash"].is_string());
    }
}
