//! Filter clauses and the ordered filter set

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::store::AnalyzedRecord;

/// A single filter clause
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Palindrome flag equals the value
    IsPalindrome(bool),
    /// Length is at least the value
    MinLength(i64),
    /// Length is at most the value
    MaxLength(i64),
    /// Word count equals the value
    WordCount(i64),
    /// Value contains the substring (case-sensitive)
    ContainsCharacter(String),
}

impl Filter {
    /// Parameter name of this clause
    pub fn key(&self) -> &'static str {
        match self {
            Filter::IsPalindrome(_) => "is_palindrome",
            Filter::MinLength(_) => "min_length",
            Filter::MaxLength(_) => "max_length",
            Filter::WordCount(_) => "word_count",
            Filter::ContainsCharacter(_) => "contains_character",
        }
    }

    /// Checks a record against this clause
    pub fn matches(&self, record: &AnalyzedRecord) -> bool {
        let props = record.properties();
        match self {
            Filter::IsPalindrome(expected) => props.is_palindrome == *expected,
            Filter::MinLength(min) => as_i64(props.length) >= *min,
            Filter::MaxLength(max) => as_i64(props.length) <= *max,
            Filter::WordCount(count) => as_i64(props.word_count) == *count,
            Filter::ContainsCharacter(needle) => record.value().contains(needle.as_str()),
        }
    }
}

fn as_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

/// Ordered conjunction of filter clauses, one per key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSet {
    clauses: Vec<Filter>,
}

impl FilterSet {
    /// Creates an empty set (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a clause, replacing an existing clause with the same key in place
    pub fn set(&mut self, filter: Filter) {
        match self.clauses.iter_mut().find(|c| c.key() == filter.key()) {
            Some(existing) => *existing = filter,
            None => self.clauses.push(filter),
        }
    }

    /// Builder form of [`FilterSet::set`]
    pub fn with(mut self, filter: Filter) -> Self {
        self.set(filter);
        self
    }

    /// True if every clause matches the record
    pub fn matches(&self, record: &AnalyzedRecord) -> bool {
        self.clauses.iter().all(|clause| clause.matches(record))
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Clauses in the order they were supplied
    pub fn iter(&self) -> impl Iterator<Item = &Filter> {
        self.clauses.iter()
    }

    pub fn get(&self, key: &str) -> Option<&Filter> {
        self.clauses.iter().find(|c| c.key() == key)
    }

    pub fn is_palindrome(&self) -> Option<bool> {
        self.clauses.iter().find_map(|c| match c {
            Filter::IsPalindrome(v) => Some(*v),
            _ => None,
        })
    }

    pub fn min_length(&self) -> Option<i64> {
        self.clauses.iter().find_map(|c| match c {
            Filter::MinLength(v) => Some(*v),
            _ => None,
        })
    }

    pub fn max_length(&self) -> Option<i64> {
        self.clauses.iter().find_map(|c| match c {
            Filter::MaxLength(v) => Some(*v),
            _ => None,
        })
    }

    pub fn word_count(&self) -> Option<i64> {
        self.clauses.iter().find_map(|c| match c {
            Filter::WordCount(v) => Some(*v),
            _ => None,
        })
    }

    pub fn contains_character(&self) -> Option<&str> {
        self.clauses.iter().find_map(|c| match c {
            Filter::ContainsCharacter(v) => Some(v.as_str()),
            _ => None,
        })
    }
}

impl Serialize for FilterSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.clauses.len()))?;
        for clause in &self.clauses {
            match clause {
                Filter::IsPalindrome(v) => map.serialize_entry(clause.key(), v)?,
                Filter::MinLength(v) | Filter::MaxLength(v) | Filter::WordCount(v) => {
                    map.serialize_entry(clause.key(), v)?
                }
                Filter::ContainsCharacter(v) => map.serialize_entry(clause.key(), v)?,
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;
    use chrono::Utc;

    fn record(value: &str) -> AnalyzedRecord {
        AnalyzedRecord::new(analyze(value), Utc::now())
    }

    #[test]
    fn test_empty_set_matches_everything() {
        let set = FilterSet::new();
        assert!(set.matches(&record("")));
        assert!(set.matches(&record("anything at all")));
    }

    #[test]
    fn test_set_replaces_same_key_in_place() {
        let mut set = FilterSet::new();
        set.set(Filter::MinLength(2));
        set.set(Filter::IsPalindrome(true));
        set.set(Filter::MinLength(9));

        assert_eq!(set.len(), 2);
        assert_eq!(set.min_length(), Some(9));
        let keys: Vec<_> = set.iter().map(Filter::key).collect();
        assert_eq!(keys, vec!["min_length", "is_palindrome"]);
    }

    #[test]
    fn test_length_bounds_are_inclusive() {
        let rec = record("abc");
        assert!(Filter::MinLength(3).matches(&rec));
        assert!(Filter::MaxLength(3).matches(&rec));
        assert!(!Filter::MinLength(4).matches(&rec));
        assert!(!Filter::MaxLength(2).matches(&rec));
    }

    #[test]
    fn test_negative_bounds() {
        let rec = record("");
        assert!(Filter::MinLength(-5).matches(&rec));
        assert!(!Filter::MaxLength(-1).matches(&rec));
    }

    #[test]
    fn test_contains_is_case_sensitive_substring() {
        let rec = record("Hello World");
        assert!(Filter::ContainsCharacter("H".into()).matches(&rec));
        assert!(!Filter::ContainsCharacter("h".into()).matches(&rec));
        assert!(Filter::ContainsCharacter("lo W".into()).matches(&rec));
    }

    #[test]
    fn test_all_clauses_must_match() {
        let set = FilterSet::new()
            .with(Filter::IsPalindrome(true))
            .with(Filter::WordCount(1));

        assert!(set.matches(&record("level")));
        assert!(!set.matches(&record("level level x")));
        assert!(!set.matches(&record("word")));
    }

    #[test]
    fn test_serializes_in_supplied_order() {
        let set = FilterSet::new()
            .with(Filter::WordCount(1))
            .with(Filter::IsPalindrome(false))
            .with(Filter::ContainsCharacter("z".into()));

        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(
            json,
            r#"{"word_count":1,"is_palindrome":false,"contains_character":"z"}"#
        );
    }
}
