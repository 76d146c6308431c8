//! Phrase query interpretation
//!
//! Translates a restricted English phrase into a [`FilterSet`]. This is a
//! shallow pattern matcher: the lower-cased phrase is scanned for a fixed
//! list of trigger substrings, and each trigger that fires contributes one
//! clause.
//!
//! | Trigger                   | Clause                                  |
//! |---------------------------|-----------------------------------------|
//! | `palindromic`             | `is_palindrome = true`                  |
//! | `single word`             | `word_count = 1`                        |
//! | `longer than N`           | `min_length = N + 1`                    |
//! | `containing the letter X` | `contains_character = X` (first char)   |
//!
//! Rules run in the order above. A later rule that sets an existing key
//! overwrites it.
//!
//! Note that "longer than N" is strict while `min_length` is inclusive, so
//! the rule stores `N + 1`.

mod errors;
mod rules;

use serde::Serialize;

use crate::filter::FilterSet;

pub use errors::{InterpretError, InterpretResult};
pub use rules::{PhraseRule, RULES};

/// A phrase together with the filters derived from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterpretedQuery {
    /// The phrase as received
    pub original: String,
    /// Filters produced by the rules that fired
    pub parsed_filters: FilterSet,
}

/// Interprets `phrase` with the built-in rule table.
pub fn interpret(phrase: &str) -> InterpretResult<InterpretedQuery> {
    interpret_with(phrase, RULES)
}

/// Interprets `phrase` with an explicit rule table, applied in order.
pub fn interpret_with(phrase: &str, rules: &[PhraseRule]) -> InterpretResult<InterpretedQuery> {
    let normalized = phrase.to_lowercase();
    let mut filters = FilterSet::new();

    for rule in rules {
        if normalized.contains(rule.trigger) {
            filters.set((rule.extract)(&normalized)?);
        }
    }

    if filters.is_empty() {
        return Err(InterpretError::Unparseable("query".to_string()));
    }

    Ok(InterpretedQuery {
        original: phrase.to_string(),
        parsed_filters: filters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Filter;

    #[test]
    fn test_palindromic_longer_than() {
        let query = interpret("Find all palindromic strings longer than 5").unwrap();

        assert_eq!(query.original, "Find all palindromic strings longer than 5");
        assert_eq!(
            query.parsed_filters,
            FilterSet::new()
                .with(Filter::IsPalindrome(true))
                .with(Filter::MinLength(6))
        );
    }

    #[test]
    fn test_containing_letter() {
        let query = interpret("strings containing the letter z").unwrap();
        assert_eq!(
            query.parsed_filters,
            FilterSet::new().with(Filter::ContainsCharacter("z".into()))
        );
    }

    #[test]
    fn test_single_word_palindromic() {
        let query = interpret("all single word palindromic strings").unwrap();
        let keys: Vec<_> = query.parsed_filters.iter().map(Filter::key).collect();

        // Rule order, not phrase order.
        assert_eq!(keys, vec!["is_palindrome", "word_count"]);
        assert_eq!(query.parsed_filters.word_count(), Some(1));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let query = interpret("PALINDROMIC Strings").unwrap();
        assert_eq!(query.parsed_filters.is_palindrome(), Some(true));
        assert_eq!(query.original, "PALINDROMIC Strings");
    }

    #[test]
    fn test_no_trigger_is_unparseable() {
        assert_eq!(
            interpret("hello").unwrap_err(),
            InterpretError::Unparseable("query".to_string())
        );
    }

    #[test]
    fn test_empty_phrase_is_unparseable() {
        assert_eq!(
            interpret("").unwrap_err(),
            InterpretError::Unparseable("query".to_string())
        );
    }

    #[test]
    fn test_longer_than_without_number() {
        assert_eq!(
            interpret("palindromic strings longer than five").unwrap_err(),
            InterpretError::Unparseable("length".to_string())
        );
        assert_eq!(
            interpret("strings longer than").unwrap_err(),
            InterpretError::Unparseable("length".to_string())
        );
    }

    #[test]
    fn test_custom_rule_table() {
        fn two_words(_: &str) -> InterpretResult<Filter> {
            Ok(Filter::WordCount(2))
        }
        let rules = [PhraseRule {
            trigger: "pairs",
            extract: two_words,
        }];

        let query = interpret_with("word pairs", &rules).unwrap();
        assert_eq!(query.parsed_filters.word_count(), Some(2));
        assert!(interpret_with("palindromic", &rules).is_err());
    }

    #[test]
    fn test_serialized_shape() {
        let query = interpret("single word strings containing the letter a").unwrap();
        let json = serde_json::to_value(&query).unwrap();

        assert_eq!(json["original"], "single word strings containing the letter a");
        assert_eq!(json["parsed_filters"]["word_count"], 1);
        assert_eq!(json["parsed_filters"]["contains_character"], "a");
    }
}
