//! Query parameter parsing into a filter set

use super::errors::{FilterError, FilterResult};
use super::filter_set::{Filter, FilterSet};

impl FilterSet {
    /// Builds a filter set from ordered URL query pairs.
    ///
    /// - `is_palindrome` is true only for `"true"` (ASCII case-insensitive)
    /// - `min_length`, `max_length`, `word_count` must parse as integers
    /// - empty numeric and `contains_character` values are ignored
    /// - unknown keys are ignored
    pub fn from_query_pairs<I, K, V>(pairs: I) -> FilterResult<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut set = FilterSet::new();

        for (key, value) in pairs {
            let key = key.as_ref();
            let value = value.as_ref();

            let filter = match key {
                "is_palindrome" => Filter::IsPalindrome(value.eq_ignore_ascii_case("true")),
                "min_length" | "max_length" | "word_count" if value.is_empty() => continue,
                "min_length" => Filter::MinLength(parse_integer(key, value)?),
                "max_length" => Filter::MaxLength(parse_integer(key, value)?),
                "word_count" => Filter::WordCount(parse_integer(key, value)?),
                "contains_character" if value.is_empty() => continue,
                "contains_character" => Filter::ContainsCharacter(value.to_string()),
                _ => continue,
            };

            set.set(filter);
        }

        Ok(set)
    }
}

fn parse_integer(name: &str, value: &str) -> FilterResult<i64> {
    value
        .parse()
        .map_err(|_| FilterError::invalid_integer(name, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_all_known_keys() {
        let set = FilterSet::from_query_pairs([
            ("is_palindrome", "true"),
            ("min_length", "2"),
            ("max_length", "10"),
            ("word_count", "1"),
            ("contains_character", "a"),
        ])
        .unwrap();

        assert_eq!(set.is_palindrome(), Some(true));
        assert_eq!(set.min_length(), Some(2));
        assert_eq!(set.max_length(), Some(10));
        assert_eq!(set.word_count(), Some(1));
        assert_eq!(set.contains_character(), Some("a"));
    }

    #[test]
    fn test_palindrome_flag_is_case_insensitive() {
        let set = FilterSet::from_query_pairs([("is_palindrome", "TRUE")]).unwrap();
        assert_eq!(set.is_palindrome(), Some(true));

        let set = FilterSet::from_query_pairs([("is_palindrome", "False")]).unwrap();
        assert_eq!(set.is_palindrome(), Some(false));

        let set = FilterSet::from_query_pairs([("is_palindrome", "yes")]).unwrap();
        assert_eq!(set.is_palindrome(), Some(false));
    }

    #[test]
    fn test_non_integer_is_rejected() {
        let err = FilterSet::from_query_pairs([("min_length", "abc")]).unwrap_err();
        assert_eq!(
            err,
            FilterError::InvalidFilterValue {
                name: "min_length".to_string(),
                value: "abc".to_string(),
            }
        );

        assert!(FilterSet::from_query_pairs([("word_count", "1.5")]).is_err());
        assert!(FilterSet::from_query_pairs([("max_length", "ten")]).is_err());
    }

    #[test]
    fn test_empty_values_are_ignored() {
        let set = FilterSet::from_query_pairs([
            ("min_length", ""),
            ("contains_character", ""),
        ])
        .unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let set = FilterSet::from_query_pairs([("limit", "abc"), ("word_count", "2")]).unwrap();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_keeps_supplied_order() {
        let set = FilterSet::from_query_pairs([
            ("max_length", "5"),
            ("is_palindrome", "true"),
            ("min_length", "1"),
        ])
        .unwrap();

        let keys: Vec<_> = set.iter().map(Filter::key).collect();
        assert_eq!(keys, vec!["max_length", "is_palindrome", "min_length"]);
    }
}
