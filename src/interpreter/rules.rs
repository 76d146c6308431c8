//! Trigger rules for phrase interpretation

use super::errors::{InterpretError, InterpretResult};
use crate::analyzer::{trim_value, words};
use crate::filter::Filter;

/// A trigger substring and the extractor run when it is present.
///
/// Extractors receive the lower-cased phrase.
#[derive(Clone, Copy)]
pub struct PhraseRule {
    pub trigger: &'static str,
    pub extract: fn(&str) -> InterpretResult<Filter>,
}

impl std::fmt::Debug for PhraseRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhraseRule")
            .field("trigger", &self.trigger)
            .finish()
    }
}

/// Built-in rules, in evaluation order
pub const RULES: &[PhraseRule] = &[
    PhraseRule {
        trigger: "palindromic",
        extract: palindromic,
    },
    PhraseRule {
        trigger: "single word",
        extract: single_word,
    },
    PhraseRule {
        trigger: LONGER_THAN,
        extract: longer_than,
    },
    PhraseRule {
        trigger: "containing the letter",
        extract: containing_letter,
    },
];

const LONGER_THAN: &str = "longer than";

fn palindromic(_: &str) -> InterpretResult<Filter> {
    Ok(Filter::IsPalindrome(true))
}

fn single_word(_: &str) -> InterpretResult<Filter> {
    Ok(Filter::WordCount(1))
}

/// First token after the first "longer than", as N + 1
fn longer_than(phrase: &str) -> InterpretResult<Filter> {
    let unparseable = || InterpretError::Unparseable("length".to_string());

    let (_, rest) = phrase.split_once(LONGER_THAN).ok_or_else(unparseable)?;
    let n: i64 = words(rest)
        .next()
        .and_then(|token| token.parse().ok())
        .ok_or_else(unparseable)?;

    n.checked_add(1).map(Filter::MinLength).ok_or_else(unparseable)
}

/// First char after the last "letter"; anything after it is ignored
fn containing_letter(phrase: &str) -> InterpretResult<Filter> {
    phrase
        .rsplit_once("letter")
        .and_then(|(_, rest)| trim_value(rest).chars().next())
        .map(|c| Filter::ContainsCharacter(c.to_string()))
        .ok_or_else(|| InterpretError::Unparseable("letter".to_string()))
}
