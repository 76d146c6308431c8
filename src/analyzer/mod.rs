//! String analysis
//!
//! Computes the structural properties of a submitted string. Every property
//! is derived from the trimmed form of the input, which is also the form that
//! gets hashed and stored.
//!
//! # Properties
//!
//! - SHA-256 content hash (hex) of the trimmed UTF-8 bytes
//! - Character length (chars, not bytes)
//! - Case-folded palindrome check
//! - Distinct character count
//! - Separator-delimited word count
//! - Per-character frequency map
//!
//! Analysis is total: any `&str` produces a result.

mod analysis;
mod hash;
mod whitespace;

pub use analysis::{analyze, AnalysisResult, CharacterFrequency, StringProperties};
pub use whitespace::{is_separator, trim_value, words};
