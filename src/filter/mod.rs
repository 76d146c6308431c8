//! Record filtering
//!
//! A [`FilterSet`] is a conjunction of optional clauses over the derived
//! properties of a record. Sets are built either from URL query parameters
//! or by the phrase interpreter, and applied with [`evaluate`].
//!
//! # Semantics
//!
//! - All clauses must match (AND)
//! - Clause order never changes the result
//! - At most one clause per key; setting a key again replaces it in place
//! - Serialized clause order is the order they were supplied

mod errors;
mod evaluator;
mod filter_set;
mod params;

pub use errors::{FilterError, FilterResult};
pub use evaluator::{evaluate, Evaluation};
pub use filter_set::{Filter, FilterSet};
