//! Match strategies
//!
//! This module provides the comparison strategies bound to match-type names:
//!
//! - **Exact**: equality over strings, booleans, and numbers
//! - **Exists**: attribute presence check
//! - **Substring**: contiguous substring containment
//! - **Numeric**: `gt` / `ge` / `lt` / `le` orderings
//! - **Semver**: version comparisons with partial-precision targets
//! - **Legacy**: string-form equality for conditions without a match type

mod exact;
mod exists;
mod legacy;
mod numeric;
mod semver;
mod substring;

pub use exact::ExactMatcher;
pub use exists::ExistsMatcher;
pub use legacy::LegacyMatcher;
pub use numeric::{GeMatcher, GtMatcher, LeMatcher, LtMatcher};
pub use semver::{
    SemverEqMatcher, SemverGeMatcher, SemverGtMatcher, SemverLeMatcher, SemverLtMatcher,
};
pub use substring::SubstringMatcher;

use crate::error::MatchResult;
use crate::ternary::MatchOutcome;
use crate::value::AttributeValue;

/// Comparison strategy bound to a match-type name.
///
/// Implementations are stateless and side-effect-free; a single instance is
/// shared across all evaluations and may be invoked concurrently without
/// restriction.
///
/// `attribute` is `None` when the user carries no value for the condition's
/// attribute key. A `Err` return means the *condition* is malformed — an
/// incomparable *attribute* yields `Ok(MatchOutcome::Unknown)` instead.
pub trait Matcher: Send + Sync {
    /// Evaluate one condition value against one attribute value
    fn eval(
        &self,
        condition: &AttributeValue,
        attribute: Option<&AttributeValue>,
    ) -> MatchResult<MatchOutcome>;
}

impl std::fmt::Debug for dyn Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Matcher")
    }
}
