//! Numeric ordering matchers
//!
//! `gt`, `ge`, `lt`, and `le` share one three-way comparison: the condition
//! value must be numeric-comparable (a malformed rule otherwise), while an
//! attribute that cannot be coerced to a number yields an inconclusive
//! outcome rather than an error.

use std::cmp::Ordering;

use crate::error::{MatchError, MatchResult};
use crate::matchers::Matcher;
use crate::ternary::MatchOutcome;
use crate::value::AttributeValue;

/// Three-way ordering of (attribute, condition); `None` when the attribute
/// side is not comparable.
fn order(
    match_type: &'static str,
    condition: &AttributeValue,
    attribute: Option<&AttributeValue>,
) -> MatchResult<Option<Ordering>> {
    let Some(target) = condition.as_finite_number() else {
        return Err(MatchError::malformed(
            match_type,
            format!(
                "condition value must be a finite number, got {}",
                condition.kind()
            ),
        ));
    };

    let Some(actual) = attribute.and_then(|value| value.as_finite_number()) else {
        return Ok(None);
    };

    Ok(actual.partial_cmp(&target))
}

fn outcome(ordering: Option<Ordering>, predicate: impl Fn(Ordering) -> bool) -> MatchOutcome {
    match ordering {
        Some(ordering) => MatchOutcome::from_bool(predicate(ordering)),
        None => MatchOutcome::Unknown,
    }
}

/// Matches when the attribute is strictly greater than the condition value
#[derive(Debug, Default, Clone, Copy)]
pub struct GtMatcher;

impl Matcher for GtMatcher {
    fn eval(
        &self,
        condition: &AttributeValue,
        attribute: Option<&AttributeValue>,
    ) -> MatchResult<MatchOutcome> {
        Ok(outcome(order("gt", condition, attribute)?, |ordering| {
            ordering == Ordering::Greater
        }))
    }
}

/// Matches when the attribute is greater than or equal to the condition value
#[derive(Debug, Default, Clone, Copy)]
pub struct GeMatcher;

impl Matcher for GeMatcher {
    fn eval(
        &self,
        condition: &AttributeValue,
        attribute: Option<&AttributeValue>,
    ) -> MatchResult<MatchOutcome> {
        Ok(outcome(order("ge", condition, attribute)?, |ordering| {
            ordering != Ordering::Less
        }))
    }
}

/// Matches when the attribute is strictly less than the condition value
#[derive(Debug, Default, Clone, Copy)]
pub struct LtMatcher;

impl Matcher for LtMatcher {
    fn eval(
        &self,
        condition: &AttributeValue,
        attribute: Option<&AttributeValue>,
    ) -> MatchResult<MatchOutcome> {
        Ok(outcome(order("lt", condition, attribute)?, |ordering| {
            ordering == Ordering::Less
        }))
    }
}

/// Matches when the attribute is less than or equal to the condition value
#[derive(Debug, Default, Clone, Copy)]
pub struct LeMatcher;

impl Matcher for LeMatcher {
    fn eval(
        &self,
        condition: &AttributeValue,
        attribute: Option<&AttributeValue>,
    ) -> MatchResult<MatchOutcome> {
        Ok(outcome(order("le", condition, attribute)?, |ordering| {
            ordering != Ordering::Greater
        }))
    }
}
