//! Substring containment matcher

use crate::error::{MatchError, MatchResult};
use crate::matchers::Matcher;
use crate::ternary::MatchOutcome;
use crate::value::AttributeValue;

/// Matches when the condition string occurs as a contiguous substring of the
/// attribute string.
///
/// A non-string condition is a malformed rule; a non-string attribute is
/// merely inconclusive.
#[derive(Debug, Default, Clone, Copy)]
pub struct SubstringMatcher;

impl Matcher for SubstringMatcher {
    fn eval(
        &self,
        condition: &AttributeValue,
        attribute: Option<&AttributeValue>,
    ) -> MatchResult<MatchOutcome> {
        let AttributeValue::String(needle) = condition else {
            return Err(MatchError::malformed(
                "substring",
                format!("condition value must be a string, got {}", condition.kind()),
            ));
        };

        match attribute {
            Some(AttributeValue::String(haystack)) => {
                Ok(MatchOutcome::from_bool(haystack.contains(needle.as_str())))
            }
            _ => Ok(MatchOutcome::Unknown),
        }
    }
}
