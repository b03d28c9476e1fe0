//! Exact equality matcher

use crate::error::{MatchError, MatchResult};
use crate::matchers::Matcher;
use crate::ternary::MatchOutcome;
use crate::value::AttributeValue;

/// Matches when the attribute value equals the condition value.
///
/// Numbers compare numerically, strings and booleans by equality. An
/// attribute of a different runtime kind than the condition is inconclusive
/// rather than a no-match.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExactMatcher;

impl Matcher for ExactMatcher {
    fn eval(
        &self,
        condition: &AttributeValue,
        attribute: Option<&AttributeValue>,
    ) -> MatchResult<MatchOutcome> {
        let target = condition.as_finite_number();
        if target.is_none()
            && !matches!(
                condition,
                AttributeValue::Bool(_) | AttributeValue::String(_)
            )
        {
            return Err(MatchError::malformed(
                "exact",
                format!(
                    "condition value must be a string, boolean, or finite number, got {}",
                    condition.kind()
                ),
            ));
        }

        let Some(attribute) = attribute else {
            return Ok(MatchOutcome::Unknown);
        };

        if let Some(target) = target {
            return Ok(match attribute.as_finite_number() {
                Some(actual) => MatchOutcome::from_bool(actual == target),
                None => MatchOutcome::Unknown,
            });
        }

        match (condition, attribute) {
            (AttributeValue::String(target), AttributeValue::String(actual)) => {
                Ok(MatchOutcome::from_bool(target == actual))
            }
            (AttributeValue::Bool(target), AttributeValue::Bool(actual)) => {
                Ok(MatchOutcome::from_bool(target == actual))
            }
            _ => Ok(MatchOutcome::Unknown),
        }
    }
}
