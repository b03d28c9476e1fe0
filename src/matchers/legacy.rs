//! Legacy string-equality matcher

use crate::error::{MatchError, MatchResult};
use crate::matchers::Matcher;
use crate::ternary::MatchOutcome;
use crate::value::AttributeValue;

/// The fallback used when a condition carries no explicit match type.
///
/// Pre-dates typed conditions: the condition must be a string, and the
/// attribute's string form is compared for equality. An absent attribute is
/// a definite no-match under this matcher's historical contract, never an
/// unknown.
#[derive(Debug, Default, Clone, Copy)]
pub struct LegacyMatcher;

impl Matcher for LegacyMatcher {
    fn eval(
        &self,
        condition: &AttributeValue,
        attribute: Option<&AttributeValue>,
    ) -> MatchResult<MatchOutcome> {
        let AttributeValue::String(expected) = condition else {
            return Err(MatchError::malformed(
                "legacy",
                format!("condition value must be a string, got {}", condition.kind()),
            ));
        };

        Ok(match attribute {
            None | Some(AttributeValue::Json(serde_json::Value::Null)) => MatchOutcome::NoMatch,
            Some(value) => MatchOutcome::from_bool(value.to_string() == *expected),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_form_equality() {
        let condition = AttributeValue::from("42");
        assert_eq!(
            LegacyMatcher
                .eval(&condition, Some(&AttributeValue::from("42")))
                .unwrap(),
            MatchOutcome::Match
        );
        // Numbers and booleans compare through their string forms
        assert_eq!(
            LegacyMatcher
                .eval(&condition, Some(&AttributeValue::from(42.0)))
                .unwrap(),
            MatchOutcome::Match
        );

        let condition = AttributeValue::from("true");
        assert_eq!(
            LegacyMatcher
                .eval(&condition, Some(&AttributeValue::from(true)))
                .unwrap(),
            MatchOutcome::Match
        );
    }

    #[test]
    fn test_absent_attribute_no_match() {
        let condition = AttributeValue::from("42");
        assert_eq!(
            LegacyMatcher.eval(&condition, None).unwrap(),
            MatchOutcome::NoMatch
        );
        assert_eq!(
            LegacyMatcher
                .eval(
                    &condition,
                    Some(&AttributeValue::Json(serde_json::Value::Null))
                )
                .unwrap(),
            MatchOutcome::NoMatch
        );
    }

    #[test]
    fn test_non_string_condition_is_malformed() {
        let error = LegacyMatcher
            .eval(&AttributeValue::from(42.0), Some(&AttributeValue::from("42")))
            .unwrap_err();
        assert!(error.is_malformed());
    }
}
