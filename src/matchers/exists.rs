//! Attribute presence matcher

use crate::error::MatchResult;
use crate::matchers::Matcher;
use crate::ternary::MatchOutcome;
use crate::value::AttributeValue;

/// Matches when the user carries any non-null value for the attribute.
///
/// The condition value is ignored, so this matcher never reports a malformed
/// condition. Absence is a definite no-match, not an unknown: "not present"
/// fully answers the question this matcher asks.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExistsMatcher;

impl Matcher for ExistsMatcher {
    fn eval(
        &self,
        _condition: &AttributeValue,
        attribute: Option<&AttributeValue>,
    ) -> MatchResult<MatchOutcome> {
        let present = !matches!(
            attribute,
            None | Some(AttributeValue::Json(serde_json::Value::Null))
        );
        Ok(MatchOutcome::from_bool(present))
    }
}
