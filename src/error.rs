//! Error types for match evaluation
//!
//! Only malformed rule definitions are fatal. Runtime attribute values that
//! cannot be compared yield [`MatchOutcome::Unknown`] instead of an error.
//!
//! [`MatchOutcome::Unknown`]: crate::ternary::MatchOutcome::Unknown

use thiserror::Error;

/// Result type for match evaluation operations
pub type MatchResult<T> = Result<T, MatchError>;

/// Match evaluation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// A condition references a match-type name with no registered strategy
    #[error("No matcher is registered for match type \"{0}\"")]
    UnknownMatchType(String),

    /// The rule definition itself is invalid for the matcher's contract
    #[error("Malformed condition for match type \"{match_type}\": {detail}")]
    MalformedCondition {
        /// Match type whose contract was violated
        match_type: String,
        /// What was wrong with the condition value
        detail: String,
    },
}

impl MatchError {
    /// Create an unknown-match-type error
    pub fn unknown_match_type(name: impl Into<String>) -> Self {
        Self::UnknownMatchType(name.into())
    }

    /// Create a malformed-condition error
    pub fn malformed(match_type: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::MalformedCondition {
            match_type: match_type.into(),
            detail: detail.into(),
        }
    }

    /// Check if this error is an unknown-match-type error
    pub fn is_unknown_match_type(&self) -> bool {
        matches!(self, Self::UnknownMatchType(_))
    }

    /// Check if this error is a malformed-condition error
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::MalformedCondition { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_match_type() {
        let error = MatchError::unknown_match_type("qux");
        assert!(error.is_unknown_match_type());
        assert!(!error.is_malformed());
        assert_eq!(
            error.to_string(),
            "No matcher is registered for match type \"qux\""
        );
    }

    #[test]
    fn test_malformed_condition() {
        let error = MatchError::malformed("substring", "condition value must be a string");
        assert!(error.is_malformed());
        assert!(!error.is_unknown_match_type());
        assert!(error.to_string().contains("substring"));
        assert!(error.to_string().contains("must be a string"));
    }
}
