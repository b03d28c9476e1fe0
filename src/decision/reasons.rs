//! Decision reasons
//!
//! Human-readable trace of why a decision was reached, collected only when
//! the caller opts in. Every reason is also emitted through `tracing`, so
//! operators see problems even with collection off.

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::DecideOptions;

/// Reason-code templates for decision diagnostics
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Reason {
    /// The requested flag key does not exist in the configuration
    #[error("No flag was found for key \"{0}\".")]
    FlagKeyInvalid(String),

    /// A forced decision was applied instead of rule evaluation
    #[error(
        "Variation \"{variation_key}\" is mapped to flag \"{flag_key}\" and rule \"{rule_key}\" in the forced decision map."
    )]
    ForcedDecisionFound {
        /// The forced variation
        variation_key: String,
        /// The flag the override applies to
        flag_key: String,
        /// The rule the override applies to, or the null-rule sentinel
        rule_key: String,
    },

    /// A forced decision referenced a variation that no longer exists
    #[error(
        "Invalid variation is mapped to flag \"{flag_key}\" and rule \"{rule_key}\" in the forced decision map."
    )]
    ForcedDecisionInvalid {
        /// The flag the override applies to
        flag_key: String,
        /// The rule the override applies to, or the null-rule sentinel
        rule_key: String,
    },

    /// An attribute value could not be compared by the condition's matcher
    #[error(
        "Audience condition with match type \"{match_type}\" could not be evaluated for the given attribute value."
    )]
    AttributeFormatInvalid {
        /// The match type whose comparison was inconclusive
        match_type: String,
    },

    /// A condition referenced a match type with no registered strategy
    #[error("Audience condition uses an unknown match type \"{0}\".")]
    UnknownMatchTypeUsed(String),

    /// A variation was resolved for the flag
    #[error("Variation \"{variation_key}\" was resolved for flag \"{flag_key}\".")]
    VariationResolved {
        /// The resolved variation
        variation_key: String,
        /// The flag it was resolved for
        flag_key: String,
    },

    /// Pre-formatted message from a caller-owned pipeline stage
    #[error("{0}")]
    Custom(String),
}

/// Ordered, optionally-suppressed accumulator of decision diagnostics.
///
/// Created fresh for each user-evaluation call. With collection disabled
/// (the default), `add_error`/`add_info` only log and the report stays
/// empty.
#[derive(Debug, Clone, Default)]
pub struct DecisionReasons {
    include_reasons: bool,
    messages: Vec<String>,
}

impl DecisionReasons {
    /// Create an accumulator; messages are kept only if `include_reasons`
    pub fn new(include_reasons: bool) -> Self {
        Self {
            include_reasons,
            messages: Vec::new(),
        }
    }

    /// Create an accumulator honoring the caller's options
    pub fn from_options(options: &DecideOptions) -> Self {
        Self::new(options.include_reasons)
    }

    /// Create an accumulator that discards everything
    pub fn disabled() -> Self {
        Self::new(false)
    }

    /// Record an error-grade reason
    pub fn add_error(&mut self, reason: Reason) {
        warn!(reason = %reason, "Decision error");
        if self.include_reasons {
            self.messages.push(reason.to_string());
        }
    }

    /// Record an info-grade reason
    pub fn add_info(&mut self, reason: Reason) {
        debug!(reason = %reason, "Decision info");
        if self.include_reasons {
            self.messages.push(reason.to_string());
        }
    }

    /// Record a pre-formatted message
    pub fn push(&mut self, message: impl Into<String>) {
        if self.include_reasons {
            self.messages.push(message.into());
        }
    }

    /// Append another accumulator's messages, preserving order
    pub fn merge(&mut self, other: DecisionReasons) {
        self.messages.extend(other.messages);
    }

    /// Accumulated messages in insertion order
    pub fn report(&self) -> &[String] {
        &self.messages
    }

    /// Consume the accumulator, yielding its messages
    pub fn into_report(self) -> Vec<String> {
        self.messages
    }

    /// Number of collected messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether nothing was collected
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
