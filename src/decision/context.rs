//! Decision context identity

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Sentinel substituted for the rule key when a context targets the flag
/// itself rather than one of its rules. Chosen so a flag-level override can
/// never collide with a real rule key.
pub const NULL_RULE_KEY: &str = "$opt-null-rule-key";

/// Identity of a (flag, rule) pair.
///
/// Forced-decision overrides are keyed by the composite form
/// `"<flag_key>-<rule_key>"`, with [`NULL_RULE_KEY`] standing in when no
/// rule key is present. Two contexts are equal exactly when their composite
/// keys are equal.
///
/// # Examples
///
/// ```
/// use commutator::DecisionContext;
///
/// let rule_level = DecisionContext::new("checkout").with_rule_key("beta-rule");
/// assert_eq!(rule_level.key(), "checkout-beta-rule");
///
/// let flag_level = DecisionContext::new("checkout");
/// assert_eq!(flag_level.key(), "checkout-$opt-null-rule-key");
/// assert_ne!(rule_level, flag_level);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionContext {
    flag_key: String,
    rule_key: Option<String>,
}

impl DecisionContext {
    /// Create a flag-level context with no rule key
    pub fn new(flag_key: impl Into<String>) -> Self {
        Self {
            flag_key: flag_key.into(),
            rule_key: None,
        }
    }

    /// Narrow this context to a specific rule
    pub fn with_rule_key(mut self, rule_key: impl Into<String>) -> Self {
        self.rule_key = Some(rule_key.into());
        self
    }

    /// The flag key
    pub fn flag_key(&self) -> &str {
        &self.flag_key
    }

    /// The rule key, if this context targets a specific rule
    pub fn rule_key(&self) -> Option<&str> {
        self.rule_key.as_deref()
    }

    /// Composite key indexing forced decisions
    pub fn key(&self) -> String {
        format!(
            "{}-{}",
            self.flag_key,
            self.rule_key.as_deref().unwrap_or(NULL_RULE_KEY)
        )
    }
}

impl PartialEq for DecisionContext {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for DecisionContext {}

impl Hash for DecisionContext {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for DecisionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
