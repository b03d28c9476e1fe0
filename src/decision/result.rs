//! Caller-facing decision value

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Outcome of evaluating a flag for one user.
///
/// Built fresh for every evaluation and handed to the caller; never shared
/// or mutated afterwards. `enabled` is true exactly when a variation was
/// resolved and that variation is active — the error path always yields a
/// disabled decision with no variation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// Key of the resolved variation, if any
    pub variation_key: Option<String>,
    /// Whether the flag is enabled for this user
    pub enabled: bool,
    /// Variable values attached to the resolved variation
    pub variables: HashMap<String, serde_json::Value>,
    /// Key of the rule that produced the variation, if any
    pub rule_key: Option<String>,
    /// Key of the evaluated flag
    pub flag_key: String,
    /// Diagnostic messages accumulated during evaluation
    pub reasons: Vec<String>,
}

impl Decision {
    /// Build a decision from resolved evaluation results, fields verbatim
    pub fn new(
        variation_key: Option<String>,
        enabled: bool,
        variables: HashMap<String, serde_json::Value>,
        rule_key: Option<String>,
        flag_key: impl Into<String>,
        reasons: Vec<String>,
    ) -> Self {
        Self {
            variation_key,
            enabled,
            variables,
            rule_key,
            flag_key: flag_key.into(),
            reasons,
        }
    }

    /// Build the decision returned when evaluation cannot proceed at all
    /// (for example, an unknown flag key): disabled, no variation, no
    /// variables, and the error message as the only reason.
    pub fn error(flag_key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            variation_key: None,
            enabled: false,
            variables: HashMap::new(),
            rule_key: None,
            flag_key: flag_key.into(),
            reasons: vec![message.into()],
        }
    }

    /// Whether a variation was resolved
    pub fn has_variation(&self) -> bool {
        self.variation_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_path_verbatim() {
        let mut variables = HashMap::new();
        variables.insert("limit".to_string(), json!(10));

        let decision = Decision::new(
            Some("v1".to_string()),
            true,
            variables.clone(),
            Some("r1".to_string()),
            "f1",
            vec!["reason".to_string()],
        );

        assert_eq!(decision.variation_key.as_deref(), Some("v1"));
        assert!(decision.enabled);
        assert_eq!(decision.variables, variables);
        assert_eq!(decision.rule_key.as_deref(), Some("r1"));
        assert_eq!(decision.flag_key, "f1");
        assert_eq!(decision.reasons, ["reason"]);
        assert!(decision.has_variation());
    }

    #[test]
    fn test_error_path() {
        let decision = Decision::error("flagA", "boom");

        assert_eq!(decision.variation_key, None);
        assert!(!decision.enabled);
        assert!(decision.variables.is_empty());
        assert_eq!(decision.rule_key, None);
        assert_eq!(decision.flag_key, "flagA");
        assert_eq!(decision.reasons, ["boom"]);
        assert!(!decision.has_variation());
    }

    #[test]
    fn test_serializes_with_variable_bag() {
        let mut variables = HashMap::new();
        variables.insert("color".to_string(), json!("blue"));

        let decision = Decision::new(
            Some("v1".to_string()),
            true,
            variables,
            None,
            "f1",
            Vec::new(),
        );

        let text = serde_json::to_string(&decision).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["variables"]["color"], json!("blue"));
        assert_eq!(parsed["variation_key"], json!("v1"));

        let round_trip: Decision = serde_json::from_str(&text).unwrap();
        assert_eq!(round_trip, decision);
    }
}
