//! Forced decisions
//!
//! An explicit variation override for a (flag, rule) pair, bypassing normal
//! rule evaluation. The store is shared process state with read-mostly
//! traffic; the in-memory implementation here is the only one the crate
//! ships, with the trait as the seam for remote-backed stores.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::decision::context::{DecisionContext, NULL_RULE_KEY};
use crate::decision::reasons::{DecisionReasons, Reason};

/// An explicit variation override. Created once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForcedDecision {
    variation_key: String,
}

impl ForcedDecision {
    /// Create a forced decision for a variation
    pub fn new(variation_key: impl Into<String>) -> Self {
        Self {
            variation_key: variation_key.into(),
        }
    }

    /// The variation this decision forces
    pub fn variation_key(&self) -> &str {
        &self.variation_key
    }
}

/// Shared store of forced decisions keyed by [`DecisionContext`].
///
/// Absence is a normal outcome, never an error. Reads vastly outnumber
/// writes, and implementations must keep `get` safe while `set`/`remove`
/// run concurrently.
pub trait ForcedDecisionStore: Send + Sync {
    /// Insert or replace the override for a context
    fn set(&self, context: DecisionContext, decision: ForcedDecision);

    /// Look up the override for a context
    fn get(&self, context: &DecisionContext) -> Option<ForcedDecision>;

    /// Remove the override for a context; true iff an entry existed
    fn remove(&self, context: &DecisionContext) -> bool;

    /// Drop every override
    fn clear(&self);

    /// Number of stored overrides
    fn len(&self) -> usize;

    /// Whether the store holds no overrides
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Implementation name, for monitoring
    fn store_type(&self) -> &'static str;
}

/// In-memory forced-decision store.
///
/// Backed by a concurrent map keyed by the composite context key. Suitable
/// for single-instance deployments or testing.
#[derive(Debug, Default)]
pub struct MemoryForcedDecisionStore {
    entries: DashMap<String, ForcedDecision>,
}

impl MemoryForcedDecisionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl ForcedDecisionStore for MemoryForcedDecisionStore {
    fn set(&self, context: DecisionContext, decision: ForcedDecision) {
        debug!(
            key = %context.key(),
            variation = decision.variation_key(),
            "Setting forced decision"
        );
        self.entries.insert(context.key(), decision);
    }

    fn get(&self, context: &DecisionContext) -> Option<ForcedDecision> {
        self.entries
            .get(&context.key())
            .map(|entry| entry.value().clone())
    }

    fn remove(&self, context: &DecisionContext) -> bool {
        let removed = self.entries.remove(&context.key()).is_some();
        debug!(key = %context.key(), removed, "Removing forced decision");
        removed
    }

    fn clear(&self) {
        self.entries.clear();
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn store_type(&self) -> &'static str {
        "memory"
    }
}

/// Resolve the forced variation for `context`, recording a reason on a hit.
///
/// The owning decision pipeline must call this before evaluating audience
/// conditions or bucketing for the same (flag, rule) pair; a returned
/// variation is used as-is and rule evaluation for that pair is skipped.
pub fn forced_variation(
    store: &dyn ForcedDecisionStore,
    context: &DecisionContext,
    reasons: &mut DecisionReasons,
) -> Option<String> {
    let decision = store.get(context)?;
    reasons.add_info(Reason::ForcedDecisionFound {
        variation_key: decision.variation_key().to_string(),
        flag_key: context.flag_key().to_string(),
        rule_key: context
            .rule_key()
            .unwrap_or(NULL_RULE_KEY)
            .to_string(),
    });
    Some(decision.variation_key().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let store = MemoryForcedDecisionStore::new();
        let context = DecisionContext::new("f1").with_rule_key("r1");
        let decision = ForcedDecision::new("v1");

        store.set(context.clone(), decision.clone());
        assert_eq!(store.get(&context), Some(decision));
        assert_eq!(store.len(), 1);

        assert!(store.remove(&context));
        assert_eq!(store.get(&context), None);
        assert!(!store.remove(&context));
        assert!(store.is_empty());
    }

    #[test]
    fn test_flag_and_rule_level_do_not_collide() {
        let store = MemoryForcedDecisionStore::new();
        store.set(DecisionContext::new("f1"), ForcedDecision::new("flag-level"));
        store.set(
            DecisionContext::new("f1").with_rule_key("r1"),
            ForcedDecision::new("rule-level"),
        );

        assert_eq!(
            store
                .get(&DecisionContext::new("f1"))
                .unwrap()
                .variation_key(),
            "flag-level"
        );
        assert_eq!(
            store
                .get(&DecisionContext::new("f1").with_rule_key("r1"))
                .unwrap()
                .variation_key(),
            "rule-level"
        );
    }

    #[test]
    fn test_set_replaces() {
        let store = MemoryForcedDecisionStore::new();
        let context = DecisionContext::new("f1");
        store.set(context.clone(), ForcedDecision::new("v1"));
        store.set(context.clone(), ForcedDecision::new("v2"));

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&context).unwrap().variation_key(), "v2");
    }

    #[test]
    fn test_clear() {
        let store = MemoryForcedDecisionStore::new();
        store.set(DecisionContext::new("f1"), ForcedDecision::new("v1"));
        store.set(DecisionContext::new("f2"), ForcedDecision::new("v2"));
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_forced_variation_records_reason() {
        let store = MemoryForcedDecisionStore::new();
        let context = DecisionContext::new("f1").with_rule_key("r1");
        store.set(context.clone(), ForcedDecision::new("v1"));

        let mut reasons = DecisionReasons::new(true);
        let variation = forced_variation(&store, &context, &mut reasons);
        assert_eq!(variation.as_deref(), Some("v1"));
        assert_eq!(
            reasons.report(),
            ["Variation \"v1\" is mapped to flag \"f1\" and rule \"r1\" in the forced decision map."]
        );
    }

    #[test]
    fn test_forced_variation_miss_is_silent() {
        let store = MemoryForcedDecisionStore::new();
        let mut reasons = DecisionReasons::new(true);
        let variation = forced_variation(&store, &DecisionContext::new("f1"), &mut reasons);
        assert_eq!(variation, None);
        assert!(reasons.is_empty());
    }
}
