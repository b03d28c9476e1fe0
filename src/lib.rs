//! Targeting-Rule Evaluation for Commutator
//!
//! Decision core for feature targeting: pluggable comparison strategies
//! decide whether a user attribute satisfies a condition, and a decision
//! model aggregates the outcome into a flag/variation assignment, optionally
//! overridden by forced decisions.
//!
//! # Features
//!
//! - 🎯 **Match Strategies** - exact, exists, substring, numeric, and semver comparisons
//! - 🧩 **Pluggable Registry** - register custom matchers at runtime
//! - ❓ **Ternary Outcomes** - "cannot evaluate" is distinct from "no match"
//! - 📌 **Forced Decisions** - per-(flag, rule) variation overrides
//! - 📝 **Decision Reasons** - opt-in human-readable evaluation trace
//!
//! # Quick Start
//!
//! ```
//! use commutator::{AttributeValue, MatchOutcome, MatchRegistry};
//!
//! let registry = MatchRegistry::new();
//!
//! let outcome = registry
//!     .evaluate(
//!         Some("gt"),
//!         &AttributeValue::from(21.0),
//!         Some(&AttributeValue::from(30.0)),
//!     )
//!     .unwrap();
//! assert_eq!(outcome, MatchOutcome::Match);
//!
//! // An attribute the matcher cannot compare is inconclusive, not an error
//! let outcome = registry
//!     .evaluate(
//!         Some("gt"),
//!         &AttributeValue::from(21.0),
//!         Some(&AttributeValue::from("thirty")),
//!     )
//!     .unwrap();
//! assert_eq!(outcome, MatchOutcome::Unknown);
//! ```
//!
//! # Custom Matchers
//!
//! ```
//! use commutator::{
//!     AttributeValue, MatchOutcome, MatchRegistry, MatchResult, Matcher,
//! };
//!
//! struct CaseInsensitiveEq;
//!
//! impl Matcher for CaseInsensitiveEq {
//!     fn eval(
//!         &self,
//!         condition: &AttributeValue,
//!         attribute: Option<&AttributeValue>,
//!     ) -> MatchResult<MatchOutcome> {
//!         match (condition.as_str(), attribute.and_then(|a| a.as_str())) {
//!             (Some(c), Some(a)) => Ok(MatchOutcome::from_bool(c.eq_ignore_ascii_case(a))),
//!             _ => Ok(MatchOutcome::Unknown),
//!         }
//!     }
//! }
//!
//! let registry = MatchRegistry::new();
//! registry.register("ieq", CaseInsensitiveEq);
//!
//! let outcome = registry
//!     .evaluate(
//!         Some("ieq"),
//!         &AttributeValue::from("Chrome"),
//!         Some(&AttributeValue::from("chrome")),
//!     )
//!     .unwrap();
//! assert_eq!(outcome, MatchOutcome::Match);
//! ```
//!
//! # Forced Decisions
//!
//! ```
//! use commutator::{
//!     DecisionContext, DecisionReasons, ForcedDecision, ForcedDecisionStore,
//!     MemoryForcedDecisionStore, forced_variation,
//! };
//!
//! let store = MemoryForcedDecisionStore::new();
//! let context = DecisionContext::new("checkout").with_rule_key("beta-rule");
//! store.set(context.clone(), ForcedDecision::new("treatment"));
//!
//! // The pipeline consults the store before evaluating the rule
//! let mut reasons = DecisionReasons::disabled();
//! let variation = forced_variation(&store, &context, &mut reasons);
//! assert_eq!(variation.as_deref(), Some("treatment"));
//! ```

pub mod config;
pub mod decision;
pub mod error;
pub mod matchers;
pub mod registry;
pub mod ternary;
pub mod value;

pub use config::DecideOptions;
pub use decision::{
    Decision, DecisionContext, DecisionReasons, ForcedDecision, ForcedDecisionStore,
    MemoryForcedDecisionStore, NULL_RULE_KEY, Reason, forced_variation,
};
pub use error::{MatchError, MatchResult};
pub use matchers::Matcher;
pub use registry::{LEGACY_MATCH_TYPE, MatchRegistry};
pub use ternary::MatchOutcome;
pub use value::AttributeValue;
