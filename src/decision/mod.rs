//! Decision model
//!
//! The caller-facing half of the engine: the (flag, rule) identity used to
//! key forced-decision overrides, the override store itself, the gated
//! reason accumulator, and the final decision value handed back to callers.

mod context;
mod forced;
mod reasons;
mod result;

pub use context::{DecisionContext, NULL_RULE_KEY};
pub use forced::{
    ForcedDecision, ForcedDecisionStore, MemoryForcedDecisionStore, forced_variation,
};
pub use reasons::{DecisionReasons, Reason};
pub use result::Decision;
