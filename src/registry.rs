//! Match-type registry and evaluation surface
//!
//! Maps match-type names to strategies and dispatches condition evaluation.
//! Each registry is an independent instance, so processes hosting several
//! configurations give each one its own registry rather than sharing a
//! process-wide table.

use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, trace};

use crate::error::{MatchError, MatchResult};
use crate::matchers::{
    ExactMatcher, ExistsMatcher, GeMatcher, GtMatcher, LeMatcher, LegacyMatcher, LtMatcher,
    Matcher, SemverEqMatcher, SemverGeMatcher, SemverGtMatcher, SemverLeMatcher, SemverLtMatcher,
    SubstringMatcher,
};
use crate::ternary::MatchOutcome;
use crate::value::AttributeValue;

/// Match-type name substituted when a condition carries no explicit match
/// type (or an empty one).
pub const LEGACY_MATCH_TYPE: &str = "legacy";

/// Registry of match strategies keyed by match-type name.
///
/// Lookups and registrations are safe to run concurrently; matcher instances
/// themselves are stateless and shared.
///
/// # Examples
///
/// ```
/// use commutator::{AttributeValue, MatchOutcome, MatchRegistry};
///
/// let registry = MatchRegistry::new();
/// let outcome = registry
///     .evaluate(
///         Some("substring"),
///         &AttributeValue::from("abc"),
///         Some(&AttributeValue::from("xabcy")),
///     )
///     .unwrap();
/// assert_eq!(outcome, MatchOutcome::Match);
/// ```
pub struct MatchRegistry {
    matchers: DashMap<String, Arc<dyn Matcher>>,
}

impl MatchRegistry {
    /// Create a registry with every standard match type pre-registered:
    /// `exact`, `exists`, `substring`, `gt`, `ge`, `lt`, `le`, the
    /// `semver_*` family, and `legacy`.
    pub fn new() -> Self {
        let registry = Self::empty();
        registry.register("exact", ExactMatcher);
        registry.register("exists", ExistsMatcher);
        registry.register("substring", SubstringMatcher);
        registry.register("gt", GtMatcher);
        registry.register("ge", GeMatcher);
        registry.register("lt", LtMatcher);
        registry.register("le", LeMatcher);
        registry.register("semver_eq", SemverEqMatcher);
        registry.register("semver_gt", SemverGtMatcher);
        registry.register("semver_ge", SemverGeMatcher);
        registry.register("semver_lt", SemverLtMatcher);
        registry.register("semver_le", SemverLeMatcher);
        registry.register(LEGACY_MATCH_TYPE, LegacyMatcher);
        registry
    }

    /// Create a registry with no matchers registered, for callers composing
    /// their own operator set
    pub fn empty() -> Self {
        Self {
            matchers: DashMap::new(),
        }
    }

    /// Register a matcher under `name`, replacing any existing registration
    pub fn register(&self, name: impl Into<String>, matcher: impl Matcher + 'static) {
        let name = name.into();
        debug!(name = %name, "Registering matcher");
        self.matchers.insert(name, Arc::new(matcher));
    }

    /// Resolve a match-type name to its strategy.
    ///
    /// A `None` or empty name resolves to [`LEGACY_MATCH_TYPE`] first. An
    /// unresolvable name fails with [`MatchError::UnknownMatchType`].
    pub fn lookup(&self, name: Option<&str>) -> MatchResult<Arc<dyn Matcher>> {
        let resolved = match name {
            Some(name) if !name.is_empty() => name,
            _ => LEGACY_MATCH_TYPE,
        };
        self.matchers
            .get(resolved)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| MatchError::unknown_match_type(resolved))
    }

    /// Evaluate one condition against one attribute value.
    ///
    /// Resolves `match_type` and returns exactly the matcher's result: a
    /// ternary outcome, or an error for an unregistered match type or a
    /// malformed condition value.
    pub fn evaluate(
        &self,
        match_type: Option<&str>,
        condition: &AttributeValue,
        attribute: Option<&AttributeValue>,
    ) -> MatchResult<MatchOutcome> {
        let matcher = self.lookup(match_type)?;
        let outcome = matcher.eval(condition, attribute)?;
        trace!(
            match_type = match_type.unwrap_or(LEGACY_MATCH_TYPE),
            outcome = %outcome,
            "Evaluated condition"
        );
        Ok(outcome)
    }

    /// Names currently registered, in no particular order
    pub fn registered_names(&self) -> Vec<String> {
        self.matchers.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Number of registered matchers
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Whether the registry has no matchers
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

impl Default for MatchRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MatchRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchRegistry")
            .field("len", &self.len())
            .finish()
    }
}
