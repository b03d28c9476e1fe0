//! Semantic-version matchers
//!
//! `semver_eq`, `semver_gt`, `semver_ge`, `semver_lt`, and `semver_le`
//! compare the attribute (the actual version) against the condition (the
//! target version). Targets may be partial: a target of `"2.1"` compares
//! only major and minor, so every `"2.1.x"` attribute is equal to it. Full
//! three-part targets use semver precedence, where a pre-release sorts
//! before its release.

use std::cmp::Ordering;

use semver::{Prerelease, Version};

use crate::error::{MatchError, MatchResult};
use crate::matchers::Matcher;
use crate::ternary::MatchOutcome;
use crate::value::AttributeValue;

/// Parse a version that may omit minor and patch components.
///
/// Returns the zero-padded version and how many numeric components the text
/// specified. Build metadata is ignored; anything else unparseable is `None`.
fn parse_partial(text: &str) -> Option<(Version, usize)> {
    let text = text.split_once('+').map_or(text, |(core, _)| core);
    let (core, pre) = match text.split_once('-') {
        Some((core, pre)) => (core, Some(pre)),
        None => (text, None),
    };

    let mut parts = [0u64; 3];
    let mut specified = 0;
    for (index, piece) in core.split('.').enumerate() {
        if index >= 3 {
            return None;
        }
        parts[index] = piece.parse().ok()?;
        specified = index + 1;
    }

    let mut version = Version::new(parts[0], parts[1], parts[2]);
    if let Some(pre) = pre {
        version.pre = Prerelease::new(pre).ok()?;
    }
    Some((version, specified))
}

/// Compare `actual` against `target` at the precision the target specified
fn compare_at_precision(actual: &Version, target: &Version, specified: usize) -> Ordering {
    if specified < 3 {
        let actual_parts = [actual.major, actual.minor];
        let target_parts = [target.major, target.minor];
        actual_parts[..specified].cmp(&target_parts[..specified])
    } else {
        actual.cmp_precedence(target)
    }
}

/// Three-way ordering of (attribute version, condition version); `None` when
/// the attribute side is absent, non-string, or unparseable.
fn order(
    match_type: &'static str,
    condition: &AttributeValue,
    attribute: Option<&AttributeValue>,
) -> MatchResult<Option<Ordering>> {
    let Some(target_text) = condition.as_str() else {
        return Err(MatchError::malformed(
            match_type,
            format!("condition value must be a version string, got {}", condition.kind()),
        ));
    };
    let Some((target, specified)) = parse_partial(target_text) else {
        return Err(MatchError::malformed(
            match_type,
            format!("condition value \"{}\" is not a valid version", target_text),
        ));
    };

    let Some(actual_text) = attribute.and_then(|value| value.as_str()) else {
        return Ok(None);
    };
    let Some((actual, _)) = parse_partial(actual_text) else {
        return Ok(None);
    };

    Ok(Some(compare_at_precision(&actual, &target, specified)))
}

/// Matches when the attribute version equals the condition version
#[derive(Debug, Default, Clone, Copy)]
pub struct SemverEqMatcher;

impl Matcher for SemverEqMatcher {
    fn eval(
        &self,
        condition: &AttributeValue,
        attribute: Option<&AttributeValue>,
    ) -> MatchResult<MatchOutcome> {
        Ok(ternary(order("semver_eq", condition, attribute)?, |o| {
            o == Ordering::Equal
        }))
    }
}

/// Matches when the attribute version is greater than the condition version
#[derive(Debug, Default, Clone, Copy)]
pub struct SemverGtMatcher;

impl Matcher for SemverGtMatcher {
    fn eval(
        &self,
        condition: &AttributeValue,
        attribute: Option<&AttributeValue>,
    ) -> MatchResult<MatchOutcome> {
        Ok(ternary(order("semver_gt", condition, attribute)?, |o| {
            o == Ordering::Greater
        }))
    }
}

/// Matches when the attribute version is at least the condition version
#[derive(Debug, Default, Clone, Copy)]
pub struct SemverGeMatcher;

impl Matcher for SemverGeMatcher {
    fn eval(
        &self,
        condition: &AttributeValue,
        attribute: Option<&AttributeValue>,
    ) -> MatchResult<MatchOutcome> {
        Ok(ternary(order("semver_ge", condition, attribute)?, |o| {
            o != Ordering::Less
        }))
    }
}

/// Matches when the attribute version is less than the condition version
#[derive(Debug, Default, Clone, Copy)]
pub struct SemverLtMatcher;

impl Matcher for SemverLtMatcher {
    fn eval(
        &self,
        condition: &AttributeValue,
        attribute: Option<&AttributeValue>,
    ) -> MatchResult<MatchOutcome> {
        Ok(ternary(order("semver_lt", condition, attribute)?, |o| {
            o == Ordering::Less
        }))
    }
}

/// Matches when the attribute version is at most the condition version
#[derive(Debug, Default, Clone, Copy)]
pub struct SemverLeMatcher;

impl Matcher for SemverLeMatcher {
    fn eval(
        &self,
        condition: &AttributeValue,
        attribute: Option<&AttributeValue>,
    ) -> MatchResult<MatchOutcome> {
        Ok(ternary(order("semver_le", condition, attribute)?, |o| {
            o != Ordering::Greater
        }))
    }
}

fn ternary(ordering: Option<Ordering>, predicate: impl Fn(Ordering) -> bool) -> MatchOutcome {
    match ordering {
        Some(ordering) => MatchOutcome::from_bool(predicate(ordering)),
        None => MatchOutcome::Unknown,
    }
}
