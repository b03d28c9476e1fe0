//! Runtime attribute values
//!
//! Defines the value model shared by condition values (from rule definitions)
//! and attribute values (from the user being evaluated).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest magnitude at which an `f64` still represents every integer
/// exactly (2^53). Values beyond this cannot be compared reliably and are
/// treated as non-numeric.
const MAX_NUMERIC_MAGNITUDE: f64 = 9_007_199_254_740_992.0;

/// A condition or attribute value.
///
/// Deserializes untagged, so JSON scalars map directly: `true` becomes
/// [`AttributeValue::Bool`], `42` becomes [`AttributeValue::Number`],
/// `"x"` becomes [`AttributeValue::String`], and any structured value
/// (object, array, null) becomes [`AttributeValue::Json`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Number(f64),
    String(String),
    Json(serde_json::Value),
}

impl AttributeValue {
    /// Get the boolean value, if this is a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Get the string value, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// Get the numeric value, if this is a number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Get the numeric value if it is comparable: finite and within ±2^53
    ///
    /// This is the coercion test used by every numeric comparison; values
    /// outside the range lose integer precision in an `f64`.
    pub fn as_finite_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) if value.is_finite() && value.abs() <= MAX_NUMERIC_MAGNITUDE => {
                Some(*value)
            }
            _ => None,
        }
    }

    /// Whether this value is numeric-comparable
    pub fn is_numeric(&self) -> bool {
        self.as_finite_number().is_some()
    }

    /// Runtime kind name, for diagnostics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Json(_) => "json",
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{}", value),
            Self::Number(value) => write!(f, "{}", value),
            Self::String(value) => write!(f, "{}", value),
            Self::Json(value) => write!(f, "{}", value),
        }
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<serde_json::Value> for AttributeValue {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert_eq!(AttributeValue::from(true).as_bool(), Some(true));
        assert_eq!(AttributeValue::from("abc").as_str(), Some("abc"));
        assert_eq!(AttributeValue::from(1.5).as_f64(), Some(1.5));
        assert_eq!(AttributeValue::from(true).as_str(), None);
        assert_eq!(AttributeValue::from("abc").as_f64(), None);
    }

    #[test]
    fn test_finite_number_rejects_out_of_range() {
        assert_eq!(AttributeValue::from(42.0).as_finite_number(), Some(42.0));
        assert_eq!(AttributeValue::Number(f64::NAN).as_finite_number(), None);
        assert_eq!(AttributeValue::Number(f64::INFINITY).as_finite_number(), None);
        assert_eq!(AttributeValue::Number(1e300).as_finite_number(), None);
        assert!(!AttributeValue::from("42").is_numeric());
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(AttributeValue::from(true).to_string(), "true");
        assert_eq!(AttributeValue::from(42.0).to_string(), "42");
        assert_eq!(AttributeValue::from(1.5).to_string(), "1.5");
        assert_eq!(AttributeValue::from("abc").to_string(), "abc");
    }

    #[test]
    fn test_untagged_deserialization() {
        let value: AttributeValue = serde_json::from_str("true").unwrap();
        assert_eq!(value, AttributeValue::Bool(true));

        let value: AttributeValue = serde_json::from_str("42").unwrap();
        assert_eq!(value, AttributeValue::Number(42.0));

        let value: AttributeValue = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(value, AttributeValue::String("abc".to_string()));

        let value: AttributeValue = serde_json::from_str("{\"a\": 1}").unwrap();
        assert!(matches!(value, AttributeValue::Json(_)));
    }
}
