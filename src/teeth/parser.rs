//! Tooth-count parser.
//!
//! Input shapes are resolved explicitly through [`TeethInput`]; free text is
//! tried as structured (JSON) notation first and only falls back to
//! comma-separated tokens when that parse fails. A structured parse that
//! succeeds but holds a bad value is an error, never a fallthrough.
//!
//! Coercion is an integer parse: `"50.5"` and `50.5` are rejected, `50.0`
//! (an integral JSON number) is accepted. Negative values can never be a
//! tooth count and fail coercion. Zero passes the plain parser; the strict
//! [`validate_teeth`] path rejects it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{TeethSpec, ToothCount};
use crate::error::TeethFormatError;

/// Raw tooth-count input as received from a caller or a catalog file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TeethInput {
    /// A sequence of integers or integer-like strings.
    List(Vec<Value>),
    /// JSON list notation, a single JSON scalar, or comma-separated tokens.
    Text(String),
    /// Any other scalar.
    Scalar(Value),
}

impl From<Vec<ToothCount>> for TeethInput {
    fn from(teeth: Vec<ToothCount>) -> Self {
        TeethInput::List(teeth.into_iter().map(Value::from).collect())
    }
}

impl From<&[ToothCount]> for TeethInput {
    fn from(teeth: &[ToothCount]) -> Self {
        TeethInput::List(teeth.iter().copied().map(Value::from).collect())
    }
}

impl From<&str> for TeethInput {
    fn from(text: &str) -> Self {
        TeethInput::Text(text.to_string())
    }
}

impl From<String> for TeethInput {
    fn from(text: String) -> Self {
        TeethInput::Text(text)
    }
}

impl From<i64> for TeethInput {
    fn from(value: i64) -> Self {
        TeethInput::Scalar(Value::from(value))
    }
}

impl From<f64> for TeethInput {
    fn from(value: f64) -> Self {
        TeethInput::Scalar(Value::from(value))
    }
}

/// Normalize any accepted input shape into an ordered `TeethSpec`.
pub fn parse(input: &TeethInput) -> Result<TeethSpec, TeethFormatError> {
    match input {
        TeethInput::List(items) => items.iter().map(coerce_value).collect(),
        TeethInput::Text(text) => parse_text(text),
        TeethInput::Scalar(value) => Ok(vec![coerce_value(value)?]),
    }
}

/// Shorthand for parsing free text (CLI flags, form fields).
pub fn parse_str(text: &str) -> Result<TeethSpec, TeethFormatError> {
    parse_text(text)
}

/// Parse and additionally enforce component-level rules.
///
/// - at least one tooth count
/// - every tooth count > 0
/// - when `declared_speed` is given, exactly that many counts
pub fn validate_teeth(
    input: &TeethInput,
    declared_speed: Option<u32>,
) -> Result<TeethSpec, TeethFormatError> {
    let teeth = parse(input)?;
    if teeth.is_empty() {
        return Err(TeethFormatError::Empty);
    }
    if let Some(&bad) = teeth.iter().find(|&&t| t == 0) {
        return Err(TeethFormatError::NonPositive(bad));
    }
    if let Some(declared) = declared_speed {
        if teeth.len() != declared as usize {
            return Err(TeethFormatError::SpeedMismatch {
                declared,
                parsed: teeth.len(),
            });
        }
    }
    Ok(teeth)
}

/// Render tooth counts the way edit forms show them: `"50, 34"`.
pub fn format_teeth(teeth: &[ToothCount]) -> String {
    let parts: Vec<String> = teeth.iter().map(ToString::to_string).collect();
    parts.join(", ")
}

fn parse_text(text: &str) -> Result<TeethSpec, TeethFormatError> {
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Array(items)) => items.iter().map(coerce_value).collect(),
        Ok(scalar) => Ok(vec![coerce_value(&scalar)?]),
        Err(_) => parse_delimited(text),
    }
}

fn parse_delimited(text: &str) -> Result<TeethSpec, TeethFormatError> {
    text.split(',').map(coerce_token).collect()
}

fn coerce_value(value: &Value) -> Result<ToothCount, TeethFormatError> {
    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                return ToothCount::try_from(u).map_err(|_| TeethFormatError::token(n.to_string()));
            }
            if n.is_i64() {
                return Err(TeethFormatError::token(n.to_string()));
            }
            match n.as_f64() {
                Some(f) if f.fract() == 0.0 && f >= 0.0 && f <= ToothCount::MAX as f64 => {
                    Ok(f as ToothCount)
                }
                _ => Err(TeethFormatError::token(n.to_string())),
            }
        }
        Value::String(s) => coerce_token(s),
        other => Err(TeethFormatError::UnsupportedValue(other.to_string())),
    }
}

fn coerce_token(token: &str) -> Result<ToothCount, TeethFormatError> {
    let token = token.trim();
    token
        .parse::<ToothCount>()
        .map_err(|_| TeethFormatError::token(token))
}
