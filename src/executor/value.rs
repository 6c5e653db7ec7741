use std::fmt::Display;

use serde::{Serialize, Serializer};
use serde_json::Value;

/// A raw field value as it travels between stages.
///
/// Values read from storage are always `Text`; `Number` is produced by the
/// aggregation engine and may hold NaN or an infinity.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn text(value: &str) -> Self { Self::Text(value.to_string()) }

    pub fn is_null(&self) -> bool { matches!(self, Self::Null) }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// JSON rendering. Non-finite numbers have no JSON form and become `null`.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::Number(n) => Self::json_number(*n),
            Self::Text(s) => Value::String(s.clone()),
        }
    }

    fn json_number(n: f64) -> Value {
        if n.fract() == 0.0 && n.abs() < 9.0e15 {
            return Value::Number(serde_json::Number::from(n as i64));
        }
        serde_json::Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}

impl Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Number(n) => write!(f, "{}", number_to_string(*n)),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self { Self::text(value) }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self { Self::Text(value) }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self { Self::Number(value) }
}

impl From<usize> for FieldValue {
    fn from(value: usize) -> Self { Self::Number(value as f64) }
}

/// Renders a number the way a dynamic runtime prints it: integral values
/// without a fraction, `NaN` and `Infinity` spelled out.
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".into();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity".into() } else { "-Infinity".into() };
    }
    if n.fract() == 0.0 && n.abs() < 1e21 {
        return format!("{}", n as i128);
    }
    format!("{n}")
}
