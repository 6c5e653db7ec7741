use once_cell::sync::Lazy;
use regex::Regex;

use crate::executor::value::{number_to_string, FieldValue};

static DECIMAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)$").expect("decimal pattern")
});

static DECIMAL_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:Infinity|(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?)").expect("decimal prefix pattern")
});

static RADIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^0(?:([xX])([0-9a-fA-F]+)|([oO])([0-7]+)|([bB])([01]+))$").expect("radix pattern")
});

/// A value normalised for comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Comparable {
    Null,
    Number(f64),
    Text(String),
}

impl Comparable {
    /// Text form used when a number meets a string.
    pub fn render(&self) -> String {
        match self {
            Comparable::Null => "null".into(),
            Comparable::Number(n) => number_to_string(*n),
            Comparable::Text(s) => s.clone(),
        }
    }
}

pub struct Coercion;

impl Coercion {
    /// Normalises a row value. Absent stays absent, `Null` stays `Null`.
    pub fn coerce(value: Option<&FieldValue>) -> Option<Comparable> {
        value.map(|v| match v {
            FieldValue::Null => Comparable::Null,
            FieldValue::Number(n) => Comparable::Number(*n),
            FieldValue::Text(s) => Self::coerce_text(s),
        })
    }

    /// Strips one layer of matching quotes, then reads the rest as a number
    /// when it is wholly numeric. Quoting never forces a string comparison.
    pub fn coerce_text(raw: &str) -> Comparable {
        let unquoted = Self::unquote(raw);
        match Self::parse_numeric(unquoted) {
            Some(n) => Comparable::Number(n),
            None => Comparable::Text(unquoted.to_string()),
        }
    }

    pub fn unquote(raw: &str) -> &str {
        let quoted = (raw.starts_with('\'') && raw.ends_with('\''))
            || (raw.starts_with('"') && raw.ends_with('"'));
        match (quoted, raw.len()) {
            (false, _) => raw,
            (true, 1) => "",
            (true, len) => &raw[1..len - 1],
        }
    }

    /// Permissive numeric-string test. Surrounding whitespace is ignored and
    /// a blank string is never numeric.
    pub fn parse_numeric(text: &str) -> Option<f64> {
        let t = text.trim();
        if t.is_empty() {
            return None;
        }
        if DECIMAL.is_match(t) {
            return t.parse::<f64>().ok();
        }
        let caps = RADIX.captures(t)?;
        let (digits, radix) = if let Some(d) = caps.get(2) {
            (d.as_str(), 16)
        } else if let Some(d) = caps.get(4) {
            (d.as_str(), 8)
        } else {
            (caps.get(6)?.as_str(), 2)
        };
        u128::from_str_radix(digits, radix).ok().map(|n| n as f64)
    }

    /// Leading-prefix float parse used by aggregates: `"12abc"` is 12,
    /// anything without a numeric prefix is NaN.
    pub fn parse_float_prefix(value: Option<&FieldValue>) -> f64 {
        match value {
            Some(FieldValue::Number(n)) => *n,
            Some(FieldValue::Text(s)) => DECIMAL_PREFIX
                .find(s.trim_start())
                .and_then(|m| m.as_str().parse::<f64>().ok())
                .unwrap_or(f64::NAN),
            Some(FieldValue::Null) | None => f64::NAN,
        }
    }
}
