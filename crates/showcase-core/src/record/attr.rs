//! Typed attribute envelopes.

use serde_json::Value;

/// Envelope key tagging a string payload.
const STRING_TAG: &str = "S";
/// Envelope key tagging a numeric payload.
const NUMBER_TAG: &str = "N";
/// Envelope key tagging a boolean payload.
const BOOL_TAG: &str = "BOOL";

/// A record field value after typed envelopes have been unwrapped.
///
/// Some stores tag primitives with a one-key wrapper (`{"S": "text"}`,
/// `{"N": "42"}`, `{"BOOL": true}`). Plain JSON values pass through as
/// [`AttrValue::Raw`].
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// Payload of an `S` envelope.
    String(String),
    /// Payload of an `N` envelope, parsed.
    Number(f64),
    /// Payload of a `BOOL` envelope, coerced.
    Bool(bool),
    /// Anything that is not an envelope.
    Raw(Value),
}

impl AttrValue {
    /// Decode a field value, unwrapping a typed envelope if present.
    ///
    /// Tags are checked in the order `S`, `N`, `BOOL`; the first one
    /// present wins. An `S` envelope whose payload is not a string is
    /// passed through as its raw payload.
    pub fn decode(value: &Value) -> Self {
        let Value::Object(map) = value else {
            return Self::Raw(value.clone());
        };

        if let Some(payload) = map.get(STRING_TAG) {
            return match payload {
                Value::String(s) => Self::String(s.clone()),
                other => Self::Raw(other.clone()),
            };
        }
        if let Some(payload) = map.get(NUMBER_TAG) {
            return Self::Number(number_of(payload));
        }
        if let Some(payload) = map.get(BOOL_TAG) {
            return Self::Bool(is_truthy(payload));
        }

        Self::Raw(value.clone())
    }

    /// Returns false for values that count as missing: null, `false`,
    /// `0`, NaN and the empty string.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::String(s) => !s.is_empty(),
            Self::Number(n) => number_is_truthy(*n),
            Self::Bool(b) => *b,
            Self::Raw(v) => is_truthy(v),
        }
    }

    /// Render the value as display text.
    pub fn to_text(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            Self::Number(n) => format_number(*n),
            Self::Bool(b) => b.to_string(),
            Self::Raw(Value::String(s)) => s.clone(),
            Self::Raw(Value::Null) => String::new(),
            Self::Raw(Value::Number(n)) => n.as_f64().map(format_number).unwrap_or_default(),
            Self::Raw(other) => other.to_string(),
        }
    }

    /// Interpret the value as a number; unparseable text yields NaN.
    pub fn to_number(&self) -> f64 {
        match self {
            Self::String(s) => parse_number(s),
            Self::Number(n) => *n,
            Self::Bool(b) => f64::from(u8::from(*b)),
            Self::Raw(v) => number_of(v),
        }
    }
}

impl From<&Value> for AttrValue {
    fn from(value: &Value) -> Self {
        Self::decode(value)
    }
}

/// Truthiness of a plain JSON value.
///
/// Arrays and objects are always truthy, even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(number_is_truthy),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn number_is_truthy(n: f64) -> bool {
    n != 0.0 && !n.is_nan()
}

fn number_of(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_number(s),
        Value::Array(_) | Value::Object(_) => f64::NAN,
    }
}

/// Parse numeric text; blank text is zero, anything else unparseable is NaN.
fn parse_number(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(n) = parse_prefixed(s) {
        return n;
    }

    // Rust accepts "inf" and "nan" spellings that are not numeric text here.
    if s.bytes().any(|b| b.is_ascii_alphabetic() && b != b'e' && b != b'E') {
        return f64::NAN;
    }

    s.parse().unwrap_or(f64::NAN)
}

/// Unsigned `0x`, `0o` and `0b` integer literals. `None` when `s` has no
/// such prefix; NaN when the digits after it are invalid.
fn parse_prefixed(s: &str) -> Option<f64> {
    let radix = match s.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };

    let digits = &s[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let value = digits.chars().try_fold(0.0_f64, |acc, c| {
        c.to_digit(radix)
            .map(|d| acc * f64::from(radix) + f64::from(d))
    });
    Some(value.unwrap_or(f64::NAN))
}

/// Format a number without a trailing `.0` for whole values.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
