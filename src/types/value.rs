use serde_json::Value;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single scalar stat value as it appears in a CSV cell
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum StatValue {
    Integer(i64),
    /// Non-negative integers above `i64::MAX`
    Unsigned(u64),
    Float(f64),
    Text(String),
    Boolean(bool),
    Null,
}

impl StatValue {
    /// Convert a JSON value into a stat value.
    ///
    /// Returns `None` for arrays and objects, which have no single-cell form.
    /// Integers above `i64::MAX` keep their exact digits as `Unsigned`.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Null => Some(StatValue::Null),
            Value::Bool(b) => Some(StatValue::Boolean(*b)),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(StatValue::Integer(i))
                } else if let Some(u) = n.as_u64() {
                    Some(StatValue::Unsigned(u))
                } else {
                    n.as_f64().map(StatValue::Float)
                }
            }
            Value::String(s) => Some(StatValue::Text(s.clone())),
            Value::Array(_) | Value::Object(_) => None,
        }
    }
}

/// CSV cell text. Floats always carry a decimal point so that `1.0` and `1`
/// stay distinguishable; null is an empty cell.
impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Integer(i) => write!(f, "{i}"),
            StatValue::Unsigned(u) => write!(f, "{u}"),
            StatValue::Float(x) => {
                let text = x.to_string();
                if x.is_finite() && !text.contains('.') {
                    write!(f, "{text}.0")
                } else {
                    f.write_str(&text)
                }
            }
            StatValue::Text(s) => f.write_str(s),
            StatValue::Boolean(b) => write!(f, "{b}"),
            StatValue::Null => Ok(()),
        }
    }
}

impl From<&str> for StatValue {
    fn from(s: &str) -> Self {
        StatValue::Text(s.to_string())
    }
}
