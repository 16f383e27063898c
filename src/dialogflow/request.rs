//! Inbound webhook request types and parameter coercion.

use serde::Deserialize;
use serde_json::{Map, Value};

/// A fulfillment webhook call from the conversation engine.
///
/// Only the session block matters to this service; stages are routed by URL,
/// so tag and page payloads are never inspected.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookRequest {
    /// Session state echoed on every turn
    #[serde(rename = "sessionInfo")]
    pub session_info: Option<SessionInfo>,
}

/// The session block of a webhook call.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionInfo {
    /// Fully qualified session name
    #[serde(default)]
    pub session: String,

    /// Accumulated session parameters
    #[serde(default)]
    pub parameters: Map<String, Value>,
}

impl SessionInfo {
    /// Alias-aware view over the session parameters.
    pub fn params(&self) -> Params<'_> {
        Params::new(&self.parameters)
    }
}

/// Borrowing accessor for session parameters.
///
/// Agent authors rename entity parameters freely, so every lookup takes a
/// list of accepted spellings and returns the first one present. Values are
/// coerced leniently: the engine serializes numbers as floats and customers
/// type numbers as text, so "10" and 10.0 both count as the integer 10.
/// Anything uncoercible is treated as absent rather than an error.
pub struct Params<'a> {
    values: &'a Map<String, Value>,
}

impl<'a> Params<'a> {
    pub fn new(values: &'a Map<String, Value>) -> Self {
        Params { values }
    }

    /// Look up a single exact key, treating JSON null as absent.
    pub fn raw(&self, name: &str) -> Option<&'a Value> {
        self.values.get(name).filter(|value| !value.is_null())
    }

    /// First alias that is present and non-null.
    pub fn first(&self, aliases: &[&str]) -> Option<&'a Value> {
        aliases.iter().find_map(|name| self.raw(name))
    }

    /// Coerce the first present alias to a non-empty string.
    pub fn string(&self, aliases: &[&str]) -> Option<String> {
        match self.first(aliases)? {
            Value::String(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        }
    }

    /// Coerce the first present alias to a finite number.
    pub fn number(&self, aliases: &[&str]) -> Option<f64> {
        number_from_value(self.first(aliases)?)
    }

    /// Coerce the first present alias to an integer.
    pub fn integer(&self, aliases: &[&str]) -> Option<i64> {
        integer_from_value(self.first(aliases)?)
    }
}

/// Coerce a parameter value to a finite number.
///
/// Accepts JSON numbers and numeric strings; empty strings, NaN and
/// infinities count as absent.
pub(crate) fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed
                .parse::<f64>()
                .ok()
                .filter(|parsed| parsed.is_finite())
        }
        _ => None,
    }
}

/// Coerce a parameter value to an integer.
///
/// Accepts integers, integral floats (the engine sends 10 as 10.0) and
/// numeric strings; anything with a fractional part counts as absent.
pub(crate) fn integer_from_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Some(int);
            }
            let float = number.as_f64()?;
            integral_to_i64(float)
        }
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return None;
            }
            if let Ok(int) = trimmed.parse::<i64>() {
                return Some(int);
            }
            integral_to_i64(trimmed.parse::<f64>().ok()?)
        }
        _ => None,
    }
}

fn integral_to_i64(float: f64) -> Option<i64> {
    if float.is_finite() && float.fract() == 0.0 {
        // `as` saturates at the i64 bounds, which is fine for ordinals
        Some(float as i64)
    } else {
        None
    }
}
