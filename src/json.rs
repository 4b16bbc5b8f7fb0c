//! JSON text as web clients write it
//!
//! serde_json keeps the float/integer distinction, so `1.0` prints as `1.0`.
//! Peers built on JavaScript print it as `1`; whole floats are rewritten as
//! integers before serializing so bodies and queries read the same.

use serde_json::{Number, Value};

/// Largest integer an f64 holds exactly (2^53)
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// A number's text, with whole floats written without a fraction
pub fn number_text(number: &Number) -> String {
    match whole_float(number) {
        Some(integer) => integer.to_string(),
        None => number.to_string(),
    }
}

/// Compact JSON text of `value`, with whole floats written as integers
pub fn to_text(value: &Value) -> String {
    normalize(value).to_string()
}

fn whole_float(number: &Number) -> Option<i64> {
    let float = number.as_f64().filter(|_| number.is_f64())?;
    if float.fract() == 0.0 && float.abs() < MAX_EXACT_INTEGER {
        Some(float as i64)
    } else {
        None
    }
}

fn normalize(value: &Value) -> Value {
    match value {
        Value::Number(number) => match whole_float(number) {
            Some(integer) => Value::from(integer),
            None => value.clone(),
        },
        Value::Array(items) => Value::Array(items.iter().map(normalize).collect()),
        Value::Object(map) => Value::Object(
            map.iter()
                .map(|(key, value)| (key.clone(), normalize(value)))
                .collect(),
        ),
        _ => value.clone(),
    }
}
