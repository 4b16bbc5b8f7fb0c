//! Query-string encoding for structured GET bodies
//!
//! Follows the conventional bracket flattening used by most web stacks:
//! `{"a": {"b": 1}}` becomes `a[b]=1` and `{"a": [1, 2]}` becomes
//! `a[0]=1&a[1]=2`, with keys and values percent-encoded.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;

use crate::json;

/// Everything except the RFC 3986 unreserved set
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Encode an object or array as a query string (without the leading `?`).
///
/// Scalars have no keys to attach to and encode to an empty string.
pub fn stringify(value: &Value) -> String {
    let mut pairs = Vec::new();
    match value {
        Value::Object(map) => {
            for (key, value) in map {
                flatten(key.clone(), value, &mut pairs);
            }
        }
        Value::Array(items) => {
            for (index, value) in items.iter().enumerate() {
                flatten(index.to_string(), value, &mut pairs);
            }
        }
        _ => {}
    }
    pairs.join("&")
}

fn flatten(key: String, value: &Value, pairs: &mut Vec<String>) {
    match value {
        Value::Object(map) => {
            for (child, value) in map {
                flatten(format!("{}[{}]", key, child), value, pairs);
            }
        }
        Value::Array(items) => {
            for (index, value) in items.iter().enumerate() {
                flatten(format!("{}[{}]", key, index), value, pairs);
            }
        }
        Value::Null => pairs.push(format!("{}=", encode(&key))),
        Value::String(text) => pairs.push(format!("{}={}", encode(&key), encode(text))),
        Value::Number(number) => pairs.push(format!(
            "{}={}",
            encode(&key),
            encode(&json::number_text(number))
        )),
        scalar => pairs.push(format!("{}={}", encode(&key), encode(&scalar.to_string()))),
    }
}

fn encode(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

/// Append an encoded query to `url`, keeping any existing query and fragment.
pub fn append_query(url: &str, query: &str) -> String {
    if query.is_empty() {
        return url.to_string();
    }

    let (base, fragment) = match url.find('#') {
        Some(idx) => url.split_at(idx),
        None => (url, ""),
    };

    let separator = match base.find('?') {
        None => "?",
        Some(_) if base.ends_with('?') || base.ends_with('&') => "",
        Some(_) => "&",
    };

    format!("{}{}{}{}", base, separator, query, fragment)
}
