//! Request builder - maps an outgoing message onto a concrete HTTP request
//!
//! Rules, in order:
//! 1. No body: method, headers and url pass through untouched.
//! 2. GET with an object/array body: the body is query-encoded onto the url.
//! 3. GET with a scalar body: the body is appended as the url fragment.
//! 4. Any other method: string bodies pass through, everything else is
//!    serialized as JSON text.
//!
//! A GET never carries a request body.

use crate::json;
use crate::models::{Body, Header, OutgoingMessage, RedirectMode};
use crate::query;
use serde_json::Value;

/// A request ready to hand to the HTTP client
#[derive(Clone, Debug, PartialEq)]
pub struct BuiltRequest {
    pub url: String,
    pub method: String,
    pub body: Option<String>,
    pub headers: Vec<Header>,
    pub redirect: RedirectMode,
}

/// Build the request for `message` sent to `address`.
///
/// Never fails; malformed addresses are left for the HTTP client to reject.
pub fn build_request(address: &str, message: &OutgoingMessage) -> BuiltRequest {
    let mut request = BuiltRequest {
        url: address.to_string(),
        method: message.method.clone(),
        body: None,
        headers: message.headers.clone(),
        redirect: message.redirect,
    };

    let Some(body) = message.body.as_ref().filter(|body| body.is_present()) else {
        return request;
    };

    if message.is_get() {
        request.url = encode_into_url(address, body);
    } else {
        request.body = Some(body_text(body));
    }

    request
}

fn encode_into_url(address: &str, body: &Body) -> String {
    match body {
        Body::Json(value) if body.is_structured() => {
            query::append_query(address, &query::stringify(value))
        }
        _ => format!("{}#{}", address, body_text(body)),
    }
}

/// Strings verbatim, anything else as compact JSON text
fn body_text(body: &Body) -> String {
    match body {
        Body::Text(text) | Body::Json(Value::String(text)) => text.clone(),
        Body::Json(value) => json::to_text(value),
    }
}
