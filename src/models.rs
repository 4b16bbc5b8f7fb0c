use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// HTTP Method enum
#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    GET,
    POST,
    PUT,
    PATCH,
    DELETE,
    HEAD,
    OPTIONS,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::GET => "GET",
            HttpMethod::POST => "POST",
            HttpMethod::PUT => "PUT",
            HttpMethod::PATCH => "PATCH",
            HttpMethod::DELETE => "DELETE",
            HttpMethod::HEAD => "HEAD",
            HttpMethod::OPTIONS => "OPTIONS",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Method string that names none of the supported methods
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownMethod(pub String);

impl FromStr for HttpMethod {
    type Err = UnknownMethod;

    /// Case-insensitive, so `"get"` and `"GET"` are the same method
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let method = match s.to_ascii_uppercase().as_str() {
            "GET" => HttpMethod::GET,
            "POST" => HttpMethod::POST,
            "PUT" => HttpMethod::PUT,
            "PATCH" => HttpMethod::PATCH,
            "DELETE" => HttpMethod::DELETE,
            "HEAD" => HttpMethod::HEAD,
            "OPTIONS" => HttpMethod::OPTIONS,
            _ => return Err(UnknownMethod(s.to_string())),
        };
        Ok(method)
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::GET => reqwest::Method::GET,
            HttpMethod::POST => reqwest::Method::POST,
            HttpMethod::PUT => reqwest::Method::PUT,
            HttpMethod::PATCH => reqwest::Method::PATCH,
            HttpMethod::DELETE => reqwest::Method::DELETE,
            HttpMethod::HEAD => reqwest::Method::HEAD,
            HttpMethod::OPTIONS => reqwest::Method::OPTIONS,
        }
    }
}

fn enabled_by_default() -> bool {
    true
}

/// HTTP Header
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub key: String,
    pub value: String,
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

impl Header {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Header {
            key: key.into(),
            value: value.into(),
            enabled: true,
        }
    }
}

/// Payload of an outgoing message.
///
/// Deserializes untagged: a JSON string becomes [`Body::Text`], any other
/// JSON value becomes [`Body::Json`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Body {
    Text(String),
    Json(Value),
}

impl Body {
    /// The body as a plain string, if it is one
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Body::Text(text) => Some(text),
            Body::Json(Value::String(text)) => Some(text),
            Body::Json(_) => None,
        }
    }

    /// Objects and arrays; these are query-encoded on GET
    pub fn is_structured(&self) -> bool {
        matches!(self, Body::Json(Value::Object(_) | Value::Array(_)))
    }

    /// Whether the body counts as present at all.
    ///
    /// Empty strings, `null`, `false` and zero are treated like a missing
    /// body, so a message carrying one of them is sent without a payload.
    pub fn is_present(&self) -> bool {
        if let Some(text) = self.as_text() {
            return !text.is_empty();
        }
        match self {
            Body::Json(Value::Null) | Body::Json(Value::Bool(false)) => false,
            Body::Json(Value::Number(n)) => n.as_f64() != Some(0.0),
            _ => true,
        }
    }
}

impl From<&str> for Body {
    fn from(text: &str) -> Self {
        Body::Text(text.to_string())
    }
}

impl From<String> for Body {
    fn from(text: String) -> Self {
        Body::Text(text)
    }
}

impl From<Value> for Body {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => Body::Text(text),
            other => Body::Json(other),
        }
    }
}

/// What to do when the server answers with a redirect
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RedirectMode {
    /// Follow up to the configured limit
    #[default]
    Follow,
    /// Hand the 3xx response back as-is
    Manual,
    /// Reject the call
    Error,
}

impl RedirectMode {
    pub fn is_follow(&self) -> bool {
        *self == RedirectMode::Follow
    }
}

/// A message an actor sends to an HTTP address.
///
/// `headers` and `redirect` are the request options carried through to the
/// call; unknown fields are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutgoingMessage {
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Body>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<Header>,
    #[serde(default, skip_serializing_if = "RedirectMode::is_follow")]
    pub redirect: RedirectMode,
}

impl OutgoingMessage {
    pub fn new(method: impl Into<String>) -> Self {
        OutgoingMessage {
            method: method.into(),
            body: None,
            headers: Vec::new(),
            redirect: RedirectMode::Follow,
        }
    }

    pub fn get() -> Self {
        Self::new(HttpMethod::GET.as_str())
    }

    pub fn post(body: impl Into<Body>) -> Self {
        Self::new(HttpMethod::POST.as_str()).with_body(body)
    }

    pub fn put(body: impl Into<Body>) -> Self {
        Self::new(HttpMethod::PUT.as_str()).with_body(body)
    }

    pub fn with_body(mut self, body: impl Into<Body>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push(Header::new(key, value));
        self
    }

    pub fn with_redirect(mut self, redirect: RedirectMode) -> Self {
        self.redirect = redirect;
        self
    }

    /// True when the method string names GET, in any case
    pub fn is_get(&self) -> bool {
        self.method.parse::<HttpMethod>() == Ok(HttpMethod::GET)
    }
}
