//! HTTP client wrapper - executes built requests and normalizes responses

use std::collections::BTreeMap;

use hyper::ext::ReasonPhrase;
use reqwest::header::HeaderMap;
use reqwest::redirect::Policy;
use serde_json::Value;

use crate::config::FetchConfig;
use crate::constants::HEADER_VALUE_SEPARATOR;
use crate::error::{FetchError, TransportError};
use crate::messages::{FetchReply, FetchResponse};
use crate::models::{HttpMethod, RedirectMode};
use crate::request::BuiltRequest;

/// Create an HTTP client from the given configuration.
///
/// No request timeout is set; a call that never completes never replies.
/// reqwest fixes the redirect policy per client, so each [`RedirectMode`]
/// gets its own.
pub fn create_client(
    config: &FetchConfig,
    mode: RedirectMode,
) -> Result<reqwest::Client, TransportError> {
    let redirect = match mode {
        RedirectMode::Follow if config.max_redirects == 0 => Policy::none(),
        RedirectMode::Follow => Policy::limited(config.max_redirects),
        RedirectMode::Manual => Policy::none(),
        RedirectMode::Error => Policy::custom(|attempt| {
            let status = attempt.status();
            attempt.error(format!("redirect ({}) refused by message options", status))
        }),
    };

    let client = reqwest::Client::builder()
        .user_agent(config.user_agent.as_str())
        .danger_accept_invalid_certs(config.accept_invalid_certs)
        .redirect(redirect)
        .build()?;
    Ok(client)
}

/// One client per redirect mode, sharing a configuration
#[derive(Clone, Debug)]
pub struct ClientSet {
    follow: reqwest::Client,
    manual: reqwest::Client,
    error: reqwest::Client,
}

impl ClientSet {
    pub fn new(config: &FetchConfig) -> Result<Self, TransportError> {
        Ok(ClientSet {
            follow: create_client(config, RedirectMode::Follow)?,
            manual: create_client(config, RedirectMode::Manual)?,
            error: create_client(config, RedirectMode::Error)?,
        })
    }

    pub fn for_mode(&self, mode: RedirectMode) -> &reqwest::Client {
        match mode {
            RedirectMode::Follow => &self.follow,
            RedirectMode::Manual => &self.manual,
            RedirectMode::Error => &self.error,
        }
    }
}

/// Turn a built request into a reqwest builder
fn prepare(
    clients: &ClientSet,
    request: &BuiltRequest,
) -> Result<reqwest::RequestBuilder, FetchError> {
    let method = request_method(&request.method)?;
    let client = clients.for_mode(request.redirect);
    let mut req_builder = client.request(method, request.url.as_str());

    for header in request.headers.iter().filter(|h| h.enabled) {
        req_builder = req_builder.header(header.key.as_str(), header.value.as_str());
    }

    if let Some(body) = &request.body {
        req_builder = req_builder.body(body.clone());
    }

    Ok(req_builder)
}

/// Standard methods match in any case; anything else is sent verbatim as an
/// extension method as long as it is a valid token.
fn request_method(raw: &str) -> Result<reqwest::Method, FetchError> {
    if let Ok(method) = raw.parse::<HttpMethod>() {
        return Ok(method.into());
    }
    reqwest::Method::from_bytes(raw.as_bytes())
        .map_err(|_| FetchError::InvalidMethod(raw.to_string()))
}

/// Execute a request and settle it into a reply.
///
/// `source_address` is the destination the calling actor addressed, echoed
/// back in the response.
pub async fn execute_request(
    clients: &ClientSet,
    request: &BuiltRequest,
    source_address: &str,
) -> FetchReply {
    match fetch(clients, request, source_address).await {
        Ok(response) => FetchReply::Respond(response),
        Err(error) => FetchReply::reject(error),
    }
}

async fn fetch(
    clients: &ClientSet,
    request: &BuiltRequest,
    source_address: &str,
) -> Result<FetchResponse, FetchError> {
    let resp = prepare(clients, request)?
        .send()
        .await
        .map_err(FetchError::from_send)?;

    let status = resp.status();
    let status_text = reason_phrase(&resp);
    let final_url = resp.url().to_string();
    let headers = flatten_headers(resp.headers());

    let bytes = resp
        .bytes()
        .await
        .map_err(|e| FetchError::Body(e.to_string()))?;

    Ok(FetchResponse {
        source_address: source_address.to_string(),
        body: parse_body(&bytes),
        ok: status.is_success(),
        status: status.as_u16(),
        status_text,
        final_url,
        headers,
    })
}

/// The server's own reason phrase if it sent a non-standard one, otherwise
/// the canonical phrase for the status code
fn reason_phrase(resp: &reqwest::Response) -> String {
    match resp.extensions().get::<ReasonPhrase>() {
        Some(phrase) => String::from_utf8_lossy(phrase.as_bytes()).into_owned(),
        None => resp
            .status()
            .canonical_reason()
            .unwrap_or_default()
            .to_string(),
    }
}

/// JSON if it parses, text otherwise
pub(crate) fn parse_body(bytes: &[u8]) -> Value {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(json) => json,
        Err(e) => {
            tracing::debug!(error = %e, len = bytes.len(), "Body is not JSON, keeping text");
            Value::String(String::from_utf8_lossy(bytes).into_owned())
        }
    }
}

/// One entry per header name; repeated headers are joined
pub(crate) fn flatten_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut flat: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes());
        flat.entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(HEADER_VALUE_SEPARATOR);
                existing.push_str(&value);
            })
            .or_insert_with(|| value.into_owned());
    }
    flat
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderValue, CONTENT_TYPE, SET_COOKIE};
    use serde_json::json;

    #[test]
    fn test_parse_body_prefers_json() {
        assert_eq!(parse_body(br#"{"reversed":[3,2,1]}"#), json!({ "reversed": [3, 2, 1] }));
        assert_eq!(parse_body(b"42"), json!(42));
    }

    #[test]
    fn test_parse_body_falls_back_to_text() {
        assert_eq!(parse_body(b"MAJOR TOM"), json!("MAJOR TOM"));
        assert_eq!(parse_body(b""), json!(""));
    }

    #[test]
    fn test_flatten_headers_joins_repeats() {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        headers.append(SET_COOKIE, HeaderValue::from_static("a=1"));
        headers.append(SET_COOKIE, HeaderValue::from_static("b=2"));

        let flat = flatten_headers(&headers);
        assert_eq!(flat.len(), 2);
        assert_eq!(flat["content-type"], "text/plain");
        assert_eq!(flat["set-cookie"], "a=1, b=2");
    }

    #[test]
    fn test_client_set_with_defaults() {
        let clients = ClientSet::new(&FetchConfig::default());
        assert!(clients.is_ok());
    }

    #[test]
    fn test_request_method() {
        assert_eq!(request_method("get").unwrap(), reqwest::Method::GET);
        assert_eq!(request_method("Delete").unwrap(), reqwest::Method::DELETE);
        assert_eq!(request_method("PROPFIND").unwrap().as_str(), "PROPFIND");
        assert_eq!(
            request_method(""),
            Err(FetchError::InvalidMethod(String::new()))
        );
    }

    #[tokio::test]
    async fn test_invalid_method_token_is_rejected_without_sending() {
        let clients = ClientSet::new(&FetchConfig::default()).unwrap();
        let request = BuiltRequest {
            url: "http://127.0.0.1:9/".to_string(),
            method: "BAD METHOD".to_string(),
            body: None,
            headers: Vec::new(),
            redirect: RedirectMode::Follow,
        };

        let reply = execute_request(&clients, &request, "http://127.0.0.1:9/").await;
        assert_eq!(
            reply.error(),
            Some(&FetchError::InvalidMethod("BAD METHOD".to_string()))
        );
    }
}
