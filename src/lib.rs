//! # fetch-bridge
//!
//! HTTP transport for actor systems: an actor sends a message to an
//! `http(s)://` address, the bridge performs the call and delivers the
//! response back to that actor as a message.
//!
//! ## Request encoding
//! - No body: sent as-is
//! - GET + object body: query string (`?a=1&b[0]=2`)
//! - GET + scalar body: url fragment (`#body`)
//! - Other methods: strings verbatim, everything else as JSON
//!
//! ## Replies
//! Exactly one per handled call, addressed to the envelope's source:
//! `FETCH_RESPOND` with status, headers and a JSON-or-text body, or
//! `FETCH_REJECT` when no response was obtained.

pub mod config;
pub mod constants;
pub mod error;
pub mod json;
pub mod messages;
pub mod models;
pub mod network;
pub mod query;
pub mod request;

// Re-export commonly used types
pub use config::FetchConfig;
pub use error::{FetchError, TransportError};
pub use messages::{ActorId, Delivery, Envelope, FetchReply, FetchResponse};
pub use models::{Body, Header, HttpMethod, OutgoingMessage, RedirectMode};
pub use network::{Dispatch, FetchTransport, Transport, TransportSet};
pub use request::{build_request, BuiltRequest};
