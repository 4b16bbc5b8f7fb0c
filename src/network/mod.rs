//! Network layer - transports, HTTP execution and reply delivery
//!
//! The fetch transport receives envelopes addressed to HTTP urls and sends
//! back exactly one reply per envelope.

pub mod client;
pub mod dispatch;
pub mod registry;
pub mod transport;

pub use client::ClientSet;
pub use dispatch::{Dispatch, ReplySlot};
pub use registry::TransportSet;
pub use transport::{is_http_address, FetchTransport, Transport};
