//! Message types exchanged with the host actor system.
//!
//! Envelopes come in from the host; replies go back to the sending actor.

pub mod envelope;
pub mod reply;

pub use envelope::{ActorId, Envelope};
pub use reply::{Delivery, FetchReply, FetchResponse};
