//! Inbound messages - what the host actor system hands to a transport

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::OutgoingMessage;

/// Identity of an actor in the host system.
///
/// Opaque to this crate; nested actors may use path-like ids such as
/// `root/worker/child` and replies are addressed by the id as given.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(String);

impl ActorId {
    pub fn new(id: impl Into<String>) -> Self {
        ActorId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActorId {
    fn from(id: &str) -> Self {
        ActorId::new(id)
    }
}

impl From<String> for ActorId {
    fn from(id: String) -> Self {
        ActorId(id)
    }
}

/// A message in flight between an actor and a destination address
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// The actor that sent the message; replies go here
    pub source: ActorId,
    /// Where the message is addressed, e.g. `https://api.example.com/users`
    pub destination: String,
    pub message: OutgoingMessage,
}

impl Envelope {
    pub fn new(
        source: impl Into<ActorId>,
        destination: impl Into<String>,
        message: OutgoingMessage,
    ) -> Self {
        Envelope {
            source: source.into(),
            destination: destination.into(),
            message,
        }
    }
}
