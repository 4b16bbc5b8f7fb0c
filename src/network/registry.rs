//! Transport selection on the host side

use std::sync::Arc;

use crate::error::TransportError;
use crate::messages::Envelope;
use crate::network::transport::Transport;

/// Registered transports, tried in registration order
#[derive(Clone, Default)]
pub struct TransportSet {
    transports: Vec<Arc<dyn Transport>>,
}

impl TransportSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, transport: impl Transport + 'static) -> &mut Self {
        self.transports.push(Arc::new(transport));
        self
    }

    pub fn with(mut self, transport: impl Transport + 'static) -> Self {
        self.register(transport);
        self
    }

    pub fn len(&self) -> usize {
        self.transports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transports.is_empty()
    }

    /// First transport that accepts `envelope`
    pub fn select(&self, envelope: &Envelope) -> Option<&Arc<dyn Transport>> {
        self.transports.iter().find(|t| t.matches(envelope))
    }

    /// Hand `envelope` to the first matching transport and return its name
    pub fn route(&self, envelope: Envelope) -> Result<&'static str, TransportError> {
        let Some(transport) = self.select(&envelope) else {
            tracing::warn!(destination = %envelope.destination, "No transport for destination");
            return Err(TransportError::NoTransport {
                destination: envelope.destination,
            });
        };

        let name = transport.name();
        tracing::debug!(transport = name, destination = %envelope.destination, "Routing envelope");
        transport.handle(envelope);
        Ok(name)
    }
}
