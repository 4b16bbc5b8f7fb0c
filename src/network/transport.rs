//! Transports - pluggable strategies for delivering envelopes
//!
//! The host picks a transport by asking each registered one whether it
//! [`matches`](Transport::matches) an envelope, then hands the envelope to
//! the first that does.

use std::sync::Arc;

use tokio::runtime::Handle;

use crate::config::FetchConfig;
use crate::constants::HTTP_PREFIXES;
use crate::error::{FetchError, TransportError};
use crate::messages::{Envelope, FetchReply};
use crate::network::client::{execute_request, ClientSet};
use crate::network::dispatch::{Dispatch, ReplySlot};
use crate::request::build_request;

pub trait Transport: Send + Sync {
    /// Short name used in logs and routing results
    fn name(&self) -> &'static str;

    /// Whether this transport can deliver `envelope`
    fn matches(&self, envelope: &Envelope) -> bool;

    /// Take ownership of `envelope` and deliver it. Must not block.
    fn handle(&self, envelope: Envelope);
}

/// True for `http://` and `https://` addresses
pub fn is_http_address(address: &str) -> bool {
    HTTP_PREFIXES.iter().any(|prefix| address.starts_with(prefix))
}

/// Transport that performs envelopes as HTTP calls.
///
/// Each handled envelope runs on its own tokio task and produces exactly one
/// reply, dispatched to the envelope's source.
pub struct FetchTransport<D: Dispatch> {
    clients: ClientSet,
    dispatcher: Arc<D>,
}

impl<D: Dispatch> FetchTransport<D> {
    pub fn new(dispatcher: D) -> Result<Self, TransportError> {
        Self::with_config(dispatcher, &FetchConfig::default())
    }

    pub fn with_config(dispatcher: D, config: &FetchConfig) -> Result<Self, TransportError> {
        Ok(Self::with_clients(ClientSet::new(config)?, dispatcher))
    }

    pub fn with_clients(clients: ClientSet, dispatcher: D) -> Self {
        FetchTransport {
            clients,
            dispatcher: Arc::new(dispatcher),
        }
    }

    /// Perform the call for `envelope` and return the reply instead of
    /// dispatching it
    pub async fn call(&self, envelope: &Envelope) -> FetchReply {
        perform(&self.clients, envelope).await
    }
}

async fn perform(clients: &ClientSet, envelope: &Envelope) -> FetchReply {
    let request = build_request(&envelope.destination, &envelope.message);
    tracing::info!(
        source = %envelope.source,
        url = %request.url,
        method = %request.method,
        "Issuing fetch"
    );

    let reply = execute_request(clients, &request, &envelope.destination).await;

    match &reply {
        FetchReply::Respond(response) => {
            tracing::info!(source = %envelope.source, status = response.status, "Fetch settled")
        }
        FetchReply::Reject { error } => {
            tracing::info!(source = %envelope.source, kind = error.kind(), %error, "Fetch rejected")
        }
    }
    reply
}

impl<D: Dispatch> Transport for FetchTransport<D> {
    fn name(&self) -> &'static str {
        "fetch"
    }

    fn matches(&self, envelope: &Envelope) -> bool {
        is_http_address(&envelope.destination)
    }

    /// Spawns onto the current tokio runtime. Outside of one the call is
    /// rejected straight away with a `runtime` error.
    fn handle(&self, envelope: Envelope) {
        let clients = self.clients.clone();
        let slot = ReplySlot::new(envelope.source.clone(), Arc::clone(&self.dispatcher));

        let runtime = match Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                tracing::warn!(source = %envelope.source, error = %e, "No tokio runtime for fetch");
                slot.settle(FetchReply::reject(FetchError::Runtime(e.to_string())));
                return;
            }
        };

        runtime.spawn(async move {
            let reply = perform(&clients, &envelope).await;
            slot.settle(reply);
        });
    }
}
