//! Reply delivery - the one way replies get back into the host system

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::error::FetchError;
use crate::messages::{ActorId, Delivery, FetchReply};

/// Delivers replies to actors.
///
/// Hosts implement this over their mailbox mechanism. Every handled call
/// results in exactly one `dispatch`.
pub trait Dispatch: Send + Sync + 'static {
    fn dispatch(&self, delivery: Delivery);
}

impl Dispatch for mpsc::UnboundedSender<Delivery> {
    fn dispatch(&self, delivery: Delivery) {
        if let Err(mpsc::error::SendError(undelivered)) = self.send(delivery) {
            tracing::warn!(target_actor = %undelivered.target, "Reply dropped, host channel closed");
        }
    }
}

impl<D: Dispatch + ?Sized> Dispatch for Arc<D> {
    fn dispatch(&self, delivery: Delivery) {
        (**self).dispatch(delivery)
    }
}

/// The pending reply for one call.
///
/// Settling consumes the slot, so a call can reply at most once. A slot
/// dropped unsettled (task aborted, panicked, or torn down with its runtime)
/// replies with an `abandoned` reject instead.
pub struct ReplySlot<D: Dispatch + ?Sized> {
    target: ActorId,
    dispatcher: Arc<D>,
    settled: bool,
}

impl<D: Dispatch + ?Sized> ReplySlot<D> {
    pub fn new(target: ActorId, dispatcher: Arc<D>) -> Self {
        ReplySlot {
            target,
            dispatcher,
            settled: false,
        }
    }

    pub fn target(&self) -> &ActorId {
        &self.target
    }

    pub fn settle(mut self, reply: FetchReply) {
        self.deliver(reply);
    }

    fn deliver(&mut self, reply: FetchReply) {
        self.settled = true;
        self.dispatcher.dispatch(Delivery {
            target: self.target.clone(),
            reply,
        });
    }
}

impl<D: Dispatch + ?Sized> Drop for ReplySlot<D> {
    fn drop(&mut self) {
        if !self.settled {
            tracing::warn!(target_actor = %self.target, "Call dropped before settling");
            self.deliver(FetchReply::reject(FetchError::Abandoned(
                "call dropped before completing".to_string(),
            )));
        }
    }
}
