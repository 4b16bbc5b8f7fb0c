//! Outbound messages - what a transport delivers back to the calling actor

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::FetchError;
use crate::messages::envelope::ActorId;

/// A normalized HTTP response
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchResponse {
    /// The address the call was made to
    pub source_address: String,
    /// Parsed JSON when the payload is valid JSON, otherwise the raw text
    pub body: Value,
    pub ok: bool,
    pub status: u16,
    pub status_text: String,
    /// Url after redirects
    pub final_url: String,
    pub headers: BTreeMap<String, String>,
}

/// Reply for one handled call
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FetchReply {
    #[serde(rename = "FETCH_RESPOND")]
    Respond(FetchResponse),
    #[serde(rename = "FETCH_REJECT")]
    Reject { error: FetchError },
}

impl FetchReply {
    pub fn reject(error: FetchError) -> Self {
        FetchReply::Reject { error }
    }

    pub fn response(&self) -> Option<&FetchResponse> {
        match self {
            FetchReply::Respond(response) => Some(response),
            FetchReply::Reject { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchReply::Respond(_) => None,
            FetchReply::Reject { error } => Some(error),
        }
    }
}

/// A reply paired with the actor it is addressed to
#[derive(Clone, Debug, PartialEq)]
pub struct Delivery {
    pub target: ActorId,
    pub reply: FetchReply,
}
