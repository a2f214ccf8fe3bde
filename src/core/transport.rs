use std::error::Error as StdError;
use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::api::{AssistantReply, AssistantRequest};
use crate::core::constants::CHAT_PATH;
use crate::utils::url::construct_api_url;

/// Errors from a single round trip to the assistant backend.
#[derive(Debug)]
pub enum TransportError {
    /// The request could not be sent or its body could not be read.
    Request(reqwest::Error),

    /// The response body was not JSON.
    Decode {
        /// Raw body returned by the backend.
        body: String,
        /// The JSON deserialization error.
        source: serde_json::Error,
    },

    /// The response body was the JSON literal `null`.
    NullBody,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Request(source) => write!(f, "request failed: {source}"),
            TransportError::Decode { body, source } => {
                write!(f, "invalid response body ({source}): {}", body.trim())
            }
            TransportError::NullBody => write!(f, "response body was null"),
        }
    }
}

impl StdError for TransportError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            TransportError::Request(source) => Some(source),
            TransportError::Decode { source, .. } => Some(source),
            TransportError::NullBody => None,
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(value: reqwest::Error) -> Self {
        TransportError::Request(value)
    }
}

/// Anything that can answer a question on behalf of the assistant backend.
#[async_trait]
pub trait AssistantTransport: Send + Sync {
    async fn ask(&self, request: &AssistantRequest) -> Result<AssistantReply, TransportError>;
}

/// Posts questions as JSON to `<endpoint>/chat`.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    chat_url: String,
}

impl HttpTransport {
    pub fn new(endpoint: &str) -> Result<Self, TransportError> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, endpoint))
    }

    pub fn with_client(client: Client, endpoint: &str) -> Self {
        Self {
            client,
            chat_url: construct_api_url(endpoint, CHAT_PATH),
        }
    }

    pub fn chat_url(&self) -> &str {
        &self.chat_url
    }
}

/// Decode a response body. The HTTP status is not consulted: error pages
/// that still carry JSON are read like any other answer. Any JSON value other
/// than `null` is accepted; only a string `reply` field becomes reply text.
pub(crate) fn decode_reply(body: &str) -> Result<AssistantReply, TransportError> {
    let value: Value = serde_json::from_str(body).map_err(|source| TransportError::Decode {
        body: body.to_string(),
        source,
    })?;
    if value.is_null() {
        return Err(TransportError::NullBody);
    }
    Ok(AssistantReply::from_json(&value))
}

#[async_trait]
impl AssistantTransport for HttpTransport {
    async fn ask(&self, request: &AssistantRequest) -> Result<AssistantReply, TransportError> {
        let response = self
            .client
            .post(&self.chat_url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            tracing::debug!(%status, "assistant backend returned a non-success status");
        }
        decode_reply(&body)
    }
}
