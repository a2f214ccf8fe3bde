//! The conversation behind the chat widget.
//!
//! [`ConversationSession`] owns the transcript, the persona latch and the
//! in-flight guard. Sending is split in two halves so the UI loop can keep
//! ownership while the network call runs elsewhere:
//!
//! - [`ConversationSession::submit`] validates the text, records the user
//!   message, picks the persona payload and marks the request as pending.
//! - [`ConversationSession::resolve`] records the assistant's answer (or a
//!   fallback) and clears the pending guard.
//!
//! [`ConversationSession::send`] runs both halves against a transport for
//! callers that can simply await the answer.

use crate::api::{AssistantReply, AssistantRequest};
use crate::core::constants::{EMPTY_REPLY_FALLBACK, TRANSPORT_APOLOGY};
use crate::core::message::Message;
use crate::core::persona::{self, PersonaMode, BACK_TO_PROFESSIONAL_GREETING, INITIAL_GREETING};
use crate::core::transport::{AssistantTransport, TransportError};

/// Identifies one accepted `submit`. Results carrying a stale id are ignored.
pub type RequestId = u64;

/// A question that has been recorded and is ready to go out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundRequest {
    pub id: RequestId,
    pub body: AssistantRequest,
}

/// What `send` did with the text it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    /// Empty input, or a request was already in flight.
    Skipped,
    /// The backend answered; carries the assistant text that was appended.
    Replied(String),
    /// The request failed and the apology was appended.
    Failed,
}

#[derive(Debug, Clone)]
pub struct ConversationSession {
    transcript: Vec<Message>,
    mode: PersonaMode,
    in_flight: Option<RequestId>,
    next_request_id: RequestId,
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationSession {
    /// A fresh session seeded with the initial greeting.
    pub fn new() -> Self {
        Self {
            transcript: vec![Message::assistant(INITIAL_GREETING)],
            mode: PersonaMode::Professional,
            in_flight: None,
            next_request_id: 1,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.transcript
    }

    pub fn mode(&self) -> PersonaMode {
        self.mode
    }

    pub fn is_persona_active(&self) -> bool {
        self.mode.is_personal()
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    /// Record a user question and return the request to dispatch.
    ///
    /// Returns `None` without touching any state when the text is blank or a
    /// request is already pending.
    pub fn submit(&mut self, text: &str) -> Option<OutboundRequest> {
        let normalized = text.trim();
        if normalized.is_empty() || self.is_pending() {
            return None;
        }

        if !self.mode.is_personal() && persona::is_trigger(normalized) {
            tracing::info!("personal mode activated");
            self.mode = PersonaMode::Personal;
        }

        self.transcript.push(Message::user(normalized));

        let id = self.next_request_id;
        self.next_request_id += 1;
        self.in_flight = Some(id);

        Some(OutboundRequest {
            id,
            body: AssistantRequest {
                message: normalized.to_string(),
                profile: self.mode.payload().to_string(),
            },
        })
    }

    /// Record the result of the in-flight request and clear the guard.
    ///
    /// Returns the assistant text that was appended, or `None` when `id` is not
    /// the request currently in flight.
    pub fn resolve(
        &mut self,
        id: RequestId,
        outcome: Result<AssistantReply, TransportError>,
    ) -> Option<&str> {
        if self.in_flight != Some(id) {
            tracing::debug!(request_id = id, "ignoring result for a request that is not in flight");
            return None;
        }
        self.in_flight = None;

        let content = match outcome {
            Ok(reply) => reply.text().unwrap_or(EMPTY_REPLY_FALLBACK).to_string(),
            Err(err) => {
                tracing::warn!(request_id = id, error = %err, "assistant request failed");
                TRANSPORT_APOLOGY.to_string()
            }
        };

        self.transcript.push(Message::assistant(content));
        self.transcript.last().map(|message| message.content.as_str())
    }

    /// Submit `text`, wait for the transport and record the answer.
    pub async fn send<T>(&mut self, transport: &T, text: &str) -> SendOutcome
    where
        T: AssistantTransport + ?Sized,
    {
        let Some(outbound) = self.submit(text) else {
            return SendOutcome::Skipped;
        };

        tracing::debug!(request_id = outbound.id, "sending question to assistant");
        let result = transport.ask(&outbound.body).await;
        let failed = result.is_err();
        let appended = self.resolve(outbound.id, result).map(str::to_string);

        match appended {
            Some(_) if failed => SendOutcome::Failed,
            Some(text) => SendOutcome::Replied(text),
            None => SendOutcome::Skipped,
        }
    }

    /// Clear the chat, keeping the current mode and any pending request.
    pub fn reset(&mut self) {
        self.reseed(self.mode.cleared_greeting());
    }

    /// Leave personal mode and start over with a professional greeting.
    pub fn toggle_persona(&mut self) {
        if self.mode.is_personal() {
            tracing::info!("returning to professional mode");
        }
        self.mode = PersonaMode::Professional;
        self.reseed(BACK_TO_PROFESSIONAL_GREETING);
    }

    fn reseed(&mut self, greeting: &str) {
        self.transcript.clear();
        self.transcript.push(Message::assistant(greeting));
    }
}

#[cfg(test)]
mod tests;
