use serde::Serialize;
use serde_json::Value;

/// Body posted to the assistant backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssistantRequest {
    pub message: String,
    pub profile: String,
}

/// Backend answer. Only a string `reply` field is read; anything else in the
/// body is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssistantReply {
    pub reply: Option<String>,
}

impl AssistantReply {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
        }
    }

    /// Read a decoded response body. Bodies that are not objects, or carry no
    /// string `reply`, yield an answer without text.
    pub fn from_json(body: &Value) -> Self {
        Self {
            reply: body.get("reply").and_then(Value::as_str).map(str::to_owned),
        }
    }

    /// The reply text, if present and not empty.
    pub fn text(&self) -> Option<&str> {
        self.reply.as_deref().filter(|text| !text.is_empty())
    }
}
