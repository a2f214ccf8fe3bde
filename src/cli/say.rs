//! TUI-less "say" command

use std::error::Error;
use std::io::Write;

use crate::core::session::{ConversationSession, SendOutcome};
use crate::core::transport::AssistantTransport;

/// Ask one question in a fresh session and write the assistant's answer.
pub async fn run_say<W: Write>(
    prompt: &[String],
    transport: &dyn AssistantTransport,
    out: &mut W,
) -> Result<SendOutcome, Box<dyn Error>> {
    let prompt = prompt.join(" ");
    if prompt.trim().is_empty() {
        return Err("Usage: portfolio-assistant say <prompt>".into());
    }

    let mut session = ConversationSession::new();
    let outcome = session.send(transport, &prompt).await;

    if let Some(answer) = session
        .messages()
        .last()
        .filter(|message| message.is_assistant() && outcome != SendOutcome::Skipped)
    {
        writeln!(out, "{}", answer.content)?;
    }
    out.flush()?;

    Ok(outcome)
}
