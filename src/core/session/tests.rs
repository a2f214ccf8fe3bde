use super::*;
use crate::core::persona::{
    PERSONAL_CLEARED_GREETING, PERSONAL_MODE_INSTRUCTION, PROFESSIONAL_CLEARED_GREETING,
    PROFILE_DATA,
};
use crate::core::transport::decode_reply;
use async_trait::async_trait;
use std::sync::Mutex;

/// Answers every question with a fixed reply and records what it was asked.
struct StubTransport {
    reply: AssistantReply,
    seen: Mutex<Vec<AssistantRequest>>,
}

impl StubTransport {
    fn replying(text: &str) -> Self {
        Self::with_reply(AssistantReply::new(text))
    }

    fn with_reply(reply: AssistantReply) -> Self {
        Self {
            reply,
            seen: Mutex::new(Vec::new()),
        }
    }

    fn seen(&self) -> Vec<AssistantRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl AssistantTransport for StubTransport {
    async fn ask(&self, request: &AssistantRequest) -> Result<AssistantReply, TransportError> {
        self.seen.lock().unwrap().push(request.clone());
        Ok(self.reply.clone())
    }
}

/// Fails every request the way a backend returning an HTML error page would.
struct FailingTransport;

#[async_trait]
impl AssistantTransport for FailingTransport {
    async fn ask(&self, _request: &AssistantRequest) -> Result<AssistantReply, TransportError> {
        decode_reply("<html>502 Bad Gateway</html>")
    }
}

fn decode_failure() -> TransportError {
    decode_reply("not json").expect_err("plain text is not json")
}

#[test]
fn new_session_starts_with_greeting() {
    let session = ConversationSession::new();
    assert_eq!(session.messages().len(), 1);
    assert!(session.messages()[0].is_assistant());
    assert_eq!(session.messages()[0].content, INITIAL_GREETING);
    assert!(!session.is_pending());
    assert_eq!(session.mode(), PersonaMode::Professional);
}

#[tokio::test]
async fn stub_reply_is_appended_verbatim() {
    let mut session = ConversationSession::new();
    let transport = StubTransport::replying("X");

    let outcome = session.send(&transport, "hi").await;

    assert_eq!(outcome, SendOutcome::Replied("X".to_string()));
    let messages = session.messages();
    assert_eq!(messages.len(), 3);
    assert!(messages[1].is_user());
    assert_eq!(messages[1].content, "hi");
    assert!(messages[2].is_assistant());
    assert_eq!(messages[2].content, "X");
    assert!(!session.is_pending());
}

#[tokio::test]
async fn transcript_grows_by_two_per_accepted_send() {
    let mut session = ConversationSession::new();
    let transport = StubTransport::replying("ok");
    let inputs = ["first", "   ", "second", "", "third", "\t\n"];

    let mut accepted = 0;
    for input in inputs {
        if session.send(&transport, input).await != SendOutcome::Skipped {
            accepted += 1;
        }
    }

    assert_eq!(accepted, 3);
    assert_eq!(session.messages().len(), 1 + 2 * accepted);
    assert_eq!(transport.seen().len(), accepted);
}

#[tokio::test]
async fn blank_input_is_ignored() {
    let mut session = ConversationSession::new();
    let transport = StubTransport::replying("unused");

    assert_eq!(session.send(&transport, "").await, SendOutcome::Skipped);
    assert_eq!(session.send(&transport, "   ").await, SendOutcome::Skipped);

    assert_eq!(session.messages().len(), 1);
    assert!(!session.is_pending());
    assert!(transport.seen().is_empty());
}

#[test]
fn submit_while_pending_is_a_no_op() {
    let mut session = ConversationSession::new();

    let first = session.submit("first question").expect("accepted");
    assert!(session.is_pending());
    let snapshot = session.messages().to_vec();

    assert!(session.submit("second question").is_none());
    assert_eq!(session.messages(), snapshot.as_slice());
    assert_eq!(session.in_flight(), Some(first.id));

    session.resolve(first.id, Ok(AssistantReply::new("answer")));
    assert_eq!(session.messages().len(), 3);
    assert!(!session.is_pending());
}

#[test]
fn submit_trims_text_before_recording() {
    let mut session = ConversationSession::new();
    let outbound = session.submit("  what do you build?  ").expect("accepted");

    assert_eq!(outbound.body.message, "what do you build?");
    assert_eq!(session.messages()[1].content, "what do you build?");
}

#[test]
fn professional_questions_carry_profile_summary() {
    let mut session = ConversationSession::new();
    let outbound = session.submit("What are your core skills?").expect("accepted");
    assert_eq!(outbound.body.profile, PROFILE_DATA);
}

#[tokio::test]
async fn trigger_latches_personal_mode_across_sends() {
    let mut session = ConversationSession::new();
    let transport = StubTransport::replying("sweet reply");

    session.send(&transport, "I am Pooja, hello").await;
    assert!(session.is_persona_active());

    session.send(&transport, "what is the weather like?").await;
    session.send(&transport, "tell me about his projects").await;
    assert!(session.is_persona_active());

    let seen = transport.seen();
    assert_eq!(seen.len(), 3);
    assert!(seen
        .iter()
        .all(|request| request.profile == PERSONAL_MODE_INSTRUCTION));

    session.toggle_persona();
    assert!(!session.is_persona_active());
}

#[test]
fn triggering_question_itself_uses_personal_payload() {
    let mut session = ConversationSession::new();
    let outbound = session.submit("i AM pooja").expect("accepted");
    assert_eq!(outbound.body.profile, PERSONAL_MODE_INSTRUCTION);
}

#[test]
fn trigger_phrase_mid_sentence_does_not_latch() {
    let mut session = ConversationSession::new();
    session.submit("hello, i am pooja").expect("accepted");
    assert!(!session.is_persona_active());
}

#[tokio::test]
async fn transport_failure_appends_apology_and_clears_pending() {
    let mut session = ConversationSession::new();

    let outcome = session.send(&FailingTransport, "hi").await;

    assert_eq!(outcome, SendOutcome::Failed);
    let messages = session.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].content, "hi");
    assert_eq!(messages[2].content, TRANSPORT_APOLOGY);
    assert!(!session.is_pending());
}

#[tokio::test]
async fn session_stays_usable_after_failure() {
    let mut session = ConversationSession::new();
    session.send(&FailingTransport, "first").await;

    let transport = StubTransport::replying("recovered");
    let outcome = session.send(&transport, "second").await;

    assert_eq!(outcome, SendOutcome::Replied("recovered".to_string()));
    assert_eq!(session.messages().len(), 5);
}

#[tokio::test]
async fn missing_or_empty_reply_uses_fallback() {
    for reply in [AssistantReply::default(), AssistantReply::new("")] {
        let mut session = ConversationSession::new();
        let transport = StubTransport::with_reply(reply);

        let outcome = session.send(&transport, "hi").await;

        assert_eq!(
            outcome,
            SendOutcome::Replied(EMPTY_REPLY_FALLBACK.to_string())
        );
        assert_eq!(session.messages()[2].content, EMPTY_REPLY_FALLBACK);
    }
}

#[test]
fn decoded_body_shapes_pick_fallback_or_apology() {
    let cases = [
        (r#"["x"]"#, EMPTY_REPLY_FALLBACK),
        (r#""hello""#, EMPTY_REPLY_FALLBACK),
        ("42", EMPTY_REPLY_FALLBACK),
        (r#"{"error":"boom"}"#, EMPTY_REPLY_FALLBACK),
        ("null", TRANSPORT_APOLOGY),
        ("<html></html>", TRANSPORT_APOLOGY),
    ];
    for (body, expected) in cases {
        let mut session = ConversationSession::new();
        let outbound = session.submit("hi").expect("accepted");
        assert_eq!(
            session.resolve(outbound.id, decode_reply(body)),
            Some(expected),
            "{body}"
        );
    }
}

#[test]
fn resolve_ignores_unknown_request_ids() {
    let mut session = ConversationSession::new();
    let outbound = session.submit("question").expect("accepted");

    assert!(session
        .resolve(outbound.id + 1, Ok(AssistantReply::new("stray")))
        .is_none());
    assert!(session.is_pending());
    assert_eq!(session.messages().len(), 2);

    assert_eq!(
        session.resolve(outbound.id, Err(decode_failure())),
        Some(TRANSPORT_APOLOGY)
    );
    assert!(session
        .resolve(outbound.id, Ok(AssistantReply::new("late")))
        .is_none());
    assert_eq!(session.messages().len(), 3);
}

#[test]
fn request_ids_are_unique_per_submit() {
    let mut session = ConversationSession::new();
    let first = session.submit("one").expect("accepted");
    session.resolve(first.id, Ok(AssistantReply::new("a")));
    let second = session.submit("two").expect("accepted");
    assert_ne!(first.id, second.id);
}

#[test]
fn reset_reseeds_professional_greeting() {
    let mut session = ConversationSession::new();
    let outbound = session.submit("hello").expect("accepted");
    session.resolve(outbound.id, Ok(AssistantReply::new("hi")));

    session.reset();

    assert_eq!(session.messages().len(), 1);
    assert_eq!(session.messages()[0].content, PROFESSIONAL_CLEARED_GREETING);
    assert_eq!(session.mode(), PersonaMode::Professional);
}

#[test]
fn reset_in_personal_mode_keeps_mode_and_uses_romantic_greeting() {
    let mut session = ConversationSession::new();
    let outbound = session.submit("I am Pooja").expect("accepted");
    session.resolve(outbound.id, Ok(AssistantReply::new("hi")));

    session.reset();

    assert_eq!(session.messages().len(), 1);
    assert_eq!(session.messages()[0].content, PERSONAL_CLEARED_GREETING);
    assert!(session.is_persona_active());
}

#[test]
fn reset_does_not_clear_pending_request() {
    let mut session = ConversationSession::new();
    let outbound = session.submit("slow question").expect("accepted");

    session.reset();
    assert!(session.is_pending());
    assert_eq!(session.messages().len(), 1);

    session.resolve(outbound.id, Ok(AssistantReply::new("late answer")));
    assert!(!session.is_pending());
    assert_eq!(session.messages().len(), 2);
    assert_eq!(session.messages()[1].content, "late answer");
}

#[test]
fn toggle_persona_is_idempotent() {
    let mut session = ConversationSession::new();
    session.submit("I am Pooja").expect("accepted");

    session.toggle_persona();
    session.toggle_persona();

    assert_eq!(session.mode(), PersonaMode::Professional);
    assert_eq!(session.messages().len(), 1);
    assert_eq!(session.messages()[0].content, BACK_TO_PROFESSIONAL_GREETING);
}

#[test]
fn toggle_persona_keeps_pending_request() {
    let mut session = ConversationSession::new();
    let outbound = session.submit("I am Pooja").expect("accepted");

    session.toggle_persona();

    assert_eq!(session.in_flight(), Some(outbound.id));
}
