//! Shared constants used across the application

/// Remote origin of the assistant backend.
pub const DEFAULT_ENDPOINT: &str = "https://portfolio-chatbot-backend-lk4h.onrender.com";

/// Path appended to the endpoint for every question.
pub const CHAT_PATH: &str = "chat";

/// Shown when the backend answers without a usable `reply`.
pub const EMPTY_REPLY_FALLBACK: &str = "I'm sorry, I couldn't process that request.";

/// Shown when the request itself fails.
pub const TRANSPORT_APOLOGY: &str =
    "Sorry, I'm having trouble connecting to my brain right now. Please try again later!";

pub const QUICK_ACTIONS: [&str; 4] = [
    "What are your core skills?",
    "Tell me about your experience.",
    "How can you help with my project?",
    "Tell me about your achievements.",
];

/// Quick actions are offered only while the transcript is shorter than this.
pub const QUICK_ACTION_TRANSCRIPT_LIMIT: usize = 3;
