use chrono::{DateTime, Local};

/// Display format for message timestamps: two-digit hour and minute.
pub const TIMESTAMP_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TranscriptRole {
    User,
    Assistant,
}

/// A single transcript entry. Entries are never edited after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: TranscriptRole,
    pub content: String,
    pub timestamp: String,
}

impl TranscriptRole {
    pub fn is_user(self) -> bool {
        self == TranscriptRole::User
    }

    pub fn is_assistant(self) -> bool {
        self == TranscriptRole::Assistant
    }
}

impl Message {
    /// Create a message stamped with the current local time.
    pub fn new(role: TranscriptRole, content: impl Into<String>) -> Self {
        Self::stamped(role, content, Local::now())
    }

    pub fn stamped(role: TranscriptRole, content: impl Into<String>, at: DateTime<Local>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(TranscriptRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(TranscriptRole::Assistant, content)
    }

    pub fn is_user(&self) -> bool {
        self.role.is_user()
    }

    pub fn is_assistant(&self) -> bool {
        self.role.is_assistant()
    }
}
