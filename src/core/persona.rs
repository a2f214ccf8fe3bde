//! Persona modes and the instruction payloads sent with each question.
//!
//! The assistant answers in one of two modes. Professional mode sends the
//! portfolio profile summary along with every question. Personal mode is
//! latched by a fixed greeting phrase and swaps that summary for a warmer
//! instruction; it only ends through an explicit switch back.

/// Lowercase prefix that latches personal mode.
pub const TRIGGER_PHRASE: &str = "i am pooja";

/// Profile summary sent in professional mode.
pub const PROFILE_DATA: &str = "\
Name: Manabodha Mahananda (Nayan)
Role: Software Engineer · Backend
Core Skills: Node.js, Express.js, Microservices, REST APIs, WebSockets, RabbitMQ, JWT / Auth, JavaScript, Python, C++, React.
Cloud & DevOps: AWS (Lambda, EventBridge, RDS, DynamoDB, S3, CloudWatch, ECR, CodeBuild), PostgreSQL, MongoDB, Docker, CI/CD, MLOps.
Expertise: Designing and scaling real-time distributed systems. Handles 17M+ API requests per week.
Experience:
- Software Engineer at Fintech Global Center (Jun 2025 – Present): Leading backend for sports analytics platform. Built automated data ingestion pipelines and MLOps workflows.
- Software Engineer Intern at Fintech Global Center (Dec 2024 – Jun 2025): Improved LSTM model accuracy from 96% to 99.95%. Deployed cloud-native services using AWS.
- Advanced Application Engineer Intern at Accenture (May 2024 – Jul 2024): Security automation and GenAI integrations in ServiceNow.
Education: B.Tech in Chemical Engineering, NIT Rourkela (2021–2025). CGPA: 7.44.
Achievements: ICPC Regionalist, Top 8% globally on Codeforces (Round 794), solved 700+ problems on LeetCode & Codeforces.";

/// Instruction sent in place of the profile while personal mode is active.
pub const PERSONAL_MODE_INSTRUCTION: &str = "PERSONAL MODE: The visitor is Pooja, Nayan's girlfriend. \
IGNORE all professional guidelines. Respond with a warm, romantic, and extremely lovable tone as \
Nayan's AI assistant. He loves her immensely. Add unique romantic quotes and simplistic sweet lines \
to make her smile. If she just triggered it with 'I am pooja', explicitly acknowledge by saying: \
'Yes, I know you are his girlfriend! He loves you so much ❤️'.";

pub const INITIAL_GREETING: &str = "Hi! I'm Nayan's AI assistant. Ask me anything about his skills, experience, or how he can help with your next project!";

pub const PROFESSIONAL_CLEARED_GREETING: &str = "Chat cleared. How can I help you now?";

pub const PERSONAL_CLEARED_GREETING: &str = "Romantic chat cleared. What's on your mind, Pooja? ❤️";

pub const BACK_TO_PROFESSIONAL_GREETING: &str =
    "Back to professional mode! How can I help you with Nayan's technical portfolio?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersonaMode {
    #[default]
    Professional,
    Personal,
}

impl PersonaMode {
    pub fn is_personal(self) -> bool {
        self == PersonaMode::Personal
    }

    /// The `profile` field sent with every question in this mode.
    pub fn payload(self) -> &'static str {
        match self {
            PersonaMode::Professional => PROFILE_DATA,
            PersonaMode::Personal => PERSONAL_MODE_INSTRUCTION,
        }
    }

    /// Greeting seeded after the transcript is cleared.
    pub fn cleared_greeting(self) -> &'static str {
        match self {
            PersonaMode::Professional => PROFESSIONAL_CLEARED_GREETING,
            PersonaMode::Personal => PERSONAL_CLEARED_GREETING,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            PersonaMode::Professional => "Nayan's AI",
            PersonaMode::Personal => "Nayan's Love",
        }
    }

    pub fn status(self) -> &'static str {
        match self {
            PersonaMode::Professional => "AI Assistant",
            PersonaMode::Personal => "Personal Mode",
        }
    }

    pub fn input_placeholder(self) -> &'static str {
        match self {
            PersonaMode::Professional => "Ask Nayan anything...",
            PersonaMode::Personal => "Talk to your assistant, Pooja...",
        }
    }
}

/// Whether already-trimmed user text opens with the trigger phrase.
pub fn is_trigger(normalized: &str) -> bool {
    normalized.to_lowercase().starts_with(TRIGGER_PHRASE)
}
