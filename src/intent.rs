use crate::prompt::GREETINGS;
use serde::{Deserialize, Serialize};
use std::fmt;

const DETAILED_INDICATORS: [&str; 16] = [
    "how to",
    "explain",
    "why",
    "process",
    "steps",
    "guide",
    "tutorial",
    "detailed",
    "comprehensive",
    "complete",
    "tell me about",
    "walk me through",
    "show me",
    "teach me",
    "benefits",
    "what should i do",
];

const BRIEF_INDICATORS: [&str; 11] = [
    "yes or no",
    "quickly",
    "briefly",
    "short answer",
    "simple",
    "can i",
    "is it",
    "does it",
    "will it",
    "should i",
    "what is",
];

/// Expected answer length for a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Brief,
    Detailed,
    Moderate,
}

impl Intent {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Brief => "brief",
            Self::Detailed => "detailed",
            Self::Moderate => "moderate",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyword classifier. Detailed indicators win over brief ones.
pub fn classify_intent(message: &str) -> Intent {
    let message = message.trim().to_lowercase();

    if GREETINGS.contains(&message.as_str()) || message.chars().count() <= 3 {
        return Intent::Brief;
    }

    if DETAILED_INDICATORS.iter().any(|i| message.contains(i)) {
        return Intent::Detailed;
    }

    if BRIEF_INDICATORS.iter().any(|i| message.contains(i)) {
        return Intent::Brief;
    }

    Intent::Moderate
}
