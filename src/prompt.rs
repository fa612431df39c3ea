//! Prompt templates wrapped around every chat message.

/// Messages that get the greeting template instead of a question template.
pub const GREETINGS: [&str; 6] = [
    "hi",
    "hello",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
];

pub const GREETING_INSTRUCTION: &str = "You are a friendly AI assistant. \
Greet the user briefly (1 sentence) and mention you answer questions in concise form. \
User said: ";

const EN_INSTRUCTION: &str = "You are a knowledgeable AI assistant. \
Answer the user's question in no more than two clear, direct sentences.";

const HI_INSTRUCTION: &str = "आप एक ज्ञानपूर्ण AI सहायक हैं। \
उपयोगकर्ता के प्रश्न का उत्तर अधिकतम दो संक्षिप्त वाक्यों में दें।";

const ES_INSTRUCTION: &str = "Eres un asistente de IA bien informado. \
Responde la pregunta del usuario en no más de dos frases claras.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Spanish,
}

impl Language {
    /// Unknown codes resolve to English.
    pub fn from_code(code: &str) -> Self {
        match code {
            "hi" => Self::Hindi,
            "es" => Self::Spanish,
            _ => Self::English,
        }
    }

    pub fn instruction(self) -> &'static str {
        match self {
            Self::English => EN_INSTRUCTION,
            Self::Hindi => HI_INSTRUCTION,
            Self::Spanish => ES_INSTRUCTION,
        }
    }
}

pub fn is_greeting(message: &str) -> bool {
    let normalized = message.trim().to_lowercase();
    GREETINGS.contains(&normalized.as_str())
}

/// Builds the single prompt string sent to the inference server.
///
/// The user's message is embedded as received, without trimming.
pub fn build_prompt(message: &str, lang: &str) -> String {
    if is_greeting(message) {
        return format!("{GREETING_INSTRUCTION}{message}");
    }

    let instruction = Language::from_code(lang).instruction();
    format!("{instruction}\nUser question: {message}")
}
