// Locale selection and the fixed bilingual copy
//
// The locale is picked once per session and every user-facing line, prompt
// placeholder and system message is read from the matching LocaleTexts table.

use std::fmt;
use std::str::FromStr;

/// Bilingual question shown before a locale exists
pub const LANGUAGE_PROMPT: &str = "Choose language -> [es = Español / en = English]: ";

/// Session language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    /// Resolve the answer to the language question.
    ///
    /// Only an exact (case-insensitive) "es" selects Spanish; anything else,
    /// including blank input, falls back to English.
    pub fn from_choice(input: &str) -> Self {
        if input.trim().eq_ignore_ascii_case("es") {
            Locale::Es
        } else {
            Locale::En
        }
    }

    pub fn texts(self) -> &'static LocaleTexts {
        match self {
            Locale::En => &EN,
            Locale::Es => &ES,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    /// Strict parse used for the `--lang` flag
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            other => Err(format!("unknown language '{}' (expected en or es)", other)),
        }
    }
}

/// Immutable copy table for one locale
#[derive(Debug)]
pub struct LocaleTexts {
    pub welcome: &'static str,
    pub ask_goal: &'static str,
    pub ask_level: &'static str,
    pub error_goal: &'static str,
    pub error_questions: &'static str,
    pub generating_questions: &'static str,
    pub generating_checklist: &'static str,
    pub answer_intro: &'static str,
    pub answer_outro: &'static str,
    pub answer_prompt: &'static str,
    pub answer_your: &'static str,
    pub checklist_success: &'static str,
    /// Placeholder substituted for unanswered questions in the checklist prompt
    pub no_answer: &'static str,
    /// Arrow used when pairing a question with its answer
    pub answer_arrow: &'static str,
    /// System message the gateway falls back to
    pub default_system: &'static str,
    /// System message sent with the checklist prompt
    pub checklist_system: &'static str,
}

impl LocaleTexts {
    /// "We are going to answer N questions..." line
    pub fn answer_banner(&self, count: usize) -> String {
        format!("{}{}{}", self.answer_intro, count, self.answer_outro)
    }

    /// Interactive prompt for a single question
    pub fn question_prompt(&self, question: &str) -> String {
        format!("{}{}{}", self.answer_prompt, question, self.answer_your)
    }
}

static EN: LocaleTexts = LocaleTexts {
    welcome: "\n🧠 Planning Questions Generator with AI\n",
    ask_goal: "🎯 What is your goal to plan? ",
    ask_level: "📊 What level of detail do you want? (Simple / Medium / Complex): ",
    error_goal: "❌ Error: You must enter a valid goal and level.",
    error_questions: "❌ Error generating questions.",
    generating_questions: "⏳ Generating questions...",
    generating_checklist: "⏳ Generating checklist...",
    answer_intro: "\n📝 We are going to answer ",
    answer_outro: " questions. You can leave any blank if you don't know yet.\n",
    answer_prompt: "➡️ ",
    answer_your: "\nYour answer: ",
    checklist_success: "\n✅ Checklist successfully generated at: ",
    no_answer: "(no answer)",
    answer_arrow: "->",
    default_system: "You are an expert assistant.",
    checklist_system: "You are an expert assistant in step-by-step planning.",
};

static ES: LocaleTexts = LocaleTexts {
    welcome: "\n🧠 Generador de preguntas de planificación con IA\n",
    ask_goal: "🎯 ¿Cuál es tu objetivo a planificar? ",
    ask_level: "📊 ¿Qué nivel de detalle deseas? (Simple / Medio / Complejo): ",
    error_goal: "❌ Error: Debes ingresar un objetivo y un nivel válido.",
    error_questions: "❌ Error al generar preguntas.",
    generating_questions: "⏳ Generando preguntas...",
    generating_checklist: "⏳ Generando checklist...",
    answer_intro: "\n📝 Vamos a responder ",
    answer_outro: " preguntas. Puedes dejar alguna en blanco si no lo sabes aún.\n",
    answer_prompt: "➡️ ",
    answer_your: "\nTu respuesta: ",
    checklist_success: "\n✅ Checklist generado con éxito en: ",
    no_answer: "(sin respuesta)",
    answer_arrow: "→",
    default_system: "Eres un asistente experto.",
    checklist_system: "Eres un asistente experto en planificación paso a paso.",
};
