// Planning session types: QuestionPlan, Answer, AnswerPair, Session, SessionOutcome

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::path::PathBuf;

use super::artifacts::{ArtifactPaths, Slug};
use crate::errors::PlanError;
use crate::locale::Locale;

/// Hard cap on how many generated questions are put to the user
pub const MAX_QUESTIONS: usize = 8;

/// Validated phase-1 payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionPlan {
    /// Goal echoed back by the model (`tema`)
    pub topic: Option<String>,
    /// Detail level echoed back by the model (`nivel_de_profundidad`)
    pub detail_level: Option<String>,
    /// Clarifying questions (`preguntas`), in model order
    pub questions: Vec<String>,
    /// Model-suggested folder slug candidate
    pub folder_name: Option<String>,
}

impl QuestionPlan {
    /// Keep only the first `MAX_QUESTIONS` questions; the rest are dropped silently.
    pub fn truncate_questions(&mut self) {
        if self.questions.len() > MAX_QUESTIONS {
            tracing::debug!(
                generated = self.questions.len(),
                kept = MAX_QUESTIONS,
                "Dropping surplus questions"
            );
            self.questions.truncate(MAX_QUESTIONS);
        }
    }
}

/// What the user typed for one question
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Given(String),
    /// Blank input; rendered as the locale's placeholder in prompts and as "" on disk
    Unanswered,
}

impl Answer {
    /// Build from an already-trimmed line of input
    pub fn from_input(input: &str) -> Self {
        if input.is_empty() {
            Answer::Unanswered
        } else {
            Answer::Given(input.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Answer::Given(text) => text,
            Answer::Unanswered => "",
        }
    }

    pub fn is_answered(&self) -> bool {
        matches!(self, Answer::Given(_))
    }
}

/// One question with its answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerPair {
    pub question: String,
    pub answer: Answer,
}

impl AnswerPair {
    pub fn new(question: impl Into<String>, answer: Answer) -> Self {
        Self {
            question: question.into(),
            answer,
        }
    }
}

/// Ordered question → answer pairs, as collected
///
/// Serializes to a JSON object keyed by question text in question order.
/// Identical question texts collapse to one key holding the last answer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Answers(Vec<AnswerPair>);

impl Answers {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, pair: AnswerPair) {
        self.0.push(pair);
    }

    pub fn pairs(&self) -> &[AnswerPair] {
        &self.0
    }

    pub fn questions(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|p| p.question.as_str())
    }

    /// Entries with duplicate question texts merged (first position, last answer)
    fn unique_entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = Vec::with_capacity(self.0.len());
        for pair in &self.0 {
            match entries.iter_mut().find(|(q, _)| *q == pair.question) {
                Some(entry) => entry.1 = pair.answer.as_str(),
                None => entries.push((pair.question.as_str(), pair.answer.as_str())),
            }
        }
        entries
    }
}

impl From<Vec<AnswerPair>> for Answers {
    fn from(pairs: Vec<AnswerPair>) -> Self {
        Self(pairs)
    }
}

impl Serialize for Answers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let entries = self.unique_entries();
        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (question, answer) in entries {
            map.serialize_entry(question, answer)?;
        }
        map.end()
    }
}

/// A finished planning session, fully populated in phase order
#[derive(Debug, Clone)]
pub struct Session {
    pub goal: String,
    pub detail_level: String,
    pub locale: Locale,
    pub questions: Vec<String>,
    pub answers: Answers,
    pub slug: Slug,
    pub checklist: String,
}

/// Result of `PlanningSession::run()`
#[derive(Debug)]
pub enum SessionOutcome {
    /// Both phases ran and the artifacts are on disk
    Completed {
        session: Session,
        artifacts: ArtifactPaths,
    },
    /// User-facing abort (empty input or unusable phase-1 output); nothing written
    Aborted(PlanError),
}

impl SessionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, SessionOutcome::Completed { .. })
    }

    /// Path of the generated checklist, when the session completed
    pub fn checklist_path(&self) -> Option<&PathBuf> {
        match self {
            SessionOutcome::Completed { artifacts, .. } => Some(&artifacts.checklist),
            SessionOutcome::Aborted(_) => None,
        }
    }
}
