// Planning pipeline
//
// Drives plancraft's two-phase protocol: the model proposes clarifying
// questions for the user's goal, the user answers them, and a second call
// turns goal + answers into a Markdown checklist saved under plans/<slug>/.

pub mod artifacts;
pub mod session;
pub mod types;
pub mod validator;

pub use artifacts::{sanitize_slug, ArtifactPaths, ArtifactStore, Slug};
pub use session::PlanningSession;
pub use types::{
    Answer, AnswerPair, Answers, QuestionPlan, Session, SessionOutcome, MAX_QUESTIONS,
};
pub use validator::{parse_question_plan, strip_code_fences};
