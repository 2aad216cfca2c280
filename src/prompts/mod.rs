// Prompt templates for the two generation phases
//
// Pure string rendering: no I/O, no provider knowledge. Every literal comes
// in an English and a Spanish flavour selected by Locale.

mod checklist;
mod questions;

pub use checklist::render_checklist_prompt;
pub use questions::render_questions_prompt;
