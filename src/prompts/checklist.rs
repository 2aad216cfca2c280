// Phase 2: checklist prompt

use crate::locale::Locale;
use crate::planning::types::Answers;

/// Render the prompt that turns goal + answered questions into a Markdown checklist.
///
/// Questions are numbered in collection order and each one is followed by
/// its answer, or by the locale's "no answer" placeholder when left blank.
pub fn render_checklist_prompt(
    goal: &str,
    detail_level: &str,
    answers: &Answers,
    locale: Locale,
) -> String {
    let qa = numbered_answers(answers, locale);

    match locale {
        Locale::En => format!(
            "Your task is to generate a checklist in Markdown format (with checkboxes \"- [ ]\") to help achieve \
the following goal:\n\
\n\
Objective: \"{goal}\"\n\
Level of detail: {level}\n\
\n\
Based on these key questions that were asked and the user's answers:\n\
{qa}\n\
\n\
Instructions to generate the checklist:\n\
- Use \"- [ ] 1. Main task\" and if there are subtasks, use hierarchical numbering (1.1., 1.1.1., etc.) \
and the corresponding indentation:\n\
{example}\n\
- Be clear and precise, action-oriented.\n\
- Do not add explanations outside the checklist.\n\
- The result should be useful for someone who wants to complete that goal step by step.\n\
\n\
Start directly with the checklist.",
            goal = goal,
            level = detail_level,
            qa = qa,
            example = nesting_example(locale),
        ),
        Locale::Es => format!(
            "Tu tarea es generar un checklist en formato Markdown (con checkboxes \"- [ ]\") que ayude a lograr \
el siguiente objetivo:\n\
\n\
🎯 Objetivo: \"{goal}\"\n\
🔍 Nivel de detalle: {level}\n\
\n\
Basate en estas preguntas clave que se hicieron y en las respuestas del usuario:\n\
{qa}\n\
\n\
Instrucciones para generar el checklist:\n\
- Usa \"- [ ] 1. Tarea principal\" y si hay subtareas usa numeración jerárquica (1.1., 1.1.1., etc.) \
y la indentación correspondiente:\n\
{example}\n\
- Sé claro y preciso, orientado a la acción concreta.\n\
- No agregues explicaciones fuera del checklist.\n\
- El resultado debe ser útil para alguien que quiera completar ese objetivo paso a paso.\n\
\n\
Empieza directamente con la checklist.",
            goal = goal,
            level = detail_level,
            qa = qa,
            example = nesting_example(locale),
        ),
    }
}

/// `Q<n>: question` followed by an indented answer line, one block per pair
fn numbered_answers(answers: &Answers, locale: Locale) -> String {
    let texts = locale.texts();
    answers
        .pairs()
        .iter()
        .enumerate()
        .map(|(i, pair)| {
            let answer = if pair.answer.is_answered() {
                pair.answer.as_str()
            } else {
                texts.no_answer
            };
            format!("Q{}: {}\n  {} {}", i + 1, pair.question, texts.answer_arrow, answer)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn nesting_example(locale: Locale) -> &'static str {
    match locale {
        Locale::En => {
            "  - [ ] 1. Main task\n    - [ ] 1.1. Subtask 1.1\n      - [ ] 1.1.1. Subtask 1.1.1"
        }
        Locale::Es => {
            "  - [ ] 1. Tarea principal\n    - [ ] 1.1. Subtarea 1.1\n      - [ ] 1.1.1. Subtarea 1.1.1"
        }
    }
}
