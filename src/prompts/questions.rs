// Phase 1: clarifying-question prompt

use crate::locale::Locale;

/// Render the prompt that asks the model for clarifying questions.
///
/// The model is told to answer with strict JSON carrying `tema`,
/// `nivel_de_profundidad`, `preguntas` and `folder_name`. Those keys stay the
/// same in both locales because the validator reads them.
pub fn render_questions_prompt(goal: &str, detail_level: &str, locale: Locale) -> String {
    match locale {
        Locale::En => format!(
            "You are an expert planner. Based on the user's goal: \"{goal}\" and the detail level \"{level}\", \
generate a list of 5 to 10 key questions that will help you:\n\
\n\
- Understand the user's full context.\n\
- Identify existing resources and limitations.\n\
- Know exactly what they expect to achieve.\n\
- Detect possible dependencies or intermediate steps.\n\
- Gather details that allow you to generate a plan with tasks and subtasks, well ordered.\n\
\n\
Avoid generic questions, ask questions that will help you build a useful action plan for an AI. \
If the level is \"Medium\" or \"Complex\", design the questions so you can generate subtasks and phases.\n\
\n\
Also, return an extra field called 'folder_name' which is a short summary of the goal, safe to use as a \
folder name (max 40 characters, only lowercase, dashes, no spaces or special characters).\n\
\n\
Reply in JSON with this structure:\n{skeleton}",
            goal = goal,
            level = detail_level,
            skeleton = json_skeleton(goal, detail_level, locale),
        ),
        Locale::Es => format!(
            "Tu rol es el de un planificador experto. A partir del objetivo del usuario: \"{goal}\" y el nivel de \
profundidad \"{level}\", genera una lista de entre 5 y 10 preguntas clave que te permitan:\n\
\n\
- Comprender el contexto completo del usuario.\n\
- Identificar recursos existentes y limitaciones.\n\
- Saber qué espera lograr exactamente.\n\
- Detectar posibles dependencias o pasos intermedios.\n\
- Recopilar detalles que te permitan generar un plan con tareas y subtareas, bien ordenadas.\n\
\n\
Evita preguntas genéricas, haz preguntas que te permitan armar un plan de acción útil para una IA. \
Si el nivel es \"Medio\" o \"Complejo\", diseña las preguntas para poder generar subtareas y fases.\n\
\n\
Además, devuelve un campo extra llamado 'folder_name' que sea un resumen corto del objetivo, seguro para usar \
como nombre de carpeta (máximo 40 caracteres, solo minúsculas, guiones, sin espacios ni caracteres especiales).\n\
\n\
Responde en JSON con esta estructura:\n{skeleton}",
            goal = goal,
            level = detail_level,
            skeleton = json_skeleton(goal, detail_level, locale),
        ),
    }
}

/// Example reply shape embedded at the end of the prompt
fn json_skeleton(goal: &str, detail_level: &str, locale: Locale) -> String {
    let (first, second, folder) = match locale {
        Locale::En => ("Question 1", "Question 2", "short-folder-name"),
        Locale::Es => ("Pregunta 1", "Pregunta 2", "nombre-carpeta-corto"),
    };
    format!(
        "{{\n  \"tema\": \"{}\",\n  \"nivel_de_profundidad\": \"{}\",\n  \"preguntas\": [\"{}\", \"{}\", ...],\n  \"folder_name\": \"{}\"\n}}",
        goal, detail_level, first, second, folder
    )
}
