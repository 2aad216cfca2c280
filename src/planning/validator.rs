// Phase-1 response validation
//
// Phase-1 output arrives as JSON, fenced JSON, or free text. It is cleaned,
// parsed and checked here before the session asks any question.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::types::QuestionPlan;
use crate::errors::PlanError;

static CODE_FENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```(?:json)?").expect("code fence regex is valid"));

/// Remove ```json / ``` fence markers and surrounding whitespace
pub fn strip_code_fences(raw: &str) -> String {
    CODE_FENCE_RE.replace_all(raw, "").trim().to_string()
}

/// Parse the phase-1 model output into a `QuestionPlan`.
///
/// Fails with `PlanError::MalformedPlan` when the text is not JSON, is not an
/// object, or carries no non-empty `preguntas` array. The other fields are
/// optional and only taken when they are strings.
pub fn parse_question_plan(raw: &str) -> Result<QuestionPlan, PlanError> {
    let cleaned = strip_code_fences(raw);

    let value: Value = serde_json::from_str(&cleaned)
        .map_err(|e| PlanError::malformed(format!("response is not valid JSON ({})", e), raw))?;

    let object = value
        .as_object()
        .ok_or_else(|| PlanError::malformed("response is not a JSON object", raw))?;

    let questions = match object.get("preguntas") {
        Some(Value::Array(items)) => items.iter().map(question_text).collect::<Vec<_>>(),
        Some(_) => return Err(PlanError::malformed("\"preguntas\" is not a list", raw)),
        None => return Err(PlanError::malformed("\"preguntas\" is missing", raw)),
    };

    if questions.is_empty() {
        return Err(PlanError::malformed("\"preguntas\" is empty", raw));
    }

    Ok(QuestionPlan {
        topic: string_field(object.get("tema")),
        detail_level: string_field(object.get("nivel_de_profundidad")),
        questions,
        folder_name: string_field(object.get("folder_name")),
    })
}

fn question_text(item: &Value) -> String {
    match item {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn string_field(value: Option<&Value>) -> Option<String> {
    value.and_then(Value::as_str).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_json_parses() {
        let plan = parse_question_plan("```json\n{\"preguntas\":[\"a\",\"b\"]}\n```").unwrap();
        assert_eq!(plan.questions, vec!["a", "b"]);
        assert_eq!(plan.topic, None);
        assert_eq!(plan.folder_name, None);
    }

    #[test]
    fn test_bare_fence_and_whitespace() {
        let plan = parse_question_plan("  ```\n{\"preguntas\":[\"x\"]}\n```  \n").unwrap();
        assert_eq!(plan.questions, vec!["x"]);
    }

    #[test]
    fn test_full_payload() {
        let raw = r#"{
            "tema": "Launch a podcast",
            "nivel_de_profundidad": "Simple",
            "preguntas": ["Budget?", "Equipment?"],
            "folder_name": "launch-podcast"
        }"#;
        let plan = parse_question_plan(raw).unwrap();
        assert_eq!(plan.topic.as_deref(), Some("Launch a podcast"));
        assert_eq!(plan.detail_level.as_deref(), Some("Simple"));
        assert_eq!(plan.folder_name.as_deref(), Some("launch-podcast"));
        assert_eq!(plan.questions.len(), 2);
    }

    #[test]
    fn test_not_json_is_malformed() {
        let err = parse_question_plan("not json").unwrap_err();
        match err {
            PlanError::MalformedPlan { raw, .. } => assert_eq!(raw, "not json"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_preguntas_must_be_a_list() {
        let err = parse_question_plan(r#"{"preguntas": "just one"}"#).unwrap_err();
        assert!(err.to_string().contains("not a list"));

        let err = parse_question_plan(r#"{"tema": "x"}"#).unwrap_err();
        assert!(err.to_string().contains("missing"));

        let err = parse_question_plan(r#"["a", "b"]"#).unwrap_err();
        assert!(err.to_string().contains("not a JSON object"));
    }

    #[test]
    fn test_empty_question_list_is_malformed() {
        assert!(matches!(
            parse_question_plan(r#"{"preguntas": []}"#),
            Err(PlanError::MalformedPlan { .. })
        ));
    }

    #[test]
    fn test_non_string_entries_are_kept_as_json_text() {
        let plan = parse_question_plan(r#"{"preguntas": ["ok", 42], "folder_name": 7}"#).unwrap();
        assert_eq!(plan.questions, vec!["ok", "42"]);
        assert_eq!(plan.folder_name, None);
    }
}
