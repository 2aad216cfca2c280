// Integration tests for the interactive planning session

mod common;

use anyhow::Result;
use std::fs;
use std::io;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

use common::{question_plan_json, ScriptedConsole, ScriptedProvider};
use plancraft::locale::Locale;
use plancraft::planning::{ArtifactStore, PlanningSession, SessionOutcome};
use plancraft::PlanError;

const CHECKLIST: &str = "- [ ] 1. Pick a topic\n  - [ ] 1.1. List ten episode ideas\n- [ ] 2. Buy a microphone";

/// Log sink shared between the subscriber and the test
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn session(
    provider: Arc<ScriptedProvider>,
    replies: &[&str],
    plans: &std::path::Path,
) -> PlanningSession<ScriptedConsole> {
    PlanningSession::new(provider, ScriptedConsole::new(replies), ArtifactStore::new(plans))
}

#[tokio::test]
async fn test_completed_session_writes_both_artifacts() -> Result<()> {
    let dir = TempDir::new()?;
    let plans = dir.path().join("plans");
    let phase1 = question_plan_json(
        &["Which audience?", "How often will you publish?", "What equipment do you have?"],
        "launch-podcast",
    );
    let provider = ScriptedProvider::new(&[phase1.as_str(), CHECKLIST]);

    let mut planner = session(
        provider.clone(),
        &["en", "Launch a podcast", "Simple", "Developers", "", "  A laptop  "],
        &plans,
    );
    let outcome = planner.run().await?;

    let (session, artifacts) = match outcome {
        SessionOutcome::Completed { session, artifacts } => (session, artifacts),
        SessionOutcome::Aborted(err) => panic!("session aborted: {}", err),
    };

    assert_eq!(session.slug.as_str(), "launch-podcast");
    assert_eq!(session.locale, Locale::En);
    assert_eq!(artifacts.root, plans.join("launch-podcast"));
    assert_eq!(artifacts.checklist, plans.join("launch-podcast").join("launch-podcast.md"));

    // Answers file: exactly one key per question, blank answer stored as ""
    let raw = fs::read_to_string(plans.join("launch-podcast").join("q&a").join("user_responses.json"))?;
    assert!(raw.ends_with("}\n"));
    let json: serde_json::Value = serde_json::from_str(&raw)?;
    let object = json.as_object().expect("responses are a JSON object");
    assert_eq!(object.len(), 3);
    assert_eq!(object["Which audience?"], "Developers");
    assert_eq!(object["How often will you publish?"], "");
    assert_eq!(object["What equipment do you have?"], "A laptop");
    assert!(raw.find("Which audience?").unwrap() < raw.find("What equipment").unwrap());

    // Checklist written verbatim
    assert_eq!(fs::read_to_string(&artifacts.checklist)?, CHECKLIST);
    assert_eq!(session.checklist, CHECKLIST);

    // Two provider calls with the locale's system messages
    let requests = provider.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].system.as_deref(), Some("You are an expert assistant."));
    assert!(requests[0].prompt.contains("\"Launch a podcast\""));
    assert!(requests[0].prompt.contains("\"Simple\""));
    assert_eq!(
        requests[1].system.as_deref(),
        Some("You are an expert assistant in step-by-step planning.")
    );

    let checklist_prompt = &requests[1].prompt;
    for question in &session.questions {
        assert_eq!(checklist_prompt.matches(question.as_str()).count(), 1);
    }
    assert!(checklist_prompt.contains("(no answer)"));
    assert!(checklist_prompt.contains("A laptop"));

    let console = planner.into_console();
    assert!(console.transcript().contains("Checklist successfully generated at"));
    assert!(console.warnings.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_non_json_questions_abort_without_files() -> Result<()> {
    let dir = TempDir::new()?;
    let plans = dir.path().join("plans");
    let provider = ScriptedProvider::new(&["I cannot help with that"]);

    let mut planner = session(provider.clone(), &["en", "Launch a podcast", "Simple"], &plans);
    let outcome = planner.run().await?;

    match &outcome {
        SessionOutcome::Aborted(PlanError::MalformedPlan { raw, .. }) => {
            assert_eq!(raw, "I cannot help with that")
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
    assert!(outcome.checklist_path().is_none());
    assert!(!plans.exists());
    assert_eq!(provider.call_count(), 1);

    let console = planner.console();
    assert_eq!(console.warnings, vec!["❌ Error generating questions.".to_string()]);
    assert!(console.transcript().contains("I cannot help with that"));
    Ok(())
}

#[tokio::test]
async fn test_rejected_reply_is_kept_out_of_warn_logs() -> Result<()> {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("plancraft=warn"))
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let dir = TempDir::new()?;
    let provider = ScriptedProvider::new(&["Sorry, I cannot plan that"]);
    let mut planner = session(provider, &["en", "Launch a podcast", "Simple"], dir.path());
    let outcome = planner.run().await?;
    assert!(!outcome.is_completed());

    let output = String::from_utf8(logs.0.lock().unwrap().clone())?;
    assert!(output.contains("Unusable question plan"));
    assert!(!output.contains("Sorry, I cannot plan that"));

    // The console still shows the reply once
    let shown = planner
        .console()
        .output
        .iter()
        .filter(|line| line.contains("Sorry, I cannot plan that"))
        .count();
    assert_eq!(shown, 1);
    Ok(())
}

#[tokio::test]
async fn test_empty_goal_aborts_before_any_provider_call() -> Result<()> {
    let dir = TempDir::new()?;
    let plans = dir.path().join("plans");
    let provider = ScriptedProvider::new(&[]);

    let mut planner = session(provider.clone(), &["en", "   ", "Simple"], &plans);
    let outcome = planner.run().await?;

    assert!(matches!(outcome, SessionOutcome::Aborted(PlanError::InvalidInput)));
    assert_eq!(provider.call_count(), 0);
    assert!(!plans.exists());
    assert_eq!(
        planner.console().warnings,
        vec!["❌ Error: You must enter a valid goal and level.".to_string()]
    );
    Ok(())
}

#[tokio::test]
async fn test_empty_level_aborts() -> Result<()> {
    let dir = TempDir::new()?;
    let provider = ScriptedProvider::new(&[]);

    let mut planner = session(provider.clone(), &["en", "Write a novel", ""], dir.path());
    let outcome = planner.run().await?;

    assert!(matches!(outcome, SessionOutcome::Aborted(PlanError::InvalidInput)));
    assert_eq!(provider.call_count(), 0);
    Ok(())
}

#[tokio::test]
async fn test_only_first_eight_questions_are_asked() -> Result<()> {
    let dir = TempDir::new()?;
    let questions: Vec<String> = (1..=12).map(|i| format!("Question number {}?", i)).collect();
    let refs: Vec<&str> = questions.iter().map(String::as_str).collect();
    let phase1 = question_plan_json(&refs, "big-plan");
    let provider = ScriptedProvider::new(&[phase1.as_str(), CHECKLIST]);

    let mut replies = vec!["en", "Build a house", "Complex"];
    replies.extend(std::iter::repeat("yes").take(8));
    let mut planner = session(provider, &replies, dir.path());
    let outcome = planner.run().await?;

    let session = match outcome {
        SessionOutcome::Completed { session, .. } => session,
        other => panic!("unexpected outcome: {:?}", other),
    };
    assert_eq!(session.questions.len(), 8);
    assert_eq!(session.questions[0], "Question number 1?");
    assert_eq!(session.questions[7], "Question number 8?");
    assert_eq!(session.answers.pairs().len(), 8);

    // language + goal + level + 8 questions
    assert_eq!(planner.console().prompts.len(), 11);
    assert!(planner
        .console()
        .output
        .iter()
        .any(|line| line.contains("We are going to answer 8 questions")));

    let raw = fs::read_to_string(dir.path().join("big-plan").join("q&a").join("user_responses.json"))?;
    let json: serde_json::Value = serde_json::from_str(&raw)?;
    assert_eq!(json.as_object().unwrap().len(), 8);
    Ok(())
}

#[tokio::test]
async fn test_spanish_session_uses_spanish_copy() -> Result<()> {
    let dir = TempDir::new()?;
    let phase1 = format!(
        "```json\n{}\n```",
        question_plan_json(&["¿Cuál es tu presupuesto?", "¿Tienes equipo?"], "lanzar-podcast")
    );
    let provider = ScriptedProvider::new(&[phase1.as_str(), CHECKLIST]);

    // Language preset: no language question is asked
    let mut planner = session(provider.clone(), &["Lanzar un podcast", "Medio", "100 euros", ""], dir.path())
        .with_locale(Some(Locale::Es));
    let outcome = planner.run().await?;
    assert!(outcome.is_completed());

    let requests = provider.requests();
    assert_eq!(requests[0].system.as_deref(), Some("Eres un asistente experto."));
    assert_eq!(
        requests[1].system.as_deref(),
        Some("Eres un asistente experto en planificación paso a paso.")
    );
    assert!(requests[1].prompt.contains("(sin respuesta)"));
    assert!(requests[1].prompt.contains("100 euros"));

    let console = planner.console();
    assert_eq!(console.prompts[0], "🎯 ¿Cuál es tu objetivo a planificar? ");
    assert!(console.transcript().contains("Checklist generado con éxito en"));
    assert!(dir.path().join("lanzar-podcast").join("lanzar-podcast.md").exists());
    Ok(())
}

#[tokio::test]
async fn test_language_choice_other_than_es_is_english() -> Result<()> {
    let dir = TempDir::new()?;
    let provider = ScriptedProvider::new(&[]);

    let mut planner = session(provider, &["fr", "", ""], dir.path());
    planner.run().await?;

    assert_eq!(planner.console().prompts[1], "🎯 What is your goal to plan? ");
    Ok(())
}

#[tokio::test]
async fn test_slug_falls_back_to_topic_when_folder_name_empty() -> Result<()> {
    let dir = TempDir::new()?;
    let phase1 = question_plan_json(&["Why?"], "");
    let provider = ScriptedProvider::new(&[phase1.as_str(), CHECKLIST]);

    let mut planner = session(provider, &["en", "Launch a podcast", "Simple", "fun"], dir.path());
    let outcome = planner.run().await?;

    let path = outcome.checklist_path().cloned().expect("completed session");
    assert_eq!(path, dir.path().join("launch-a-podcast").join("launch-a-podcast.md"));
    Ok(())
}

#[tokio::test]
async fn test_provider_failure_propagates() -> Result<()> {
    let dir = TempDir::new()?;
    let plans = dir.path().join("plans");
    let provider = ScriptedProvider::new(&[]);

    let mut planner = session(provider, &["en", "Launch a podcast", "Simple"], &plans);
    let err = planner.run().await.unwrap_err();

    assert!(format!("{:#}", err).contains("Failed to generate questions"));
    assert!(!plans.exists());
    Ok(())
}
