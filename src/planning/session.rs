// Planning session: goal -> questions -> answers -> checklist

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::cli::Console;
use crate::errors::PlanError;
use crate::locale::{Locale, LANGUAGE_PROMPT};
use crate::prompts::{render_checklist_prompt, render_questions_prompt};
use crate::providers::{LlmGateway, LlmProvider, ProviderRequest};

use super::artifacts::{ArtifactStore, Slug};
use super::types::{Answer, AnswerPair, Answers, Session, SessionOutcome};
use super::validator::parse_question_plan;

/// Drives one interactive planning session.
///
/// The two generation phases run strictly in order, one provider call each.
/// Empty input and unusable phase-1 output end the session early with
/// `SessionOutcome::Aborted` and nothing on disk; network and I/O failures
/// propagate as errors.
pub struct PlanningSession<C: Console> {
    provider: Arc<dyn LlmProvider>,
    console: C,
    store: ArtifactStore,
    locale: Option<Locale>,
}

impl<C: Console> PlanningSession<C> {
    pub fn new(provider: Arc<dyn LlmProvider>, console: C, store: ArtifactStore) -> Self {
        Self {
            provider,
            console,
            store,
            locale: None,
        }
    }

    /// Preset the session language; `None` asks the user
    pub fn with_locale(mut self, locale: Option<Locale>) -> Self {
        self.locale = locale;
        self
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    pub async fn run(&mut self) -> Result<SessionOutcome> {
        // ── 1. Language ─────────────────────────────────────────────────
        let locale = match self.locale {
            Some(locale) => locale,
            None => Locale::from_choice(&self.console.ask(LANGUAGE_PROMPT)?),
        };
        let texts = locale.texts();
        let gateway = LlmGateway::new(self.provider.clone(), locale);
        tracing::info!(locale = %locale, provider = gateway.provider_name(), "Starting planning session");

        // ── 2. Goal and detail level ────────────────────────────────────
        self.console.say(texts.welcome);
        let goal = self.console.ask(texts.ask_goal)?.trim().to_string();
        let detail_level = self.console.ask(texts.ask_level)?.trim().to_string();
        if goal.is_empty() || detail_level.is_empty() {
            self.console.warn(texts.error_goal);
            return Ok(SessionOutcome::Aborted(PlanError::InvalidInput));
        }

        // ── 3. Phase 1: clarifying questions ────────────────────────────
        self.console.status(texts.generating_questions);
        let prompt = render_questions_prompt(&goal, &detail_level, locale);
        let raw = gateway
            .invoke(ProviderRequest::new(prompt))
            .await
            .context("Failed to generate questions")?;

        // ── 4. Validate ─────────────────────────────────────────────────
        let mut plan = match parse_question_plan(&raw) {
            Ok(plan) => plan,
            Err(err) => {
                tracing::warn!(error = %err, "Unusable question plan");
                tracing::debug!(raw = %raw, "Rejected phase-1 response");
                self.console.warn(texts.error_questions);
                self.console.say(&raw);
                return Ok(SessionOutcome::Aborted(err));
            }
        };

        // ── 5. Cap the question count ───────────────────────────────────
        plan.truncate_questions();

        // ── 6-7. Slug and artifact directory ────────────────────────────
        let slug = Slug::derive(&plan, &goal);
        let paths = self.store.prepare(&slug)?;

        // ── 8. Answers ──────────────────────────────────────────────────
        self.console.say(&texts.answer_banner(plan.questions.len()));
        let mut answers = Answers::new();
        for question in &plan.questions {
            let reply = self.console.ask(&texts.question_prompt(question))?;
            answers.push(AnswerPair::new(
                question.clone(),
                Answer::from_input(reply.trim()),
            ));
        }

        // ── 9. Persist answers ──────────────────────────────────────────
        self.store.write_responses(&paths, &answers)?;

        // ── 10. Phase 2: checklist ──────────────────────────────────────
        self.console.status(texts.generating_checklist);
        let topic = non_blank(plan.topic.as_deref()).unwrap_or(goal.as_str());
        let level = non_blank(plan.detail_level.as_deref()).unwrap_or(detail_level.as_str());
        let prompt = render_checklist_prompt(topic, level, &answers, locale);
        let checklist = gateway
            .invoke(ProviderRequest::new(prompt).with_system(texts.checklist_system))
            .await
            .context("Failed to generate checklist")?;

        // ── 11. Persist checklist ───────────────────────────────────────
        self.store.write_checklist(&paths, &checklist)?;

        // ── 12. Done ────────────────────────────────────────────────────
        self.console.success(&format!(
            "{}{}",
            texts.checklist_success,
            paths.checklist.display()
        ));

        let session = Session {
            goal,
            detail_level,
            locale,
            questions: plan.questions,
            answers,
            slug,
            checklist,
        };
        Ok(SessionOutcome::Completed {
            session,
            artifacts: paths,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
