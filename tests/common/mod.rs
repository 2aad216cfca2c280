// Shared test doubles: a scripted console and a scripted LLM provider

#![allow(dead_code)]

use anyhow::{bail, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use plancraft::cli::Console;
use plancraft::providers::{LlmProvider, ProviderRequest, ProviderResponse};

/// Console that replays canned replies and records everything shown
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    replies: VecDeque<String>,
    pub prompts: Vec<String>,
    pub output: Vec<String>,
    pub warnings: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(replies: &[&str]) -> Self {
        Self {
            replies: replies.iter().map(|r| r.to_string()).collect(),
            ..Default::default()
        }
    }

    /// Everything printed, warnings included, in one string
    pub fn transcript(&self) -> String {
        let mut all = self.output.clone();
        all.extend(self.warnings.iter().cloned());
        all.join("\n")
    }
}

impl Console for ScriptedConsole {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        match self.replies.pop_front() {
            Some(reply) => Ok(reply.trim().to_string()),
            None => bail!("ScriptedConsole ran out of replies at prompt: {}", prompt),
        }
    }

    fn say(&mut self, line: &str) {
        self.output.push(line.to_string());
    }

    fn status(&mut self, line: &str) {
        self.output.push(line.to_string());
    }

    fn warn(&mut self, line: &str) {
        self.warnings.push(line.to_string());
    }

    fn success(&mut self, line: &str) {
        self.output.push(line.to_string());
    }
}

/// Provider that returns canned texts in order and records every request
pub struct ScriptedProvider {
    responses: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<ProviderRequest>>,
}

impl ScriptedProvider {
    pub fn new(responses: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.iter().map(|r| r.to_string()).collect()),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for ScriptedProvider {
    async fn send_message(&self, request: &ProviderRequest) -> Result<ProviderResponse> {
        self.requests.lock().unwrap().push(request.clone());
        let text = match self.responses.lock().unwrap().pop_front() {
            Some(text) => text,
            None => bail!("ScriptedProvider has no response left"),
        };
        Ok(ProviderResponse {
            text,
            model: "scripted".to_string(),
            stop_reason: Some("stop".to_string()),
            provider: "scripted".to_string(),
        })
    }

    fn name(&self) -> &str {
        "scripted"
    }

    fn default_model(&self) -> &str {
        "scripted"
    }
}

/// Phase-1 payload with the given questions and folder name
pub fn question_plan_json(questions: &[&str], folder_name: &str) -> String {
    serde_json::json!({
        "tema": "Launch a podcast",
        "nivel_de_profundidad": "Simple",
        "preguntas": questions,
        "folder_name": folder_name,
    })
    .to_string()
}
