// LLM gateway: the single invoke(request) -> text entry point the planner uses

use anyhow::{Context, Result};
use std::sync::Arc;

use super::types::ProviderRequest;
use super::LlmProvider;
use crate::locale::Locale;

/// Wraps the process provider with the session's locale defaults
#[derive(Clone)]
pub struct LlmGateway {
    provider: Arc<dyn LlmProvider>,
    default_system: &'static str,
}

impl LlmGateway {
    pub fn new(provider: Arc<dyn LlmProvider>, locale: Locale) -> Self {
        Self {
            provider,
            default_system: locale.texts().default_system,
        }
    }

    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Send one request and return the response text, trimmed.
    ///
    /// Requests without a system message get the locale's default one.
    pub async fn invoke(&self, mut request: ProviderRequest) -> Result<String> {
        if request.system.is_none() {
            request.system = Some(self.default_system.to_string());
        }

        tracing::debug!(
            provider = self.provider.name(),
            prompt_len = request.prompt.len(),
            "Invoking LLM"
        );

        let response = self
            .provider
            .send_message(&request)
            .await
            .with_context(|| format!("LLM request to {} failed", self.provider.name()))?;

        tracing::debug!(
            model = %response.model,
            stop_reason = ?response.stop_reason,
            text_len = response.text.len(),
            "LLM response received"
        );

        Ok(response.text.trim().to_string())
    }
}
