// Provider factory
//
// Builds the one LlmProvider the process talks to from the resolved config.

use anyhow::Result;
use std::sync::Arc;

use super::gemini::GeminiProvider;
use super::openai::OpenAIProvider;
use super::LlmProvider;
use crate::config::{Config, ProviderEntry};

/// Create an `LlmProvider` from a resolved `ProviderEntry`.
pub fn create_provider_from_entry(entry: &ProviderEntry) -> Result<Arc<dyn LlmProvider>> {
    match entry {
        ProviderEntry::Openai {
            api_key,
            model,
            base_url,
            temperature,
        } => {
            let mut provider = OpenAIProvider::new_openai(api_key.clone())?;
            if let Some(m) = model {
                provider = provider.with_model(m.clone());
            }
            if let Some(url) = base_url {
                provider = provider.with_base_url(url.clone());
            }
            Ok(Arc::new(provider.with_temperature(*temperature)))
        }

        ProviderEntry::Gemini {
            api_key,
            model,
            base_url,
        } => {
            let mut provider = GeminiProvider::new(api_key.clone())?;
            if let Some(m) = model {
                provider = provider.with_model(m.clone());
            }
            if let Some(url) = base_url {
                provider = provider.with_base_url(url.clone());
            }
            Ok(Arc::new(provider))
        }
    }
}

/// Resolve the configured provider and build it.
///
/// An unknown provider identifier surfaces as `PlanError::UnsupportedProvider`
/// inside the returned error.
pub fn create_provider(config: &Config) -> Result<Arc<dyn LlmProvider>> {
    let entry = config.provider_entry()?;
    let provider = create_provider_from_entry(&entry)?;
    tracing::info!(
        provider = provider.name(),
        model = provider.default_model(),
        "LLM provider ready"
    );
    Ok(provider)
}
