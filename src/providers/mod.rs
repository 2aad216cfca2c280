// Multi-provider LLM support
//
// One trait, one implementation per backend. The concrete provider is picked
// once at startup by the factory and handed around as Arc<dyn LlmProvider>;
// nothing downstream knows which backend it is talking to.

use anyhow::Result;
use async_trait::async_trait;

pub mod factory;
pub mod gateway;
pub mod gemini;
pub mod openai;
pub mod types;

pub use factory::create_provider;
pub use gateway::LlmGateway;
pub use gemini::GeminiProvider;
pub use openai::OpenAIProvider;
pub use types::{ProviderRequest, ProviderResponse};

/// Trait for LLM providers
///
/// Each call is independent: one network request, no retries, no caching.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send a request and wait for the complete response
    async fn send_message(&self, request: &ProviderRequest) -> Result<ProviderResponse>;

    /// Provider name (e.g. "openai", "gemini")
    fn name(&self) -> &str;

    /// Model used when the request does not name one
    fn default_model(&self) -> &str;
}
