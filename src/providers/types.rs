// Unified request/response types for the LLM providers
//
// A planning call is always a single user prompt plus an optional system
// message, so these types stay much flatter than a chat transcript.

/// Provider-agnostic request
#[derive(Debug, Clone)]
pub struct ProviderRequest {
    /// The rendered prompt, sent as the single user message
    pub prompt: String,

    /// System message (sent as a `system` role for OpenAI, `systemInstruction` for Gemini)
    pub system: Option<String>,

    /// Model name; empty means the provider's default
    pub model: String,

    /// Maximum tokens to generate (provider default when unset)
    pub max_tokens: Option<u32>,

    /// Sampling temperature (provider default when unset)
    pub temperature: Option<f32>,
}

impl ProviderRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system: None,
            model: String::new(),
            max_tokens: None,
            temperature: None,
        }
    }

    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// The model to use given a provider default
    pub fn model_or<'a>(&'a self, default_model: &'a str) -> &'a str {
        if self.model.is_empty() {
            default_model
        } else {
            &self.model
        }
    }
}

/// Provider-agnostic response
#[derive(Debug, Clone)]
pub struct ProviderResponse {
    /// Concatenated text output, untrimmed
    pub text: String,

    /// Model that generated the response
    pub model: String,

    /// Why the model stopped generating
    pub stop_reason: Option<String>,

    /// Provider name (e.g. "openai", "gemini")
    pub provider: String,
}
