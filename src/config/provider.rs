// Provider selection: the identifier from config and the resolved entry the factory builds from

use std::fmt;
use std::str::FromStr;

use crate::errors::PlanError;

/// Supported LLM backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    Gemini,
}

impl ProviderKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderKind::OpenAi => "openai",
            ProviderKind::Gemini => "gemini",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = PlanError;

    /// Case-insensitive; "google" is accepted as an alias for Gemini
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAi),
            "gemini" | "google" => Ok(ProviderKind::Gemini),
            _ => Err(PlanError::UnsupportedProvider(s.to_string())),
        }
    }
}

/// Fully resolved provider settings, ready for the factory
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderEntry {
    Openai {
        api_key: String,
        model: Option<String>,
        base_url: Option<String>,
        /// `None` sends no temperature
        temperature: Option<f32>,
    },
    Gemini {
        api_key: String,
        model: Option<String>,
        base_url: Option<String>,
    },
}

impl ProviderEntry {
    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::Openai { .. } => ProviderKind::OpenAi,
            Self::Gemini { .. } => ProviderKind::Gemini,
        }
    }

    /// Optional model override.
    pub fn model(&self) -> Option<&str> {
        match self {
            Self::Openai { model, .. } => model.as_deref(),
            Self::Gemini { model, .. } => model.as_deref(),
        }
    }
}
