// Configuration structs

use anyhow::{bail, Result};
use serde::Deserialize;
use std::path::PathBuf;

use super::constants::{
    DEFAULT_OPENAI_TEMPERATURE, DEFAULT_PLANS_DIR, DEFAULT_PROVIDER, ENV_GEMINI_API_KEY,
    ENV_OPENAI_API_KEY,
};
use super::provider::{ProviderEntry, ProviderKind};

/// Per-backend settings (`[openai]` / `[gemini]` tables)
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProviderSettings {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    /// OpenAI only; Gemini ignores it
    #[serde(default)]
    pub temperature: Option<f32>,
    /// OpenAI only: send no `temperature` at all, for models that reject it
    #[serde(default)]
    pub omit_temperature: bool,
}

/// Process-wide configuration, loaded once at startup
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Provider identifier as configured; validated by `provider_kind()`
    pub provider: String,

    /// Root directory for session artifacts
    pub plans_dir: PathBuf,

    /// Model override applied on top of the provider table (from `--model`)
    pub model_override: Option<String>,

    pub openai: ProviderSettings,
    pub gemini: ProviderSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: DEFAULT_PROVIDER.to_string(),
            plans_dir: PathBuf::from(DEFAULT_PLANS_DIR),
            model_override: None,
            openai: ProviderSettings::default(),
            gemini: ProviderSettings::default(),
        }
    }
}

impl Config {
    /// Parse the configured provider identifier
    pub fn provider_kind(&self) -> Result<ProviderKind> {
        Ok(self.provider.parse::<ProviderKind>()?)
    }

    /// Resolve the active provider into an entry the factory can build.
    ///
    /// Fails with `PlanError::UnsupportedProvider` for unknown identifiers and
    /// with a setup hint when the selected provider has no API key.
    pub fn provider_entry(&self) -> Result<ProviderEntry> {
        let kind = self.provider_kind()?;

        let (settings, env_var) = match kind {
            ProviderKind::OpenAi => (&self.openai, ENV_OPENAI_API_KEY),
            ProviderKind::Gemini => (&self.gemini, ENV_GEMINI_API_KEY),
        };

        let api_key = match settings.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => key.to_string(),
            _ => bail!(
                "No API key configured for provider '{}'.\n\n\
                Set it in the environment:\n  export {}=\"...\"\n\n\
                or in ~/.plancraft/config.toml:\n  [{}]\n  api_key = \"...\"",
                kind,
                env_var,
                kind
            ),
        };

        let model = self.model_override.clone().or_else(|| settings.model.clone());

        Ok(match kind {
            ProviderKind::OpenAi => ProviderEntry::Openai {
                api_key,
                model,
                base_url: settings.base_url.clone(),
                temperature: if settings.omit_temperature {
                    None
                } else {
                    Some(settings.temperature.unwrap_or(DEFAULT_OPENAI_TEMPERATURE))
                },
            },
            ProviderKind::Gemini => ProviderEntry::Gemini {
                api_key,
                model,
                base_url: settings.base_url.clone(),
            },
        })
    }
}
