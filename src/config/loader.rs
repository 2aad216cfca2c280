// Configuration loader
//
// Precedence, lowest to highest: built-in defaults, ~/.plancraft/config.toml
// (or --config), ./.env, process environment, command-line overrides.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DOTENV_FILE, ENV_GEMINI_API_KEY, ENV_GOOGLE_API_KEY,
    ENV_OPENAI_API_KEY, ENV_PLANS_DIR, ENV_PROVIDER,
};
use super::settings::{Config, ProviderSettings};

/// Values from the command line that beat every other source
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub provider: Option<String>,
    pub model: Option<String>,
    pub plans_dir: Option<PathBuf>,
}

/// On-disk TOML shape; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    #[serde(default)]
    provider: Option<String>,
    #[serde(default)]
    plans_dir: Option<PathBuf>,
    #[serde(default)]
    openai: Option<ProviderSettings>,
    #[serde(default)]
    gemini: Option<ProviderSettings>,
}

/// Load configuration from file, `./.env`, process environment and overrides
pub fn load_config(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Config> {
    let dotenv = read_dotenv(Path::new(DOTENV_FILE))?;
    load_config_with_env(
        path,
        overrides,
        env_with_fallback(|key| std::env::var(key).ok(), &dotenv),
    )
}

/// Read a dotenv file into a map; a missing file yields an empty map.
///
/// The process environment is left untouched.
pub fn read_dotenv(path: &Path) -> Result<HashMap<String, String>> {
    if !path.exists() {
        return Ok(HashMap::new());
    }

    let entries = dotenvy::from_path_iter(path)
        .with_context(|| format!("Failed to read env file: {}", path.display()))?
        .collect::<Result<HashMap<_, _>, _>>()
        .with_context(|| format!("Failed to parse env file: {}", path.display()))?;

    tracing::debug!(path = %path.display(), vars = entries.len(), "Read env file");
    Ok(entries)
}

/// Environment lookup that consults `fallback` when `primary` has no value
pub fn env_with_fallback<'a, F>(
    primary: F,
    fallback: &'a HashMap<String, String>,
) -> impl Fn(&str) -> Option<String> + 'a
where
    F: Fn(&str) -> Option<String> + 'a,
{
    move |key: &str| primary(key).or_else(|| fallback.get(key).cloned())
}

/// Same as `load_config` with an injectable environment lookup
pub fn load_config_with_env<F>(
    path: Option<&Path>,
    overrides: &ConfigOverrides,
    env: F,
) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = Config::default();

    if let Some(file) = read_config_file(path)? {
        apply_file(&mut config, file);
    }
    apply_env(&mut config, &env);
    apply_overrides(&mut config, overrides);

    tracing::debug!(
        provider = %config.provider,
        plans_dir = %config.plans_dir.display(),
        "Configuration loaded"
    );
    Ok(config)
}

/// Default config file location, if a home directory exists
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

fn read_config_file(path: Option<&Path>) -> Result<Option<TomlConfig>> {
    // An explicit path must exist; the default one is optional
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Some(p) if p.exists() => p,
            _ => return Ok(None),
        },
    };

    let contents = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let parsed: TomlConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

    tracing::debug!(path = %path.display(), "Read config file");
    Ok(Some(parsed))
}

fn apply_file(config: &mut Config, file: TomlConfig) {
    if let Some(provider) = file.provider {
        config.provider = provider;
    }
    if let Some(plans_dir) = file.plans_dir {
        config.plans_dir = plans_dir;
    }
    if let Some(openai) = file.openai {
        config.openai = openai;
    }
    if let Some(gemini) = file.gemini {
        config.gemini = gemini;
    }
}

fn apply_env<F>(config: &mut Config, env: &F)
where
    F: Fn(&str) -> Option<String>,
{
    let non_empty = |key: &str| env(key).filter(|v| !v.trim().is_empty());

    if let Some(provider) = non_empty(ENV_PROVIDER) {
        config.provider = provider;
    }
    if let Some(key) = non_empty(ENV_OPENAI_API_KEY) {
        config.openai.api_key = Some(key);
    }
    if let Some(key) = non_empty(ENV_GEMINI_API_KEY).or_else(|| non_empty(ENV_GOOGLE_API_KEY)) {
        config.gemini.api_key = Some(key);
    }
    if let Some(dir) = non_empty(ENV_PLANS_DIR) {
        config.plans_dir = PathBuf::from(dir);
    }
}

fn apply_overrides(config: &mut Config, overrides: &ConfigOverrides) {
    if let Some(provider) = &overrides.provider {
        config.provider = provider.clone();
    }
    if let Some(model) = &overrides.model {
        config.model_override = Some(model.clone());
    }
    if let Some(plans_dir) = &overrides.plans_dir {
        config.plans_dir = plans_dir.clone();
    }
}
