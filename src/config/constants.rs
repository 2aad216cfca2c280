// Project-wide constants
//
// Centralised here so defaults and magic values have one source of truth.
// Import via `use crate::config::constants::*;`.

/// Provider used when nothing else is configured.
pub const DEFAULT_PROVIDER: &str = "openai";

/// Root directory for session artifacts, relative to the working directory.
pub const DEFAULT_PLANS_DIR: &str = "plans";

/// Config lives at `~/.plancraft/config.toml`.
pub const CONFIG_DIR_NAME: &str = ".plancraft";
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// HTTP client timeout for a single provider request.
pub const REQUEST_TIMEOUT_SECS: u64 = 120;

pub const OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4";
pub const DEFAULT_OPENAI_TEMPERATURE: f32 = 0.7;

pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

/// Optional dotenv file read from the working directory.
pub const DOTENV_FILE: &str = ".env";

// Environment overrides
pub const ENV_PROVIDER: &str = "LLM_PROVIDER";
pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_GOOGLE_API_KEY: &str = "GOOGLE_API_KEY";
pub const ENV_PLANS_DIR: &str = "PLANCRAFT_PLANS_DIR";
