// Configuration module
// Public interface for configuration loading

pub mod constants;
mod loader;
mod provider;
mod settings;

pub use loader::{
    default_config_path, env_with_fallback, load_config, load_config_with_env, read_dotenv,
    ConfigOverrides,
};
pub use provider::{ProviderEntry, ProviderKind};
pub use settings::{Config, ProviderSettings};
