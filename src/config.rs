use clap::Parser;
use config::{
    Config as ConfigCrate, // Need this for builder
    ConfigError as ConfigCrateError,
    Environment,
    File,
    Map,
    Source,
    Value,
};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

// Using constants for default values makes them easy to change.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_STRATEGY_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_LOGO_MODEL: &str = "imagen-4.0-generate-001";
pub const DEFAULT_EDIT_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_VIDEO_MODEL: &str = "veo-3.1-fast-generate-preview";
pub const DEFAULT_BRAND_LANGUAGE: &str = "English";
pub const DEFAULT_ANIMATION_PROMPT: &str = "Cinematic slow motion movement";
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;
pub const DEFAULT_MAX_POLL_ATTEMPTS: u32 = 120;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_OUTPUT_DIR: &str = ".";
pub const DEFAULT_LOG_LEVEL: &str = "info";

const ENV_PREFIX: &str = "BRAND_GENESIS";
const API_KEY_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] ConfigCrateError),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

// Serde struct for deserializing config file values.
// Optional fields allow for layered config (defaults -> file -> env -> args).
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
struct FileConfig {
    api_key: Option<String>,
    video_api_key: Option<String>,
    base_url: Option<String>,
    strategy_model: Option<String>,
    logo_model: Option<String>,
    edit_model: Option<String>,
    video_model: Option<String>,
    brand_language: Option<String>,
    animation_prompt: Option<String>,
    poll_interval_secs: Option<u64>,
    max_poll_attempts: Option<u32>,
    request_timeout_secs: Option<u64>,
    output_dir: Option<PathBuf>,
    log_file: Option<PathBuf>,
    log_level: Option<String>,
}

/// Resolved configuration. Every field has a value once loading is done.
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub video_api_key: Option<String>,
    pub base_url: String,
    pub strategy_model: String,
    pub logo_model: String,
    pub edit_model: String,
    pub video_model: String,
    pub brand_language: String,
    pub animation_prompt: String,
    pub poll_interval_secs: u64,
    /// 0 polls forever.
    pub max_poll_attempts: u32,
    pub request_timeout_secs: u64,
    pub output_dir: PathBuf,
    pub log_file: Option<PathBuf>,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let redact = |key: &Option<String>| key.as_ref().map(|_| "<redacted>");
        f.debug_struct("AppConfig")
            .field("api_key", &redact(&self.api_key))
            .field("video_api_key", &redact(&self.video_api_key))
            .field("base_url", &self.base_url)
            .field("strategy_model", &self.strategy_model)
            .field("logo_model", &self.logo_model)
            .field("edit_model", &self.edit_model)
            .field("video_model", &self.video_model)
            .field("brand_language", &self.brand_language)
            .field("animation_prompt", &self.animation_prompt)
            .field("poll_interval_secs", &self.poll_interval_secs)
            .field("max_poll_attempts", &self.max_poll_attempts)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("output_dir", &self.output_dir)
            .field("log_file", &self.log_file)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api_key: None,
            video_api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            strategy_model: DEFAULT_STRATEGY_MODEL.to_string(),
            logo_model: DEFAULT_LOGO_MODEL.to_string(),
            edit_model: DEFAULT_EDIT_MODEL.to_string(),
            video_model: DEFAULT_VIDEO_MODEL.to_string(),
            brand_language: DEFAULT_BRAND_LANGUAGE.to_string(),
            animation_prompt: DEFAULT_ANIMATION_PROMPT.to_string(),
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            max_poll_attempts: DEFAULT_MAX_POLL_ATTEMPTS,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            log_file: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn max_poll_attempts(&self) -> Option<u32> {
        (self.max_poll_attempts > 0).then_some(self.max_poll_attempts)
    }
}

// Command line arguments defined using clap.
#[derive(Parser, Debug, Default)]
#[command(author, version, about = "Generate a brand identity from a mission statement", long_about = None)]
pub struct CliArgs {
    /// Mission statement to prefill the input screen with
    pub mission: Option<String>,

    /// Path to a custom configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the resolved configuration and exit
    #[arg(long)]
    pub debug_config: bool,

    #[arg(long)]
    pub base_url: Option<String>,
    #[arg(long)]
    pub strategy_model: Option<String>,
    #[arg(long)]
    pub logo_model: Option<String>,
    #[arg(long)]
    pub edit_model: Option<String>,
    #[arg(long)]
    pub video_model: Option<String>,
    #[arg(long)]
    pub brand_language: Option<String>,
    #[arg(long)]
    pub animation_prompt: Option<String>,
    #[arg(long)]
    pub poll_interval_secs: Option<u64>,
    #[arg(long)]
    pub max_poll_attempts: Option<u32>,
    #[arg(long)]
    pub request_timeout_secs: Option<u64>,
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
    #[arg(long)]
    pub log_file: Option<PathBuf>,
    #[arg(long)]
    pub log_level: Option<String>,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "brand-genesis")
}

/// Loads configuration from all sources: args > environment > file > defaults.
pub fn load_config(args: &CliArgs) -> Result<AppConfig, ConfigError> {
    let env_source = Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__");
    // Missing env vars are fine; collect only fails on malformed values.
    let mut env_map: Map<String, Value> = env_source.collect().unwrap_or_else(|_| Map::new());

    // The conventional key variables fill in api_key when nothing more specific is set.
    if !env_map.contains_key("api_key") {
        if let Some(key) = API_KEY_ENV_VARS
            .iter()
            .find_map(|name| std::env::var(name).ok().filter(|v| !v.trim().is_empty()))
        {
            env_map.insert("api_key".to_string(), Value::from(key));
        }
    }

    build_config(args, Some(env_map))
}

// Separate function to allow testing with specific args and override sources
fn build_config(
    args: &CliArgs,
    override_source: Option<Map<String, Value>>,
) -> Result<AppConfig, ConfigError> {
    let config_file_path = args
        .config
        .clone()
        .or_else(|| project_dirs().map(|dirs| dirs.config_dir().join("config.toml")));

    let mut config_builder = ConfigCrate::builder();

    if let Some(ref path) = config_file_path {
        config_builder = config_builder.add_source(File::from(path.clone()).required(false));
    }

    // Overrides (environment or a test map) win over the file.
    if let Some(overrides) = override_source {
        for (key, value) in overrides {
            config_builder = config_builder.set_override(&key, value)?;
        }
    }

    let loaded: FileConfig = config_builder.build()?.try_deserialize()?;

    let config = AppConfig {
        api_key: loaded.api_key.filter(|k| !k.trim().is_empty()),
        video_api_key: loaded.video_api_key.filter(|k| !k.trim().is_empty()),
        base_url: args
            .base_url
            .clone()
            .or(loaded.base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        strategy_model: args
            .strategy_model
            .clone()
            .or(loaded.strategy_model)
            .unwrap_or_else(|| DEFAULT_STRATEGY_MODEL.to_string()),
        logo_model: args
            .logo_model
            .clone()
            .or(loaded.logo_model)
            .unwrap_or_else(|| DEFAULT_LOGO_MODEL.to_string()),
        edit_model: args
            .edit_model
            .clone()
            .or(loaded.edit_model)
            .unwrap_or_else(|| DEFAULT_EDIT_MODEL.to_string()),
        video_model: args
            .video_model
            .clone()
            .or(loaded.video_model)
            .unwrap_or_else(|| DEFAULT_VIDEO_MODEL.to_string()),
        brand_language: args
            .brand_language
            .clone()
            .or(loaded.brand_language)
            .unwrap_or_else(|| DEFAULT_BRAND_LANGUAGE.to_string()),
        animation_prompt: args
            .animation_prompt
            .clone()
            .or(loaded.animation_prompt)
            .unwrap_or_else(|| DEFAULT_ANIMATION_PROMPT.to_string()),
        poll_interval_secs: args
            .poll_interval_secs
            .or(loaded.poll_interval_secs)
            .unwrap_or(DEFAULT_POLL_INTERVAL_SECS),
        max_poll_attempts: args
            .max_poll_attempts
            .or(loaded.max_poll_attempts)
            .unwrap_or(DEFAULT_MAX_POLL_ATTEMPTS),
        request_timeout_secs: args
            .request_timeout_secs
            .or(loaded.request_timeout_secs)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        output_dir: args
            .output_dir
            .clone()
            .or(loaded.output_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
        log_file: args
            .log_file
            .clone()
            .or(loaded.log_file)
            .or_else(|| project_dirs().map(|dirs| dirs.data_dir().join("brand-genesis.log"))),
        log_level: args
            .log_level
            .clone()
            .or(loaded.log_level)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
    };

    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.poll_interval_secs == 0 {
        return Err(ConfigError::ValidationError(
            "poll_interval_secs must be at least 1".to_string(),
        ));
    }
    if config.request_timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "request_timeout_secs must be at least 1".to_string(),
        ));
    }
    if !config.base_url.starts_with("http://") && !config.base_url.starts_with("https://") {
        return Err(ConfigError::ValidationError(format!(
            "base_url must be an http(s) URL, got {:?}",
            config.base_url
        )));
    }
    Ok(())
}
