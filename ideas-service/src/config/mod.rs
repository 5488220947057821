use secrecy::Secret;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

pub const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-5-sonnet-20241022";
pub const DEFAULT_ANTHROPIC_MAX_TOKENS: u32 = 4096;
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4-turbo-preview";

#[derive(Debug, Clone)]
pub struct IdeasConfig {
    pub common: core_config::Config,
    pub anthropic: AnthropicConfig,
    pub openai: OpenAiConfig,
    pub generation: GenerationConfig,
}

/// Primary provider. Tried first whenever `api_key` is set.
#[derive(Debug, Clone)]
pub struct AnthropicConfig {
    pub api_key: Option<Secret<String>>,
    pub model: String,
    pub max_tokens: u32,
    pub base_url: String,
}

/// Secondary provider. Tried after the primary fails, or alone.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: Option<Secret<String>>,
    pub model: String,
    pub base_url: String,
}

#[derive(Debug, Clone, Default)]
pub struct GenerationConfig {
    /// When set, a provider reply without a decodable ideas array counts as a
    /// provider failure instead of producing an empty list.
    pub fallback_on_unparseable: bool,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_ANTHROPIC_MODEL.to_string(),
            max_tokens: DEFAULT_ANTHROPIC_MAX_TOKENS,
            base_url: DEFAULT_ANTHROPIC_BASE_URL.to_string(),
        }
    }
}

impl AnthropicConfig {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(Secret::new(api_key.into()));
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_OPENAI_MODEL.to_string(),
            base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
        }
    }
}

impl OpenAiConfig {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(Secret::new(api_key.into()));
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

impl IdeasConfig {
    /// Config with no provider credentials; every request uses the local templates.
    pub fn offline(common: core_config::Config) -> Self {
        Self {
            common,
            anthropic: AnthropicConfig::default(),
            openai: OpenAiConfig::default(),
            generation: GenerationConfig::default(),
        }
    }

    pub fn load() -> Result<Self, AppError> {
        let mut common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        common_config.log_level =
            get_env("LOG_LEVEL", Some(common_config.log_level.as_str()), false)?;

        Ok(IdeasConfig {
            common: common_config,
            anthropic: AnthropicConfig {
                api_key: get_secret_env("ANTHROPIC_API_KEY"),
                model: get_env("ANTHROPIC_MODEL", Some(DEFAULT_ANTHROPIC_MODEL), is_prod)?,
                max_tokens: parse_env(
                    "ANTHROPIC_MAX_TOKENS",
                    &DEFAULT_ANTHROPIC_MAX_TOKENS.to_string(),
                )?,
                base_url: get_env("ANTHROPIC_BASE_URL", Some(DEFAULT_ANTHROPIC_BASE_URL), false)?,
            },
            openai: OpenAiConfig {
                api_key: get_secret_env("OPENAI_API_KEY"),
                model: get_env("OPENAI_MODEL", Some(DEFAULT_OPENAI_MODEL), is_prod)?,
                base_url: get_env("OPENAI_BASE_URL", Some(DEFAULT_OPENAI_BASE_URL), false)?,
            },
            generation: GenerationConfig {
                fallback_on_unparseable: parse_env("IDEAS_FALLBACK_ON_UNPARSEABLE", "false")?,
            },
        })
    }
}

/// Reads `key`, falling back to `default` outside production. An empty value
/// counts as unset. With `is_prod`, a missing value is an error even when a
/// default exists.
fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key).ok().filter(|val| !val.is_empty()) {
        Some(val) => Ok(val),
        None => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}

/// An unset or empty credential counts as absent.
fn get_secret_env(key: &str) -> Option<Secret<String>> {
    env::var(key)
        .ok()
        .filter(|val| !val.is_empty())
        .map(Secret::new)
}

fn parse_env<T>(key: &str, default: &str) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = get_env(key, Some(default), false)?;
    raw.parse().map_err(|e| {
        AppError::ConfigError(anyhow::anyhow!("{} has invalid value '{}': {}", key, raw, e))
    })
}
