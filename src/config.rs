//! Synthesis settings and command-line configuration

use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::types::{RibbonError, Result};

// Default settings
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_MAX_TOKENS: u32 = 1_024;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
pub const DEFAULT_TIMEOUT_MS: u64 = 60_000; // 1 minute

// Profile settings
pub const QUICK_MAX_TOKENS: u32 = 512;
pub const QUICK_TIMEOUT_MS: u64 = 20_000;
pub const EXTENDED_MAX_TOKENS: u32 = 4_096;
pub const EXTENDED_TIMEOUT_MS: u64 = 180_000; // 3 minutes

/// Settings for the layer 3 model call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Model identifier sent to the provider
    pub model: String,
    /// Provider base URL, without the `/v1/messages` suffix
    pub base_url: String,
    /// Completion token cap
    pub max_tokens: u32,
    /// Sampling temperature (0.0 - 1.0)
    pub temperature: f32,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl SynthesisConfig {
    /// Create new settings with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Short, fast synthesis
    pub fn quick() -> Self {
        Self {
            max_tokens: QUICK_MAX_TOKENS,
            timeout_ms: QUICK_TIMEOUT_MS,
            ..Default::default()
        }
    }

    /// Long-form synthesis for full routine write-ups
    pub fn extended() -> Self {
        Self {
            max_tokens: EXTENDED_MAX_TOKENS,
            timeout_ms: EXTENDED_TIMEOUT_MS,
            ..Default::default()
        }
    }

    /// Builder: set model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Builder: set base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Builder: set max tokens
    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = max;
        self
    }

    /// Builder: set temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Builder: set timeout
    pub fn with_timeout_ms(mut self, timeout: u64) -> Self {
        self.timeout_ms = timeout;
        self
    }

    /// Reject settings the provider would refuse
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(RibbonError::Config("model must not be empty".to_string()));
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(RibbonError::Config(format!(
                "base URL must be http(s): {}",
                self.base_url
            )));
        }
        if self.max_tokens == 0 {
            return Err(RibbonError::Config("max_tokens must be positive".to_string()));
        }
        if !(0.0..=1.0).contains(&self.temperature) {
            return Err(RibbonError::Config(format!(
                "temperature must be within 0.0..=1.0, got {}",
                self.temperature
            )));
        }
        if self.timeout_ms == 0 {
            return Err(RibbonError::Config("timeout_ms must be positive".to_string()));
        }
        Ok(())
    }
}

/// Command-line arguments for the MCP server binary
#[derive(Parser, Debug, Clone)]
#[command(
    name = "rhythmic-ribbon-mcp",
    about = "MCP server exposing rhythmic gymnastics ribbon-dance vocabulary",
    version
)]
pub struct Cli {
    /// Anthropic API key; synthesis is disabled without one
    #[arg(long, env = "ANTHROPIC_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model used for aesthetic synthesis
    #[arg(long, env = "RIBBON_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Provider base URL
    #[arg(long, env = "ANTHROPIC_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Completion token cap
    #[arg(long, env = "RIBBON_MAX_TOKENS", default_value_t = DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,

    /// Sampling temperature
    #[arg(long, env = "RIBBON_TEMPERATURE", default_value_t = DEFAULT_TEMPERATURE)]
    pub temperature: f32,

    /// Request timeout in milliseconds
    #[arg(long, env = "RIBBON_TIMEOUT_MS", default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Return the assembled brief without calling a model
    #[arg(long, env = "RIBBON_NO_SYNTHESIS")]
    pub no_synthesis: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Resolved server settings
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// API key, present only when synthesis is enabled
    pub api_key: Option<String>,
    pub synthesis: SynthesisConfig,
}

impl ServerConfig {
    /// Whether `ribbon_enhance_prompt` forwards briefs to a model
    pub fn synthesis_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Cli {
    /// Validate arguments and resolve the server settings
    pub fn into_server_config(self) -> Result<ServerConfig> {
        let synthesis = SynthesisConfig::new()
            .with_model(self.model)
            .with_base_url(self.base_url)
            .with_max_tokens(self.max_tokens)
            .with_temperature(self.temperature)
            .with_timeout_ms(self.timeout_ms);
        synthesis.validate()?;

        let api_key = if self.no_synthesis {
            None
        } else {
            self.api_key.filter(|key| !key.trim().is_empty())
        };

        Ok(ServerConfig { api_key, synthesis })
    }
}
