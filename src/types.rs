//! Core types for prompt enhancement

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::taxonomy::{Style, TechnicalFocus};

/// Text produced by the layer 3 model call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Synthesis {
    /// Model output
    pub text: String,
    /// Model that produced the text
    pub model: String,
    /// Prompt tokens billed
    pub input_tokens: u32,
    /// Completion tokens billed
    pub output_tokens: u32,
    /// Round-trip time in milliseconds
    pub duration_ms: u64,
}

/// Result of `ribbon_enhance_prompt`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enhancement {
    /// Style the brief was built for (after fallback)
    pub style: Style,
    /// Focus the brief was built for (after fallback)
    pub focus: TechnicalFocus,
    /// Taxonomy-enriched brief (layers 1 and 2)
    pub brief: String,
    /// Model synthesis (layer 3), absent when synthesis is disabled
    pub synthesis: Option<Synthesis>,
}

impl Enhancement {
    /// Create an enhancement without synthesis
    pub fn brief_only(style: Style, focus: TechnicalFocus, brief: String) -> Self {
        Self {
            style,
            focus,
            brief,
            synthesis: None,
        }
    }

    /// Attach a synthesis
    pub fn with_synthesis(mut self, synthesis: Synthesis) -> Self {
        self.synthesis = Some(synthesis);
        self
    }

    /// Render as the text returned to the MCP client
    pub fn into_text(self) -> String {
        match self.synthesis {
            None => self.brief,
            Some(synthesis) => format!(
                "{}\n## Aesthetic Synthesis\n\n{}\n\n_Synthesized by {} ({} input / {} output tokens, {}ms)_\n",
                self.brief,
                synthesis.text.trim(),
                synthesis.model,
                synthesis.input_tokens,
                synthesis.output_tokens,
                synthesis.duration_ms,
            ),
        }
    }
}

/// Errors that can occur while serving vocabulary or synthesizing
#[derive(Debug, Error)]
pub enum RibbonError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[cfg(feature = "anthropic")]
    #[error("Synthesis request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Synthesis API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Synthesis returned no text")]
    EmptyResponse,

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RibbonError>;
