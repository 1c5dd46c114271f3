//! Rhythmic Ribbon MCP - ribbon-dance vocabulary for AI agents
//!
//! Exposes a fixed taxonomy of rhythmic gymnastics ribbon vocabulary as MCP
//! tools, plus one tool that assembles a brief from that taxonomy and hands it
//! to a language model for the final aesthetic synthesis.
//!
//! ## Three layers
//!
//! - **Layer 1** - deterministic taxonomy lookups (movement, spatial, temporal, physical)
//! - **Layer 2** - compositional rules and technical requirements
//! - **Layer 3** - a single style-aware model call
//!
//! Layers 1 and 2 cost nothing; the expensive call happens once, after the
//! brief is complete.
//!
//! ## Features
//!
//! - **`anthropic`** (default) - layer 3 synthesis through the Anthropic Messages API
//!
//! ## Example
//!
//! ```
//! use rhythmic_ribbon_mcp::{build_brief, EnhanceRequest};
//!
//! let request = EnhanceRequest::from_raw(
//!     "Opening sequence on the diagonal",
//!     Some("lyrical"),
//!     Some("spatial_exploration"),
//! )?;
//!
//! let brief = build_brief(&request);
//! assert!(brief.contains("## Style Framework: Lyrical"));
//! # Ok::<(), rhythmic_ribbon_mcp::RibbonError>(())
//! ```

pub mod config;
pub mod mcp;
pub mod prompt;
pub mod render;
pub mod synthesis;
pub mod taxonomy;
pub mod types;

// Re-export core types
pub use config::{
    Cli, ServerConfig, SynthesisConfig,
    // Default setting constants
    DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE, DEFAULT_TIMEOUT_MS,
    // Profile constants
    EXTENDED_MAX_TOKENS, EXTENDED_TIMEOUT_MS, QUICK_MAX_TOKENS, QUICK_TIMEOUT_MS,
};
pub use prompt::{build_brief, EnhanceRequest};
pub use synthesis::Synthesizer;
pub use taxonomy::{Category, Entry, Section, Style, StyleProfile, TechnicalFocus};
pub use types::{Enhancement, Result, RibbonError, Synthesis};

#[cfg(feature = "anthropic")]
pub use synthesis::AnthropicSynthesizer;
