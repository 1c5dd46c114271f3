//! MCP Server implementation using the official rmcp SDK
//!
//! Exposes the ribbon vocabulary and prompt enhancement via the Model Context Protocol.

use std::sync::Arc;

use rmcp::{
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::*,
    schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::ServerConfig;
use crate::prompt::{build_brief, EnhanceRequest};
use crate::render;
use crate::synthesis::Synthesizer;
use crate::types::{Enhancement, RibbonError};

// ============================================================================
// Request Types
// ============================================================================

/// Parameters for the ribbon_enhance_prompt tool
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct EnhancePromptParams {
    /// Natural language description of the routine or concept
    #[schemars(description = "Natural language description of the routine or concept")]
    pub routine_description: String,
    /// Desired style
    #[serde(default)]
    #[schemars(
        description = "Desired style: classical, contemporary, dramatic, lyrical, technical_virtuosic (default classical)"
    )]
    pub style_preference: Option<String>,
    /// Focus area
    #[serde(default)]
    #[schemars(
        description = "Focus area: balanced, movement_rich, spatial_exploration, temporal_dynamics, expressive_emphasis (default balanced)"
    )]
    pub technical_focus: Option<String>,
}

// ============================================================================
// MCP Service
// ============================================================================

/// Rhythmic Ribbon MCP Service
///
/// Vocabulary tools are pure lookups. `ribbon_enhance_prompt` additionally
/// calls the configured [`Synthesizer`], if any.
#[derive(Clone)]
pub struct RibbonService {
    /// Layer 3 model, absent when synthesis is disabled
    synthesizer: Option<Arc<dyn Synthesizer>>,
    /// Tool router for rmcp
    tool_router: ToolRouter<Self>,
}

impl RibbonService {
    /// Service that returns briefs without synthesis
    pub fn new() -> Self {
        Self {
            synthesizer: None,
            tool_router: Self::tool_router(),
        }
    }

    /// Service that forwards briefs to `synthesizer`
    pub fn with_synthesizer(synthesizer: Arc<dyn Synthesizer>) -> Self {
        Self {
            synthesizer: Some(synthesizer),
            tool_router: Self::tool_router(),
        }
    }

    /// Build the service from resolved server settings
    pub fn from_config(config: &ServerConfig) -> crate::types::Result<Self> {
        match &config.api_key {
            #[cfg(feature = "anthropic")]
            Some(key) => {
                let synthesizer =
                    crate::synthesis::AnthropicSynthesizer::new(key.clone(), config.synthesis.clone())?;
                info!(model = %config.synthesis.model, "Aesthetic synthesis enabled");
                Ok(Self::with_synthesizer(Arc::new(synthesizer)))
            }
            #[cfg(not(feature = "anthropic"))]
            Some(_) => {
                warn!("API key supplied but the `anthropic` feature is disabled; synthesis is off");
                Ok(Self::new())
            }
            None => {
                info!("No API key configured; returning briefs without synthesis");
                Ok(Self::new())
            }
        }
    }

    /// Whether briefs are forwarded to a model
    pub fn synthesis_enabled(&self) -> bool {
        self.synthesizer.is_some()
    }

    /// Names of all registered tools
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|tool| tool.name.to_string())
            .collect()
    }

    /// Assemble the brief and run the optional synthesis
    pub async fn enhance(&self, params: EnhancePromptParams) -> crate::types::Result<Enhancement> {
        let request = EnhanceRequest::from_raw(
            &params.routine_description,
            params.style_preference.as_deref(),
            params.technical_focus.as_deref(),
        )?;
        let brief = build_brief(&request);
        let enhancement = Enhancement::brief_only(request.style, request.focus, brief);

        let Some(synthesizer) = &self.synthesizer else {
            debug!(style = %request.style, focus = %request.focus, "Returning brief without synthesis");
            return Ok(enhancement);
        };

        let synthesis = synthesizer.synthesize(&enhancement.brief).await?;
        info!(
            model = %synthesis.model,
            style = %request.style,
            focus = %request.focus,
            input_tokens = synthesis.input_tokens,
            output_tokens = synthesis.output_tokens,
            duration_ms = synthesis.duration_ms,
            "Synthesis complete"
        );
        Ok(enhancement.with_synthesis(synthesis))
    }
}

fn mcp_error(err: RibbonError) -> McpError {
    match err {
        RibbonError::InvalidInput(message) => McpError::invalid_params(message, None),
        other => {
            warn!(error = %other, "Tool call failed");
            McpError::internal_error(other.to_string(), None)
        }
    }
}

fn text(body: String) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::text(body)]))
}

#[tool_router]
impl RibbonService {
    /// Enhance a routine description with technical and aesthetic vocabulary
    ///
    /// Layers 1 and 2 build the brief deterministically; layer 3 is a single
    /// model call when synthesis is enabled.
    #[tool(
        description = "Enhance a ribbon routine description with technical and aesthetic vocabulary, then synthesize it with a language model when configured"
    )]
    pub async fn ribbon_enhance_prompt(
        &self,
        Parameters(params): Parameters<EnhancePromptParams>,
    ) -> Result<CallToolResult, McpError> {
        let enhancement = self.enhance(params).await.map_err(mcp_error)?;
        text(enhancement.into_text())
    }

    #[tool(description = "Get the complete taxonomy of ribbon movement patterns")]
    pub async fn ribbon_movement_vocabulary(&self) -> Result<CallToolResult, McpError> {
        text(render::movement_vocabulary())
    }

    #[tool(description = "Get the complete taxonomy of spatial relationships and floor patterns")]
    pub async fn ribbon_spatial_vocabulary(&self) -> Result<CallToolResult, McpError> {
        text(render::spatial_vocabulary())
    }

    #[tool(description = "Get the complete taxonomy of temporal dynamics and rhythm patterns")]
    pub async fn ribbon_temporal_vocabulary(&self) -> Result<CallToolResult, McpError> {
        text(render::temporal_vocabulary())
    }

    #[tool(description = "Get the complete taxonomy of physical properties and material behavior")]
    pub async fn ribbon_physical_properties(&self) -> Result<CallToolResult, McpError> {
        text(render::physical_properties())
    }

    #[tool(description = "Get compositional structure guidance and rules")]
    pub async fn ribbon_composition_guide(&self) -> Result<CallToolResult, McpError> {
        text(render::composition_guide())
    }

    #[tool(description = "Get available style variations and their characteristics")]
    pub async fn ribbon_style_variations(&self) -> Result<CallToolResult, McpError> {
        text(render::style_variations())
    }

    #[tool(description = "Get the complete visual vocabulary taxonomy across all layers")]
    pub async fn ribbon_full_taxonomy(&self) -> Result<CallToolResult, McpError> {
        text(render::full_taxonomy())
    }
}

impl Default for RibbonService {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for RibbonService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "rhythmic-ribbon-mcp".to_string(),
                title: Some("Rhythmic Ribbon Dance".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(
                "Rhythmic Ribbon MCP Server - Use the vocabulary tools for free deterministic \
                 lookups, then call ribbon_enhance_prompt once for the final aesthetic synthesis"
                    .to_string(),
            ),
            ..Default::default()
        }
    }
}
