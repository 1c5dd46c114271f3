//! MCP tool tests
//!
//! Drive the service through its tool methods the way an MCP client would,
//! with a scripted synthesizer standing in for the model provider.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rhythmic_ribbon_mcp::mcp::{EnhancePromptParams, RibbonService};
use rhythmic_ribbon_mcp::{Category, Result, RibbonError, Synthesis, Synthesizer};
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, ErrorCode, RawContent},
    ServerHandler,
};

// ============================================================================
// Helpers
// ============================================================================

/// Synthesizer that records every brief and replies with a fixed text
struct ScriptedSynthesizer {
    reply: std::result::Result<&'static str, u16>,
    briefs: Mutex<Vec<String>>,
}

impl ScriptedSynthesizer {
    fn replying(text: &'static str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text),
            briefs: Mutex::new(Vec::new()),
        })
    }

    fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(status),
            briefs: Mutex::new(Vec::new()),
        })
    }

    fn briefs(&self) -> Vec<String> {
        self.briefs.lock().unwrap().clone()
    }
}

#[async_trait]
impl Synthesizer for ScriptedSynthesizer {
    fn model(&self) -> &str {
        "scripted"
    }

    async fn synthesize(&self, brief: &str) -> Result<Synthesis> {
        self.briefs.lock().unwrap().push(brief.to_string());
        match self.reply {
            Ok(text) => Ok(Synthesis {
                text: text.to_string(),
                model: "scripted".to_string(),
                input_tokens: 100,
                output_tokens: 20,
                duration_ms: 5,
            }),
            Err(status) => Err(RibbonError::Api {
                status,
                message: "overloaded_error: Overloaded".to_string(),
            }),
        }
    }
}

fn params(description: &str, style: Option<&str>, focus: Option<&str>) -> EnhancePromptParams {
    EnhancePromptParams {
        routine_description: description.to_string(),
        style_preference: style.map(str::to_string),
        technical_focus: focus.map(str::to_string),
    }
}

fn text_of(result: &CallToolResult) -> &str {
    match &result.content[0].raw {
        RawContent::Text(text_content) => text_content.text.as_str(),
        _ => panic!("Expected text content"),
    }
}

// ============================================================================
// Registration
// ============================================================================

#[test]
fn test_all_tools_registered() {
    let service = RibbonService::new();
    let mut names = service.tool_names();
    names.sort();

    assert_eq!(
        names,
        [
            "ribbon_composition_guide",
            "ribbon_enhance_prompt",
            "ribbon_full_taxonomy",
            "ribbon_movement_vocabulary",
            "ribbon_physical_properties",
            "ribbon_spatial_vocabulary",
            "ribbon_style_variations",
            "ribbon_temporal_vocabulary",
        ]
    );
}

#[test]
fn test_server_info_advertises_tools() {
    let info = RibbonService::new().get_info();
    assert_eq!(info.server_info.name, "rhythmic-ribbon-mcp");
    assert!(info.capabilities.tools.is_some());
    assert!(info.instructions.unwrap().contains("ribbon_enhance_prompt"));
}

// ============================================================================
// Vocabulary tools
// ============================================================================

#[tokio::test]
async fn test_vocabulary_tools_return_their_section() {
    let service = RibbonService::new();

    let cases = [
        (service.ribbon_movement_vocabulary().await, "## MOVEMENT PATTERNS"),
        (service.ribbon_spatial_vocabulary().await, "## SPATIAL RELATIONSHIPS"),
        (service.ribbon_temporal_vocabulary().await, "## TEMPORAL DYNAMICS"),
        (service.ribbon_physical_properties().await, "## PHYSICAL PROPERTIES"),
        (service.ribbon_composition_guide().await, "## COMPOSITIONAL STRUCTURE GUIDE"),
        (service.ribbon_style_variations().await, "## STYLE VARIATIONS"),
    ];

    for (result, heading) in cases {
        let result = result.unwrap();
        assert_ne!(result.is_error, Some(true));
        assert!(text_of(&result).contains(heading), "{heading}");
    }
}

#[tokio::test]
async fn test_movement_tool_lists_every_category() {
    let result = RibbonService::new().ribbon_movement_vocabulary().await.unwrap();
    let text = text_of(&result);

    for (category, _) in Category::MovementPatterns.section() {
        let heading = rhythmic_ribbon_mcp::render::title_case(category);
        assert!(text.contains(&format!("### {heading}")), "{heading}");
    }
}

#[tokio::test]
async fn test_full_taxonomy_tool() {
    let result = RibbonService::new().ribbon_full_taxonomy().await.unwrap();
    let text = text_of(&result);

    assert!(text.starts_with("# RHYTHMIC RIBBON DANCE VISUAL VOCABULARY\n"));
    assert!(text.contains("## COMPOSITIONAL STRUCTURE"));
    assert!(text.contains("### Technical Virtuosic"));
}

// ============================================================================
// ribbon_enhance_prompt
// ============================================================================

#[tokio::test]
async fn test_enhance_without_synthesis_returns_brief() {
    let service = RibbonService::new();
    assert!(!service.synthesis_enabled());

    let result = service
        .ribbon_enhance_prompt(Parameters(params(
            "Floor-level opening with a slow build",
            Some("dramatic"),
            Some("temporal_dynamics"),
        )))
        .await
        .unwrap();
    let text = text_of(&result);

    assert!(text.contains("## Original Concept\nFloor-level opening with a slow build\n"));
    assert!(text.contains("## Style Framework: Dramatic"));
    assert!(text.contains("2. Spatial Focus: Use temporal dynamics"));
    assert!(!text.contains("## Aesthetic Synthesis"));
}

#[tokio::test]
async fn test_enhance_unknown_style_falls_back_to_classical() {
    let result = RibbonService::new()
        .ribbon_enhance_prompt(Parameters(params("A solo", Some("breakdance"), None)))
        .await
        .unwrap();

    assert!(text_of(&result).contains("## Style Framework: Classical"));
}

#[tokio::test]
async fn test_enhance_forwards_brief_to_synthesizer() {
    let synthesizer = ScriptedSynthesizer::replying("Begin kneeling; release a vertical spiral.");
    let service = RibbonService::with_synthesizer(synthesizer.clone());
    assert!(service.synthesis_enabled());

    let result = service
        .ribbon_enhance_prompt(Parameters(params("A lyrical solo", Some("lyrical"), None)))
        .await
        .unwrap();
    let text = text_of(&result);

    let briefs = synthesizer.briefs();
    assert_eq!(briefs.len(), 1);
    assert!(briefs[0].contains("A lyrical solo"));
    assert!(text.starts_with(&briefs[0]));
    assert!(text.contains("## Aesthetic Synthesis\n\nBegin kneeling; release a vertical spiral."));
}

#[tokio::test]
async fn test_enhance_rejects_blank_description() {
    let synthesizer = ScriptedSynthesizer::replying("unused");
    let service = RibbonService::with_synthesizer(synthesizer.clone());

    let err = service
        .ribbon_enhance_prompt(Parameters(params("  ", None, None)))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    assert!(synthesizer.briefs().is_empty());
}

#[tokio::test]
async fn test_enhance_surfaces_synthesis_failure() {
    let service = RibbonService::with_synthesizer(ScriptedSynthesizer::failing(529));

    let err = service
        .ribbon_enhance_prompt(Parameters(params("A solo", None, None)))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
    assert!(err.message.contains("529"));
}

#[tokio::test]
async fn test_enhance_returns_structured_result() {
    let service = RibbonService::with_synthesizer(ScriptedSynthesizer::replying("prose"));

    let enhancement = service
        .enhance(params("A solo", Some("contemporary"), Some("movement_rich")))
        .await
        .unwrap();

    assert_eq!(enhancement.style, rhythmic_ribbon_mcp::Style::Contemporary);
    assert_eq!(
        enhancement.focus,
        rhythmic_ribbon_mcp::TechnicalFocus::MovementRich
    );
    assert_eq!(enhancement.synthesis.unwrap().text, "prose");
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_service_from_config_without_key() {
    let config = rhythmic_ribbon_mcp::ServerConfig {
        api_key: None,
        synthesis: rhythmic_ribbon_mcp::SynthesisConfig::default(),
    };
    let service = RibbonService::from_config(&config).unwrap();
    assert!(!service.synthesis_enabled());
}

#[cfg(feature = "anthropic")]
#[test]
fn test_service_from_config_with_key() {
    let config = rhythmic_ribbon_mcp::ServerConfig {
        api_key: Some("sk-test".to_string()),
        synthesis: rhythmic_ribbon_mcp::SynthesisConfig::quick(),
    };
    let service = RibbonService::from_config(&config).unwrap();
    assert!(service.synthesis_enabled());
}
