//! Style variations (layer 3) and technical focus areas

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::RibbonError;

/// Expressive qualities of a performance style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleProfile {
    pub characteristics: &'static [&'static str],
    pub movement_quality: &'static str,
    pub typical_music: &'static str,
}

/// Performance style of a routine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    #[default]
    Classical,
    Contemporary,
    Dramatic,
    Lyrical,
    TechnicalVirtuosic,
}

impl Style {
    /// All styles in display order
    pub const ALL: [Style; 5] = [
        Style::Classical,
        Style::Contemporary,
        Style::Dramatic,
        Style::Lyrical,
        Style::TechnicalVirtuosic,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Style::Classical => "classical",
            Style::Contemporary => "contemporary",
            Style::Dramatic => "dramatic",
            Style::Lyrical => "lyrical",
            Style::TechnicalVirtuosic => "technical_virtuosic",
        }
    }

    pub fn profile(self) -> &'static StyleProfile {
        match self {
            Style::Classical => &CLASSICAL,
            Style::Contemporary => &CONTEMPORARY,
            Style::Dramatic => &DRAMATIC,
            Style::Lyrical => &LYRICAL,
            Style::TechnicalVirtuosic => &TECHNICAL_VIRTUOSIC,
        }
    }

    /// Parse a style, falling back to [`Style::Classical`] for unknown names
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            tracing::warn!(style = s, "Unknown style preference, using classical");
            Style::default()
        })
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Style {
    type Err = RibbonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        Style::ALL
            .into_iter()
            .find(|style| style.key() == wanted)
            .ok_or_else(|| RibbonError::InvalidInput(format!("unknown style: {s}")))
    }
}

static CLASSICAL: StyleProfile = StyleProfile {
    characteristics: &["elegant_lines", "refined_technique", "traditional_beauty"],
    movement_quality: "controlled_grace",
    typical_music: "ballet_classical_orchestral",
};

static CONTEMPORARY: StyleProfile = StyleProfile {
    characteristics: &["innovative_patterns", "unexpected_combinations", "modern_aesthetics"],
    movement_quality: "dynamic_freedom",
    typical_music: "electronic_fusion_experimental",
};

static DRAMATIC: StyleProfile = StyleProfile {
    characteristics: &["intense_expression", "theatrical_quality", "emotional_depth"],
    movement_quality: "passionate_power",
    typical_music: "cinematic_dramatic_intense",
};

static LYRICAL: StyleProfile = StyleProfile {
    characteristics: &["flowing_movements", "soft_quality", "poetic_expression"],
    movement_quality: "gentle_fluidity",
    typical_music: "melodic_vocal_emotive",
};

static TECHNICAL_VIRTUOSIC: StyleProfile = StyleProfile {
    characteristics: &["high_difficulty", "precision_execution", "mastery_display"],
    movement_quality: "brilliant_control",
    typical_music: "fast_complex_rhythmic",
};

/// Area of the vocabulary an enhancement should lean on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TechnicalFocus {
    #[default]
    Balanced,
    MovementRich,
    SpatialExploration,
    TemporalDynamics,
    ExpressiveEmphasis,
}

impl TechnicalFocus {
    pub const ALL: [TechnicalFocus; 5] = [
        TechnicalFocus::Balanced,
        TechnicalFocus::MovementRich,
        TechnicalFocus::SpatialExploration,
        TechnicalFocus::TemporalDynamics,
        TechnicalFocus::ExpressiveEmphasis,
    ];

    pub fn key(self) -> &'static str {
        match self {
            TechnicalFocus::Balanced => "balanced",
            TechnicalFocus::MovementRich => "movement_rich",
            TechnicalFocus::SpatialExploration => "spatial_exploration",
            TechnicalFocus::TemporalDynamics => "temporal_dynamics",
            TechnicalFocus::ExpressiveEmphasis => "expressive_emphasis",
        }
    }

    /// One-line guidance for the synthesis step
    pub fn emphasis(self) -> &'static str {
        match self {
            TechnicalFocus::Balanced => {
                "Distribute attention evenly across movement, space, time and expression"
            }
            TechnicalFocus::MovementRich => {
                "Favour dense apparatus handling: spirals, snakes, throws and wraps in quick succession"
            }
            TechnicalFocus::SpatialExploration => {
                "Travel through every height zone and plane; vary distance from the body"
            }
            TechnicalFocus::TemporalDynamics => {
                "Shape the routine with tempo changes, syncopation and contrasting transition timing"
            }
            TechnicalFocus::ExpressiveEmphasis => {
                "Let character and musical interpretation lead; technique serves the story"
            }
        }
    }

    /// Parse a focus, falling back to [`TechnicalFocus::Balanced`] for unknown names
    pub fn parse_or_default(s: &str) -> Self {
        s.parse().unwrap_or_else(|_| {
            tracing::warn!(focus = s, "Unknown technical focus, using balanced");
            TechnicalFocus::default()
        })
    }
}

impl fmt::Display for TechnicalFocus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TechnicalFocus {
    type Err = RibbonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        TechnicalFocus::ALL
            .into_iter()
            .find(|focus| focus.key() == wanted)
            .ok_or_else(|| RibbonError::InvalidInput(format!("unknown technical focus: {s}")))
    }
}

/// "Technical Virtuosic" and "technical-virtuosic" both map to the snake_case key
fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace([' ', '-'], "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_parse() {
        assert_eq!("lyrical".parse::<Style>().unwrap(), Style::Lyrical);
        assert_eq!(
            "Technical Virtuosic".parse::<Style>().unwrap(),
            Style::TechnicalVirtuosic
        );
        assert!("hip_hop".parse::<Style>().is_err());
    }

    #[test]
    fn test_style_fallback() {
        assert_eq!(Style::parse_or_default("hip_hop"), Style::Classical);
        assert_eq!(Style::parse_or_default("dramatic"), Style::Dramatic);
    }

    #[test]
    fn test_style_profiles() {
        let dramatic = Style::Dramatic.profile();
        assert_eq!(dramatic.movement_quality, "passionate_power");
        assert_eq!(dramatic.typical_music, "cinematic_dramatic_intense");

        for style in Style::ALL {
            assert_eq!(style.profile().characteristics.len(), 3, "{style}");
        }
    }

    #[test]
    fn test_focus_parse() {
        assert_eq!(
            "spatial-exploration".parse::<TechnicalFocus>().unwrap(),
            TechnicalFocus::SpatialExploration
        );
        assert_eq!(
            TechnicalFocus::parse_or_default("everything"),
            TechnicalFocus::Balanced
        );
    }

    #[test]
    fn test_serde_names_match_keys() {
        for style in Style::ALL {
            assert_eq!(
                serde_json::to_value(style).unwrap(),
                serde_json::Value::String(style.key().to_string())
            );
        }
        for focus in TechnicalFocus::ALL {
            assert_eq!(
                serde_json::to_value(focus).unwrap(),
                serde_json::Value::String(focus.key().to_string())
            );
        }
    }
}
