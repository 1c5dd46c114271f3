//! Static vocabulary tables
//!
//! Keys and terms are authored in snake_case; rendering turns them into
//! readable headings. Order within every table is the display order.

use super::Entry::{List, Map, Text};
use super::Section;

// ============================================================================
// Layer 1: Deterministic taxonomy
// ============================================================================

pub static MOVEMENT_PATTERNS: Section = &[
    (
        "spirals",
        Map(&[
            ("types", List(&["vertical", "horizontal", "diagonal", "conical"])),
            ("properties", List(&["tight", "loose", "uniform", "progressive"])),
            ("dynamics", List(&["accelerating", "decelerating", "constant", "pulsing"])),
            (
                "technical_notes",
                Text("Arm must maintain consistent radius; wrist rotation drives spiral formation"),
            ),
        ]),
    ),
    (
        "circles",
        Map(&[
            ("types", List(&["full_circles", "half_circles", "figure_8", "infinity"])),
            ("planes", List(&["horizontal", "vertical", "diagonal", "tilted"])),
            ("sizes", List(&["small", "medium", "large", "giant"])),
            (
                "technical_notes",
                Text("Shoulder stability required; elbow extends for larger circles"),
            ),
        ]),
    ),
    (
        "snakes",
        Map(&[
            ("types", List(&["horizontal_snake", "vertical_snake", "diagonal_snake"])),
            ("wave_properties", List(&["amplitude", "frequency", "symmetry", "decay"])),
            ("transitions", List(&["into_spiral", "into_throw", "into_circle"])),
            (
                "technical_notes",
                Text("Rapid wrist oscillation; arm moves in opposite direction to ribbon"),
            ),
        ]),
    ),
    (
        "throws",
        Map(&[
            ("types", List(&["vertical", "boomerang", "stick_throw", "escape"])),
            ("heights", List(&["low", "medium", "high", "ceiling"])),
            ("rotations", List(&["none", "half_turn", "full_turn", "multiple"])),
            (
                "technical_notes",
                Text("Release point determines trajectory; catch requires visual tracking"),
            ),
        ]),
    ),
    (
        "wraps",
        Map(&[
            ("types", List(&["body_wrap", "limb_wrap", "neck_wrap", "waist_wrap"])),
            ("entry_methods", List(&["spiral_into", "throw_into", "pass_through"])),
            ("exit_methods", List(&["unwrap", "pull_through", "throw_out"])),
            (
                "technical_notes",
                Text("Tension control critical; body position affects wrap geometry"),
            ),
        ]),
    ),
    (
        "swings",
        Map(&[
            ("types", List(&["pendulum", "arc", "circular", "elliptical"])),
            ("amplitudes", List(&["small", "medium", "large", "full_extension"])),
            ("rhythms", List(&["regular", "syncopated", "accelerating", "decelerating"])),
            (
                "technical_notes",
                Text("Momentum management; gravity assists natural motion"),
            ),
        ]),
    ),
];

pub static SPATIAL_RELATIONSHIPS: Section = &[
    (
        "height_zones",
        Map(&[
            (
                "floor",
                Map(&[
                    ("range", Text("0-50cm")),
                    ("techniques", List(&["floor_rolls", "low_snakes", "ground_spirals"])),
                ]),
            ),
            (
                "low",
                Map(&[
                    ("range", Text("50cm-1m")),
                    ("techniques", List(&["low_circles", "leg_passes", "seated_elements"])),
                ]),
            ),
            (
                "mid",
                Map(&[
                    ("range", Text("1-1.5m")),
                    (
                        "techniques",
                        List(&["standard_circles", "body_wraps", "horizontal_patterns"]),
                    ),
                ]),
            ),
            (
                "high",
                Map(&[
                    ("range", Text("1.5-2.5m")),
                    (
                        "techniques",
                        List(&["overhead_circles", "vertical_spirals", "high_throws"]),
                    ),
                ]),
            ),
            (
                "ceiling",
                Map(&[
                    ("range", Text("2.5m+")),
                    (
                        "techniques",
                        List(&["maximum_throws", "ceiling_touches", "full_extension"]),
                    ),
                ]),
            ),
        ]),
    ),
    (
        "distance_from_body",
        Map(&[
            (
                "contact",
                Map(&[
                    ("range", Text("0-20cm")),
                    ("uses", List(&["wraps", "body_passes", "close_spirals"])),
                ]),
            ),
            (
                "near",
                Map(&[
                    ("range", Text("20-100cm")),
                    (
                        "uses",
                        List(&["standard_elements", "medium_circles", "controlled_patterns"]),
                    ),
                ]),
            ),
            (
                "mid",
                Map(&[
                    ("range", Text("1-2m")),
                    ("uses", List(&["extended_circles", "large_spirals", "spatial_fills"])),
                ]),
            ),
            (
                "far",
                Map(&[
                    ("range", Text("2-4m")),
                    (
                        "uses",
                        List(&["full_ribbon_extensions", "throws", "maximum_reach"]),
                    ),
                ]),
            ),
            (
                "extreme",
                Map(&[
                    ("range", Text("4m+")),
                    (
                        "uses",
                        List(&["stick_end_releases", "maximum_throws", "aerial_work"]),
                    ),
                ]),
            ),
        ]),
    ),
    (
        "planes",
        Map(&[
            (
                "horizontal",
                Map(&[
                    ("orientation", Text("parallel_to_floor")),
                    ("elements", List(&["circles", "snakes", "spirals"])),
                ]),
            ),
            (
                "vertical",
                Map(&[
                    ("orientation", Text("perpendicular_to_floor")),
                    ("elements", List(&["vertical_circles", "drops", "rises"])),
                ]),
            ),
            (
                "diagonal",
                Map(&[
                    ("orientation", Text("45_degrees")),
                    (
                        "elements",
                        List(&["diagonal_snakes", "tilted_spirals", "angled_throws"]),
                    ),
                ]),
            ),
            (
                "rotating",
                Map(&[
                    ("orientation", Text("changing")),
                    (
                        "elements",
                        List(&["plane_transitions", "3d_spirals", "complex_paths"]),
                    ),
                ]),
            ),
        ]),
    ),
    (
        "floor_patterns",
        Map(&[
            ("linear", List(&["straight_lines", "zigzags", "spiraling_lines"])),
            ("circular", List(&["circles", "ellipses", "figure_8s"])),
            ("geometric", List(&["triangles", "squares", "star_patterns"])),
            ("organic", List(&["curves", "waves", "freeform"])),
        ]),
    ),
];

pub static TEMPORAL_DYNAMICS: Section = &[
    (
        "speed_variations",
        Map(&[
            (
                "very_slow",
                Map(&[
                    ("tempo", Text("largo")),
                    (
                        "uses",
                        List(&["dramatic_holds", "controlled_tension", "lyrical_moments"]),
                    ),
                ]),
            ),
            (
                "slow",
                Map(&[
                    ("tempo", Text("adagio")),
                    (
                        "uses",
                        List(&["graceful_transitions", "flow_emphasis", "aesthetic_shapes"]),
                    ),
                ]),
            ),
            (
                "moderate",
                Map(&[
                    ("tempo", Text("andante")),
                    (
                        "uses",
                        List(&["standard_elements", "balanced_pacing", "technical_precision"]),
                    ),
                ]),
            ),
            (
                "fast",
                Map(&[
                    ("tempo", Text("allegro")),
                    (
                        "uses",
                        List(&["quick_transitions", "rapid_patterns", "energetic_sequences"]),
                    ),
                ]),
            ),
            (
                "very_fast",
                Map(&[
                    ("tempo", Text("presto")),
                    (
                        "uses",
                        List(&["lightning_snakes", "rapid_circles", "virtuosic_displays"]),
                    ),
                ]),
            ),
        ]),
    ),
    (
        "rhythmic_patterns",
        Map(&[
            (
                "regular",
                Map(&[
                    ("structure", Text("consistent_beats")),
                    ("feel", Text("steady_pulse")),
                ]),
            ),
            (
                "syncopated",
                Map(&[
                    ("structure", Text("off_beat_accents")),
                    ("feel", Text("unexpected_emphasis")),
                ]),
            ),
            (
                "polyrhythmic",
                Map(&[
                    ("structure", Text("multiple_rhythms")),
                    ("feel", Text("complex_layering")),
                ]),
            ),
            (
                "rubato",
                Map(&[
                    ("structure", Text("flexible_timing")),
                    ("feel", Text("expressive_freedom")),
                ]),
            ),
            (
                "metric_modulation",
                Map(&[
                    ("structure", Text("tempo_shifts")),
                    ("feel", Text("dynamic_changes")),
                ]),
            ),
        ]),
    ),
    (
        "acceleration_curves",
        Map(&[
            ("linear", Text("steady_increase")),
            ("exponential", Text("rapid_buildup")),
            ("logarithmic", Text("quick_start_then_slow")),
            ("sigmoid", Text("slow_fast_slow")),
            ("stepped", Text("discrete_speed_changes")),
        ]),
    ),
    (
        "transition_timing",
        Map(&[
            (
                "immediate",
                Map(&[
                    ("duration", Text("0-0.5s")),
                    ("character", Text("sharp_contrast")),
                ]),
            ),
            (
                "quick",
                Map(&[
                    ("duration", Text("0.5-1s")),
                    ("character", Text("clear_change")),
                ]),
            ),
            (
                "moderate",
                Map(&[
                    ("duration", Text("1-2s")),
                    ("character", Text("smooth_flow")),
                ]),
            ),
            (
                "gradual",
                Map(&[
                    ("duration", Text("2-4s")),
                    ("character", Text("seamless_blend")),
                ]),
            ),
            (
                "extended",
                Map(&[
                    ("duration", Text("4s+")),
                    ("character", Text("dramatic_transformation")),
                ]),
            ),
        ]),
    ),
];

pub static PHYSICAL_PROPERTIES: Section = &[
    (
        "tension_states",
        Map(&[
            (
                "slack",
                Map(&[(
                    "characteristics",
                    List(&["loose_fabric", "natural_drape", "minimal_control"]),
                )]),
            ),
            (
                "light",
                Map(&[(
                    "characteristics",
                    List(&["gentle_tension", "floating_quality", "subtle_control"]),
                )]),
            ),
            (
                "medium",
                Map(&[(
                    "characteristics",
                    List(&["balanced_tension", "clear_shapes", "standard_control"]),
                )]),
            ),
            (
                "high",
                Map(&[(
                    "characteristics",
                    List(&["taut_fabric", "crisp_lines", "maximum_control"]),
                )]),
            ),
            (
                "variable",
                Map(&[(
                    "characteristics",
                    List(&["changing_tension", "dynamic_shapes", "expressive_control"]),
                )]),
            ),
        ]),
    ),
    (
        "arc_geometries",
        Map(&[
            (
                "parabolic",
                Map(&[
                    ("physics", Text("natural_throw_trajectory")),
                    ("aesthetics", Text("graceful_curves")),
                ]),
            ),
            (
                "circular",
                Map(&[
                    ("physics", Text("constant_radius")),
                    ("aesthetics", Text("perfect_shapes")),
                ]),
            ),
            (
                "elliptical",
                Map(&[
                    ("physics", Text("dual_focal_points")),
                    ("aesthetics", Text("dynamic_ovals")),
                ]),
            ),
            (
                "hyperbolic",
                Map(&[
                    ("physics", Text("diverging_paths")),
                    ("aesthetics", Text("dramatic_spreads")),
                ]),
            ),
            (
                "spiral",
                Map(&[
                    ("physics", Text("rotating_radius")),
                    ("aesthetics", Text("flowing_helixes")),
                ]),
            ),
        ]),
    ),
    (
        "wave_properties",
        Map(&[
            ("amplitude", List(&["small", "medium", "large", "extreme"])),
            ("frequency", List(&["slow", "moderate", "fast", "rapid"])),
            ("symmetry", List(&["symmetric", "asymmetric", "progressive", "chaotic"])),
            ("decay", List(&["sustained", "gradual", "rapid", "immediate"])),
        ]),
    ),
    (
        "material_behavior",
        Map(&[
            (
                "flow",
                Map(&[(
                    "characteristics",
                    List(&["smooth_motion", "continuous_fabric", "fluid_paths"]),
                )]),
            ),
            (
                "snap",
                Map(&[(
                    "characteristics",
                    List(&["sharp_movements", "crisp_sounds", "defined_endpoints"]),
                )]),
            ),
            (
                "float",
                Map(&[(
                    "characteristics",
                    List(&["airborne_time", "weightless_feel", "suspended_moments"]),
                )]),
            ),
            (
                "whip",
                Map(&[(
                    "characteristics",
                    List(&["crack_potential", "high_speed", "precision_control"]),
                )]),
            ),
        ]),
    ),
];

pub static COMPOSITIONAL_STRUCTURE: Section = &[
    (
        "element_sequences",
        Map(&[
            (
                "progressive_difficulty",
                List(&["simple_to_complex", "technical_buildup", "climactic_peak"]),
            ),
            (
                "thematic_variation",
                List(&["motif_introduction", "development", "recapitulation"]),
            ),
            (
                "contrasting_sections",
                List(&["varied_dynamics", "spatial_contrast", "tempo_shifts"]),
            ),
            (
                "narrative_arc",
                List(&["beginning", "development", "climax", "resolution"]),
            ),
        ]),
    ),
    (
        "body_ribbon_coordination",
        Map(&[
            (
                "synchronous",
                Map(&[
                    ("description", Text("body_and_ribbon_move_together")),
                    ("effect", Text("unified_motion")),
                ]),
            ),
            (
                "complementary",
                Map(&[
                    ("description", Text("body_and_ribbon_different_but_related")),
                    ("effect", Text("visual_interest")),
                ]),
            ),
            (
                "contrasting",
                Map(&[
                    ("description", Text("body_and_ribbon_oppose")),
                    ("effect", Text("dynamic_tension")),
                ]),
            ),
            (
                "independent",
                Map(&[
                    ("description", Text("body_and_ribbon_separate")),
                    ("effect", Text("complex_layers")),
                ]),
            ),
        ]),
    ),
    (
        "music_synchronization",
        Map(&[
            (
                "rhythmic_matching",
                Map(&[
                    ("precision", Text("hit_specific_beats")),
                    ("impact", Text("musical_clarity")),
                ]),
            ),
            (
                "phrasing",
                Map(&[
                    ("precision", Text("match_musical_phrases")),
                    ("impact", Text("artistic_interpretation")),
                ]),
            ),
            (
                "dynamic_parallel",
                Map(&[
                    ("precision", Text("match_volume_intensity")),
                    ("impact", Text("emotional_resonance")),
                ]),
            ),
            (
                "structural_alignment",
                Map(&[
                    ("precision", Text("match_musical_form")),
                    ("impact", Text("choreographic_coherence")),
                ]),
            ),
        ]),
    ),
    (
        "spatial_progression",
        Map(&[
            (
                "expanding",
                List(&["center_to_periphery", "small_to_large", "contained_to_open"]),
            ),
            (
                "contracting",
                List(&["periphery_to_center", "large_to_small", "open_to_contained"]),
            ),
            (
                "traveling",
                List(&["diagonal_crosses", "circular_paths", "linear_trajectories"]),
            ),
            (
                "stationary",
                List(&["fixed_location", "vertical_exploration", "depth_variation"]),
            ),
        ]),
    ),
];

// ============================================================================
// Layer 2: Compositional rules and technical requirements
// ============================================================================

pub static COMPOSITIONAL_RULES: Section = &[
    (
        "technical_requirements",
        Map(&[
            (
                "code_of_points_2025",
                Map(&[
                    (
                        "difficulty_groups",
                        List(&["Jumps/Leaps", "Balance", "Rotations", "Flexibility"]),
                    ),
                    ("apparatus_mastery", List(&["Throws", "Catches", "Manipulation"])),
                    (
                        "risk_elements",
                        List(&["High_throws", "Complex_catches", "Dynamic_work"]),
                    ),
                    (
                        "artistic_components",
                        List(&["Musicality", "Expression", "Character"]),
                    ),
                ]),
            ),
            (
                "element_combinations",
                Map(&[
                    (
                        "valid_sequences",
                        List(&[
                            "throw_rotation_catch",
                            "spiral_throw_spiral",
                            "snake_circle_snake",
                            "wrap_unwrap_throw",
                        ]),
                    ),
                    (
                        "transition_requirements",
                        List(&["smooth_flow", "logical_progression", "technical_feasibility"]),
                    ),
                ]),
            ),
        ]),
    ),
    (
        "aesthetic_principles",
        Map(&[
            (
                "visual_balance",
                List(&["symmetry_asymmetry", "height_variation", "spatial_distribution"]),
            ),
            (
                "flow_continuity",
                List(&["seamless_transitions", "momentum_maintenance", "organic_development"]),
            ),
            (
                "dynamic_range",
                List(&["quiet_moments", "explosive_peaks", "gradual_buildups"]),
            ),
            (
                "expressive_clarity",
                List(&["intentional_movements", "clear_character", "emotional_connection"]),
            ),
        ]),
    ),
    (
        "musicality_rules",
        Map(&[
            (
                "structural_alignment",
                List(&["intro_matches_music", "climax_synchronized", "ending_resolution"]),
            ),
            (
                "rhythmic_precision",
                List(&["beat_accuracy", "phrase_matching", "accent_emphasis"]),
            ),
            (
                "interpretive_freedom",
                List(&["rubato_moments", "personal_expression", "artistic_choices"]),
            ),
        ]),
    ),
];
