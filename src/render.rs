//! Markdown rendering of the vocabulary
//!
//! Every function here is pure: the same taxonomy always renders to the same
//! text, so MCP clients can cache tool output freely.

use crate::taxonomy::{COMPOSITIONAL_RULES, Category, Entry, Section, Style};

/// `"full_circles"` -> `"Full Circles"`
///
/// A letter is upper-cased when it does not follow another letter, so
/// `"3d_spirals"` becomes `"3D Spirals"`.
pub fn title_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut prev_alpha = false;
    for c in key.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}

/// `"movement_patterns"` -> `"MOVEMENT PATTERNS"`
pub fn heading_case(key: &str) -> String {
    key.replace('_', " ").to_uppercase()
}

/// Single-line rendering of any entry
pub fn inline(entry: &Entry) -> String {
    match entry {
        Entry::Text(text) => (*text).to_string(),
        Entry::List(terms) => terms.join(", "),
        Entry::Map(children) => children
            .iter()
            .map(|(k, v)| format!("{k}: {}", inline(v)))
            .collect::<Vec<_>>()
            .join("; "),
    }
}

/// Render one taxonomy section as Markdown
pub fn format_section(key: &str, section: Section) -> String {
    let mut lines = vec![format!("\n## {}\n", heading_case(key))];

    for (category, details) in section {
        lines.push(format!("\n### {}", title_case(category)));
        match details {
            Entry::Map(fields) => {
                for (field, value) in fields.iter() {
                    match value {
                        Entry::Map(nested) => {
                            lines.push(format!("\n**{}**:", title_case(field)));
                            for (k, v) in nested.iter() {
                                lines.push(format!("  - {k}: {}", inline(v)));
                            }
                        }
                        other => lines.push(format!("  - {field}: {}", inline(other))),
                    }
                }
            }
            other => lines.push(format!("  - {}", inline(other))),
        }
    }

    lines.join("\n")
}

/// Render a top-level category
pub fn category(category: Category) -> String {
    format_section(category.key(), category.section())
}

pub fn movement_vocabulary() -> String {
    category(Category::MovementPatterns)
}

pub fn spatial_vocabulary() -> String {
    category(Category::SpatialRelationships)
}

pub fn temporal_vocabulary() -> String {
    category(Category::TemporalDynamics)
}

pub fn physical_properties() -> String {
    category(Category::PhysicalProperties)
}

fn push_rules(out: &mut String) {
    for (rule_category, details) in COMPOSITIONAL_RULES {
        out.push_str(&format!("\n### {}\n", title_case(rule_category)));
        for (key, value) in details.entries() {
            out.push_str(&format!("\n**{}**:\n", title_case(key)));
            match value {
                Entry::Map(children) => {
                    for (k, v) in children.iter() {
                        out.push_str(&format!("  - {k}: {}\n", inline(v)));
                    }
                }
                other => out.push_str(&format!("  - {}\n", inline(other))),
            }
        }
    }
}

fn push_style(out: &mut String, style: Style) {
    let profile = style.profile();
    out.push_str(&format!("\n### {}\n", title_case(style.key())));
    out.push_str(&format!(
        "  - characteristics: {}\n",
        profile.characteristics.join(", ")
    ));
    out.push_str(&format!("  - movement_quality: {}\n", profile.movement_quality));
    out.push_str(&format!("  - typical_music: {}\n", profile.typical_music));
}

/// Compositional structure plus the layer 2 rules
pub fn composition_guide() -> String {
    let mut out = String::from("\n## COMPOSITIONAL STRUCTURE GUIDE\n");
    out.push_str(&category(Category::CompositionalStructure));
    out.push_str("\n\n## COMPOSITIONAL RULES\n");
    push_rules(&mut out);
    out
}

/// Catalogue of layer 3 styles
pub fn style_variations() -> String {
    let mut out = String::from("\n## STYLE VARIATIONS\n");
    for style in Style::ALL {
        push_style(&mut out, style);
    }
    out
}

/// Every layer of the vocabulary in one document
pub fn full_taxonomy() -> String {
    let mut out = String::from("# RHYTHMIC RIBBON DANCE VISUAL VOCABULARY\n");
    out.push_str("\n## Complete Taxonomy - All Layers\n");

    for c in Category::ALL {
        out.push_str(&category(c));
    }

    out.push_str("\n\n## COMPOSITIONAL RULES (Layer 2)\n");
    push_rules(&mut out);

    out.push_str("\n\n## STYLE VARIATIONS (Layer 3)\n");
    for style in Style::ALL {
        push_style(&mut out, style);
    }

    out.push_str("\n\n---\n");
    out.push_str("Three-Layer Architecture:\n");
    out.push_str("- Layer 1: Deterministic taxonomy (movement, spatial, temporal, physical)\n");
    out.push_str("- Layer 2: Compositional rules and technical requirements\n");
    out.push_str("- Layer 3: Style variations and expressive synthesis\n");
    out.push_str("\nCost optimization: ~60-80% savings vs pure LLM approaches\n");
    out
}
