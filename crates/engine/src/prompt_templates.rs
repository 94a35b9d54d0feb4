//! Configurable prompt templates used by the engine.
//!
//! Each template has a hard-coded default and an environment-variable
//! override derived from its key (`frame.base` -> `FRAMELOOM_PROMPT_FRAME_BASE`).
//! Placeholders use `{name}` syntax and are substituted by `render`.

use serde::{Deserialize, Serialize};

/// Categories for organizing prompt templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PromptTemplateCategory {
    /// Frame image generation.
    Frame,
    /// Prompt rewriting by the LLM layer.
    Narration,
}

impl PromptTemplateCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Frame => "frame",
            Self::Narration => "narration",
        }
    }
}

/// Metadata about a prompt template.
#[derive(Debug, Clone, Serialize)]
pub struct PromptTemplateMetadata {
    /// Unique key for this template.
    pub key: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Category for grouping.
    pub category: PromptTemplateCategory,
    /// The hard-coded default value.
    pub default_value: &'static str,
}

/// All prompt template keys as constants.
pub mod keys {
    /// Skeleton of the frame generation prompt.
    pub const FRAME_BASE: &str = "frame.base";
    /// One line per asset in the frame prompt.
    pub const FRAME_ASSET_LINE: &str = "frame.asset_line";
    /// Extra line for an asset that is visibly transforming.
    pub const FRAME_TRANSFORMING_LINE: &str = "frame.transforming_line";
    /// Default negative prompt.
    pub const FRAME_NEGATIVE: &str = "frame.negative";
    /// System prompt for LLM prompt rewriting.
    pub const NARRATION_SYSTEM_PROMPT: &str = "narration.system_prompt";
}

/// Default values for all prompt templates.
pub mod defaults {
    /// Skeleton of the frame generation prompt.
    pub const FRAME_BASE: &str =
        "Film still, {visual_style}. Scene: {scene_title}. {shot_action}\n{asset_lines}";

    /// One line per asset.
    pub const FRAME_ASSET_LINE: &str = "{name}: {description}";

    /// Extra line for a transforming asset.
    pub const FRAME_TRANSFORMING_LINE: &str =
        "{name} is mid-transformation: {narrative} (becoming: {upcoming})";

    /// Default negative prompt.
    pub const FRAME_NEGATIVE: &str =
        "blurry, low quality, inconsistent character design, duplicate characters, extra limbs";

    /// System prompt for LLM prompt rewriting.
    pub const NARRATION_SYSTEM_PROMPT: &str = "You are a film pre-production assistant. \
Rewrite the supplied shot context JSON into one vivid, concrete image-generation prompt. \
Describe each asset exactly as its effective description states; if an asset is marked \
as transforming, depict the transformation in progress using its narrative.";
}

/// Registry of all templates, with environment overrides.
#[derive(Debug, Clone, Default)]
pub struct PromptTemplates;

impl PromptTemplates {
    pub fn new() -> Self {
        Self
    }

    /// All known templates with their metadata.
    pub fn catalog() -> Vec<PromptTemplateMetadata> {
        vec![
            PromptTemplateMetadata {
                key: keys::FRAME_BASE,
                label: "Frame prompt skeleton",
                category: PromptTemplateCategory::Frame,
                default_value: defaults::FRAME_BASE,
            },
            PromptTemplateMetadata {
                key: keys::FRAME_ASSET_LINE,
                label: "Frame asset line",
                category: PromptTemplateCategory::Frame,
                default_value: defaults::FRAME_ASSET_LINE,
            },
            PromptTemplateMetadata {
                key: keys::FRAME_TRANSFORMING_LINE,
                label: "Frame transforming asset line",
                category: PromptTemplateCategory::Frame,
                default_value: defaults::FRAME_TRANSFORMING_LINE,
            },
            PromptTemplateMetadata {
                key: keys::FRAME_NEGATIVE,
                label: "Negative prompt",
                category: PromptTemplateCategory::Frame,
                default_value: defaults::FRAME_NEGATIVE,
            },
            PromptTemplateMetadata {
                key: keys::NARRATION_SYSTEM_PROMPT,
                label: "Prompt rewriting system prompt",
                category: PromptTemplateCategory::Narration,
                default_value: defaults::NARRATION_SYSTEM_PROMPT,
            },
        ]
    }

    /// Resolve a template: environment override first, then the default.
    ///
    /// Unknown keys resolve to an empty template rather than failing; the
    /// caller ends up with a visibly broken prompt instead of a panic.
    pub fn get(&self, key: &str) -> String {
        if let Ok(value) = std::env::var(Self::env_var(key)) {
            return value;
        }
        Self::catalog()
            .iter()
            .find(|metadata| metadata.key == key)
            .map(|metadata| metadata.default_value.to_string())
            .unwrap_or_else(|| {
                tracing::warn!(key, "Unknown prompt template key");
                String::new()
            })
    }

    /// Environment variable name for a template key.
    pub fn env_var(key: &str) -> String {
        format!(
            "FRAMELOOM_PROMPT_{}",
            key.replace(['.', '-'], "_").to_uppercase()
        )
    }

    /// Substitute `{placeholder}` markers in a template.
    ///
    /// Unknown placeholders are left in place so a malformed template is
    /// visible in the output rather than silently dropped.
    pub fn render(template: &str, substitutions: &[(&str, &str)]) -> String {
        let mut rendered = template.to_string();
        for (name, value) in substitutions {
            rendered = rendered.replace(&format!("{{{name}}}"), value);
        }
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_returns_default() {
        let templates = PromptTemplates::new();
        assert_eq!(
            templates.get(keys::FRAME_ASSET_LINE),
            defaults::FRAME_ASSET_LINE
        );
    }

    #[test]
    fn test_env_var_name_derivation() {
        assert_eq!(
            PromptTemplates::env_var("frame.asset_line"),
            "FRAMELOOM_PROMPT_FRAME_ASSET_LINE"
        );
    }

    #[test]
    fn test_render_substitutes_placeholders() {
        let rendered = PromptTemplates::render(
            "{name}: {description}",
            &[("name", "Margaux"), ("description", "a torn cloak")],
        );
        assert_eq!(rendered, "Margaux: a torn cloak");
    }

    #[test]
    fn test_render_leaves_unknown_placeholders() {
        let rendered = PromptTemplates::render("{name}: {missing}", &[("name", "Margaux")]);
        assert_eq!(rendered, "Margaux: {missing}");
    }
}
