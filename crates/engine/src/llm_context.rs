//! LLM context types - Types for building generation prompts from
//! production state.
//!
//! These DTOs are serialized to JSON for outbound LLM requests and are
//! intentionally owned by the engine (not the domain) to keep domain pure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use frameloom_domain::{ResolvedOverride, Scene, SceneAsset, Shot};

use crate::infrastructure::ports::{ChatMessage, LlmRequest};

/// Request for rewriting a shot's context into final prompt language.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotPromptRequest {
    /// Scene-level context
    pub scene: ScenePromptContext,
    /// The shot being generated
    pub shot: ShotPromptContext,
    /// Every asset present in the scene, at its effective state
    pub assets: Vec<AssetPromptContext>,
    /// When this context was assembled
    pub requested_at: DateTime<Utc>,
}

impl ShotPromptRequest {
    /// Package this context as an outbound LLM request.
    ///
    /// The external LLM layer uses it to rewrite the structured context
    /// into a single vivid generation prompt; this repository never makes
    /// the call itself.
    pub fn to_llm_request(
        &self,
        system_prompt: impl Into<String>,
    ) -> Result<LlmRequest, serde_json::Error> {
        let context_json = serde_json::to_string_pretty(self)?;
        Ok(LlmRequest::new(vec![ChatMessage::user(context_json)])
            .with_system_prompt(system_prompt))
    }
}

/// Context about the scene a shot belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenePromptContext {
    pub title: String,
    pub synopsis: Option<String>,
    /// Visual style directive applied to every frame of the scene
    pub visual_style: Option<String>,
}

impl ScenePromptContext {
    pub fn from_scene(scene: &Scene) -> Self {
        Self {
            title: scene.title().to_string(),
            synopsis: scene.synopsis().map(str::to_owned),
            visual_style: scene.visual_style().map(str::to_owned),
        }
    }
}

/// Context about the shot being generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotPromptContext {
    pub display_code: String,
    pub sequence_position: i32,
    pub action: Option<String>,
}

impl ShotPromptContext {
    pub fn from_shot(shot: &Shot) -> Self {
        Self {
            display_code: shot.display_code().to_string(),
            sequence_position: shot.sequence_position(),
            action: shot.action().map(str::to_owned),
        }
    }
}

/// One asset's effective state at the target shot.
///
/// Built from the baseline, then overlaid with a resolved override when
/// transformation resolution produced one for this instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPromptContext {
    pub asset_instance_id: String,
    pub name: String,
    /// "Character", "Prop", or "Location"
    pub kind: String,
    /// Effective description at this shot
    pub description: String,
    /// Effective reference image at this shot
    pub image_reference: Option<String>,
    /// True while a transformation is visibly happening in this shot
    pub is_transforming: bool,
    /// Narration to inject into the prompt while transforming
    pub transformation_narrative: Option<String>,
    /// Post-transformation description, staged while transforming
    pub upcoming_description: Option<String>,
    /// Post-transformation reference image, staged while transforming
    pub upcoming_image_reference: Option<String>,
}

impl AssetPromptContext {
    /// Baseline context for an asset with no override at this shot.
    pub fn from_baseline(asset: &SceneAsset) -> Self {
        Self {
            asset_instance_id: asset.instance_id().to_string(),
            name: asset.name().to_string(),
            kind: asset.kind().to_string(),
            description: asset.baseline().description.clone(),
            image_reference: asset.baseline().image_reference.clone(),
            is_transforming: false,
            transformation_narrative: None,
            upcoming_description: None,
            upcoming_image_reference: None,
        }
    }

    /// Overlay a resolved override onto the baseline context.
    pub fn with_override(asset: &SceneAsset, resolved: &ResolvedOverride) -> Self {
        Self {
            asset_instance_id: asset.instance_id().to_string(),
            name: asset.name().to_string(),
            kind: asset.kind().to_string(),
            description: resolved.effective.description.clone(),
            image_reference: resolved.effective.image_reference.clone(),
            is_transforming: resolved.is_transforming_now,
            transformation_narrative: resolved.transformation_narrative.clone(),
            upcoming_description: resolved
                .staged_post
                .as_ref()
                .map(|post| post.description.clone()),
            upcoming_image_reference: resolved
                .staged_post
                .as_ref()
                .and_then(|post| post.image_reference.clone()),
        }
    }
}
