//! Resolution output value objects.
//!
//! `ResolvedOverride` is the output of transformation resolution: how an
//! asset's effective state deviates from its scene baseline at one shot.
//! `LastKnownState` is the output of the cross-scene inheritance query.
//! Both are ephemeral - computed fresh per call, never persisted.

use serde::{Deserialize, Serialize};

use crate::ids::AssetInstanceId;
use crate::value_objects::Appearance;

/// How an asset's effective state deviates from baseline at a given shot.
///
/// Assets absent from a resolution result are at baseline; callers must
/// treat "no override" as "use the scene asset's baseline appearance".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedOverride {
    /// The scene asset instance this override applies to
    pub asset_instance_id: AssetInstanceId,
    /// Effective appearance at the target shot
    pub effective: Appearance,
    /// True only while a within-shot transformation is visibly happening
    pub is_transforming_now: bool,
    /// Narration of the in-progress transformation, for prompt injection
    pub transformation_narrative: Option<String>,
    /// Post-transformation appearance, staged while `is_transforming_now`
    /// so prompt construction can describe both end states of the change
    pub staged_post: Option<Appearance>,
}

impl ResolvedOverride {
    /// An override that has settled on an effective appearance.
    pub fn settled(asset_instance_id: AssetInstanceId, effective: Appearance) -> Self {
        Self {
            asset_instance_id,
            effective,
            is_transforming_now: false,
            transformation_narrative: None,
            staged_post: None,
        }
    }

    /// An override for an asset that is mid-transformation at this shot.
    pub fn transforming(
        asset_instance_id: AssetInstanceId,
        effective: Appearance,
        narrative: Option<String>,
        staged_post: Appearance,
    ) -> Self {
        Self {
            asset_instance_id,
            effective,
            is_transforming_now: true,
            transformation_narrative: narrative,
            staged_post: Some(staged_post),
        }
    }
}

/// The final confirmed state of an asset at the end of a scene.
///
/// Used to seed the asset's baseline in the following scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LastKnownState {
    /// Post-state description of the latest confirmed event
    pub description: String,
    /// Condition tags carried forward ("poisoned", "disguised", ...)
    pub status_tags: Vec<String>,
    /// Post-state reference image, if one exists
    pub image_reference: Option<String>,
}

impl LastKnownState {
    pub fn new(
        description: impl Into<String>,
        status_tags: Vec<String>,
        image_reference: Option<String>,
    ) -> Self {
        Self {
            description: description.into(),
            status_tags,
            image_reference,
        }
    }
}
