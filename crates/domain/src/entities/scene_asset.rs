//! SceneAsset entity - An asset as it appears within one specific scene.
//!
//! Distinct from the project-wide master asset: the same character can
//! carry a different baseline appearance in every scene it appears in.

use serde::{Deserialize, Serialize};

use crate::ids::{AssetId, AssetInstanceId, SceneId};
use crate::value_objects::Appearance;

/// Category of a scene asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetKind {
    /// A character (the usual subject of transformation events)
    Character,
    /// A prop
    Prop,
    /// A location / set dressing
    Location,
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Character => write!(f, "Character"),
            Self::Prop => write!(f, "Prop"),
            Self::Location => write!(f, "Location"),
        }
    }
}

impl std::str::FromStr for AssetKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Character" => Ok(Self::Character),
            "Prop" => Ok(Self::Prop),
            "Location" => Ok(Self::Location),
            _ => Err(()),
        }
    }
}

/// An asset instance within one scene, carrying its baseline appearance.
///
/// The baseline is owned by scene-asset management; transformation
/// resolution reads it and never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneAsset {
    instance_id: AssetInstanceId,
    /// Scene this instance belongs to
    scene_id: SceneId,
    /// Project-wide master asset definition
    asset_id: AssetId,
    /// Display name ("Lady Margaux", "the chalice")
    name: String,
    kind: AssetKind,
    /// Default appearance before any transformation logic is applied
    baseline: Appearance,
}

impl SceneAsset {
    pub fn new(
        scene_id: SceneId,
        asset_id: AssetId,
        name: impl Into<String>,
        kind: AssetKind,
        baseline: Appearance,
    ) -> Self {
        Self {
            instance_id: AssetInstanceId::new(),
            scene_id,
            asset_id,
            name: name.into(),
            kind,
            baseline,
        }
    }

    /// Reconstruct from stored data (e.g., database)
    pub fn reconstruct(
        instance_id: AssetInstanceId,
        scene_id: SceneId,
        asset_id: AssetId,
        name: String,
        kind: AssetKind,
        baseline: Appearance,
    ) -> Self {
        Self {
            instance_id,
            scene_id,
            asset_id,
            name,
            kind,
            baseline,
        }
    }

    // --- Accessors ---

    pub fn instance_id(&self) -> AssetInstanceId {
        self.instance_id
    }

    pub fn scene_id(&self) -> SceneId {
        self.scene_id
    }

    pub fn asset_id(&self) -> AssetId {
        self.asset_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> AssetKind {
        self.kind
    }

    pub fn baseline(&self) -> &Appearance {
        &self.baseline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_kind_round_trips_through_str() {
        for kind in [AssetKind::Character, AssetKind::Prop, AssetKind::Location] {
            let parsed: AssetKind = kind.to_string().parse().expect("known kind");
            assert_eq!(parsed, kind);
        }
    }
}
