//! Shot entity - One unit of the scene's ordered shot list.
//!
//! `sequence_position` is the authoritative zero-based ordering of shots
//! within a scene. It is gap-tolerant: renumbering on insert/reorder/delete
//! is owned by shot-list management, and resolution only ever compares
//! positions, never assumes contiguity.

use serde::{Deserialize, Serialize};

use crate::ids::{SceneId, ShotId};

/// A single shot within a scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shot {
    id: ShotId,
    /// Scene this shot belongs to
    scene_id: SceneId,
    /// Human-facing shot code (e.g., "SH010")
    display_code: String,
    /// Zero-based position within the scene; the only ordering signal
    /// transformation resolution trusts
    sequence_position: i32,
    /// One-line action summary used by prompt construction
    action: Option<String>,
}

impl Shot {
    pub fn new(scene_id: SceneId, display_code: impl Into<String>, sequence_position: i32) -> Self {
        Self {
            id: ShotId::new(),
            scene_id,
            display_code: display_code.into(),
            sequence_position,
            action: None,
        }
    }

    /// Reconstruct from stored data (e.g., database)
    pub fn reconstruct(
        id: ShotId,
        scene_id: SceneId,
        display_code: String,
        sequence_position: i32,
        action: Option<String>,
    ) -> Self {
        Self {
            id,
            scene_id,
            display_code,
            sequence_position,
            action,
        }
    }

    // --- Accessors ---

    pub fn id(&self) -> ShotId {
        self.id
    }

    pub fn scene_id(&self) -> SceneId {
        self.scene_id
    }

    pub fn display_code(&self) -> &str {
        &self.display_code
    }

    pub fn sequence_position(&self) -> i32 {
        self.sequence_position
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    // --- Builder methods ---

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }
}

/// Look up a shot's sequence position by id in an order-bearing shot list.
pub fn position_of(shot_id: ShotId, shots: &[Shot]) -> Option<i32> {
    shots
        .iter()
        .find(|shot| shot.id() == shot_id)
        .map(Shot::sequence_position)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_of_finds_shot() {
        let scene_id = SceneId::new();
        let shots = vec![
            Shot::new(scene_id, "SH010", 0),
            Shot::new(scene_id, "SH020", 1),
            Shot::new(scene_id, "SH030", 2),
        ];
        assert_eq!(position_of(shots[1].id(), &shots), Some(1));
    }

    #[test]
    fn test_position_of_unknown_shot() {
        let shots = vec![Shot::new(SceneId::new(), "SH010", 0)];
        assert_eq!(position_of(ShotId::new(), &shots), None);
    }
}
