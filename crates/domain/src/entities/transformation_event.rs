//! TransformationEvent entity - A declared change in an asset's appearance.
//!
//! Costume changes, poisonings, magical transformations, disguises: each is
//! declared against a trigger shot and resolved per-shot by the
//! transformation resolution engine. Events start as unconfirmed drafts
//! (from upstream detection or manual entry) and only participate in
//! resolution once confirmed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::shot::{position_of, Shot};
use crate::ids::{AssetInstanceId, ShotId, TransformationEventId};
use crate::value_objects::Appearance;

/// How a transformation takes visual effect across the shot timeline.
///
/// Closed set: an unknown kind is a deserialization failure, never a
/// silent no-op in resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "type")]
pub enum TransformationKind {
    /// Fully visible from the trigger shot onward; atomic step change
    Instant,
    /// Visibly happening during the trigger shot itself, committed after
    WithinShot,
    /// Spread across several shots; only fully visible at the completion
    /// shot. Invisible to frozen-frame descriptions until then.
    Gradual {
        /// Shot at which the transformation is fully visible
        completion_shot_id: ShotId,
    },
}

impl TransformationKind {
    /// Completion shot reference, present only for gradual transformations.
    pub fn completion_shot_id(&self) -> Option<ShotId> {
        match self {
            Self::Gradual { completion_shot_id } => Some(*completion_shot_id),
            Self::Instant | Self::WithinShot => None,
        }
    }

    pub fn is_gradual(&self) -> bool {
        matches!(self, Self::Gradual { .. })
    }

    /// Get a display description of this kind
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Instant => "Instant",
            Self::WithinShot => "Within shot",
            Self::Gradual { .. } => "Gradual",
        }
    }
}

/// A transformation event declared against one asset instance in a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformationEvent {
    id: TransformationEventId,
    /// The scene asset this event transforms
    asset_instance_id: AssetInstanceId,
    /// Shot at which the transformation begins to take visual effect
    trigger_shot_id: ShotId,
    kind: TransformationKind,
    /// Appearance immediately before the transformation
    pre: Appearance,
    /// Appearance once the transformation has taken effect
    post: Appearance,
    /// Narration of the change, injected into prompts while it happens
    narrative: Option<String>,
    /// Condition tags carried into the post state ("poisoned", "disguised")
    post_status_tags: Vec<String>,
    /// Drafts are invisible to resolution until confirmed
    confirmed: bool,
    /// Joined trigger shot record, when the loader provided one
    trigger_shot: Option<Shot>,
    /// Joined completion shot record (gradual events only)
    completion_shot: Option<Shot>,
    created_at: DateTime<Utc>,
}

impl TransformationEvent {
    /// Create a new draft event (`confirmed = false`).
    pub fn new(
        asset_instance_id: AssetInstanceId,
        trigger_shot_id: ShotId,
        kind: TransformationKind,
        pre: Appearance,
        post: Appearance,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TransformationEventId::new(),
            asset_instance_id,
            trigger_shot_id,
            kind,
            pre,
            post,
            narrative: None,
            post_status_tags: Vec::new(),
            confirmed: false,
            trigger_shot: None,
            completion_shot: None,
            created_at: now,
        }
    }

    /// Reconstruct from stored data (e.g., database)
    pub fn reconstruct(
        id: TransformationEventId,
        asset_instance_id: AssetInstanceId,
        trigger_shot_id: ShotId,
        kind: TransformationKind,
        pre: Appearance,
        post: Appearance,
        narrative: Option<String>,
        post_status_tags: Vec<String>,
        confirmed: bool,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            asset_instance_id,
            trigger_shot_id,
            kind,
            pre,
            post,
            narrative,
            post_status_tags,
            confirmed,
            trigger_shot: None,
            completion_shot: None,
            created_at,
        }
    }

    // --- Accessors ---

    pub fn id(&self) -> TransformationEventId {
        self.id
    }

    pub fn asset_instance_id(&self) -> AssetInstanceId {
        self.asset_instance_id
    }

    pub fn trigger_shot_id(&self) -> ShotId {
        self.trigger_shot_id
    }

    pub fn kind(&self) -> &TransformationKind {
        &self.kind
    }

    pub fn pre(&self) -> &Appearance {
        &self.pre
    }

    pub fn post(&self) -> &Appearance {
        &self.post
    }

    pub fn narrative(&self) -> Option<&str> {
        self.narrative.as_deref()
    }

    pub fn post_status_tags(&self) -> &[String] {
        &self.post_status_tags
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    pub fn trigger_shot(&self) -> Option<&Shot> {
        self.trigger_shot.as_ref()
    }

    pub fn completion_shot(&self) -> Option<&Shot> {
        self.completion_shot.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    // --- Builder methods ---

    pub fn with_narrative(mut self, narrative: impl Into<String>) -> Self {
        self.narrative = Some(narrative.into());
        self
    }

    pub fn with_post_status_tags(mut self, tags: Vec<String>) -> Self {
        self.post_status_tags = tags;
        self
    }

    /// Attach the joined trigger shot record.
    pub fn with_trigger_shot(mut self, shot: Shot) -> Self {
        self.trigger_shot = Some(shot);
        self
    }

    /// Attach the joined completion shot record (gradual events).
    pub fn with_completion_shot(mut self, shot: Shot) -> Self {
        self.completion_shot = Some(shot);
        self
    }

    // --- Mutation methods ---

    /// Accept this event as authoritative for resolution.
    pub fn confirm(&mut self) {
        self.confirmed = true;
    }

    /// Send a confirmed event back to draft.
    pub fn unconfirm(&mut self) {
        self.confirmed = false;
    }

    // --- Ordering queries ---

    /// Sequence position of the trigger shot.
    ///
    /// Resolution order: the joined shot record if present, otherwise a
    /// lookup by id in `all_shots`. `None` means the order is unresolvable
    /// from the supplied data; the caller decides the fallback.
    pub fn trigger_position(&self, all_shots: &[Shot]) -> Option<i32> {
        self.trigger_shot
            .as_ref()
            .map(Shot::sequence_position)
            .or_else(|| position_of(self.trigger_shot_id, all_shots))
    }

    /// Sequence position of the completion shot, resolved the same way as
    /// the trigger. `None` for non-gradual kinds.
    pub fn completion_position(&self, all_shots: &[Shot]) -> Option<i32> {
        let completion_shot_id = self.kind.completion_shot_id()?;
        self.completion_shot
            .as_ref()
            .map(Shot::sequence_position)
            .or_else(|| position_of(completion_shot_id, all_shots))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SceneId;

    fn test_event(kind: TransformationKind) -> TransformationEvent {
        TransformationEvent::new(
            AssetInstanceId::new(),
            ShotId::new(),
            kind,
            Appearance::new("courtly gown"),
            Appearance::new("torn traveling cloak"),
            Utc::now(),
        )
    }

    #[test]
    fn test_new_event_starts_as_draft() {
        let event = test_event(TransformationKind::Instant);
        assert!(!event.is_confirmed());
    }

    #[test]
    fn test_confirm_and_unconfirm() {
        let mut event = test_event(TransformationKind::WithinShot);
        event.confirm();
        assert!(event.is_confirmed());
        event.unconfirm();
        assert!(!event.is_confirmed());
    }

    #[test]
    fn test_completion_shot_only_for_gradual() {
        let completion = ShotId::new();
        let gradual = TransformationKind::Gradual {
            completion_shot_id: completion,
        };
        assert_eq!(gradual.completion_shot_id(), Some(completion));
        assert_eq!(TransformationKind::Instant.completion_shot_id(), None);
        assert_eq!(TransformationKind::WithinShot.completion_shot_id(), None);
    }

    #[test]
    fn test_trigger_position_prefers_joined_shot() {
        let scene_id = SceneId::new();
        // The joined record says position 3; the shot list says 7 for the
        // same id. The join wins.
        let joined = Shot::new(scene_id, "SH040", 3);
        let stale = Shot::reconstruct(joined.id(), scene_id, "SH040".into(), 7, None);

        let event = TransformationEvent::new(
            AssetInstanceId::new(),
            joined.id(),
            TransformationKind::Instant,
            Appearance::new("pre"),
            Appearance::new("post"),
            Utc::now(),
        )
        .with_trigger_shot(joined);

        assert_eq!(event.trigger_position(&[stale]), Some(3));
    }

    #[test]
    fn test_trigger_position_falls_back_to_shot_list() {
        let scene_id = SceneId::new();
        let shot = Shot::new(scene_id, "SH020", 1);
        let event = test_event(TransformationKind::Instant);
        // Unknown trigger id, unknown list entry
        assert_eq!(event.trigger_position(&[shot.clone()]), None);

        let event = TransformationEvent::new(
            AssetInstanceId::new(),
            shot.id(),
            TransformationKind::Instant,
            Appearance::new("pre"),
            Appearance::new("post"),
            Utc::now(),
        );
        assert_eq!(event.trigger_position(&[shot]), Some(1));
    }

    #[test]
    fn test_kind_serializes_with_closed_tag() {
        let kind = TransformationKind::Gradual {
            completion_shot_id: ShotId::new(),
        };
        let json = serde_json::to_value(&kind).expect("serializable");
        assert_eq!(json["type"], "gradual");

        let bad: Result<TransformationKind, _> =
            serde_json::from_str(r#"{"type":"metamorphosis"}"#);
        assert!(bad.is_err());
    }
}
