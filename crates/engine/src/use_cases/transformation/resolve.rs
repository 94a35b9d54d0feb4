//! Transformation resolution.
//!
//! Decides, for any shot in a scene, what each asset visually looks like at
//! that point in the narrative, given the scene's confirmed transformation
//! events. The result feeds prompt construction, so an asset's override here
//! directly determines the description and reference image used to generate
//! its frames.
//!
//! The core is a pure fold: group confirmed events by asset instance, sort
//! each group by trigger shot order, then walk the events forward carrying
//! an accumulator seeded from the asset's baseline.

use std::collections::HashSet;
use std::sync::Arc;

use frameloom_domain::{
    Appearance, AssetInstanceId, ResolvedOverride, SceneAsset, SceneId, Shot, ShotId,
    TransformationEvent, TransformationKind,
};

use crate::infrastructure::ports::{RepoError, SceneAssetRepo, ShotRepo, TransformationEventRepo};

/// Resolve per-asset overrides for one shot.
///
/// Pure and deterministic: no I/O, safe to call concurrently for different
/// shots over the same inputs. Returns one entry per asset whose effective
/// state at `target_shot` differs from baseline or that is actively
/// mid-transformation; assets absent from the result are at baseline.
pub fn resolve_overrides(
    target_shot: &Shot,
    scene_assets: &[SceneAsset],
    events: &[TransformationEvent],
    all_shots: &[Shot],
) -> Vec<ResolvedOverride> {
    let confirmed: Vec<&TransformationEvent> =
        events.iter().filter(|event| event.is_confirmed()).collect();
    if confirmed.is_empty() {
        // Cold start / no confirmed events: baseline for everyone.
        return Vec::new();
    }

    let known_instances: HashSet<AssetInstanceId> = scene_assets
        .iter()
        .map(|asset| asset.instance_id())
        .collect();
    for event in &confirmed {
        if !known_instances.contains(&event.asset_instance_id()) {
            tracing::warn!(
                event_id = %event.id(),
                asset_instance_id = %event.asset_instance_id(),
                "Skipping event for asset instance not present in scene"
            );
        }
    }

    let target_position = target_shot.sequence_position();
    let mut overrides = Vec::new();

    for asset in scene_assets {
        let mut asset_events: Vec<&TransformationEvent> = confirmed
            .iter()
            .filter(|event| event.asset_instance_id() == asset.instance_id())
            .copied()
            .collect();
        if asset_events.is_empty() {
            continue;
        }

        // Stable sort: events sharing a trigger position keep input order,
        // a last-writer-wins semantic authoring tools are expected to avoid.
        asset_events.sort_by_key(|event| trigger_position_or_zero(event, all_shots));

        let mut fold = AppearanceFold::from_baseline(asset.baseline().clone());
        for event in asset_events {
            fold.apply(event, target_position, all_shots);
        }

        if let Some(resolved) = fold.into_override(asset) {
            overrides.push(resolved);
        }
    }

    overrides
}

/// Accumulator for the per-asset event fold.
///
/// Starts at the asset baseline with no transformation in flight; each
/// event moves it forward in trigger order, so a later event's pre state
/// implicitly builds on an earlier event's post state. Declared pre
/// descriptions are not re-validated against the accumulator.
#[derive(Debug, Clone)]
struct AppearanceFold {
    baseline: Appearance,
    current: Appearance,
    is_transforming: bool,
    narrative: Option<String>,
    staged_post: Option<Appearance>,
}

impl AppearanceFold {
    fn from_baseline(baseline: Appearance) -> Self {
        Self {
            current: baseline.clone(),
            baseline,
            is_transforming: false,
            narrative: None,
            staged_post: None,
        }
    }

    fn apply(&mut self, event: &TransformationEvent, target_position: i32, all_shots: &[Shot]) {
        let trigger = trigger_position_or_zero(event, all_shots);
        match event.kind() {
            // Atomic step at the trigger shot; no transforming state.
            TransformationKind::Instant => {
                if target_position >= trigger {
                    self.commit(event.post().clone());
                }
            }
            // Three phases: before (pre), at the trigger (pre, visibly
            // transforming, post staged), after (post).
            TransformationKind::WithinShot => {
                if target_position == trigger {
                    self.is_transforming = true;
                    self.narrative = event.narrative().map(str::to_owned);
                    self.staged_post = Some(event.post().clone());
                } else if target_position > trigger {
                    self.commit(event.post().clone());
                }
            }
            // Invisible to frozen-frame descriptions until the completion
            // shot; shots in [trigger, completion) stay on the prior state.
            TransformationKind::Gradual { .. } => {
                let completion = completion_position_or_zero(event, all_shots);
                if target_position >= completion {
                    self.commit(event.post().clone());
                }
            }
        }
    }

    fn commit(&mut self, post: Appearance) {
        self.current = post;
        self.is_transforming = false;
        self.narrative = None;
        self.staged_post = None;
    }

    fn into_override(self, asset: &SceneAsset) -> Option<ResolvedOverride> {
        if self.current == self.baseline && !self.is_transforming {
            return None;
        }
        let resolved = match self.staged_post {
            Some(post) if self.is_transforming => ResolvedOverride::transforming(
                asset.instance_id(),
                self.current,
                self.narrative,
                post,
            ),
            _ => ResolvedOverride::settled(asset.instance_id(), self.current),
        };
        Some(resolved)
    }
}

/// Trigger shot order with the documented fallback chain: joined shot
/// record, then lookup in the scene shot list, then position 0.
///
/// The zero fallback can misorder events when upstream join data is
/// incomplete, so it is never silent.
pub(crate) fn trigger_position_or_zero(event: &TransformationEvent, all_shots: &[Shot]) -> i32 {
    match event.trigger_position(all_shots) {
        Some(position) => position,
        None => {
            tracing::warn!(
                event_id = %event.id(),
                trigger_shot_id = %event.trigger_shot_id(),
                "Trigger shot order unresolvable, falling back to position 0"
            );
            0
        }
    }
}

/// Completion shot order for gradual events, resolved like the trigger.
fn completion_position_or_zero(event: &TransformationEvent, all_shots: &[Shot]) -> i32 {
    match event.completion_position(all_shots) {
        Some(position) => position,
        None => {
            tracing::warn!(
                event_id = %event.id(),
                "Completion shot order unresolvable, falling back to position 0"
            );
            0
        }
    }
}

/// Use case wrapper: load a scene's shot list, assets, and events, then
/// resolve overrides for one target shot.
pub struct ResolveShotTransformations {
    shots: Arc<dyn ShotRepo>,
    scene_assets: Arc<dyn SceneAssetRepo>,
    events: Arc<dyn TransformationEventRepo>,
}

impl ResolveShotTransformations {
    pub fn new(
        shots: Arc<dyn ShotRepo>,
        scene_assets: Arc<dyn SceneAssetRepo>,
        events: Arc<dyn TransformationEventRepo>,
    ) -> Self {
        Self {
            shots,
            scene_assets,
            events,
        }
    }

    /// Resolve overrides for `shot_id` within `scene_id`.
    ///
    /// Draft events are loaded and discarded by the pure core, so the
    /// confirmed-only filter lives in exactly one place.
    pub async fn execute(
        &self,
        scene_id: SceneId,
        shot_id: ShotId,
    ) -> Result<Vec<ResolvedOverride>, RepoError> {
        let all_shots = self.shots.list_for_scene(scene_id).await?;
        let target_shot = all_shots
            .iter()
            .find(|shot| shot.id() == shot_id)
            .cloned()
            .ok_or_else(|| RepoError::not_found("Shot", shot_id))?;

        let scene_assets = self.scene_assets.list_for_scene(scene_id).await?;
        let events = self.events.list_for_scene(scene_id).await?;

        Ok(resolve_overrides(
            &target_shot,
            &scene_assets,
            &events,
            &all_shots,
        ))
    }
}
