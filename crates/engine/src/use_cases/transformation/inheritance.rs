//! Cross-scene appearance inheritance.
//!
//! A scene should open on whatever its assets looked like at the end of the
//! previous scene. `last_confirmed_state` picks the post state of the latest
//! confirmed event for one asset; `InheritSceneState` maps that across the
//! assets two adjacent scenes share.

use std::collections::HashMap;
use std::sync::Arc;

use frameloom_domain::{
    AssetInstanceId, LastKnownState, SceneId, Shot, TransformationEvent,
};

use crate::infrastructure::ports::{
    RepoError, SceneAssetRepo, SceneRepo, ShotRepo, TransformationEventRepo,
};
use crate::use_cases::transformation::resolve::trigger_position_or_zero;

/// The post state of the latest confirmed event for one asset in one scene.
///
/// Max-by-trigger-order reduction over the same ordering rule resolution
/// uses; `None` when the asset has no confirmed events. Ties on trigger
/// position fall to the later event in input order.
pub fn last_confirmed_state(
    events: &[TransformationEvent],
    all_shots: &[Shot],
) -> Option<LastKnownState> {
    events
        .iter()
        .filter(|event| event.is_confirmed())
        .max_by_key(|event| trigger_position_or_zero(event, all_shots))
        .map(|event| {
            LastKnownState::new(
                event.post().description.clone(),
                event.post_status_tags().to_vec(),
                event.post().image_reference.clone(),
            )
        })
}

/// Use case: compute inherited baselines for a scene from its predecessor.
///
/// For each asset instance in the target scene whose master asset also
/// appears in the previous scene, returns the previous scene's last known
/// state keyed by the target scene's own instance id. Scene-asset
/// management decides whether to apply the seed; nothing is written here.
pub struct InheritSceneState {
    scenes: Arc<dyn SceneRepo>,
    shots: Arc<dyn ShotRepo>,
    scene_assets: Arc<dyn SceneAssetRepo>,
    events: Arc<dyn TransformationEventRepo>,
}

impl InheritSceneState {
    pub fn new(
        scenes: Arc<dyn SceneRepo>,
        shots: Arc<dyn ShotRepo>,
        scene_assets: Arc<dyn SceneAssetRepo>,
        events: Arc<dyn TransformationEventRepo>,
    ) -> Self {
        Self {
            scenes,
            shots,
            scene_assets,
            events,
        }
    }

    pub async fn execute(
        &self,
        scene_id: SceneId,
    ) -> Result<HashMap<AssetInstanceId, LastKnownState>, RepoError> {
        let scene = self
            .scenes
            .get(scene_id)
            .await?
            .ok_or_else(|| RepoError::not_found("Scene", scene_id))?;

        let Some(previous) = self
            .scenes
            .previous_in_project(scene.project_id(), scene.sequence_index())
            .await?
        else {
            // First scene of the project: nothing to inherit.
            return Ok(HashMap::new());
        };

        let previous_shots = self.shots.list_for_scene(previous.id()).await?;
        let previous_assets = self.scene_assets.list_for_scene(previous.id()).await?;
        let previous_events = self.events.list_for_scene(previous.id()).await?;
        let current_assets = self.scene_assets.list_for_scene(scene_id).await?;

        let mut inherited = HashMap::new();
        for current in &current_assets {
            let Some(previous_instance) = previous_assets
                .iter()
                .find(|asset| asset.asset_id() == current.asset_id())
            else {
                continue;
            };

            let instance_events: Vec<TransformationEvent> = previous_events
                .iter()
                .filter(|event| event.asset_instance_id() == previous_instance.instance_id())
                .cloned()
                .collect();

            if let Some(state) = last_confirmed_state(&instance_events, &previous_shots) {
                inherited.insert(current.instance_id(), state);
            }
        }

        Ok(inherited)
    }
}
