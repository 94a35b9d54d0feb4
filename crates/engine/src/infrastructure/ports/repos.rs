//! Repository port traits.
//!
//! CRUD and listing of scenes, shots, scene assets, and transformation
//! events is owned by the surrounding persistence layer; these traits are
//! the read/write boundary the use cases are wired against.

use async_trait::async_trait;
use frameloom_domain::{
    AssetInstanceId, ProjectId, Scene, SceneAsset, SceneId, Shot, ShotId, TransformationEvent,
    TransformationEventId,
};

use super::error::RepoError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SceneRepo: Send + Sync {
    async fn get(&self, id: SceneId) -> Result<Option<Scene>, RepoError>;
    async fn list_for_project(&self, project_id: ProjectId) -> Result<Vec<Scene>, RepoError>;

    /// The scene immediately before `sequence_index` in the project, if any.
    async fn previous_in_project(
        &self,
        project_id: ProjectId,
        sequence_index: i32,
    ) -> Result<Option<Scene>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShotRepo: Send + Sync {
    async fn get(&self, id: ShotId) -> Result<Option<Shot>, RepoError>;

    /// All shots of a scene, ordered by `sequence_position` ascending.
    async fn list_for_scene(&self, scene_id: SceneId) -> Result<Vec<Shot>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SceneAssetRepo: Send + Sync {
    async fn get(&self, id: AssetInstanceId) -> Result<Option<SceneAsset>, RepoError>;
    async fn list_for_scene(&self, scene_id: SceneId) -> Result<Vec<SceneAsset>, RepoError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransformationEventRepo: Send + Sync {
    async fn get(&self, id: TransformationEventId)
        -> Result<Option<TransformationEvent>, RepoError>;

    /// All events declared in a scene, confirmed and draft alike.
    async fn list_for_scene(&self, scene_id: SceneId)
        -> Result<Vec<TransformationEvent>, RepoError>;

    /// All events declared against one asset instance.
    async fn list_for_asset_instance(
        &self,
        instance_id: AssetInstanceId,
    ) -> Result<Vec<TransformationEvent>, RepoError>;

    async fn save(&self, event: &TransformationEvent) -> Result<(), RepoError>;
    async fn delete(&self, id: TransformationEventId) -> Result<(), RepoError>;
}
