//! Entities - Domain objects with identity and lifecycle.

pub mod scene;
pub mod scene_asset;
pub mod shot;
pub mod transformation_event;

pub use scene::Scene;
pub use scene_asset::{AssetKind, SceneAsset};
pub use shot::{position_of, Shot};
pub use transformation_event::{TransformationEvent, TransformationKind};
