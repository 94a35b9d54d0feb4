//! Frameloom domain - Core domain types, value objects, and invariants.
//!
//! Pure types only: no I/O, no async, no logging. The engine crate builds
//! transformation resolution and prompt construction on top of these.

pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

// Re-export all entities (explicit list in entities/mod.rs)
pub use entities::{
    position_of, AssetKind, Scene, SceneAsset, Shot, TransformationEvent, TransformationKind,
};

pub use error::DomainError;

// Re-export value objects
pub use value_objects::{Appearance, GenerationRequest, LastKnownState, ResolvedOverride};

// Re-export ID types
pub use ids::{
    AssetId, AssetInstanceId, BatchId, ProjectId, SceneId, ShotId, TransformationEventId,
};
