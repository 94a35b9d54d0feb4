//! Transformation resolution use cases.
//!
//! `resolve` holds the per-shot override computation; `inheritance` carries
//! an asset's final confirmed state across scene boundaries.

pub mod inheritance;
pub mod resolve;

pub use inheritance::{last_confirmed_state, InheritSceneState};
pub use resolve::{resolve_overrides, ResolveShotTransformations};
