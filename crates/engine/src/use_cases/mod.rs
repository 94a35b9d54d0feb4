//! Use cases - Pipeline stage orchestration.
//!
//! Each module covers one stage of the pre-production pipeline that this
//! repository owns. Use cases load through port traits and delegate the
//! actual computation to pure functions over domain types.

pub mod prompts;
pub mod transformation;

// Re-export main types
pub use prompts::BuildShotPrompt;
pub use transformation::{InheritSceneState, ResolveShotTransformations};
