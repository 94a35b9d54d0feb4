//! Value objects - Immutable domain values with no identity.

pub mod appearance;
pub mod generation;
pub mod resolution;

pub use appearance::Appearance;
pub use generation::GenerationRequest;
pub use resolution::{LastKnownState, ResolvedOverride};
