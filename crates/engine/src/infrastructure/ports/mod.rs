//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is
//! concrete types. Ports exist for:
//! - Database access (persistence/CRUD is external to this repository)
//! - LLM calls (text generation is external)
//! - Image generation (job orchestration is external)
//! - Clock (for testing)

mod error;
mod external;
mod repos;
mod testing;

// =============================================================================
// Repository Ports
// =============================================================================
pub use repos::{SceneAssetRepo, SceneRepo, ShotRepo, TransformationEventRepo};

// =============================================================================
// External Service Ports
// =============================================================================
pub use external::{
    ChatMessage, FinishReason, ImageGenPort, LlmPort, LlmRequest, LlmResponse, MessageRole,
    TokenUsage,
};

// =============================================================================
// Testing Ports
// =============================================================================
pub use testing::ClockPort;

// =============================================================================
// Test-Only Mock Repositories (only available during test builds)
// =============================================================================
#[cfg(test)]
pub use repos::{
    MockSceneAssetRepo, MockSceneRepo, MockShotRepo, MockTransformationEventRepo,
};

#[cfg(test)]
pub use testing::MockClockPort;

// =============================================================================
// Error Types
// =============================================================================
pub use error::{ImageGenError, LlmError, RepoError};
