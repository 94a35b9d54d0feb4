//! Prompt construction use cases.

pub mod shot_prompt;

pub use shot_prompt::{
    BuildShotPrompt, ShotPromptOutput, DEFAULT_FRAME_HEIGHT, DEFAULT_FRAME_WIDTH,
};
