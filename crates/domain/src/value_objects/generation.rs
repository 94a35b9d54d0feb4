//! Generation request value object - The instruction packet handed to the
//! external image/video orchestrator.

use serde::{Deserialize, Serialize};

/// A fully-assembled generation instruction for one shot frame.
///
/// Produced by prompt construction; submitted to the image generation
/// service by the (external) job orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    /// Positive prompt text
    pub prompt: String,
    /// Negative prompt (if any)
    pub negative_prompt: Option<String>,
    /// Reference images for asset consistency (gallery paths or URLs)
    pub reference_images: Vec<String>,
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            prompt: prompt.into(),
            negative_prompt: None,
            reference_images: Vec::new(),
            width,
            height,
        }
    }

    pub fn with_negative_prompt(mut self, negative_prompt: impl Into<String>) -> Self {
        self.negative_prompt = Some(negative_prompt.into());
        self
    }

    pub fn with_reference_images(mut self, reference_images: Vec<String>) -> Self {
        self.reference_images = reference_images;
        self
    }
}
