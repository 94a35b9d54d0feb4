//! Appearance value object - How an asset looks at a point in the narrative.

use serde::{Deserialize, Serialize};

/// A concrete visual description of an asset, optionally backed by a
/// reference image used for generation consistency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appearance {
    /// Prose description fed into prompt construction
    pub description: String,
    /// Reference image (gallery path or URL), if one exists
    pub image_reference: Option<String>,
}

impl Appearance {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            image_reference: None,
        }
    }

    pub fn with_image(mut self, image_reference: impl Into<String>) -> Self {
        self.image_reference = Some(image_reference.into());
        self
    }

    /// Reconstruct from stored parts.
    pub fn from_parts(description: String, image_reference: Option<String>) -> Self {
        Self {
            description,
            image_reference,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_image() {
        let appearance = Appearance::new("red velvet gown").with_image("gallery/gown_01.png");
        assert_eq!(appearance.description, "red velvet gown");
        assert_eq!(appearance.image_reference.as_deref(), Some("gallery/gown_01.png"));
    }
}
