//! Scene entity - One narrative unit of a project's treatment.

use serde::{Deserialize, Serialize};

use crate::ids::{ProjectId, SceneId};

/// A scene within a project.
///
/// Scenes are totally ordered within a project by `sequence_index`; the
/// previous/next relation drives cross-scene appearance inheritance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    id: SceneId,
    project_id: ProjectId,
    title: String,
    /// Short prose summary from the treatment
    synopsis: Option<String>,
    /// Zero-based position within the project
    sequence_index: i32,
    /// Visual style directive applied to every generated frame of the scene
    visual_style: Option<String>,
}

impl Scene {
    pub fn new(project_id: ProjectId, title: impl Into<String>, sequence_index: i32) -> Self {
        Self {
            id: SceneId::new(),
            project_id,
            title: title.into(),
            synopsis: None,
            sequence_index,
            visual_style: None,
        }
    }

    /// Reconstruct from stored data (e.g., database)
    pub fn reconstruct(
        id: SceneId,
        project_id: ProjectId,
        title: String,
        synopsis: Option<String>,
        sequence_index: i32,
        visual_style: Option<String>,
    ) -> Self {
        Self {
            id,
            project_id,
            title,
            synopsis,
            sequence_index,
            visual_style,
        }
    }

    // --- Accessors ---

    pub fn id(&self) -> SceneId {
        self.id
    }

    pub fn project_id(&self) -> ProjectId {
        self.project_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn synopsis(&self) -> Option<&str> {
        self.synopsis.as_deref()
    }

    pub fn sequence_index(&self) -> i32 {
        self.sequence_index
    }

    pub fn visual_style(&self) -> Option<&str> {
        self.visual_style.as_deref()
    }

    // --- Builder methods ---

    pub fn with_synopsis(mut self, synopsis: impl Into<String>) -> Self {
        self.synopsis = Some(synopsis.into());
        self
    }

    pub fn with_visual_style(mut self, visual_style: impl Into<String>) -> Self {
        self.visual_style = Some(visual_style.into());
        self
    }
}
