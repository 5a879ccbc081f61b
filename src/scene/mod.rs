//! What the viewer draws
//!
//! A scene owns the fixed 4D geometry and turns the current angles into
//! wireframe triangles for one frame.

mod view_scene;

use serde::{Serialize, Deserialize};

pub use view_scene::ViewScene;

/// The two objects the viewer can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneKind {
    /// Tesseract wireframe
    Tesseract,
    /// The four coordinate axes
    Axes,
}

impl SceneKind {
    /// The other scene
    pub fn next(self) -> Self {
        match self {
            SceneKind::Tesseract => SceneKind::Axes,
            SceneKind::Axes => SceneKind::Tesseract,
        }
    }

    /// Caption shown in the window title
    pub fn caption(self) -> &'static str {
        match self {
            SceneKind::Tesseract => "Tesseract (4D Hypercube)",
            SceneKind::Axes => "4D Coordinate Axes",
        }
    }
}
