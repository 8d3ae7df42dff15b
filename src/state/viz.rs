//! View and interaction state for the map canvas.

use super::rotation::{DragSession, RotationState};
use serde::{Deserialize, Serialize};

/// Which projection the canvas renders.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewMode {
    /// Orthographic globe.
    #[default]
    Globe,
    /// Flat equirectangular atlas.
    Atlas,
}

impl ViewMode {
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Globe => "Globe",
            ViewMode::Atlas => "Atlas",
        }
    }

    pub fn all() -> &'static [ViewMode] {
        &[ViewMode::Globe, ViewMode::Atlas]
    }

    /// Short identifier used in the URL query string.
    pub fn slug(&self) -> &'static str {
        match self {
            ViewMode::Globe => "globe",
            ViewMode::Atlas => "atlas",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "globe" => Some(ViewMode::Globe),
            "atlas" => Some(ViewMode::Atlas),
            _ => None,
        }
    }
}

/// How pointer input drives the rotation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    /// Dragging rotates the globe.
    #[default]
    Drag,
    /// The globe spins on its own; hovering a country pauses it.
    AutoRotate,
}

impl InteractionMode {
    pub fn label(&self) -> &'static str {
        match self {
            InteractionMode::Drag => "Drag to rotate",
            InteractionMode::AutoRotate => "Auto-rotate",
        }
    }

    pub fn all() -> &'static [InteractionMode] {
        &[InteractionMode::Drag, InteractionMode::AutoRotate]
    }
}

/// Visualization state: projection selection, rotation, and the tunables
/// exposed in the side panel.
pub struct VizState {
    pub view: ViewMode,
    pub mode: InteractionMode,
    pub rotation: RotationState,

    /// Active pointer-drag, if any.
    pub drag: Option<DragSession>,

    /// Whether auto-rotation is currently running.
    pub rotating: bool,

    /// Pixels of pointer travel per degree of rotation.
    pub drag_sensitivity: f64,

    /// Minimum projected area (px²) before a country gets a label.
    pub min_label_area: f64,

    /// Degrees added per animation frame in auto-rotate mode.
    pub auto_rotate_step: f64,
}

impl Default for VizState {
    fn default() -> Self {
        Self {
            view: ViewMode::default(),
            mode: InteractionMode::default(),
            rotation: RotationState::default(),
            drag: None,
            rotating: false,
            drag_sensitivity: 50.0,
            min_label_area: 250.0,
            auto_rotate_step: 0.2,
        }
    }
}
