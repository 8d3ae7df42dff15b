//! Application state management.
//!
//! State is organized into logical groupings: rotation/drag arithmetic,
//! view and interaction settings, persisted settings, and URL state.

mod rotation;
mod settings;
pub mod url_state;
mod viz;

pub use rotation::{DragSession, RotationState};
pub use settings::ViewSettings;
pub use viz::{InteractionMode, ViewMode, VizState};

/// Root application state.
#[derive(Default)]
pub struct AppState {
    /// View, rotation, and interaction state.
    pub viz_state: VizState,

    /// Status message displayed in the top bar.
    pub status_message: String,
}

impl AppState {
    pub fn new() -> Self {
        let settings = ViewSettings::load();
        let viz_state = VizState {
            view: settings.view,
            mode: settings.mode,
            drag_sensitivity: settings.drag_sensitivity,
            min_label_area: settings.min_label_area,
            ..Default::default()
        };

        Self {
            viz_state,
            status_message: "Loading world topology...".to_string(),
        }
    }

    /// Snapshot of the persistable settings.
    pub fn settings(&self) -> ViewSettings {
        ViewSettings {
            view: self.viz_state.view,
            mode: self.viz_state.mode,
            drag_sensitivity: self.viz_state.drag_sensitivity,
            min_label_area: self.viz_state.min_label_area,
        }
    }
}
