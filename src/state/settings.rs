//! View settings persisted across page reloads.
//!
//! Settings are stored in localStorage as JSON; any load failure falls
//! back to defaults. Native builds keep everything in memory.

use super::viz::{InteractionMode, ViewMode};
use serde::{Deserialize, Serialize};

/// User-tunable view settings worth keeping between sessions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewSettings {
    pub view: ViewMode,
    pub mode: InteractionMode,
    pub drag_sensitivity: f64,
    pub min_label_area: f64,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            view: ViewMode::default(),
            mode: InteractionMode::default(),
            drag_sensitivity: 50.0,
            min_label_area: 250.0,
        }
    }
}

impl ViewSettings {
    /// localStorage key for persisting settings.
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "globe_viewer_settings";

    /// Load settings from localStorage.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return Self::default(),
        };

        let storage = match window.local_storage() {
            Ok(Some(s)) => s,
            _ => return Self::default(),
        };

        let json = match storage.get_item(Self::STORAGE_KEY) {
            Ok(Some(s)) => s,
            _ => return Self::default(),
        };

        match serde_json::from_str(&json) {
            Ok(settings) => {
                log::info!("Loaded view settings from localStorage");
                settings
            }
            Err(e) => {
                log::warn!("Failed to parse view settings: {}", e);
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    /// Save settings to localStorage.
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let window = match web_sys::window() {
            Some(w) => w,
            None => return,
        };

        let storage = match window.local_storage() {
            Ok(Some(s)) => s,
            _ => return,
        };

        let json = match serde_json::to_string(self) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("Failed to serialize view settings: {}", e);
                return;
            }
        };

        if let Err(e) = storage.set_item(Self::STORAGE_KEY, &json) {
            log::warn!("Failed to save view settings: {:?}", e);
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_round_trip_as_json() {
        let settings = ViewSettings {
            view: ViewMode::Atlas,
            mode: InteractionMode::AutoRotate,
            drag_sensitivity: 75.0,
            min_label_area: 300.0,
        };

        let json = serde_json::to_string(&settings).expect("serializes");
        let back: ViewSettings = serde_json::from_str(&json).expect("deserializes");

        assert_eq!(back.view, ViewMode::Atlas);
        assert_eq!(back.mode, InteractionMode::AutoRotate);
        assert!((back.drag_sensitivity - 75.0).abs() < f64::EPSILON);
        assert!((back.min_label_area - 300.0).abs() < f64::EPSILON);
    }
}
