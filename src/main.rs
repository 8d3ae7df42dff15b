#![warn(clippy::all)]

//! Globe Viewer - an interactive rotatable world map.
//!
//! Loads country boundaries from a TopoJSON topology document, projects
//! them orthographically (globe) or equirectangularly (atlas), and lets
//! the user rotate the view by dragging or with an auto-rotate animation.

mod geo;
mod loader;
mod state;
mod ui;

use eframe::egui;
use geo::CountryFeature;
use loader::{TopologyChannel, TopologyResult};
use state::{AppState, RotationState, ViewMode};

// Native entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions::default();

    eframe::run_native(
        "Globe Viewer",
        native_options,
        Box::new(|cc| Ok(Box::new(GlobeApp::new(cc)))),
    )
}

// WASM entry point - main is not called on wasm32
#[cfg(target_arch = "wasm32")]
fn main() {}

/// Entry point for the WASM application.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub async fn start() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` messages to `console.log`:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");

        let canvas = document
            .get_element_by_id("app_canvas")
            .expect("Failed to find app_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("app_canvas was not a HtmlCanvasElement");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(GlobeApp::new(cc)))),
            )
            .await;

        // Remove the loading text once the app has loaded:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p>The app has crashed. See the developer console for details.</p>",
                    );
                    panic!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}

/// Main application state and logic.
pub struct GlobeApp {
    /// Application state containing all sub-states
    state: AppState,

    /// Loaded country features; empty until the topology arrives, and
    /// stays empty on load failure.
    features: Vec<CountryFeature>,

    /// Channel for the one-shot async topology load
    topology_channel: TopologyChannel,

    /// Monotonic instant of last URL push (for throttling to ~1/sec).
    last_url_push: web_time::Instant,
}

impl GlobeApp {
    /// Creates a new GlobeApp and kicks off the topology fetch.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let mut state = AppState::new();

        // Apply URL parameters (rotation, view mode)
        let url_params = state::url_state::parse_from_url();
        if let (Some(lambda), Some(phi)) = (url_params.lambda, url_params.phi) {
            state.viz_state.rotation = RotationState::new(lambda, phi);
        }
        if let Some(view) = url_params.view.as_deref().and_then(ViewMode::from_slug) {
            state.viz_state.view = view;
        }

        let topology_channel = TopologyChannel::new();
        topology_channel.fetch(cc.egui_ctx.clone());

        Self {
            state,
            features: Vec::new(),
            topology_channel,
            last_url_push: web_time::Instant::now(),
        }
    }

    /// Applies a completed topology load. Failures leave the feature list
    /// empty; the map renders without countries.
    fn handle_topology_result(&mut self, result: TopologyResult) {
        match result {
            TopologyResult::Loaded(features) => {
                log::info!("Loaded {} country features", features.len());
                self.state.status_message = format!("{} countries", features.len());
                self.features = features;
            }
            TopologyResult::Error(msg) => {
                log::error!("Topology load failed: {}", msg);
                self.state.status_message = "Failed to load world topology".to_string();
            }
        }
    }
}

impl eframe::App for GlobeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for the completed topology load
        if let Some(result) = self.topology_channel.try_recv() {
            self.handle_topology_result(result);
        }

        // Push current state to URL (throttled to once per second)
        {
            let now = web_time::Instant::now();
            if now.duration_since(self.last_url_push).as_secs_f64() >= 1.0 {
                self.last_url_push = now;
                state::url_state::push_to_url(
                    self.state.viz_state.rotation.lambda,
                    self.state.viz_state.rotation.phi,
                    self.state.viz_state.view.slug(),
                );
            }
        }

        // Side and top panels must be rendered before the central canvas
        ui::render_top_bar(ctx, &self.state);
        ui::render_side_panel(ctx, &mut self.state, self.features.len());
        ui::render_canvas(ctx, &mut self.state, &self.features);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_without_fetch() -> GlobeApp {
        GlobeApp {
            state: AppState::default(),
            features: Vec::new(),
            topology_channel: TopologyChannel::new(),
            last_url_push: web_time::Instant::now(),
        }
    }

    #[test]
    fn failed_load_leaves_features_empty() {
        let mut app = app_without_fetch();

        app.handle_topology_result(TopologyResult::Error("status 404".to_string()));

        assert!(app.features.is_empty());
        assert_eq!(app.state.status_message, "Failed to load world topology");
    }

    #[test]
    fn successful_load_populates_features() {
        let mut app = app_without_fetch();
        let features = vec![CountryFeature {
            name: "Alpha".to_string(),
            rings: Vec::new(),
        }];

        app.handle_topology_result(TopologyResult::Loaded(features));

        assert_eq!(app.features.len(), 1);
        assert_eq!(app.state.status_message, "1 countries");
    }
}
