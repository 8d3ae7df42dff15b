//! One-shot topology loading pipeline.
//!
//! Uses channel-based communication to bridge the async fetch with egui's
//! synchronous update loop: the fetch task sends its result through a
//! `std::sync::mpsc` channel and the app drains it in `update()`.

use crate::geo::{decode_topology, CountryFeature};
use eframe::egui;
use std::sync::mpsc::{channel, Receiver, Sender};

/// Path the topology document is fetched from on the web.
#[cfg(target_arch = "wasm32")]
const TOPOLOGY_URL: &str = "/data/world-110m.json";

/// Local path used by native builds.
#[cfg(not(target_arch = "wasm32"))]
const TOPOLOGY_PATH: &str = "assets/world-110m.json";

/// Result of the topology load.
pub enum TopologyResult {
    Loaded(Vec<CountryFeature>),
    Error(String),
}

/// Channel carrying the topology load result back to the UI thread.
pub struct TopologyChannel {
    sender: Sender<TopologyResult>,
    receiver: Receiver<TopologyResult>,
}

impl Default for TopologyChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl TopologyChannel {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self { sender, receiver }
    }

    /// Non-blocking check for a completed load.
    pub fn try_recv(&self) -> Option<TopologyResult> {
        self.receiver.try_recv().ok()
    }

    /// Spawns the one-shot fetch. There is no retry: any failure is
    /// reported once and the map stays empty.
    #[cfg(target_arch = "wasm32")]
    pub fn fetch(&self, ctx: egui::Context) {
        let sender = self.sender.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let result = match fetch_topology_text(TOPOLOGY_URL).await {
                Ok(raw) => decode_to_result(&raw),
                Err(e) => TopologyResult::Error(e),
            };
            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }

    /// Native variant: reads the document from the assets directory on a
    /// background thread.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn fetch(&self, ctx: egui::Context) {
        let sender = self.sender.clone();

        std::thread::spawn(move || {
            let result = match std::fs::read_to_string(TOPOLOGY_PATH) {
                Ok(raw) => decode_to_result(&raw),
                Err(e) => TopologyResult::Error(format!("Failed to read {}: {}", TOPOLOGY_PATH, e)),
            };
            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }
}

fn decode_to_result(raw: &str) -> TopologyResult {
    match decode_topology(raw) {
        Ok(features) => TopologyResult::Loaded(features),
        Err(e) => TopologyResult::Error(e),
    }
}

/// Fetches the topology document, treating any non-200 status as an error.
#[cfg(target_arch = "wasm32")]
async fn fetch_topology_text(url: &str) -> Result<String, String> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| format!("Failed to build request: {:?}", e))?;

    let window = web_sys::window().ok_or("No window")?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("Fetch failed: {:?}", e))?;

    let response: Response = response
        .dyn_into()
        .map_err(|_| "Fetch did not return a Response".to_string())?;

    if response.status() != 200 {
        return Err(format!(
            "Topology request returned status {}",
            response.status()
        ));
    }

    let text = JsFuture::from(
        response
            .text()
            .map_err(|e| format!("Failed to read response body: {:?}", e))?,
    )
    .await
    .map_err(|e| format!("Failed to read response body: {:?}", e))?;

    text.as_string().ok_or("Response body was not text".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_failure_becomes_error_result() {
        match decode_to_result("not a topology") {
            TopologyResult::Error(msg) => assert!(msg.contains("parse")),
            TopologyResult::Loaded(_) => panic!("expected an error"),
        }
    }

    #[test]
    fn channel_delivers_results_in_order() {
        let channel = TopologyChannel::new();
        assert!(channel.try_recv().is_none());

        channel
            .sender
            .send(TopologyResult::Error("boom".to_string()))
            .expect("send");

        match channel.try_recv() {
            Some(TopologyResult::Error(msg)) => assert_eq!(msg, "boom"),
            _ => panic!("expected the error result"),
        }
        assert!(channel.try_recv().is_none());
    }
}
