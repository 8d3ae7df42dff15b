//! Central canvas UI: the projected world map.

use crate::geo::{self, CountryFeature, FeaturePath, GlobeProjection};
use crate::state::{AppState, DragSession, InteractionMode, ViewMode};
use eframe::egui::{self, Color32, Rect, Sense};
use std::f64::consts::PI;

pub fn render_canvas(ctx: &egui::Context, state: &mut AppState, features: &[CountryFeature]) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, Sense::click_and_drag());
        let rect = response.rect;

        painter.rect_filled(rect, 0.0, Color32::from_rgb(20, 20, 35));

        // The projector is rebuilt from the current rotation every frame;
        // nothing is cached across frames.
        let projection = build_projection(&rect, state);
        let paths: Vec<FeaturePath> = features
            .iter()
            .map(|f| geo::project_feature(&projection, f))
            .collect();

        geo::render_map(
            &painter,
            features,
            &paths,
            &projection,
            state.viz_state.min_label_area,
        );

        match state.viz_state.mode {
            InteractionMode::Drag => handle_drag(&response, state),
            InteractionMode::AutoRotate => handle_auto_rotate(&response, state, &paths),
        }
    });
}

/// Derives scale and translation from the canvas rectangle: the globe's
/// disc fills the smaller canvas dimension, the atlas fits the whole
/// world into the available space.
fn build_projection(rect: &Rect, state: &AppState) -> GlobeProjection {
    let viz = &state.viz_state;
    let scale = match viz.view {
        ViewMode::Globe => rect.width().min(rect.height()) as f64 / 2.0,
        ViewMode::Atlas => {
            (rect.width() as f64 / (2.0 * PI)).min(rect.height() as f64 / PI)
        }
    };

    GlobeProjection::new(viz.view, viz.rotation, scale, rect.center())
}

/// Drag mode: pointer-down opens a drag session, each pointer move applies
/// the origin-relative delta to the current rotation, pointer-up closes
/// the session.
fn handle_drag(response: &egui::Response, state: &mut AppState) {
    let viz = &mut state.viz_state;

    if response.drag_started() {
        if let Some(origin) = response.interact_pointer_pos() {
            viz.drag = Some(DragSession::begin(origin));
        }
    }

    if viz.drag.is_some() && response.dragged() && response.drag_delta() != egui::Vec2::ZERO {
        if let (Some(session), Some(pos)) = (viz.drag, response.interact_pointer_pos()) {
            // Pointer-delta convention: delta_x = origin_x - current_x,
            // delta_y = current_y - origin_y.
            let delta_x = (session.origin.x - pos.x) as f64;
            let delta_y = (pos.y - session.origin.y) as f64;
            viz.rotation
                .apply_drag(delta_x, delta_y, viz.drag_sensitivity);
        }
    }

    if response.drag_stopped() {
        viz.drag = None;
    }
}

/// Auto-rotate mode: advance one fixed step per frame while rotating, and
/// pause when the pointer hovers any rendered country. Repaints are only
/// requested while the flag is set, so the per-frame callback ends with it.
fn handle_auto_rotate(response: &egui::Response, state: &mut AppState, paths: &[FeaturePath]) {
    let viz = &mut state.viz_state;

    if !viz.rotating {
        return;
    }

    if let Some(pos) = response.hover_pos() {
        if paths.iter().any(|p| geo::point_in_rings(pos, &p.rings)) {
            viz.rotating = false;
            return;
        }
    }

    viz.rotation.step_lambda(viz.auto_rotate_step);
    response.ctx.request_repaint();
}
