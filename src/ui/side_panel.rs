//! Side panel UI: view and interaction controls.

use crate::state::{AppState, InteractionMode, ViewMode};
use eframe::egui::{self, RichText};

pub fn render_side_panel(ctx: &egui::Context, state: &mut AppState, feature_count: usize) {
    egui::SidePanel::left("side_panel")
        .resizable(false)
        .exact_width(220.0)
        .show(ctx, |ui| {
            let mut changed = false;

            ui.heading("View");
            ui.separator();

            for view in ViewMode::all() {
                if ui
                    .selectable_label(state.viz_state.view == *view, view.label())
                    .clicked()
                    && state.viz_state.view != *view
                {
                    state.viz_state.view = *view;
                    changed = true;
                }
            }

            ui.add_space(10.0);
            ui.heading("Interaction");
            ui.separator();

            for mode in InteractionMode::all() {
                if ui
                    .selectable_label(state.viz_state.mode == *mode, mode.label())
                    .clicked()
                    && state.viz_state.mode != *mode
                {
                    state.viz_state.mode = *mode;
                    state.viz_state.rotating = false;
                    state.viz_state.drag = None;
                    changed = true;
                }
            }

            if state.viz_state.mode == InteractionMode::AutoRotate {
                ui.add_space(5.0);
                let icon = if state.viz_state.rotating {
                    egui_phosphor::regular::PAUSE
                } else {
                    egui_phosphor::regular::PLAY
                };
                if ui.button(format!("{} Rotate", icon)).clicked() {
                    state.viz_state.rotating = !state.viz_state.rotating;
                }
                if state.viz_state.rotating {
                    ui.label(
                        RichText::new("Hover a country to pause")
                            .small()
                            .color(egui::Color32::GRAY),
                    );
                }
            }

            ui.add_space(10.0);
            ui.heading("Tuning");
            ui.separator();

            ui.label("Drag sensitivity");
            changed |= ui
                .add(egui::Slider::new(
                    &mut state.viz_state.drag_sensitivity,
                    10.0..=200.0,
                ))
                .changed();

            ui.label("Min label area (px²)");
            changed |= ui
                .add(egui::Slider::new(
                    &mut state.viz_state.min_label_area,
                    0.0..=1000.0,
                ))
                .changed();

            ui.add_space(10.0);
            ui.separator();
            ui.label(
                RichText::new(format!("{} countries loaded", feature_count))
                    .small()
                    .color(egui::Color32::GRAY),
            );

            if changed {
                state.settings().save();
            }
        });
}
