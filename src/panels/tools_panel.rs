use egui::Slider;

use crate::CurveApp;
use crate::state::EditorState;

pub fn tools_panel(app: &mut CurveApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Curve");

            let hint = match app.editor_state() {
                EditorState::Idle => "Press and drag to place a curve.",
                EditorState::AwaitingSecondPoint { .. } => "Release to set the end point.",
                EditorState::CurveEditing { .. } => "Drag a green point to reshape the curve.",
            };
            ui.label(hint);

            if let Some(curve) = app.editor_state().curve() {
                ui.monospace(format!("start ({:.1}, {:.1})", curve.start.x, curve.start.y));
                ui.monospace(format!("mid   ({:.1}, {:.1})", curve.mid.x, curve.mid.y));
                ui.monospace(format!("end   ({:.1}, {:.1})", curve.end.x, curve.end.y));
            }

            if !app.renderer().has_background() {
                ui.weak("No background image loaded.");
            }

            ui.separator();

            if ui.button("Clear").clicked() {
                log::info!("Clear requested from UI");
                app.reset();
            }

            ui.separator();

            let mut config = app.config().clone();
            let mut changed = false;
            ui.horizontal(|ui| {
                ui.label("Point size:");
                changed |= ui.add(Slider::new(&mut config.marker_radius, 1.0..=20.0)).changed();
            });
            ui.horizontal(|ui| {
                ui.label("Line width:");
                changed |= ui.add(Slider::new(&mut config.curve_width, 0.5..=10.0)).changed();
            });
            ui.horizontal(|ui| {
                ui.label("Line color:");
                changed |= egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut config.curve_color,
                    egui::color_picker::Alpha::Opaque,
                )
                .changed();
            });
            if changed {
                app.apply_config(config);
            }
        });
}
