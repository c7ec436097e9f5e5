use crate::CurveApp;

pub fn central_panel(app: &mut CurveApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, egui::Sense::drag());
        let canvas_rect = response.rect;

        // Handle input
        app.handle_input(ctx, canvas_rect, response.contains_pointer());

        // Render the canvas
        app.renderer().render(&painter, canvas_rect);
    });
}
