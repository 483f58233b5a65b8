use crate::app::CropperApp;

pub fn show(ctx: &egui::Context, app: &mut CropperApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area, fixed height for 4 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        ui.horizontal(|ui| {
            if let Some(src) = app.session.source_image() {
                ui.label(format!("{}x{}", src.width(), src.height()));
                ui.separator();
            }
            let viewport = app.session.viewport();
            ui.label(format!("Viewport: {}x{}", viewport.width, viewport.height));
            ui.separator();
            ui.label(format!("Zoom: {:.0}%", app.ui_state.zoom * 100.0));
            ui.separator();
            ui.label(app.session.interaction_state().to_string());
            ui.separator();
            ui.label(app.session.resizer_name());
        });

        ui.add_space(2.0);
    });
}
