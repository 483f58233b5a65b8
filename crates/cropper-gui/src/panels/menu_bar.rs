use crate::app::CropperApp;

pub fn show(ctx: &egui::Context, app: &mut CropperApp) {
    let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
    let save_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
    let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui
                    .add(egui::Button::new("Open...").shortcut_text(ctx.format_shortcut(&open_shortcut)))
                    .clicked()
                {
                    ui.close();
                    app.open_image(ctx);
                }

                let has_crop = app.session.cropped_image().is_some();
                if ui
                    .add_enabled(
                        has_crop,
                        egui::Button::new("Save Crop As...")
                            .shortcut_text(ctx.format_shortcut(&save_shortcut)),
                    )
                    .clicked()
                {
                    ui.close();
                    app.save_crop(ctx);
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    app.import_config(ctx);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    app.export_config(ctx);
                }

                ui.separator();

                if ui
                    .add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut)))
                    .clicked()
                {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&open_shortcut)) {
            app.open_image(ctx);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&save_shortcut)) {
            app.save_crop(ctx);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&quit_shortcut)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}
