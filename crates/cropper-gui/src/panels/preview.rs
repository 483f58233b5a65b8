use crate::app::CropperApp;

use super::section_header;

const RIGHT_PANEL_WIDTH: f32 = 260.0;

/// Last crop, scaled down to the panel width.
pub fn show(ctx: &egui::Context, app: &mut CropperApp) {
    egui::SidePanel::right("preview")
        .default_width(RIGHT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            section_header(ui, "Output", None);
            ui.add_space(4.0);

            let Some(texture) = app.view.crop_texture.as_ref() else {
                ui.small("No crop yet");
                return;
            };

            let tex_size = texture.size_vec2();
            let scale = (ui.available_width() / tex_size.x).min(1.0);
            ui.add(egui::Image::new((texture.id(), tex_size * scale)));
            ui.small(format!("{}x{}", tex_size.x as u32, tex_size.y as u32));
        });
}
