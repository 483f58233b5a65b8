use crate::app::CropperApp;

use super::section_header;

const LEFT_PANEL_WIDTH: f32 = 240.0;

pub fn show(ctx: &egui::Context, app: &mut CropperApp) {
    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                file_section(ui, app);
                ui.separator();
                zoom_section(ui, app);
                ui.separator();
                crop_section(ui, app);
            });
        });
}

fn file_section(ui: &mut egui::Ui, app: &mut CropperApp) {
    section_header(ui, "Image", None);
    ui.add_space(4.0);

    if ui.button("Open...").clicked() {
        app.open_image(ui.ctx());
    }

    if let Some(ref name) = app.ui_state.file_name {
        ui.label(name.as_str());
    }
    if let Some(src) = app.session.source_image() {
        ui.small(format!("{}x{}", src.width(), src.height()));
    }
}

fn zoom_section(ui: &mut egui::Ui, app: &mut CropperApp) {
    let status = format!("{:.0}%", app.ui_state.zoom * 100.0);
    section_header(ui, "Zoom", Some(status.as_str()));
    ui.add_space(4.0);

    let mut zoom = app.ui_state.zoom;
    let slider = ui.add_enabled(
        app.session.has_source(),
        egui::Slider::new(&mut zoom, 0.0..=1.0).show_value(false),
    );
    if slider.changed() {
        app.set_zoom(zoom);
    }

    if app.session.has_source() {
        let placement = app.session.placement();
        let range = app.session.scale_range();
        ui.small(format!(
            "Displayed {:.0}x{:.0}",
            placement.size.x, placement.size.y
        ));
        ui.small(format!(
            "Range {:.0}x{:.0} .. {:.0}x{:.0}",
            range.base_size.x, range.base_size.y, range.max_size.x, range.max_size.y
        ));
    }
}

fn crop_section(ui: &mut egui::Ui, app: &mut CropperApp) {
    let viewport = app.session.viewport();
    let status = format!("{}x{}", viewport.width, viewport.height);
    section_header(ui, "Crop", Some(status.as_str()));
    ui.add_space(4.0);

    let has_source = app.session.has_source();
    ui.horizontal(|ui| {
        if ui.add_enabled(has_source, egui::Button::new("Crop")).clicked() {
            app.crop(ui.ctx());
        }
        if ui.add_enabled(has_source, egui::Button::new("Reset")).clicked() {
            app.reset(ui.ctx());
        }
    });

    let has_crop = app.session.cropped_image().is_some();
    if ui
        .add_enabled(has_crop, egui::Button::new("Save Crop As..."))
        .clicked()
    {
        app.save_crop(ui.ctx());
    }
}
