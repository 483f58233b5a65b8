use std::sync::mpsc;

use anyhow::Result;
use cropper_core::config::CropperConfig;
use cropper_core::cropper::ImageCropper;
use cropper_core::error::CropperError;
use cropper_core::io::save_bitmap;
use cropper_core::pick::PickOutcome;

use crate::convert::bitmap_to_color_image;
use crate::messages::AppMessage;
use crate::panels;
use crate::state::{UIState, ViewState};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "tif", "tiff", "webp"];

pub struct CropperApp {
    pub session: ImageCropper,
    pub config: CropperConfig,
    pub result_tx: mpsc::Sender<AppMessage>,
    pub result_rx: mpsc::Receiver<AppMessage>,
    pub ui_state: UIState,
    pub view: ViewState,
}

impl CropperApp {
    pub fn new() -> Result<Self> {
        let config = CropperConfig::default();
        let session = ImageCropper::new(&config)?;
        let (result_tx, result_rx) = mpsc::channel();

        Ok(Self {
            session,
            config,
            result_tx,
            result_rx,
            ui_state: UIState::default(),
            view: ViewState::default(),
        })
    }

    /// Drain all pending results from dialog threads.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(message) = self.result_rx.try_recv() {
            match message {
                AppMessage::ImagePicked { path, outcome } => {
                    let name = path
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string());
                    self.apply_pick(ctx, outcome, name);
                }
                AppMessage::ConfigImported { path, config } => {
                    self.apply_config(ctx, config);
                    self.ui_state
                        .add_log(format!("Config imported: {}", path.display()));
                }
                AppMessage::CropSaved { path } => {
                    self.ui_state.add_log(format!("Saved: {}", path.display()));
                }
                AppMessage::ConfigExported { path } => {
                    self.ui_state
                        .add_log(format!("Config exported: {}", path.display()));
                }
                AppMessage::Error { message } => {
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
            }
        }
    }

    fn apply_pick(&mut self, ctx: &egui::Context, outcome: PickOutcome, name: Option<String>) {
        match self.session.handle_pick(outcome) {
            Ok(()) => {
                self.ui_state.file_name = name;
                self.on_source_changed(ctx);
                if let Some(src) = self.session.source_image() {
                    self.ui_state.add_log(format!(
                        "Opened: {} ({}x{})",
                        self.ui_state.file_name.as_deref().unwrap_or("image"),
                        src.width(),
                        src.height()
                    ));
                }
            }
            Err(CropperError::PickCancelled) => {
                self.ui_state.add_log("Open cancelled".into());
            }
            Err(e) => {
                self.ui_state.add_log(format!("ERROR: {e}"));
            }
        }
    }

    /// Rebuild the session for a new config, carrying the loaded image over.
    fn apply_config(&mut self, ctx: &egui::Context, config: CropperConfig) {
        let mut session = match ImageCropper::new(&config) {
            Ok(session) => session,
            Err(e) => {
                self.ui_state.add_log(format!("ERROR: {e}"));
                return;
            }
        };
        if let Some(src) = self.session.source_image().cloned() {
            if let Err(e) = session.set_source_image(src) {
                self.ui_state.add_log(format!("ERROR: {e}"));
                return;
            }
        }
        self.session = session;
        self.config = config;
        self.on_source_changed(ctx);
    }

    /// Refresh textures and reset the slider after the placement was reset.
    fn on_source_changed(&mut self, ctx: &egui::Context) {
        self.ui_state.zoom = 0.0;
        self.view.release_pointers();
        self.view.crop_texture = None;
        self.view.source_texture = self.session.source_image().map(|src| {
            ctx.load_texture(
                "source",
                bitmap_to_color_image(src),
                egui::TextureOptions::LINEAR,
            )
        });
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.ui_state.zoom = zoom.clamp(0.0, 1.0);
        self.session.apply_zoom(f64::from(self.ui_state.zoom));
    }

    pub fn crop(&mut self, ctx: &egui::Context) {
        match self.session.crop() {
            Ok(cropped) => {
                self.ui_state
                    .add_log(format!("Cropped {}x{}", cropped.width(), cropped.height()));
                self.view.crop_texture = Some(ctx.load_texture(
                    "crop",
                    bitmap_to_color_image(&cropped),
                    egui::TextureOptions::LINEAR,
                ));
            }
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    /// Zoom back to 0 and re-centre by reloading the current source.
    pub fn reset(&mut self, ctx: &egui::Context) {
        let Some(src) = self.session.source_image().cloned() else {
            return;
        };
        match self.session.set_source_image(src) {
            Ok(()) => {
                self.on_source_changed(ctx);
                self.ui_state.add_log("Placement reset".into());
            }
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    pub fn open_image(&self, ctx: &egui::Context) {
        let result_tx = self.result_tx.clone();
        let ctx = ctx.clone();
        std::thread::spawn(move || {
            let path = rfd::FileDialog::new()
                .add_filter("Images", IMAGE_EXTENSIONS)
                .add_filter("All files", &["*"])
                .pick_file();
            let outcome = PickOutcome::from_path(path.as_deref());
            let _ = result_tx.send(AppMessage::ImagePicked { path, outcome });
            ctx.request_repaint();
        });
    }

    pub fn save_crop(&mut self, ctx: &egui::Context) {
        let Some(bitmap) = self.session.cropped_image().cloned() else {
            self.ui_state.add_log("Nothing to save yet, crop first".into());
            return;
        };
        let result_tx = self.result_tx.clone();
        let ctx = ctx.clone();
        std::thread::spawn(move || {
            let Some(path) = rfd::FileDialog::new()
                .add_filter("PNG", &["png"])
                .add_filter("JPEG", &["jpg", "jpeg"])
                .set_file_name("crop.png")
                .save_file()
            else {
                return;
            };
            let message = match save_bitmap(&bitmap, &path) {
                Ok(()) => AppMessage::CropSaved { path },
                Err(e) => AppMessage::Error {
                    message: format!("{}: {e}", path.display()),
                },
            };
            let _ = result_tx.send(message);
            ctx.request_repaint();
        });
    }

    pub fn import_config(&self, ctx: &egui::Context) {
        let result_tx = self.result_tx.clone();
        let ctx = ctx.clone();
        std::thread::spawn(move || {
            let Some(path) = rfd::FileDialog::new()
                .add_filter("TOML", &["toml"])
                .pick_file()
            else {
                return;
            };
            let loaded = std::fs::read_to_string(&path)
                .map_err(CropperError::from)
                .and_then(|text| CropperConfig::from_toml(&text));
            let message = match loaded {
                Ok(config) => AppMessage::ConfigImported { path, config },
                Err(e) => AppMessage::Error {
                    message: format!("{}: {e}", path.display()),
                },
            };
            let _ = result_tx.send(message);
            ctx.request_repaint();
        });
    }

    pub fn export_config(&self, ctx: &egui::Context) {
        let config = self.config.clone();
        let result_tx = self.result_tx.clone();
        let ctx = ctx.clone();
        std::thread::spawn(move || {
            let Some(path) = rfd::FileDialog::new()
                .add_filter("TOML", &["toml"])
                .set_file_name("cropper.toml")
                .save_file()
            else {
                return;
            };
            let written = config
                .to_toml()
                .and_then(|text| std::fs::write(&path, text).map_err(CropperError::from));
            let message = match written {
                Ok(()) => AppMessage::ConfigExported { path },
                Err(e) => AppMessage::Error {
                    message: format!("{}: {e}", path.display()),
                },
            };
            let _ = result_tx.send(message);
            ctx.request_repaint();
        });
    }
}

impl eframe::App for CropperApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::preview::show(ctx, self);
        panels::viewport::show(ctx, self);

        if self.ui_state.show_about {
            egui::Window::new("About Cropper")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Cropper");
                        ui.label("Pan/Zoom Image Cropper");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.ui_state.show_about = false;
                        }
                    });
                });
        }
    }
}
