use std::collections::BTreeSet;

/// Overall UI state.
#[derive(Default)]
pub struct UIState {
    pub file_name: Option<String>,

    /// Zoom slider value in [0, 1].
    pub zoom: f32,

    /// Log messages.
    pub log_messages: Vec<String>,

    pub show_about: bool,
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}

/// Textures and raw pointer bookkeeping for the viewport panel.
#[derive(Default)]
pub struct ViewState {
    pub source_texture: Option<egui::TextureHandle>,
    pub crop_texture: Option<egui::TextureHandle>,

    /// Touch ids currently down inside the viewport panel.
    pub touches: BTreeSet<u64>,
    /// Primary mouse button went down inside the viewport panel.
    pub mouse_down: bool,
}

impl ViewState {
    pub fn release_pointers(&mut self) {
        self.touches.clear();
        self.mouse_down = false;
    }
}
