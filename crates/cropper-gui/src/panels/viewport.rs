use cropper_core::geometry::{self, Viewport};
use cropper_core::interaction::{PointerEvent, PointerId};

use crate::app::CropperApp;

/// Free space kept around the crop window.
const WINDOW_MARGIN: f32 = 24.0;
const MIN_DISPLAY_SCALE: f32 = 0.05;
/// Slider change per point of scroll.
const SCROLL_ZOOM_RATE: f32 = 0.001;

/// Maps viewport-local coordinates to screen points and back.
///
/// The crop window is centred in the panel and shrunk uniformly when the
/// panel is smaller than the viewport.
struct CropFrame {
    origin: egui::Pos2,
    scale: f32,
    window: egui::Rect,
}

impl CropFrame {
    fn new(panel: egui::Rect, viewport: &Viewport) -> Self {
        let vp_size = egui::vec2(viewport.width as f32, viewport.height as f32);
        let room = (panel.size() - egui::Vec2::splat(2.0 * WINDOW_MARGIN)).max(egui::Vec2::ZERO);
        let scale = (room.x / vp_size.x)
            .min(room.y / vp_size.y)
            .clamp(MIN_DISPLAY_SCALE, 1.0);

        let centre = (viewport.min() + viewport.max()) / 2.0;
        let origin = panel.center() - to_egui(centre) * scale;

        let mut frame = Self {
            origin,
            scale,
            window: egui::Rect::NOTHING,
        };
        frame.window = egui::Rect::from_min_max(
            frame.to_screen(viewport.min()),
            frame.to_screen(viewport.max()),
        );
        frame
    }

    fn to_screen(&self, local: geometry::Vec2) -> egui::Pos2 {
        self.origin + to_egui(local) * self.scale
    }

    fn to_local(&self, pos: egui::Pos2) -> geometry::Vec2 {
        let rel = (pos - self.origin) / self.scale;
        geometry::Vec2::new(f64::from(rel.x), f64::from(rel.y))
    }
}

fn to_egui(v: geometry::Vec2) -> egui::Vec2 {
    egui::vec2(v.x as f32, v.y as f32)
}

/// Touch ids live in their own range so they never collide with the mouse.
fn touch_pointer(id: egui::TouchId) -> PointerId {
    PointerId(id.0 | 1 << 63)
}

pub fn show(ctx: &egui::Context, app: &mut CropperApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, egui::Color32::from_gray(30));

        let response = ui.allocate_rect(rect, egui::Sense::click_and_drag());
        let frame = CropFrame::new(rect, app.session.viewport());

        if app.session.has_source() {
            route_pointer_events(ui, app, &frame, rect);
            handle_scroll(ui, &response, app);
        }

        if let Some(texture) = app.view.source_texture.as_ref() {
            let placement = app.session.placement();
            let img_rect = egui::Rect::from_min_max(
                frame.to_screen(placement.min()),
                frame.to_screen(placement.max()),
            );
            painter.image(
                texture.id(),
                img_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );
            dim_outside(&painter, rect, frame.window);
        } else {
            draw_placeholder(&painter, rect);
        }

        painter.rect_stroke(
            frame.window,
            0.0,
            egui::Stroke::new(1.0, egui::Color32::from_white_alpha(200)),
            egui::StrokeKind::Outside,
        );
    });
}

/// Feed raw mouse and touch input to the session's interaction machine.
///
/// Touch input also arrives as emulated mouse events, so the mouse is ignored
/// while any touch is down.
fn route_pointer_events(ui: &egui::Ui, app: &mut CropperApp, frame: &CropFrame, panel: egui::Rect) {
    let events = ui.input(|i| i.events.clone());

    for event in events {
        match event {
            egui::Event::Touch { id, phase, pos, .. } => {
                let pointer = touch_pointer(id);
                match phase {
                    egui::TouchPhase::Start => {
                        if panel.contains(pos) && app.view.touches.insert(id.0) {
                            app.session.handle_pointer(PointerEvent::Down {
                                id: pointer,
                                pos: frame.to_local(pos),
                            });
                        }
                    }
                    egui::TouchPhase::Move => {
                        if app.view.touches.contains(&id.0) {
                            app.session.handle_pointer(PointerEvent::Move {
                                id: pointer,
                                pos: frame.to_local(pos),
                            });
                        }
                    }
                    egui::TouchPhase::End | egui::TouchPhase::Cancel => {
                        if app.view.touches.remove(&id.0) {
                            app.session.handle_pointer(PointerEvent::Up { id: pointer });
                        }
                    }
                }
            }
            egui::Event::PointerButton {
                pos,
                button: egui::PointerButton::Primary,
                pressed,
                ..
            } if app.view.touches.is_empty() => {
                if pressed {
                    if panel.contains(pos) && !app.view.mouse_down {
                        app.view.mouse_down = true;
                        app.session.pointer_down(frame.to_local(pos));
                    }
                } else if app.view.mouse_down {
                    app.view.mouse_down = false;
                    app.session.pointer_up();
                }
            }
            egui::Event::PointerMoved(pos) if app.view.mouse_down && app.view.touches.is_empty() => {
                app.session.pointer_move(frame.to_local(pos));
            }
            _ => {}
        }
    }
}

fn handle_scroll(ui: &egui::Ui, response: &egui::Response, app: &mut CropperApp) {
    let scroll_delta = ui.input(|i| i.smooth_scroll_delta.y);
    if scroll_delta == 0.0 || !response.hovered() {
        return;
    }
    app.set_zoom(app.ui_state.zoom + scroll_delta * SCROLL_ZOOM_RATE);
}

fn dim_outside(painter: &egui::Painter, panel: egui::Rect, window: egui::Rect) {
    let shade = egui::Color32::from_black_alpha(160);
    let bands = [
        egui::Rect::from_min_max(panel.min, egui::pos2(panel.max.x, window.min.y)),
        egui::Rect::from_min_max(egui::pos2(panel.min.x, window.max.y), panel.max),
        egui::Rect::from_min_max(
            egui::pos2(panel.min.x, window.min.y),
            egui::pos2(window.min.x, window.max.y),
        ),
        egui::Rect::from_min_max(
            egui::pos2(window.max.x, window.min.y),
            egui::pos2(panel.max.x, window.max.y),
        ),
    ];
    for band in bands {
        if band.is_positive() {
            painter.rect_filled(band, 0.0, shade);
        }
    }
}

fn draw_placeholder(painter: &egui::Painter, rect: egui::Rect) {
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "Open an image to begin",
        egui::FontId::proportional(18.0),
        egui::Color32::from_gray(100),
    );
}
