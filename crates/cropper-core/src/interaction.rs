use std::collections::BTreeSet;
use std::fmt;

use tracing::debug;

use crate::geometry::Vec2;
use crate::transform::TransformController;

/// Identifies one pointer (mouse button or touch contact).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointerId(pub u64);

impl PointerId {
    /// The mouse, or the only pointer of a single-pointer source.
    pub const PRIMARY: Self = Self(0);
}

/// Discrete pointer input in viewport-local UI coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Down { id: PointerId, pos: Vec2 },
    Move { id: PointerId, pos: Vec2 },
    Up { id: PointerId },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging,
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Dragging => write!(f, "Dragging"),
        }
    }
}

/// Drives a [`TransformController`] from pointer events.
///
/// While more than one pointer is down nothing moves. Once only one pointer
/// remains, its next move re-anchors the drag instead of moving the image.
#[derive(Debug, Default)]
pub struct Interaction {
    state: InteractionState,
    active: BTreeSet<PointerId>,
    drag_pointer: Option<PointerId>,
    needs_reanchor: bool,
}

impl Interaction {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state == InteractionState::Dragging
    }

    pub fn active_pointers(&self) -> usize {
        self.active.len()
    }

    /// Drop all pointers and return to `Idle`.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Feed one event. Returns `true` if the image position was updated.
    pub fn handle(&mut self, event: PointerEvent, controller: &mut TransformController) -> bool {
        match event {
            PointerEvent::Down { id, pos } => {
                self.pointer_down(id, pos, controller);
                false
            }
            PointerEvent::Move { id, pos } => self.pointer_move(id, pos, controller),
            PointerEvent::Up { id } => {
                self.pointer_up(id);
                false
            }
        }
    }

    fn pointer_down(&mut self, id: PointerId, pos: Vec2, controller: &mut TransformController) {
        self.active.insert(id);

        if self.active.len() > 1 {
            if self.is_dragging() {
                self.needs_reanchor = true;
            }
            debug!(pointers = self.active.len(), "multi-pointer input, drag suspended");
            return;
        }

        if controller.viewport().contains(pos) {
            controller.begin_drag(pos);
            self.state = InteractionState::Dragging;
            self.drag_pointer = Some(id);
            self.needs_reanchor = false;
            debug!(x = pos.x, y = pos.y, "drag started");
        }
    }

    fn pointer_move(&mut self, id: PointerId, pos: Vec2, controller: &mut TransformController) -> bool {
        if !self.is_dragging() || self.active.len() != 1 || !self.active.contains(&id) {
            return false;
        }

        if self.needs_reanchor || self.drag_pointer != Some(id) {
            controller.begin_drag(pos);
            self.drag_pointer = Some(id);
            self.needs_reanchor = false;
            return false;
        }

        controller.continue_drag(pos);
        true
    }

    fn pointer_up(&mut self, id: PointerId) {
        self.active.remove(&id);

        if self.active.is_empty() {
            if self.is_dragging() {
                debug!("drag ended");
            }
            self.state = InteractionState::Idle;
            self.drag_pointer = None;
            self.needs_reanchor = false;
        } else if self.drag_pointer == Some(id) {
            self.needs_reanchor = true;
        }
    }
}
