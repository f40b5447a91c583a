//! Mouse gestures mapped onto view targets.

use crate::view::ViewState;

/// Drawing-buffer size in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    pub width: f64,
    pub height: f64,
}

impl Surface {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// A surface with no area cannot be used for delta or aspect math.
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    pub fn aspect(&self) -> f64 {
        self.width / self.height
    }
}

/// On-screen bounding rectangle of the surface, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClientRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragState {
    pub dragging: bool,
    pub last_x: f64,
    pub last_y: f64,
}

/// Cursor position in normalized device coordinates, fed to the shader
/// as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerUniform {
    pub x: f64,
    pub y: f64,
}

/// Maps client coordinates into [-1, 1] across the bounding rect. Y grows
/// downward, matching client coordinates. Returns `None` for an empty rect.
pub fn normalized_pointer(client_x: f64, client_y: f64, rect: ClientRect) -> Option<PointerUniform> {
    if !(rect.width > 0.0 && rect.height > 0.0) {
        return None;
    }
    Some(PointerUniform {
        x: (client_x - rect.left) / rect.width * 2.0 - 1.0,
        y: (client_y - rect.top) / rect.height * 2.0 - 1.0,
    })
}

#[derive(Debug, Clone, Default)]
pub struct InputController {
    drag: DragState,
    pointer: PointerUniform,
    wheel_sensitivity: f64,
}

impl InputController {
    pub fn new(wheel_sensitivity: f64) -> Self {
        Self {
            wheel_sensitivity,
            ..Self::default()
        }
    }

    pub fn press(&mut self, client_x: f64, client_y: f64) {
        self.drag = DragState {
            dragging: true,
            last_x: client_x,
            last_y: client_y,
        };
    }

    /// Updates the pointer uniform, and while dragging moves the pan target by
    /// the pixel delta since the previous move.
    ///
    /// Horizontal drag is aspect-corrected and subtracted, vertical drag is
    /// added; the shader's y axis points the other way from client y.
    pub fn move_to(
        &mut self,
        client_x: f64,
        client_y: f64,
        rect: ClientRect,
        surface: Surface,
        view: &mut ViewState,
    ) {
        if let Some(pointer) = normalized_pointer(client_x, client_y, rect) {
            self.pointer = pointer;
        }

        if !self.drag.dragging {
            return;
        }
        if !surface.is_degenerate() {
            let zoom = view.zoom();
            let dx = (client_x - self.drag.last_x) / surface.width * zoom * 2.0;
            let dy = (client_y - self.drag.last_y) / surface.height * zoom * 2.0;
            view.offset_target_pan(-dx * surface.aspect(), dy);
        }
        self.drag.last_x = client_x;
        self.drag.last_y = client_y;
    }

    /// Stops dragging. No inertia: only the view smoothing keeps moving.
    pub fn release(&mut self) {
        self.drag.dragging = false;
    }

    /// Scales the zoom target by `exp(delta_y * sensitivity)`; scrolling down
    /// widens the view.
    pub fn wheel(&mut self, delta_y: f64, view: &mut ViewState) {
        if !delta_y.is_finite() {
            return;
        }
        let factor = (delta_y * self.wheel_sensitivity).exp();
        view.set_target_zoom(view.target_zoom() * factor);
    }

    pub fn pointer(&self) -> PointerUniform {
        self.pointer
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.dragging
    }
}
