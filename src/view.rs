//! Smoothed camera state.
//!
//! Every tracked scalar eases toward its target with a first-order low-pass
//! step, `current += (target - current) * rate`. With `0 < rate < 1` the value
//! never overshoots and never lands exactly on the target.

use crate::config::ViewConfig;

/// One scalar easing toward a target at a fixed per-frame rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Smoothed {
    current: f64,
    target: f64,
    rate: f64,
}

impl Smoothed {
    /// Starts at rest: target equals current.
    pub fn new(value: f64, rate: f64) -> Self {
        Self {
            current: value,
            target: value,
            rate,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn advance(&mut self) {
        self.current += (self.target - self.current) * self.rate;
    }

    pub fn is_settled(&self, eps: f64) -> bool {
        (self.target - self.current).abs() <= eps
    }
}

/// Zoom and pan of the view, current and target.
///
/// Pan is unconstrained. Zoom is only required to stay positive and finite;
/// there is no upper or lower clamp.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    zoom: Smoothed,
    pan_x: Smoothed,
    pan_y: Smoothed,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(&ViewConfig::default())
    }
}

impl ViewState {
    pub fn new(config: &ViewConfig) -> Self {
        let (x, y) = config.initial_pan;
        Self {
            zoom: Smoothed::new(config.initial_zoom, config.zoom_rate),
            pan_x: Smoothed::new(x, config.pan_rate),
            pan_y: Smoothed::new(y, config.pan_rate),
        }
    }

    /// Sets the zoom target. Values that are not positive and finite are
    /// dropped.
    pub fn set_target_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() && zoom > 0.0 {
            self.zoom.set_target(zoom);
        } else {
            log::warn!("ignoring zoom target {zoom}");
        }
    }

    pub fn set_target_pan(&mut self, x: f64, y: f64) {
        self.pan_x.set_target(x);
        self.pan_y.set_target(y);
    }

    /// Shifts the pan target by a world-space delta.
    pub fn offset_target_pan(&mut self, dx: f64, dy: f64) {
        self.pan_x.set_target(self.pan_x.target() + dx);
        self.pan_y.set_target(self.pan_y.target() + dy);
    }

    /// One smoothing step on zoom, pan x and pan y independently.
    pub fn advance(&mut self) {
        self.zoom.advance();
        self.pan_x.advance();
        self.pan_y.advance();
    }

    pub fn zoom(&self) -> f64 {
        self.zoom.current()
    }

    pub fn target_zoom(&self) -> f64 {
        self.zoom.target()
    }

    pub fn pan(&self) -> (f64, f64) {
        (self.pan_x.current(), self.pan_y.current())
    }

    pub fn target_pan(&self) -> (f64, f64) {
        (self.pan_x.target(), self.pan_y.target())
    }

    /// True when every scalar is within `eps` of its target.
    pub fn is_settled(&self, eps: f64) -> bool {
        self.zoom.is_settled(eps) && self.pan_x.is_settled(eps) && self.pan_y.is_settled(eps)
    }
}
