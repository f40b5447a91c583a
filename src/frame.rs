//! Frame driver.
//!
//! [`Viewer`] owns all per-session state. The host calls [`Viewer::tick`] from
//! its frame callback; each tick that runs asks the [`Scheduler`] for exactly
//! one more frame, so the loop keeps itself alive until paused.

use crate::config::ViewConfig;
use crate::input::{ClientRect, InputController, Surface};
use crate::view::ViewState;

/// Source of the next frame callback (`requestAnimationFrame` in the browser,
/// a counter in tests).
pub trait Scheduler {
    fn request_frame(&mut self);
}

/// Draws one frame from the given uniforms.
pub trait Renderer {
    fn draw(&mut self, uniforms: &FrameUniforms);
}

/// Shader time, advanced by a fixed step per tick rather than by measured
/// elapsed time. Variable frame cadence therefore dilates shader time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    time: f64,
    step: f64,
}

impl FrameClock {
    pub fn new(step: f64) -> Self {
        Self { time: 0.0, step }
    }

    pub fn advance(&mut self) -> f64 {
        self.time += self.step;
        self.time
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn step(&self) -> f64 {
        self.step
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    Animating,
    Stopped,
}

/// Values uploaded to the shader for one draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameUniforms {
    pub time: f32,
    pub resolution: [f32; 2],
    pub zoom: f32,
    pub mouse: [f32; 2],
    pub pan: [f32; 2],
}

#[derive(Debug, Clone)]
pub struct Viewer {
    view: ViewState,
    input: InputController,
    clock: FrameClock,
    surface: Surface,
    animation: Animation,
    frame_pending: bool,
}

impl Viewer {
    /// A viewer in the Animating state at time zero, view at rest. No frame is
    /// requested until [`Viewer::start`].
    pub fn new(config: &ViewConfig, surface: Surface) -> Self {
        Self {
            view: ViewState::new(config),
            input: InputController::new(config.wheel_sensitivity),
            clock: FrameClock::new(config.time_step),
            surface,
            animation: Animation::Animating,
            frame_pending: false,
        }
    }

    /// Requests the first frame if animating.
    pub fn start(&mut self, scheduler: &mut impl Scheduler) {
        if self.animation == Animation::Animating {
            self.request_frame(scheduler);
        }
    }

    /// Runs one frame: advance time, advance smoothing, draw, request the
    /// next frame. Returns false and does nothing when stopped.
    pub fn tick(&mut self, scheduler: &mut impl Scheduler, renderer: &mut impl Renderer) -> bool {
        self.frame_pending = false;
        if self.animation == Animation::Stopped {
            return false;
        }
        self.clock.advance();
        self.view.advance();
        renderer.draw(&self.uniforms());
        self.request_frame(scheduler);
        true
    }

    fn request_frame(&mut self, scheduler: &mut impl Scheduler) {
        if !self.frame_pending {
            self.frame_pending = true;
            scheduler.request_frame();
        }
    }

    /// Stops after the current frame. A frame already requested will find the
    /// viewer stopped and do nothing.
    pub fn pause(&mut self) {
        if self.animation == Animation::Animating {
            log::info!("animation paused at t={:.3}", self.clock.time());
            self.animation = Animation::Stopped;
        }
    }

    /// Restarts the loop. No-op while animating; if the frame requested before
    /// the pause has not fired yet it is reused instead of requesting another.
    pub fn resume(&mut self, scheduler: &mut impl Scheduler) {
        if self.animation == Animation::Stopped {
            log::info!("animation resumed at t={:.3}", self.clock.time());
            self.animation = Animation::Animating;
            self.request_frame(scheduler);
        }
    }

    pub fn toggle(&mut self, scheduler: &mut impl Scheduler) {
        match self.animation {
            Animation::Animating => self.pause(),
            Animation::Stopped => self.resume(scheduler),
        }
    }

    pub fn resize(&mut self, surface: Surface) {
        log::debug!("surface resized to {}x{}", surface.width, surface.height);
        self.surface = surface;
    }

    pub fn press(&mut self, client_x: f64, client_y: f64) {
        self.input.press(client_x, client_y);
    }

    pub fn move_to(&mut self, client_x: f64, client_y: f64, rect: ClientRect) {
        self.input
            .move_to(client_x, client_y, rect, self.surface, &mut self.view);
    }

    pub fn release(&mut self) {
        self.input.release();
    }

    pub fn wheel(&mut self, delta_y: f64) {
        self.input.wheel(delta_y, &mut self.view);
    }

    pub fn uniforms(&self) -> FrameUniforms {
        let (pan_x, pan_y) = self.view.pan();
        let pointer = self.input.pointer();
        FrameUniforms {
            time: self.clock.time() as f32,
            resolution: [self.surface.width as f32, self.surface.height as f32],
            zoom: self.view.zoom() as f32,
            mouse: [pointer.x as f32, pointer.y as f32],
            pan: [pan_x as f32, pan_y as f32],
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    pub fn input(&self) -> &InputController {
        &self.input
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn animation(&self) -> Animation {
        self.animation
    }

    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }
}
