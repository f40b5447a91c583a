//! Viewer configuration. Defaults reproduce the stock page: canvas `#canvas`,
//! shaders fetched from `vertex.glsl` / `fragment.glsl` next to the page.

use crate::error::ConfigError;

pub const DEFAULT_CANVAS_ID: &str = "canvas";
pub const DEFAULT_VERTEX_URL: &str = "vertex.glsl";
pub const DEFAULT_FRAGMENT_URL: &str = "fragment.glsl";

/// Smoothing and animation parameters for the view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConfig {
    /// Fraction of the remaining zoom distance covered per frame.
    pub zoom_rate: f64,
    /// Fraction of the remaining pan distance covered per frame.
    pub pan_rate: f64,
    /// Shader time added per tick, independent of real elapsed time.
    pub time_step: f64,
    pub initial_zoom: f64,
    pub initial_pan: (f64, f64),
    /// Exponent scale applied to wheel `deltaY`.
    pub wheel_sensitivity: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            zoom_rate: 0.15,
            pan_rate: 0.10,
            time_step: 0.016,
            initial_zoom: 1.0,
            initial_pan: (0.5, 0.9),
            wheel_sensitivity: 0.001,
        }
    }
}

impl ViewConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_rate("zoom_rate", self.zoom_rate)?;
        check_rate("pan_rate", self.pan_rate)?;
        check_positive("time_step", self.time_step)?;
        check_positive("initial_zoom", self.initial_zoom)?;
        check_finite("initial_pan.x", self.initial_pan.0)?;
        check_finite("initial_pan.y", self.initial_pan.1)?;
        check_finite("wheel_sensitivity", self.wheel_sensitivity)?;
        if self.wheel_sensitivity < 0.0 {
            return Err(ConfigError::Negative {
                name: "wheel_sensitivity",
                value: self.wheel_sensitivity,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub canvas_id: String,
    pub vertex_url: String,
    pub fragment_url: String,
    pub view: ViewConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_id: DEFAULT_CANVAS_ID.to_owned(),
            vertex_url: DEFAULT_VERTEX_URL.to_owned(),
            fragment_url: DEFAULT_FRAGMENT_URL.to_owned(),
            view: ViewConfig::default(),
        }
    }
}

impl Config {
    /// Applies per-page shader URL overrides (the canvas `data-vertex` and
    /// `data-fragment` attributes). Missing or blank values keep the current URL.
    pub fn with_overrides(mut self, vertex: Option<String>, fragment: Option<String>) -> Self {
        if let Some(url) = vertex.filter(|u| !u.trim().is_empty()) {
            self.vertex_url = url.trim().to_owned();
        }
        if let Some(url) = fragment.filter(|u| !u.trim().is_empty()) {
            self.fragment_url = url.trim().to_owned();
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas_id.is_empty() {
            return Err(ConfigError::Empty("canvas_id"));
        }
        if self.vertex_url.is_empty() {
            return Err(ConfigError::Empty("vertex_url"));
        }
        if self.fragment_url.is_empty() {
            return Err(ConfigError::Empty("fragment_url"));
        }
        self.view.validate()
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value > 0.0 && value <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::Rate { name, value })
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NotFinite { name, value })
    }
}
