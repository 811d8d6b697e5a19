//! Editor tuning parsed from JSON, with defaults from [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::{
    CAPTURE_RADIUS, HYSTERESIS_FACTOR, MAX_ROTATION_STEP, ROTATION_SENSITIVITY, ROTATION_SMOOTHING,
    SNAP_ACCEPT_FACTOR, VIEW_PADDING_PX, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP,
};
use crate::error::EditorError;

/// Which rotation action the engine emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationOutput {
    /// `Action::SetRotation` with the new absolute angle.
    #[default]
    Absolute,
    /// `Action::RotateWall` with the change from the current angle.
    Delta,
}

/// Interaction tuning for one editor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EditorConfig {
    /// Endpoint capture radius in world centimeters.
    pub capture_radius: f64,
    /// Fresh snaps are accepted within `capture_radius * snap_accept_factor`.
    pub snap_accept_factor: f64,
    /// An existing snap is kept within `capture_radius * hysteresis_factor`.
    pub hysteresis_factor: f64,
    pub rotation_sensitivity: f64,
    pub rotation_smoothing: f64,
    /// Radians per pointer event.
    pub max_rotation_step: f64,
    pub zoom_min: f64,
    pub zoom_max: f64,
    pub zoom_step: f64,
    /// Container inset in pixels.
    pub padding: f64,
    pub rotation_output: RotationOutput,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            capture_radius: CAPTURE_RADIUS,
            snap_accept_factor: SNAP_ACCEPT_FACTOR,
            hysteresis_factor: HYSTERESIS_FACTOR,
            rotation_sensitivity: ROTATION_SENSITIVITY,
            rotation_smoothing: ROTATION_SMOOTHING,
            max_rotation_step: MAX_ROTATION_STEP,
            zoom_min: ZOOM_MIN,
            zoom_max: ZOOM_MAX,
            zoom_step: ZOOM_STEP,
            padding: VIEW_PADDING_PX,
            rotation_output: RotationOutput::default(),
        }
    }
}

impl EditorConfig {
    /// Parse a JSON object, filling absent keys from the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Snapshot`] for malformed JSON and
    /// [`EditorError::InvalidConfig`] when a value fails [`Self::validate`].
    pub fn from_json(json: &str) -> Result<Self, EditorError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Radius within which a fresh snap candidate is accepted.
    #[must_use]
    pub fn accept_radius(&self) -> f64 {
        self.capture_radius * self.snap_accept_factor
    }

    /// Radius within which the previous frame's snap is retained.
    #[must_use]
    pub fn hysteresis_radius(&self) -> f64 {
        self.capture_radius * self.hysteresis_factor
    }

    /// Check every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidConfig`] naming the first bad key.
    pub fn validate(&self) -> Result<(), EditorError> {
        positive("captureRadius", self.capture_radius)?;
        positive("snapAcceptFactor", self.snap_accept_factor)?;
        positive("hysteresisFactor", self.hysteresis_factor)?;
        positive("rotationSensitivity", self.rotation_sensitivity)?;
        positive("maxRotationStep", self.max_rotation_step)?;
        positive("zoomMin", self.zoom_min)?;
        positive("zoomStep", self.zoom_step)?;
        if !(self.rotation_smoothing > 0.0 && self.rotation_smoothing <= 1.0) {
            return Err(EditorError::InvalidConfig(format!(
                "rotationSmoothing must be in (0, 1], got {}",
                self.rotation_smoothing
            )));
        }
        if !(self.zoom_max >= self.zoom_min) {
            return Err(EditorError::InvalidConfig(format!(
                "zoomMax ({}) must not be below zoomMin ({})",
                self.zoom_max, self.zoom_min
            )));
        }
        if !(self.padding >= 0.0 && self.padding.is_finite()) {
            return Err(EditorError::InvalidConfig(format!("padding must be non-negative, got {}", self.padding)));
        }
        Ok(())
    }
}

fn positive(key: &str, value: f64) -> Result<(), EditorError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(EditorError::InvalidConfig(format!("{key} must be positive, got {value}")))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
