//! Rotation controller: pointer angle → smoothed, step-limited wall rotation.
//!
//! The pointer's angle around the wall's view-space center drives a target
//! angle, scaled down by the sensitivity. The applied angle approaches that
//! target exponentially and never moves more than `max_rotation_step` per
//! pointer event. When the wall has a snapped endpoint, the center is
//! recomputed from the applied angle so that endpoint stays put.
//!
//! [`set_rotation_abs`] is the one primitive that produces a rotation update;
//! the delta form ([`rotate_by`]) is derived from it.

#[cfg(test)]
#[path = "rotate_test.rs"]
mod rotate_test;

use crate::config::EditorConfig;
use crate::geometry::{self, Point, WorldPoint};
use crate::snap::SnapMemory;
use crate::wall::Wall;

/// Angles captured when a rotate session starts, plus the pointer sweep so far.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationSession {
    /// Wall `rotation.y` at pointer-down.
    pub start_wall_angle: f64,
    /// Pointer angle at the previous event, used to unwrap the sweep.
    pub last_pointer_angle: f64,
    /// Total signed pointer sweep since pointer-down, in radians.
    pub sweep: f64,
}

impl RotationSession {
    /// Start a session for a wall at `wall_angle` with the pointer at `pointer`.
    #[must_use]
    pub fn begin(pointer: Point, center: Point, wall_angle: f64) -> Self {
        Self { start_wall_angle: wall_angle, last_pointer_angle: pointer_angle(pointer, center), sweep: 0.0 }
    }

    /// Fold a new pointer position into the sweep.
    ///
    /// Each step is wrapped into `(-π, π]`, so crossing the `atan2` branch cut
    /// does not register as a near-full turn.
    pub fn track(&mut self, pointer: Point, center: Point) {
        let angle = pointer_angle(pointer, center);
        self.sweep += geometry::normalize_angle(angle - self.last_pointer_angle);
        self.last_pointer_angle = angle;
    }
}

/// Angle of `pointer` around `center` in view space.
///
/// View y grows downward like world z, so this matches the world convention.
#[must_use]
pub fn pointer_angle(pointer: Point, center: Point) -> f64 {
    (pointer.y - center.y).atan2(pointer.x - center.x)
}

/// Next absolute rotation for one pointer event.
///
/// `current` is the wall's rotation before this event.
#[must_use]
pub fn rotation_step(session: &RotationSession, current: f64, config: &EditorConfig) -> f64 {
    let desired = session.start_wall_angle + session.sweep * config.rotation_sensitivity;
    let next = current + (desired - current) * config.rotation_smoothing;
    let delta = (next - current).clamp(-config.max_rotation_step, config.max_rotation_step);
    current + delta
}

/// Result of rotating one wall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationUpdate {
    /// New absolute `rotation.y`.
    pub radians: f64,
    /// Change from the wall's previous `rotation.y`.
    pub delta: f64,
    /// New center when an anchored endpoint had to stay fixed.
    pub center: Option<WorldPoint>,
}

/// Rotate `wall` to `radians`, keeping an anchored endpoint fixed.
#[must_use]
pub fn set_rotation_abs(wall: &Wall, radians: f64, anchor: Option<&SnapMemory>) -> RotationUpdate {
    let center =
        anchor.map(|memory| geometry::center_for_anchor(memory.anchor, memory.source_end, wall.width, radians));
    RotationUpdate { radians, delta: radians - wall.rotation.y, center }
}

/// Rotate `wall` by `delta` radians, keeping an anchored endpoint fixed.
#[must_use]
pub fn rotate_by(wall: &Wall, delta: f64, anchor: Option<&SnapMemory>) -> RotationUpdate {
    set_rotation_abs(wall, wall.rotation.y + delta, anchor)
}
