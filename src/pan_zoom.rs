//! Pan/zoom controller: wheel zoom and drag panning, both clamped to the floor.

#[cfg(test)]
#[path = "pan_zoom_test.rs"]
mod pan_zoom_test;

use crate::config::EditorConfig;
use crate::input::{Button, Modifiers, WheelDelta};
use crate::view::ViewState;
use crate::wall::FloorBounds;

/// Apply one wheel event. Scrolling up zooms in by one step, down zooms out.
///
/// Pan is re-clamped against the new zoom. Returns `None` when nothing changed.
#[must_use]
pub fn zoom_by_wheel(
    view: &ViewState,
    bounds: &FloorBounds,
    delta: WheelDelta,
    config: &EditorConfig,
) -> Option<ViewState> {
    if delta.dy == 0.0 || !delta.dy.is_finite() {
        return None;
    }
    let direction = -delta.dy.signum();
    let zoom = (view.zoom + direction * config.zoom_step).clamp(config.zoom_min, config.zoom_max);
    let (pan_x, pan_y) = view.clamp_pan_for_floor(bounds, view.pan_x, view.pan_y, zoom);
    let next = ViewState { zoom, pan_x, pan_y, ..*view };
    (next != *view).then_some(next)
}

/// Shift the pan by a raw pointer delta, clamped to the floor.
#[must_use]
pub fn pan_by(view: &ViewState, bounds: &FloorBounds, dx: f64, dy: f64) -> ViewState {
    let (pan_x, pan_y) = view.clamp_pan_for_floor(bounds, view.pan_x + dx, view.pan_y + dy, view.zoom);
    ViewState { pan_x, pan_y, ..*view }
}

/// Whether a pointer-down should start panning.
///
/// Background presses, any held modifier, and non-primary buttons all pan.
#[must_use]
pub fn should_pan(on_background: bool, button: Button, modifiers: Modifiers) -> bool {
    on_background || modifiers.any() || button != Button::Primary
}
