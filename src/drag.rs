//! Drag controller: pointer position → clamped, snap-adjusted wall center.
//!
//! The pointer maps straight to the wall's new center. The center is clamped
//! to the floor before snapping, so a snap shift may carry it slightly past
//! the floor edge to meet an endpoint there. `is_locked` is not consulted.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::config::EditorConfig;
use crate::geometry::Point;
use crate::snap::{self, SnapMemory, SnapResult};
use crate::view::ViewState;
use crate::wall::{FloorBounds, Wall};

/// Compute the center for `wall` with the pointer at `pointer` (view px).
#[must_use]
pub fn drag_to(
    wall: &Wall,
    pointer: Point,
    walls: &[Wall],
    view: &ViewState,
    bounds: &FloorBounds,
    previous: Option<&SnapMemory>,
    config: &EditorConfig,
) -> SnapResult {
    let world = view.view_to_world(bounds, pointer);
    let tentative = bounds.clamp(world);
    snap::find_snap(wall, tentative, walls, previous, config)
}
