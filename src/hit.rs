#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::{HANDLE_RADIUS_PX, ROTATE_HANDLE_OFFSET_PX};
use crate::geometry::{self, Point};
use crate::view::ViewState;
use crate::wall::{FloorBounds, Wall, WallId};

/// Which part of a wall was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    RotateHandle,
}

/// Result of a hit test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub wall_id: WallId,
    pub part: HitPart,
}

/// Screen-space unit normal of a wall with rotation `theta`.
#[must_use]
pub fn screen_normal(theta: f64) -> (f64, f64) {
    (theta.sin(), -theta.cos())
}

/// View-space position of a wall's rotate handle.
#[must_use]
pub fn rotate_handle_position(wall: &Wall, view: &ViewState, bounds: &FloorBounds) -> Point {
    let c = view.world_to_view(bounds, wall.center());
    let (nx, ny) = screen_normal(wall.rotation.y);
    Point::new(c.x + nx * ROTATE_HANDLE_OFFSET_PX, c.y + ny * ROTATE_HANDLE_OFFSET_PX)
}

/// Find the wall part under `pt` (view px).
///
/// The selected wall's rotate handle wins over any body. Bodies are tested
/// topmost first, i.e. last in slice order. The floor is never hit; `None`
/// means the press landed on the background.
#[must_use]
pub fn hit_test(
    pt: Point,
    walls: &[Wall],
    view: &ViewState,
    bounds: &FloorBounds,
    selected: Option<&str>,
) -> Option<Hit> {
    if let Some(sel) = selected.and_then(|id| walls.iter().find(|w| w.id == id && !w.is_floor())) {
        let handle = rotate_handle_position(sel, view, bounds);
        if (pt.x - handle.x).hypot(pt.y - handle.y) <= HANDLE_RADIUS_PX {
            return Some(Hit { wall_id: sel.id.clone(), part: HitPart::RotateHandle });
        }
    }

    walls.iter().rev().filter(|w| !w.is_floor()).find_map(|w| {
        let (a, b) = w.endpoints();
        let va = view.world_to_view(bounds, a);
        let vb = view.world_to_view(bounds, b);
        (geometry::point_segment_distance(pt, va, vb) <= HANDLE_RADIUS_PX)
            .then(|| Hit { wall_id: w.id.clone(), part: HitPart::Body })
    })
}
