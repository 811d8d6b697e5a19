//! Which side of a wall its length annotation goes on, and where it is drawn.
//!
//! Each wall gets a side along its screen-space normal `(sin θ, -cos θ)`. A
//! host override wins; otherwise the side with more room before the
//! viewport edge is chosen. Nothing is cached between renders.

#[cfg(test)]
#[path = "dimension_test.rs"]
mod dimension_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::consts::DIMENSION_OFFSET_PX;
use crate::geometry::Point;
use crate::hit::screen_normal;
use crate::view::ViewState;
use crate::wall::{FloorBounds, Wall, WallId};

/// Side of a wall along its screen normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Along `+normal`.
    Positive,
    /// Along `-normal`.
    Negative,
}

impl Side {
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::Positive => 1.0,
            Self::Negative => -1.0,
        }
    }
}

/// Host-supplied per-wall side overrides.
pub type SideOverrides = HashMap<WallId, Side>;

/// A wall's length annotation in view space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionAnnotation {
    pub wall_id: WallId,
    pub side: Side,
    /// Dimension line start, offset from endpoint `a`.
    pub start: (f64, f64),
    /// Dimension line end, offset from endpoint `b`.
    pub end: (f64, f64),
    /// Midpoint of the dimension line.
    pub label_at: (f64, f64),
    pub label: String,
}

/// Resolve the annotation side for `wall`.
#[must_use]
pub fn side_for(wall: &Wall, view: &ViewState, bounds: &FloorBounds, overrides: &SideOverrides) -> Side {
    if let Some(side) = overrides.get(&wall.id) {
        return *side;
    }
    let c = view.world_to_view(bounds, wall.center());
    let (nx, ny) = screen_normal(wall.rotation.y);
    let ahead = room_to_edge(c, nx, ny, view.width, view.height);
    let behind = room_to_edge(c, -nx, -ny, view.width, view.height);
    if ahead >= behind { Side::Positive } else { Side::Negative }
}

/// Build the annotation for one wall.
#[must_use]
pub fn annotate(wall: &Wall, view: &ViewState, bounds: &FloorBounds, overrides: &SideOverrides) -> DimensionAnnotation {
    let side = side_for(wall, view, bounds, overrides);
    let (nx, ny) = screen_normal(wall.rotation.y);
    let ox = nx * side.sign() * DIMENSION_OFFSET_PX;
    let oy = ny * side.sign() * DIMENSION_OFFSET_PX;
    let (a, b) = wall.endpoints();
    let va = view.world_to_view(bounds, a);
    let vb = view.world_to_view(bounds, b);
    let start = (va.x + ox, va.y + oy);
    let end = (vb.x + ox, vb.y + oy);
    DimensionAnnotation {
        wall_id: wall.id.clone(),
        side,
        start,
        end,
        label_at: ((start.0 + end.0) * 0.5, (start.1 + end.1) * 0.5),
        label: format!("{:.0} cm", wall.width.max(0.0)),
    }
}

/// Annotations for every wall except the floor, in slice order.
#[must_use]
pub fn annotate_all(
    walls: &[Wall],
    view: &ViewState,
    bounds: &FloorBounds,
    overrides: &SideOverrides,
) -> Vec<DimensionAnnotation> {
    walls.iter().filter(|w| !w.is_floor()).map(|w| annotate(w, view, bounds, overrides)).collect()
}

/// Distance from `origin` along `(dx, dy)` to the first viewport edge.
fn room_to_edge(origin: Point, dx: f64, dy: f64, width: f64, height: f64) -> f64 {
    const EPS: f64 = 1e-12;
    let mut t = f64::INFINITY;
    if dx > EPS {
        t = t.min((width - origin.x) / dx);
    } else if dx < -EPS {
        t = t.min(-origin.x / dx);
    }
    if dy > EPS {
        t = t.min((height - origin.y) / dy);
    } else if dy < -EPS {
        t = t.min(-origin.y / dy);
    }
    t.max(0.0)
}
