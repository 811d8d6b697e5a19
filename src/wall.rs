//! Wall records as supplied by the host, floor bounds, and a host-side store.
//!
//! The host application owns the wall list. The engine only ever reads walls
//! through a slice and asks for `position` / `rotation.y` changes by returning
//! [`Action`]s. [`WallStore`] is a convenience for hosts (and the replay CLI)
//! that want an owned list which applies those actions.
//!
//! The wire shape matches the host's JSON: camelCase keys, `position` with
//! `x`/`y`/`z`, `rotation` with `x`/`y`/`z`. Only `position.x`, `position.z`,
//! `rotation.y` and `width` participate in geometry.

#[cfg(test)]
#[path = "wall_test.rs"]
mod wall_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_FLOOR_HALF_EXTENT, FLOOR_ID};
use crate::engine::Action;
use crate::error::EditorError;
use crate::geometry::{self, Endpoint, WorldPoint};

/// Opaque wall identifier.
pub type WallId = String;

/// World-space center of a wall. `y` is carried for 3D hosts and ignored here.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    pub z: f64,
}

/// Euler rotation in radians. Only `y` (from +X toward +Z) is used.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A wall segment, or the floor entity when `id == "floor"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wall {
    pub id: WallId,
    /// Length along the wall's local axis, in centimeters.
    pub width: f64,
    #[serde(default)]
    pub height: f64,
    #[serde(default)]
    pub depth: f64,
    pub position: Position,
    #[serde(default)]
    pub rotation: Rotation,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_locked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub texture: Option<String>,
}

impl Wall {
    /// A plain wall with the given center, length and rotation.
    #[must_use]
    pub fn new(id: impl Into<WallId>, width: f64, x: f64, z: f64, rotation_y: f64) -> Self {
        Self {
            id: id.into(),
            width,
            height: 0.0,
            depth: 0.0,
            position: Position { x, y: 0.0, z },
            rotation: Rotation { x: 0.0, y: rotation_y, z: 0.0 },
            name: String::new(),
            is_locked: false,
            texture: None,
        }
    }

    /// The floor entity spanning `width` × `depth` around `(x, z)`.
    #[must_use]
    pub fn floor(width: f64, depth: f64, x: f64, z: f64) -> Self {
        Self { depth, ..Self::new(FLOOR_ID, width, x, z, 0.0) }
    }

    #[must_use]
    pub fn is_floor(&self) -> bool {
        self.id == FLOOR_ID
    }

    /// World-space center on the horizontal plane.
    #[must_use]
    pub fn center(&self) -> WorldPoint {
        WorldPoint::new(self.position.x, self.position.z)
    }

    /// Both endpoints, derived from center, width and `rotation.y`.
    #[must_use]
    pub fn endpoints(&self) -> (WorldPoint, WorldPoint) {
        geometry::endpoints(self.center(), self.width, self.rotation.y)
    }

    #[must_use]
    pub fn endpoint(&self, end: Endpoint) -> WorldPoint {
        geometry::endpoint(self.center(), self.width, self.rotation.y, end)
    }
}

/// Axis-aligned floor rectangle `[min_x, max_x] × [min_z, max_z]` in centimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloorBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_z: f64,
    pub max_z: f64,
}

impl Default for FloorBounds {
    fn default() -> Self {
        Self {
            min_x: -DEFAULT_FLOOR_HALF_EXTENT,
            max_x: DEFAULT_FLOOR_HALF_EXTENT,
            min_z: -DEFAULT_FLOOR_HALF_EXTENT,
            max_z: DEFAULT_FLOOR_HALF_EXTENT,
        }
    }
}

impl FloorBounds {
    /// Bounds of the floor entity in `walls`, or the default bounds when the
    /// floor is missing or has a non-positive extent.
    #[must_use]
    pub fn from_walls(walls: &[Wall]) -> Self {
        Self::find(walls).unwrap_or_default()
    }

    /// Bounds of the floor entity, if one with a usable extent exists.
    #[must_use]
    pub fn find(walls: &[Wall]) -> Option<Self> {
        let floor = walls.iter().find(|w| w.is_floor())?;
        if !(floor.width > 0.0 && floor.depth > 0.0) {
            return None;
        }
        let hw = floor.width / 2.0;
        let hd = floor.depth / 2.0;
        Some(Self {
            min_x: floor.position.x - hw,
            max_x: floor.position.x + hw,
            min_z: floor.position.z - hd,
            max_z: floor.position.z + hd,
        })
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn depth(&self) -> f64 {
        self.max_z - self.min_z
    }

    /// Clamp a world point into the rectangle.
    #[must_use]
    pub fn clamp(&self, p: WorldPoint) -> WorldPoint {
        WorldPoint::new(p.x.clamp(self.min_x, self.max_x), p.z.clamp(self.min_z, self.max_z))
    }
}

/// Owned wall list that applies engine [`Action`]s.
///
/// Preserves the host's ordering, which the snap engine uses for tie-breaks.
#[derive(Debug, Clone, Default)]
pub struct WallStore {
    walls: Vec<Wall>,
}

impl WallStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON array of walls.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Snapshot`] if the JSON does not describe a wall list.
    pub fn from_json(json: &str) -> Result<Self, EditorError> {
        let walls: Vec<Wall> = serde_json::from_str(json)?;
        Ok(Self { walls })
    }

    /// Serialize the current walls as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::Snapshot`] if serialization fails.
    pub fn to_json(&self) -> Result<String, EditorError> {
        Ok(serde_json::to_string(&self.walls)?)
    }

    /// Replace all walls with a full snapshot.
    pub fn load_snapshot(&mut self, walls: Vec<Wall>) {
        self.walls = walls;
    }

    /// Insert a wall, replacing any wall with the same id in place.
    pub fn insert(&mut self, wall: Wall) {
        if let Some(existing) = self.walls.iter_mut().find(|w| w.id == wall.id) {
            *existing = wall;
        } else {
            self.walls.push(wall);
        }
    }

    /// Remove a wall by id, returning it if it was present.
    pub fn remove(&mut self, id: &str) -> Option<Wall> {
        let idx = self.walls.iter().position(|w| w.id == id)?;
        Some(self.walls.remove(idx))
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Wall> {
        self.walls.iter().find(|w| w.id == id)
    }

    #[must_use]
    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.walls.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    /// Apply a wall mutation. Returns false when the action names an unknown
    /// wall or does not touch wall state.
    pub fn apply(&mut self, action: &Action) -> bool {
        match action {
            Action::MoveWall { id, x, z } => self.update(id, |w| {
                w.position.x = *x;
                w.position.z = *z;
            }),
            Action::SetRotation { id, radians } => self.update(id, |w| w.rotation.y = *radians),
            Action::RotateWall { id, delta } => self.update(id, |w| w.rotation.y += *delta),
            _ => false,
        }
    }

    /// Apply every action in order, returning how many mutated a wall.
    pub fn apply_all(&mut self, actions: &[Action]) -> usize {
        actions.iter().filter(|a| self.apply(a)).count()
    }

    fn update(&mut self, id: &str, f: impl FnOnce(&mut Wall)) -> bool {
        let Some(wall) = self.walls.iter_mut().find(|w| w.id == id) else {
            return false;
        };
        f(wall);
        true
    }
}
