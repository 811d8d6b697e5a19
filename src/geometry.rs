//! Pure geometry helpers shared by every controller.
//!
//! Endpoints are never stored. They are derived from a wall's center, length
//! and rotation every time they are needed, so no error accumulates across
//! move and rotate operations.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};

/// A point in view space (CSS pixels, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A point on the horizontal world plane, in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: f64,
    pub z: f64,
}

impl WorldPoint {
    #[must_use]
    pub fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }
}

/// One of the two ends of a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endpoint {
    /// The end at `center - half * axis`.
    A,
    /// The end at `center + half * axis`.
    B,
}

impl Endpoint {
    /// Both endpoints in canonical iteration order.
    pub const BOTH: [Endpoint; 2] = [Endpoint::A, Endpoint::B];

    /// Sign of the half-length offset from the center for this end.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            Self::A => -1.0,
            Self::B => 1.0,
        }
    }
}

/// Unit vector of a wall's local axis for rotation `theta`.
#[must_use]
pub fn axis(theta: f64) -> (f64, f64) {
    (theta.cos(), theta.sin())
}

/// Both endpoints of a segment with the given center, length and rotation.
///
/// A non-positive length collapses both endpoints onto the center.
#[must_use]
pub fn endpoints(center: WorldPoint, length: f64, theta: f64) -> (WorldPoint, WorldPoint) {
    (
        endpoint(center, length, theta, Endpoint::A),
        endpoint(center, length, theta, Endpoint::B),
    )
}

/// A single endpoint of a segment.
#[must_use]
pub fn endpoint(center: WorldPoint, length: f64, theta: f64, end: Endpoint) -> WorldPoint {
    let half = length.max(0.0) / 2.0;
    let (cx, cz) = axis(theta);
    let s = end.sign() * half;
    WorldPoint::new(center.x + s * cx, center.z + s * cz)
}

/// The center that places endpoint `end` exactly on `anchor` under rotation `theta`.
#[must_use]
pub fn center_for_anchor(anchor: WorldPoint, end: Endpoint, length: f64, theta: f64) -> WorldPoint {
    let half = length.max(0.0) / 2.0;
    let (cx, cz) = axis(theta);
    let s = end.sign() * half;
    WorldPoint::new(anchor.x - s * cx, anchor.z - s * cz)
}

/// Euclidean distance between two world points.
#[must_use]
pub fn distance(a: WorldPoint, b: WorldPoint) -> f64 {
    (a.x - b.x).hypot(a.z - b.z)
}

/// Midpoint of two world points.
#[must_use]
pub fn midpoint(a: WorldPoint, b: WorldPoint) -> WorldPoint {
    WorldPoint::new((a.x + b.x) * 0.5, (a.z + b.z) * 0.5)
}

/// Wrap an angle into `(-π, π]`.
#[must_use]
pub fn normalize_angle(theta: f64) -> f64 {
    if !theta.is_finite() {
        return 0.0;
    }
    let wrapped = theta.rem_euclid(TAU);
    if wrapped > PI { wrapped - TAU } else { wrapped }
}

/// Distance from `p` to the segment `a`–`b`, all in view space.
#[must_use]
pub fn point_segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq <= f64::EPSILON {
        return (p.x - a.x).hypot(p.y - a.y);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    let qx = a.x + t * dx;
    let qy = a.y + t * dy;
    (p.x - qx).hypot(p.y - qy)
}
