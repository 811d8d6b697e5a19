//! Magnetic endpoint snapping with hysteresis.
//!
//! While a wall is dragged, each pointer move proposes a tentative center.
//! [`find_snap`] checks the dragged wall's two endpoints against every other
//! wall's endpoints and, when one pair is close enough, shifts the center so
//! the pair coincides exactly. Distances are in world centimeters, so the
//! capture radius does not change with zoom.
//!
//! A fresh candidate must be within `capture_radius * snap_accept_factor`.
//! Once snapped, the previous anchor is kept out to the looser
//! `capture_radius * hysteresis_factor`, which stops the highlight from
//! flickering when the pointer wobbles around the edge of the tight radius.

#[cfg(test)]
#[path = "snap_test.rs"]
mod snap_test;

use serde::{Deserialize, Serialize};

use crate::config::EditorConfig;
use crate::geometry::{self, Endpoint, WorldPoint};
use crate::wall::{Wall, WallId};

/// Snap state remembered between pointer moves for one dragged wall.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapMemory {
    /// Wall the dragged endpoint is attached to.
    pub target_id: WallId,
    /// Which end of the target wall.
    pub target_end: Endpoint,
    /// Which end of the dragged wall sits on the anchor.
    pub source_end: Endpoint,
    /// World position of the anchor.
    pub anchor: WorldPoint,
}

/// Snap feedback for the host: which endpoint pair would be joined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapCandidate {
    pub target_wall_id: WallId,
    pub target_endpoint: Endpoint,
    pub source_endpoint: Endpoint,
    pub world_x: f64,
    pub world_z: f64,
}

impl From<&SnapMemory> for SnapCandidate {
    fn from(memory: &SnapMemory) -> Self {
        Self {
            target_wall_id: memory.target_id.clone(),
            target_endpoint: memory.target_end,
            source_endpoint: memory.source_end,
            world_x: memory.anchor.x,
            world_z: memory.anchor.z,
        }
    }
}

/// Outcome of one snap pass.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapResult {
    /// Center to commit: the tentative center, shifted when snapped.
    pub center: WorldPoint,
    /// Snap memory for the next pointer move; `None` when unsnapped.
    pub memory: Option<SnapMemory>,
}

impl SnapResult {
    /// Candidate for highlighting, if snapped.
    #[must_use]
    pub fn candidate(&self) -> Option<SnapCandidate> {
        self.memory.as_ref().map(SnapCandidate::from)
    }
}

/// Decide whether `dragging`, centered at `tentative`, snaps to another wall.
///
/// `dragging` supplies id, width and rotation; its stored position is ignored.
/// The floor and the dragged wall itself are never targets. Equal distances
/// resolve to the first pair found in wall order.
#[must_use]
pub fn find_snap(
    dragging: &Wall,
    tentative: WorldPoint,
    walls: &[Wall],
    previous: Option<&SnapMemory>,
    config: &EditorConfig,
) -> SnapResult {
    let theta = dragging.rotation.y;
    let source = |end| geometry::endpoint(tentative, dragging.width, theta, end);

    let mut best: Option<(f64, SnapMemory)> = None;
    for other in walls.iter().filter(|w| !w.is_floor() && w.id != dragging.id) {
        for source_end in Endpoint::BOTH {
            let from = source(source_end);
            for target_end in Endpoint::BOTH {
                let to = other.endpoint(target_end);
                let d = geometry::distance(from, to);
                if d > config.accept_radius() {
                    continue;
                }
                if best.as_ref().is_none_or(|(best_d, _)| d < *best_d) {
                    best = Some((
                        d,
                        SnapMemory { target_id: other.id.clone(), target_end, source_end, anchor: to },
                    ));
                }
            }
        }
    }

    if let Some((_, memory)) = best {
        return shifted(tentative, dragging, memory);
    }

    if let Some(prev) = previous {
        let target_present = walls.iter().any(|w| w.id == prev.target_id);
        let from = source(prev.source_end);
        if target_present && geometry::distance(from, prev.anchor) <= config.hysteresis_radius() {
            return shifted(tentative, dragging, prev.clone());
        }
    }

    SnapResult { center: tentative, memory: None }
}

fn shifted(tentative: WorldPoint, dragging: &Wall, memory: SnapMemory) -> SnapResult {
    let from = geometry::endpoint(tentative, dragging.width, dragging.rotation.y, memory.source_end);
    let center = WorldPoint::new(
        tentative.x + (memory.anchor.x - from.x),
        tentative.z + (memory.anchor.z - from.z),
    );
    SnapResult { center, memory: Some(memory) }
}
