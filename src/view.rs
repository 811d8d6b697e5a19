//! World ↔ view coordinate mapping for the floor plan.
//!
//! The floor rectangle is fitted isotropically into the container minus its
//! padding, then scaled by `zoom` and offset by `pan`. Both pan and zoom
//! changes go through [`ViewState::clamp_pan_for_floor`] so the floor never
//! leaves the viewport entirely.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use serde::{Deserialize, Serialize};

use crate::consts::VIEW_PADDING_PX;
use crate::geometry::{Point, WorldPoint};
use crate::wall::FloorBounds;

/// Engine-owned view state for one editing session.
///
/// `pan_x` / `pan_y` and the container size are in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self { zoom: 1.0, pan_x: 0.0, pan_y: 0.0, width: 0.0, height: 0.0, padding: VIEW_PADDING_PX }
    }
}

impl ViewState {
    /// Container width minus padding on both sides.
    #[must_use]
    pub fn content_width(&self) -> f64 {
        self.width - 2.0 * self.padding
    }

    /// Container height minus padding on both sides.
    #[must_use]
    pub fn content_height(&self) -> f64 {
        self.height - 2.0 * self.padding
    }

    /// Whether the container has a drawable area at all.
    #[must_use]
    pub fn is_laid_out(&self) -> bool {
        self.content_width() > 0.0 && self.content_height() > 0.0
    }

    /// Pixels per centimeter at zoom 1 (isotropic fit of the floor).
    #[must_use]
    pub fn base_scale(&self, bounds: &FloorBounds) -> Option<f64> {
        if !self.is_laid_out() || bounds.width() <= 0.0 || bounds.depth() <= 0.0 {
            return None;
        }
        Some((self.content_width() / bounds.width()).min(self.content_height() / bounds.depth()))
    }

    /// Pixels per centimeter at the current zoom.
    #[must_use]
    pub fn px_per_cm(&self, bounds: &FloorBounds) -> Option<f64> {
        self.base_scale(bounds).map(|s| s * self.zoom)
    }

    /// Convert a world point (cm) to view coordinates (px).
    ///
    /// Falls back to the padding offset before the container is laid out.
    #[must_use]
    pub fn world_to_view(&self, bounds: &FloorBounds, world: WorldPoint) -> Point {
        let Some(s) = self.px_per_cm(bounds) else {
            return Point::new(self.padding, self.padding);
        };
        Point {
            x: self.padding + (world.x - bounds.min_x) * s + self.pan_x,
            y: self.padding + (world.z - bounds.min_z) * s + self.pan_y,
        }
    }

    /// Convert a view point (px) to world coordinates (cm).
    ///
    /// Uses the max-based world-per-pixel scalar so horizontal and vertical
    /// motion map to the same world distance. Points outside the container
    /// are not clamped. Falls back to the floor's min corner before layout.
    #[must_use]
    pub fn view_to_world(&self, bounds: &FloorBounds, view: Point) -> WorldPoint {
        if !self.is_laid_out() || self.zoom <= 0.0 {
            return WorldPoint::new(bounds.min_x, bounds.min_z);
        }
        let world_per_px = (bounds.width() / self.content_width()).max(bounds.depth() / self.content_height());
        WorldPoint {
            x: bounds.min_x + (view.x - self.padding - self.pan_x) * world_per_px / self.zoom,
            z: bounds.min_z + (view.y - self.padding - self.pan_y) * world_per_px / self.zoom,
        }
    }

    /// Restrict a pan offset so the floor stays within the viewport at `zoom`.
    ///
    /// Returns `(0, 0)` before the container is laid out.
    #[must_use]
    pub fn clamp_pan_for_floor(&self, bounds: &FloorBounds, pan_x: f64, pan_y: f64, zoom: f64) -> (f64, f64) {
        let Some(s) = self.base_scale(bounds) else {
            return (0.0, 0.0);
        };
        let floor_width_px = bounds.width() * s * zoom;
        let floor_height_px = bounds.depth() * s * zoom;
        let min_pan_x = (self.content_width() - floor_width_px).min(0.0);
        let min_pan_y = (self.content_height() - floor_height_px).min(0.0);
        (pan_x.clamp(min_pan_x, 0.0), pan_y.clamp(min_pan_y, 0.0))
    }

    /// Re-clamp the current pan against the current zoom.
    pub fn reclamp(&mut self, bounds: &FloorBounds) {
        let (x, y) = self.clamp_pan_for_floor(bounds, self.pan_x, self.pan_y, self.zoom);
        self.pan_x = x;
        self.pan_y = y;
    }
}
