//! Canvas transformations - canvas resize and coordinate conversion on the editor.

use super::coords::{CoordinateConverter, Point, WallPoint};
use crate::app::LayoutEditor;
use crate::notifications::Notifier;
use crate::scale::compute_scale;

impl<N: Notifier> LayoutEditor<N> {
    /// Recompute the scale for a new canvas size.
    pub fn set_canvas_size(&mut self, width_px: f64, height_px: f64) {
        if (width_px, height_px) == self.canvas.size_px {
            return;
        }
        tracing::debug!(width_px, height_px, "Canvas resized");
        self.canvas.size_px = (width_px, height_px);
        self.canvas.scale = compute_scale(width_px, height_px, self.store.room.width_mm, self.store.room.height_mm);
        self.invalidate_hit_index();
    }

    pub fn canvas_size(&self) -> (f64, f64) {
        self.canvas.size_px
    }

    #[inline]
    pub fn canvas_to_wall(&self, point: Point) -> WallPoint {
        CoordinateConverter::canvas_to_wall(point, &self.canvas.scale)
    }

    #[inline]
    pub fn wall_to_canvas(&self, point: WallPoint) -> Point {
        CoordinateConverter::wall_to_canvas(point, &self.canvas.scale)
    }
}
