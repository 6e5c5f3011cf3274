//! Drag operations - pillar and shelf dragging.
//!
//! Pointer move runs on every sample while a drag is active; each sample is
//! converted, snapped, solved and written to the store in one step.

use super::coords::Point;
use super::state::DragState;
use crate::app::LayoutEditor;
use crate::constraints::{clamp_between, clamp_pillar_position, clamp_shelf_height_on_grid};
use crate::grid::snap_to_grid;
use crate::notifications::Notifier;
use crate::types::{PillarId, ShelfId};

impl<N: Notifier> LayoutEditor<N> {
    /// Handle a pointer move to `point` (canvas pixels). Returns the resolved
    /// position of the dragged entity, in millimetres.
    pub fn pointer_move(&mut self, point: Point) -> Option<f64> {
        match &self.canvas.drag {
            DragState::Idle => None,
            DragState::DraggingPillar { target_id, .. } => {
                let id = target_id.clone();
                self.drag_pillar_to(&id, point.x)
            }
            DragState::DraggingShelf { target_id, .. } => {
                let id = target_id.clone();
                self.drag_shelf_to(&id, point.y)
            }
        }
    }

    /// Outside `[0, width]` the pillar is in corner overshoot and spacing is
    /// not enforced.
    fn drag_pillar_to(&mut self, id: &PillarId, x_px: f64) -> Option<f64> {
        let grid = self.settings.data.grid_size_mm;
        let overshoot = self.settings.data.corner_overshoot_mm;
        let width = self.store.room.width_mm;

        let snapped = snap_to_grid(self.canvas.scale.px_to_mm_x(x_px), grid);
        let mut x_mm = clamp_between(snapped, Some(-overshoot), Some(width + overshoot));
        if self.store.room.contains_x(x_mm) {
            x_mm = clamp_pillar_position(id, x_mm, &self.store.pillars, width);
        }

        if let Err(e) = self.store.set_pillar_x(id, x_mm) {
            tracing::warn!("Dragged pillar vanished: {}", e);
            self.canvas.drag.reset();
            return None;
        }
        self.invalidate_hit_index();
        Some(x_mm)
    }

    fn drag_shelf_to(&mut self, id: &ShelfId, y_px: f64) -> Option<f64> {
        let grid = self.settings.data.grid_size_mm;
        let max_height = self.max_height_mm();

        let raw = clamp_between(self.canvas.scale.px_to_mm_y(y_px), Some(0.0), Some(max_height));
        let height_mm = clamp_shelf_height_on_grid(id, snap_to_grid(raw, grid), &self.store.shelves, grid);

        if let Err(e) = self.store.set_shelf_height(id, height_mm) {
            tracing::warn!("Dragged shelf vanished: {}", e);
            self.canvas.drag.reset();
            return None;
        }
        self.invalidate_hit_index();
        Some(height_mm)
    }
}
