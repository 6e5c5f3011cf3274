//! Pointer down handling - prompt dismissal, hit testing, drag start.
//!
//! Hit testing goes through the R-tree spatial index; targets are tried in
//! priority order: add-pillar button, add-shelf buttons, shelves, pillars.

use super::coords::Point;
use super::state::Selection;
use crate::app::LayoutEditor;
use crate::error::EditError;
use crate::notifications::Notifier;
use crate::spatial_index::HitTarget;

impl<N: Notifier> LayoutEditor<N> {
    /// Handle a pointer press at `point` (canvas pixels). Returns what was hit.
    ///
    /// While a prompt is open the press only closes it.
    pub fn pointer_down(&mut self, point: Point) -> Option<HitTarget> {
        if self.canvas.prompt.is_some() {
            self.dismiss_prompt();
            return None;
        }

        let target = self.hit_index().hit_test(point.x, point.y);
        match &target {
            Some(HitTarget::AddPillarButton) => match self.add_pillar() {
                // already reported through the notifier
                Ok(_) | Err(EditError::Rejected(_)) => {}
                Err(e) => {
                    tracing::error!("Adding pillar failed: {}", e);
                    self.notifier.notify(&e.to_string());
                }
            },
            Some(HitTarget::AddShelfButton(bay)) => {
                self.request_shelf(bay.clone());
            }
            Some(HitTarget::Shelf(id)) => {
                if let Some(shelf) = self.store.shelf(id) {
                    let height_mm = shelf.height_mm;
                    self.canvas.selection = Selection::Shelf(id.clone());
                    self.canvas.drag.start_shelf_drag(id.clone(), point, height_mm);
                }
            }
            Some(HitTarget::Pillar(id)) => {
                if let Some(pillar) = self.store.pillar(id) {
                    let x_mm = pillar.x_mm;
                    self.canvas.selection = Selection::Pillar(id.clone());
                    self.canvas.drag.start_pillar_drag(id.clone(), point, x_mm);
                }
            }
            None => {
                self.canvas.selection = Selection::None;
            }
        }
        target
    }
}
