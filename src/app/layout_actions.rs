//! Layout actions - add, delete, restyle and resize, as triggered from the
//! toolbar, prompts and keyboard.
//!
//! Every creation goes through the placement orchestrator first; a rejection
//! is reported through the notifier and leaves the layout untouched.

use super::state::LayoutEditor;
use crate::error::{EditResult, StoreResult};
use crate::input::{PendingPrompt, Selection};
use crate::notifications::Notifier;
use crate::placement::{plan_new_pillars, plan_new_shelf};
use crate::scale::compute_scale;
use crate::types::{Bay, Pillar, PillarId, PillarStyle, Shelf, ShelfId, ShelfType};

impl<N: Notifier> LayoutEditor<N> {
    // ==================== Pillars ====================

    /// Add the next pillar(s) at their default positions. An empty wall gets
    /// two pillars forming the first bay.
    pub fn add_pillar(&mut self) -> EditResult<Vec<PillarId>> {
        let positions = match plan_new_pillars(&self.store.pillars, self.store.room.width_mm) {
            Ok(positions) => positions,
            Err(rejection) => {
                tracing::warn!(?rejection, "Pillar placement rejected");
                self.notifier.notify(&rejection.to_string());
                return Err(rejection.into());
            }
        };

        let style = self.settings.data.pillar_style;
        let ids: Vec<PillarId> = positions
            .into_iter()
            .map(|x_mm| {
                let pillar = Pillar::new(x_mm, style);
                let id = pillar.id.clone();
                self.store.add_pillar(pillar);
                id
            })
            .collect();
        self.store.sort_pillars();
        self.invalidate_hit_index();
        Ok(ids)
    }

    /// Restyle every normal pillar and use `style` for new ones.
    pub fn set_pillar_style(&mut self, style: PillarStyle) {
        self.settings.data.pillar_style = style;
        self.store.set_pillar_style_all(style);
    }

    // ==================== Shelves ====================

    /// Open the shelf-type prompt for `bay`.
    pub fn request_shelf(&mut self, bay: Bay) {
        self.canvas.prompt = Some(PendingPrompt::ShelfType { bay });
    }

    /// Answer the shelf-type prompt. Returns `None` when no shelf-type prompt
    /// was open.
    pub fn choose_shelf_type(&mut self, shelf_type: ShelfType) -> Option<EditResult<ShelfId>> {
        let bay = match self.canvas.prompt.take() {
            Some(PendingPrompt::ShelfType { bay }) => bay,
            other => {
                self.canvas.prompt = other;
                return None;
            }
        };
        Some(self.add_shelf(bay, shelf_type))
    }

    /// Hang a new shelf in `bay` at the default height for that bay.
    ///
    /// The shelf is a corner shelf when either of its pillars is a corner
    /// pillar.
    pub fn add_shelf(&mut self, bay: Bay, shelf_type: ShelfType) -> EditResult<ShelfId> {
        let height_mm = match plan_new_shelf(&bay, &self.store.shelves, self.max_height_mm()) {
            Ok(height_mm) => height_mm,
            Err(rejection) => {
                tracing::warn!(?rejection, "Shelf placement rejected");
                self.notifier.notify(&rejection.to_string());
                return Err(rejection.into());
            }
        };

        let is_corner = [&bay.start_pillar_id, &bay.end_pillar_id]
            .into_iter()
            .any(|id| self.store.pillar(id).is_some_and(|p| p.is_corner_pillar));
        let shelf = Shelf::new(bay, height_mm, shelf_type).corner(is_corner);
        let id = shelf.id.clone();
        self.store.add_shelf(shelf)?;
        self.invalidate_hit_index();
        Ok(id)
    }

    // ==================== Deletion ====================

    /// Delete the selected pillar (with its shelves) or shelf.
    pub fn delete_selected(&mut self) -> StoreResult<bool> {
        let selection = std::mem::take(&mut self.canvas.selection);
        match selection {
            Selection::None => return Ok(false),
            Selection::Pillar(id) => {
                self.store.delete_pillar(&id)?;
            }
            Selection::Shelf(id) => {
                self.store.delete_shelf(&id)?;
            }
        }
        self.canvas.drag.reset();
        self.invalidate_hit_index();
        Ok(true)
    }

    /// Close any open prompt. A pending corner prompt is treated as declined.
    pub fn dismiss_prompt(&mut self) {
        match self.canvas.prompt {
            Some(PendingPrompt::CornerPillar { .. }) => {
                self.confirm_corner_pillar(false);
            }
            Some(PendingPrompt::ShelfType { .. }) => self.canvas.prompt = None,
            None => {}
        }
    }

    // ==================== Room ====================

    /// Change the room width. A changed width clears the whole layout.
    /// Invalid input is reported through the notifier and changes nothing.
    pub fn resize_room(&mut self, width_mm: f64) -> StoreResult<()> {
        if let Err(e) = self.store.resize_room(width_mm) {
            tracing::warn!(width_mm, "Room resize rejected: {}", e);
            self.notifier.notify(&e.to_string());
            return Err(e);
        }

        self.canvas.drag.reset();
        self.canvas.selection = Selection::None;
        self.canvas.prompt = None;
        let (width_px, height_px) = self.canvas.size_px;
        self.canvas.scale = compute_scale(width_px, height_px, self.store.room.width_mm, self.store.room.height_mm);
        self.invalidate_hit_index();
        Ok(())
    }
}
