//! Pointer up handling - settle the drag, open the corner prompt.

use super::state::{DragState, PendingPrompt, ReleaseOutcome};
use crate::app::LayoutEditor;
use crate::constraints::{clamp_between, clamp_pillar_position};
use crate::grid::snap_to_grid;
use crate::notifications::Notifier;
use crate::types::PillarId;

impl<N: Notifier> LayoutEditor<N> {
    /// Finish the active drag.
    ///
    /// A pillar released outside the wall span that is not yet a corner pillar
    /// stays where it is and a corner prompt opens; anything else is settled
    /// in-span and the pillars are re-sorted.
    pub fn pointer_up(&mut self) -> ReleaseOutcome {
        match std::mem::take(&mut self.canvas.drag) {
            DragState::Idle => ReleaseOutcome::Nothing,
            DragState::DraggingShelf { target_id, .. } => match self.store.shelf(&target_id) {
                Some(shelf) => ReleaseOutcome::ShelfSettled {
                    height_mm: shelf.height_mm,
                    shelf_id: target_id,
                },
                None => ReleaseOutcome::Nothing,
            },
            DragState::DraggingPillar { target_id, .. } => {
                let Some(pillar) = self.store.pillar(&target_id) else {
                    return ReleaseOutcome::Nothing;
                };
                if !self.store.room.contains_x(pillar.x_mm) && !pillar.is_corner_pillar {
                    tracing::info!(pillar = %target_id, x_mm = pillar.x_mm, "Pillar released past the wall end");
                    self.canvas.prompt = Some(PendingPrompt::CornerPillar {
                        pillar_id: target_id.clone(),
                    });
                    return ReleaseOutcome::CornerConfirmationRequested { pillar_id: target_id };
                }
                match self.settle_pillar(&target_id) {
                    Some(x_mm) => ReleaseOutcome::PillarSettled {
                        pillar_id: target_id,
                        x_mm,
                    },
                    None => ReleaseOutcome::Nothing,
                }
            }
        }
    }

    /// Abandon the active drag. The last position applied during the drag
    /// stays in the store.
    pub fn pointer_leave(&mut self) {
        if self.canvas.drag.is_dragging() {
            tracing::debug!("Drag abandoned");
        }
        self.canvas.drag.reset();
    }

    /// Answer the corner prompt. Either way the pillar is brought back inside
    /// the span; `confirmed` also marks it as a corner pillar. Returns the
    /// settled position, or `None` when no corner prompt was open.
    pub fn confirm_corner_pillar(&mut self, confirmed: bool) -> Option<f64> {
        let pillar_id = match self.canvas.prompt.take() {
            Some(PendingPrompt::CornerPillar { pillar_id }) => pillar_id,
            other => {
                self.canvas.prompt = other;
                return None;
            }
        };

        if confirmed {
            if let Some(pillar) = self.store.pillar_mut(&pillar_id) {
                pillar.is_corner_pillar = true;
                tracing::info!(pillar = %pillar_id, "Marked as corner pillar");
            }
        }
        self.settle_pillar(&pillar_id)
    }

    /// Clamp into `[0, width]`, snap, solve against the neighbors, re-sort.
    fn settle_pillar(&mut self, id: &PillarId) -> Option<f64> {
        let grid = self.settings.data.grid_size_mm;
        let width = self.store.room.width_mm;
        let current = self.store.pillar(id)?.x_mm;

        let in_span = snap_to_grid(clamp_between(current, Some(0.0), Some(width)), grid);
        let x_mm = clamp_pillar_position(id, in_span, &self.store.pillars, width);

        self.store.set_pillar_x(id, x_mm).ok()?;
        self.store.sort_pillars();
        self.invalidate_hit_index();
        Some(x_mm)
    }
}
