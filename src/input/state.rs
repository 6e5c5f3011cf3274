//! Pointer state machine for the wall canvas.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> DraggingPillar   (pointer down on a normal pillar)
//! Idle -> DraggingShelf    (pointer down on a shelf)
//!
//! Any -> Idle              (pointer up settles the drag, pointer leave abandons it)
//! ```
//!
//! Positions are written to the store on every move, so abandoning a drag
//! keeps the last applied position.

use super::coords::Point;
use crate::types::{Bay, PillarId, ShelfId};

/// The transient drag in progress, if any.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,

    DraggingPillar {
        target_id: PillarId,
        /// Pointer position at pointer-down
        start_px: Point,
        original_x_mm: f64,
    },

    DraggingShelf {
        target_id: ShelfId,
        start_px: Point,
        original_height_mm: f64,
    },
}

impl DragState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        !self.is_idle()
    }

    pub fn dragged_pillar(&self) -> Option<&PillarId> {
        match self {
            Self::DraggingPillar { target_id, .. } => Some(target_id),
            _ => None,
        }
    }

    pub fn dragged_shelf(&self) -> Option<&ShelfId> {
        match self {
            Self::DraggingShelf { target_id, .. } => Some(target_id),
            _ => None,
        }
    }

    pub fn start_px(&self) -> Option<Point> {
        match self {
            Self::DraggingPillar { start_px, .. } | Self::DraggingShelf { start_px, .. } => Some(*start_px),
            Self::Idle => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::Idle;
    }

    pub fn start_pillar_drag(&mut self, target_id: PillarId, start_px: Point, original_x_mm: f64) {
        *self = Self::DraggingPillar {
            target_id,
            start_px,
            original_x_mm,
        };
    }

    pub fn start_shelf_drag(&mut self, target_id: ShelfId, start_px: Point, original_height_mm: f64) {
        *self = Self::DraggingShelf {
            target_id,
            start_px,
            original_height_mm,
        };
    }
}

/// The selected entity, target of `delete_selected`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Selection {
    #[default]
    None,
    Pillar(PillarId),
    Shelf(ShelfId),
}

impl Selection {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// A question put to the user that blocks the canvas until answered.
#[derive(Debug, Clone, PartialEq)]
pub enum PendingPrompt {
    /// Which kind of shelf to hang in the bay
    ShelfType { bay: Bay },
    /// Whether a pillar released past the wall end becomes a corner pillar
    CornerPillar { pillar_id: PillarId },
}

/// What a pointer-up did.
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseOutcome {
    /// No drag was active
    Nothing,
    PillarSettled { pillar_id: PillarId, x_mm: f64 },
    ShelfSettled { shelf_id: ShelfId, height_mm: f64 },
    /// The pillar was left outside the span; a corner prompt is now open
    CornerConfirmationRequested { pillar_id: PillarId },
}
