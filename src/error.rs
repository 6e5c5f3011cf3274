//! Error types for the planner.
//!
//! The solvers never fail; these cover the outcomes a caller has to check
//! before touching the layout: rejected placements, invalid room input, bad
//! entity references and settings IO.

use crate::constants::{MAX_ROOM_DEPTH_MM, MAX_ROOM_WIDTH_MM, MIN_ROOM_DEPTH_MM, MIN_ROOM_WIDTH_MM};
use crate::types::{PillarId, ShelfId};
use thiserror::Error;

/// Why a new pillar or shelf was not created.
///
/// The `Display` text is the user-facing advisory shown as a toast.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlacementRejection {
    #[error("Pillars can only be placed within the front wall.")]
    PillarOutsideWall { x_mm: f64, room_width_mm: f64 },

    #[error("Shelves can only be placed within the front wall.")]
    ShelfOutsideWall { height_mm: f64, max_height_mm: f64 },
}

/// Invalid room dimension input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoomError {
    #[error("Please enter a positive number.")]
    NotPositive,

    #[error("Minimum width is {}mm.", MIN_ROOM_WIDTH_MM)]
    WidthTooSmall { width_mm: f64 },

    #[error("Maximum width is {}mm.", MAX_ROOM_WIDTH_MM)]
    WidthTooLarge { width_mm: f64 },

    #[error("Depth must be between {}mm and {}mm.", MIN_ROOM_DEPTH_MM, MAX_ROOM_DEPTH_MM)]
    DepthOutOfRange { depth_mm: f64 },
}

/// Errors from layout store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Unknown pillar: {0}")]
    UnknownPillar(PillarId),

    #[error("Unknown shelf: {0}")]
    UnknownShelf(ShelfId),

    #[error("Shelf {shelf} references missing pillar {pillar}")]
    DanglingShelf { shelf: ShelfId, pillar: PillarId },

    #[error(transparent)]
    Room(#[from] RoomError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors while loading or saving settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid grid size: {0}")]
    InvalidGrid(f64),

    #[error("Invalid corner overshoot: {0}")]
    InvalidOvershoot(f64),
}

/// Errors from editor actions that create or change entities.
#[derive(Error, Debug)]
pub enum EditError {
    #[error(transparent)]
    Rejected(#[from] PlacementRejection),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type alias for editor actions
pub type EditResult<T> = Result<T, EditError>;
