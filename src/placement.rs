//! Placement orchestrator: default positions for new pillars and shelves,
//! and the span checks that may reject them.
//!
//! Nothing here mutates the layout. Callers plan a placement, and only on
//! `Ok` insert the entity; on `Err` they surface the rejection message.

use crate::constants::{
    FIRST_SHELF_DROP_MM, MAX_ROOM_DEPTH_MM, MAX_ROOM_WIDTH_MM, MIN_ROOM_DEPTH_MM,
    MIN_ROOM_WIDTH_MM, NEW_PILLAR_OFFSET_MM, NEXT_SHELF_DROP_MM,
};
use crate::error::{PlacementRejection, RoomError};
use crate::types::{Bay, Pillar, Shelf};

// ============================================================================
// Span checks
// ============================================================================

/// Accept `proposed_mm` if it lies on the wall span `[0, room_width_mm]`.
pub fn validate_new_pillar_placement(
    proposed_mm: f64,
    room_width_mm: f64,
) -> Result<f64, PlacementRejection> {
    if (0.0..=room_width_mm).contains(&proposed_mm) {
        Ok(proposed_mm)
    } else {
        Err(PlacementRejection::PillarOutsideWall {
            x_mm: proposed_mm,
            room_width_mm,
        })
    }
}

/// Accept `proposed_mm` if it lies within `[0, max_height_mm]`.
pub fn validate_new_shelf_placement(
    proposed_mm: f64,
    max_height_mm: f64,
) -> Result<f64, PlacementRejection> {
    if (0.0..=max_height_mm).contains(&proposed_mm) {
        Ok(proposed_mm)
    } else {
        Err(PlacementRejection::ShelfOutsideWall {
            height_mm: proposed_mm,
            max_height_mm,
        })
    }
}

// ============================================================================
// Defaults
// ============================================================================

/// Rightmost normal pillar, if any.
pub fn rightmost_pillar(pillars: &[Pillar]) -> Option<&Pillar> {
    pillars
        .iter()
        .filter(|p| p.is_normal())
        .max_by(|a, b| a.x_mm.total_cmp(&b.x_mm))
}

/// Where the next "add pillar" action puts its pillars.
///
/// An empty wall gets a whole first bay (two pillars, at 0 and 700mm);
/// afterwards each action adds one pillar 700mm right of the rightmost.
pub fn default_new_pillar_positions(pillars: &[Pillar]) -> Vec<f64> {
    match rightmost_pillar(pillars) {
        Some(rightmost) => vec![rightmost.x_mm + NEW_PILLAR_OFFSET_MM],
        None => vec![0.0, NEW_PILLAR_OFFSET_MM],
    }
}

/// Default positions for the next pillar(s), all checked against the span.
pub fn plan_new_pillars(pillars: &[Pillar], room_width_mm: f64) -> Result<Vec<f64>, PlacementRejection> {
    default_new_pillar_positions(pillars)
        .into_iter()
        .map(|x| validate_new_pillar_placement(x, room_width_mm))
        .collect()
}

/// The lowest shelf hung in `bay`, if any.
pub fn lowest_shelf_in_bay<'a>(bay: &Bay, shelves: &'a [Shelf]) -> Option<&'a Shelf> {
    shelves
        .iter()
        .filter(|s| s.is_in_bay(bay))
        .min_by(|a, b| a.height_mm.total_cmp(&b.height_mm))
}

/// Where the next shelf in `bay` goes: 300mm under the wall top for the first
/// one, then 400mm under the lowest existing shelf, stacking downward.
pub fn default_new_shelf_height(bay: &Bay, shelves: &[Shelf], max_height_mm: f64) -> f64 {
    match lowest_shelf_in_bay(bay, shelves) {
        Some(lowest) => lowest.height_mm - NEXT_SHELF_DROP_MM,
        None => max_height_mm - FIRST_SHELF_DROP_MM,
    }
}

/// Default height for the next shelf in `bay`, checked against the span.
pub fn plan_new_shelf(bay: &Bay, shelves: &[Shelf], max_height_mm: f64) -> Result<f64, PlacementRejection> {
    validate_new_shelf_placement(default_new_shelf_height(bay, shelves, max_height_mm), max_height_mm)
}

// ============================================================================
// Room input
// ============================================================================

/// Validate a requested room width.
pub fn validate_room_width(width_mm: f64) -> Result<f64, RoomError> {
    if width_mm.is_nan() || width_mm <= 0.0 {
        return Err(RoomError::NotPositive);
    }
    if width_mm < MIN_ROOM_WIDTH_MM {
        return Err(RoomError::WidthTooSmall { width_mm });
    }
    if width_mm > MAX_ROOM_WIDTH_MM {
        return Err(RoomError::WidthTooLarge { width_mm });
    }
    Ok(width_mm)
}

/// Validate a requested room depth.
pub fn validate_room_depth(depth_mm: f64) -> Result<f64, RoomError> {
    if depth_mm.is_nan() || depth_mm <= 0.0 {
        return Err(RoomError::NotPositive);
    }
    if !(MIN_ROOM_DEPTH_MM..=MAX_ROOM_DEPTH_MM).contains(&depth_mm) {
        return Err(RoomError::DepthOutOfRange { depth_mm });
    }
    Ok(depth_mm)
}
