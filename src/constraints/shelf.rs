//! Shelf constraint solver.
//!
//! Shelves sharing a bay must keep a vertical gap that depends on the types
//! of the two shelves and on which one is on top. Each type declares the
//! clearance it needs above and below itself:
//!
//! | type   | above | below |
//! |--------|-------|-------|
//! | normal |   300 |   300 |
//! | hanger |   300 |  1000 |
//! | drawer |   500 |   300 |
//!
//! For a pair the required gap is `max(upper.below, lower.above)`.
//!
//! Unlike pillars, shelves are not bounded by the wall span while dragging:
//! a clearance floor may push a shelf above the nominal wall height.

use super::clamp_between;
use crate::constants::DEFAULT_GRID_SIZE_MM;
use crate::grid::{ceil_to_grid, floor_to_grid, snap_to_grid};
use crate::types::{Shelf, ShelfId, ShelfType};

/// Clearance a shelf type needs on each side, in millimetres.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Clearance {
    pub above: u32,
    pub below: u32,
}

impl ShelfType {
    pub fn clearance(&self) -> Clearance {
        match self {
            ShelfType::Normal => Clearance { above: 300, below: 300 },
            ShelfType::Hanger => Clearance { above: 300, below: 1000 },
            ShelfType::Drawer => Clearance { above: 500, below: 300 },
        }
    }
}

/// Minimum vertical gap when a shelf of type `upper` hangs above one of type `lower`.
pub fn required_spacing(upper: ShelfType, lower: ShelfType) -> f64 {
    f64::from(upper.clearance().below.max(lower.clearance().above))
}

/// Legal height interval for a shelf; either end may be unbounded.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ShelfRange {
    pub floor_mm: Option<f64>,
    pub ceiling_mm: Option<f64>,
}

impl ShelfRange {
    fn raise_floor(&mut self, value: f64) {
        self.floor_mm = Some(self.floor_mm.map_or(value, |f| f.max(value)));
    }

    fn lower_ceiling(&mut self, value: f64) {
        self.ceiling_mm = Some(self.ceiling_mm.map_or(value, |c| c.min(value)));
    }

    #[inline]
    pub fn clamp(&self, value_mm: f64) -> f64 {
        clamp_between(value_mm, self.floor_mm, self.ceiling_mm)
    }

    pub fn is_unbounded(&self) -> bool {
        self.floor_mm.is_none() && self.ceiling_mm.is_none()
    }
}

/// Compute the legal range for `target_id` proposed at `proposed_mm`.
///
/// Only shelves on the same ordered pillar pair take part. Bounds are
/// rounded outward to the grid (floors up, ceilings down). A proposal exactly
/// level with another shelf is ambiguous, so both the floor and the ceiling
/// from that shelf apply. Returns `None` for an unknown target.
pub fn shelf_range(
    target_id: &ShelfId,
    proposed_mm: f64,
    shelves: &[Shelf],
    grid_size_mm: f64,
) -> Option<ShelfRange> {
    let target = shelves.iter().find(|s| &s.id == target_id)?;
    let mut range = ShelfRange::default();

    for other in shelves.iter().filter(|s| s.id != target.id && s.same_bay(target)) {
        let above_other = required_spacing(target.shelf_type, other.shelf_type);
        let below_other = required_spacing(other.shelf_type, target.shelf_type);

        if proposed_mm > other.height_mm {
            if proposed_mm - other.height_mm < above_other {
                range.raise_floor(ceil_to_grid(other.height_mm + above_other, grid_size_mm));
            }
        } else if proposed_mm < other.height_mm {
            if other.height_mm - proposed_mm < below_other {
                range.lower_ceiling(floor_to_grid(other.height_mm - below_other, grid_size_mm));
            }
        } else {
            range.raise_floor(ceil_to_grid(other.height_mm + above_other, grid_size_mm));
            range.lower_ceiling(floor_to_grid(other.height_mm - below_other, grid_size_mm));
        }
    }

    Some(range)
}

/// Clamp a proposed shelf height on the given grid, then re-snap it.
///
/// If the snapped result still breaks the clearance of any shelf in the bay,
/// the shelf keeps its current height.
pub fn clamp_shelf_height_on_grid(
    target_id: &ShelfId,
    proposed_mm: f64,
    shelves: &[Shelf],
    grid_size_mm: f64,
) -> f64 {
    let Some(target) = shelves.iter().find(|s| &s.id == target_id) else {
        return proposed_mm;
    };
    let Some(range) = shelf_range(target_id, proposed_mm, shelves, grid_size_mm) else {
        return proposed_mm;
    };
    let resolved = snap_to_grid(range.clamp(proposed_mm), grid_size_mm);

    // bounds come from the proposal, so the clamped value can land in another
    // shelf's clearance
    if let Some(blocker) = first_conflict(target, resolved, shelves) {
        tracing::debug!(
            shelf = %target_id,
            proposed = proposed_mm,
            resolved,
            blocker = %blocker.id,
            "Shelf height rejected, keeping current height"
        );
        return target.height_mm;
    }

    if resolved != proposed_mm {
        tracing::debug!(
            shelf = %target_id,
            proposed = proposed_mm,
            resolved,
            floor = ?range.floor_mm,
            ceiling = ?range.ceiling_mm,
            "Shelf height clamped"
        );
    }
    resolved
}

/// First shelf in the target's bay that `height_mm` would sit too close to.
fn first_conflict<'a>(target: &Shelf, height_mm: f64, shelves: &'a [Shelf]) -> Option<&'a Shelf> {
    shelves
        .iter()
        .filter(|s| s.id != target.id && s.same_bay(target))
        .find(|other| {
            let (gap, required) = if height_mm >= other.height_mm {
                (height_mm - other.height_mm, required_spacing(target.shelf_type, other.shelf_type))
            } else {
                (other.height_mm - height_mm, required_spacing(other.shelf_type, target.shelf_type))
            };
            gap < required
        })
}

/// Clamp a proposed shelf height on the default 100mm grid.
///
/// Unknown shelves get `proposed_mm` back unchanged.
pub fn clamp_shelf_height(target_id: &ShelfId, proposed_mm: f64, shelves: &[Shelf]) -> f64 {
    clamp_shelf_height_on_grid(target_id, proposed_mm, shelves, DEFAULT_GRID_SIZE_MM)
}

/// Two shelves in one bay that sit closer than their type pair allows.
#[derive(Clone, Debug, PartialEq)]
pub struct ShelfSpacingViolation {
    pub upper: ShelfId,
    pub lower: ShelfId,
    pub gap_mm: f64,
    pub required_mm: f64,
}

/// Check every pair of shelves sharing a bay.
pub fn shelf_spacing_violations(shelves: &[Shelf]) -> Vec<ShelfSpacingViolation> {
    let mut violations = Vec::new();
    for (i, a) in shelves.iter().enumerate() {
        for b in shelves.iter().skip(i + 1).filter(|b| b.same_bay(a)) {
            let (upper, lower) = if a.height_mm >= b.height_mm { (a, b) } else { (b, a) };
            let gap_mm = upper.height_mm - lower.height_mm;
            let required_mm = required_spacing(upper.shelf_type, lower.shelf_type);
            if gap_mm < required_mm {
                violations.push(ShelfSpacingViolation {
                    upper: upper.id.clone(),
                    lower: lower.id.clone(),
                    gap_mm,
                    required_mm,
                });
            }
        }
    }
    violations
}
