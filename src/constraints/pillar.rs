//! Pillar constraint solver.
//!
//! A dragged pillar is bounded only by its immediate neighbors in x order:
//! it must keep at least [`MIN_PILLAR_SPACING_MM`] to each, and when the
//! proposal would stretch a gap past [`MAX_PILLAR_SPACING_MM`] the bound on
//! that side is tightened to the maximum. This is local propagation, not a
//! global solve; drags are incremental and the store re-sorts on release.

use super::clamp_between;
use crate::constants::{MAX_PILLAR_SPACING_MM, MIN_PILLAR_SPACING_MM};
use crate::types::{Pillar, PillarId};

/// Legal range for a pillar position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PillarRange {
    pub min_mm: f64,
    pub max_mm: f64,
}

impl PillarRange {
    #[inline]
    pub fn clamp(&self, value_mm: f64) -> f64 {
        clamp_between(value_mm, Some(self.min_mm), Some(self.max_mm))
    }
}

/// Normal pillars sorted ascending by x. Wall pillars are dropped.
pub fn sorted_normal_pillars(pillars: &[Pillar]) -> Vec<&Pillar> {
    let mut normal: Vec<&Pillar> = pillars.iter().filter(|p| p.is_normal()).collect();
    normal.sort_by(|a, b| a.x_mm.total_cmp(&b.x_mm));
    normal
}

/// Compute the legal range for `target_id` at `proposed_x_mm`.
///
/// Returns `None` when the target is not a known normal pillar.
pub fn pillar_range(
    target_id: &PillarId,
    proposed_x_mm: f64,
    pillars: &[Pillar],
    room_width_mm: f64,
) -> Option<PillarRange> {
    let sorted = sorted_normal_pillars(pillars);
    let index = sorted.iter().position(|p| &p.id == target_id)?;
    let left = index.checked_sub(1).map(|i| sorted[i]);
    let right = sorted.get(index + 1).copied();

    let mut min_mm = 0.0_f64;
    let mut max_mm = room_width_mm;

    if let Some(left) = left {
        min_mm = left.x_mm + MIN_PILLAR_SPACING_MM;
        let widest = left.x_mm + MAX_PILLAR_SPACING_MM;
        if proposed_x_mm > widest {
            max_mm = max_mm.min(widest);
        }
    }

    if let Some(right) = right {
        max_mm = max_mm.min(right.x_mm - MIN_PILLAR_SPACING_MM);
        let widest = right.x_mm - MAX_PILLAR_SPACING_MM;
        if proposed_x_mm < widest {
            min_mm = min_mm.max(widest);
        }
    }

    Some(PillarRange { min_mm, max_mm })
}

/// Clamp a proposed pillar position into its neighbor-bounded legal range.
///
/// Unknown or wall pillars get `proposed_x_mm` back unchanged.
pub fn clamp_pillar_position(
    target_id: &PillarId,
    proposed_x_mm: f64,
    pillars: &[Pillar],
    room_width_mm: f64,
) -> f64 {
    let Some(range) = pillar_range(target_id, proposed_x_mm, pillars, room_width_mm) else {
        return proposed_x_mm;
    };
    let resolved = range.clamp(proposed_x_mm);
    if resolved != proposed_x_mm {
        tracing::debug!(
            pillar = %target_id,
            proposed = proposed_x_mm,
            resolved,
            min = range.min_mm,
            max = range.max_mm,
            "Pillar position clamped"
        );
    }
    resolved
}

/// A pair of adjacent in-span normal pillars whose gap breaks the spacing rule.
#[derive(Clone, Debug, PartialEq)]
pub struct PillarSpacingViolation {
    pub left: PillarId,
    pub right: PillarId,
    pub gap_mm: f64,
}

/// Check every adjacent pair of normal pillars that both lie within
/// `[0, room_width_mm]`. Pillars outside the span are exempt.
pub fn pillar_spacing_violations(pillars: &[Pillar], room_width_mm: f64) -> Vec<PillarSpacingViolation> {
    let in_span: Vec<&Pillar> = sorted_normal_pillars(pillars)
        .into_iter()
        .filter(|p| (0.0..=room_width_mm).contains(&p.x_mm))
        .collect();

    in_span
        .windows(2)
        .filter_map(|pair| {
            let gap_mm = pair[1].x_mm - pair[0].x_mm;
            let ok = (MIN_PILLAR_SPACING_MM..=MAX_PILLAR_SPACING_MM).contains(&gap_mm);
            (!ok).then(|| PillarSpacingViolation {
                left: pair[0].id.clone(),
                right: pair[1].id.clone(),
                gap_mm,
            })
        })
        .collect()
}
