//! Placement constraint solvers.
//!
//! Both solvers are pure and total: they take the current entities by
//! reference, never retain them, and always return a resolved value. Entities
//! they cannot resolve (unknown target id, wall pillars) are skipped rather
//! than reported.
//!
//! ## Modules
//!
//! - `pillar` - neighbor-bounded horizontal clamp for pillars
//! - `shelf` - directional clearance clamp for shelves sharing a bay

mod pillar;
mod shelf;

pub use pillar::*;
pub use shelf::*;

/// Clamp into `[min, max]` where either bound may be absent.
///
/// When the bounds cross, the lower bound wins (`max` is applied first).
#[inline]
pub(crate) fn clamp_between(value: f64, min: Option<f64>, max: Option<f64>) -> f64 {
    let mut v = value;
    if let Some(max) = max {
        v = v.min(max);
    }
    if let Some(min) = min {
        v = v.max(min);
    }
    v
}
