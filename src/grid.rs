//! Grid snapping for millimetre values.

use crate::constants::DEFAULT_GRID_SIZE_MM;

/// Round `value_mm` to the nearest multiple of `grid_size_mm`.
///
/// Halfway values round away from zero.
#[inline]
pub fn snap_to_grid(value_mm: f64, grid_size_mm: f64) -> f64 {
    (value_mm / grid_size_mm).round() * grid_size_mm
}

/// [`snap_to_grid`] on the default 100mm grid.
#[inline]
pub fn snap(value_mm: f64) -> f64 {
    snap_to_grid(value_mm, DEFAULT_GRID_SIZE_MM)
}

/// Smallest grid multiple that is `>= value_mm`.
#[inline]
pub fn ceil_to_grid(value_mm: f64, grid_size_mm: f64) -> f64 {
    (value_mm / grid_size_mm).ceil() * grid_size_mm
}

/// Largest grid multiple that is `<= value_mm`.
#[inline]
pub fn floor_to_grid(value_mm: f64, grid_size_mm: f64) -> f64 {
    (value_mm / grid_size_mm).floor() * grid_size_mm
}
