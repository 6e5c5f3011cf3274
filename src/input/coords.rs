//! Coordinate conversion between canvas pixels and wall millimetres.
//!
//! Thin wrappers over [`ScaleInfo`] so pointer handlers convert whole points
//! instead of repeating the per-axis formulas.

use crate::scale::ScaleInfo;

/// A pointer position in canvas pixels, origin top-left.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A position on the wall in millimetres: `x` from the left end, `y` up from
/// the floor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WallPoint {
    pub x_mm: f64,
    pub y_mm: f64,
}

pub struct CoordinateConverter;

impl CoordinateConverter {
    #[inline]
    pub fn canvas_to_wall(point: Point, scale: &ScaleInfo) -> WallPoint {
        WallPoint {
            x_mm: scale.px_to_mm_x(point.x),
            y_mm: scale.px_to_mm_y(point.y),
        }
    }

    #[inline]
    pub fn wall_to_canvas(point: WallPoint, scale: &ScaleInfo) -> Point {
        Point {
            x: scale.mm_to_px_x(point.x_mm),
            y: scale.mm_to_px_y(point.y_mm),
        }
    }
}
