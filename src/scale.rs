//! Scale model: conversion between wall millimetres and canvas pixels.
//!
//! Two frames are derived from the canvas size and the room dimensions:
//!
//! - the **blue frame**, a fixed-margin outer boundary, and
//! - the **red frame** ("front wall"), the interactive span.
//!
//! The horizontal scale is pinned to a reference room width so fixed-size
//! furniture keeps its visual proportions when the room width changes; the red
//! frame grows or shrinks instead. The vertical scale maps the room height onto
//! a fixed share of the canvas height.
//!
//! The X axis grows rightward in both spaces. The Y axis is flipped: millimetre
//! heights grow upward from the floor (bottom of the red frame) while pixel
//! coordinates grow downward.

use crate::constants::{
    BLUE_FRAME_MARGIN, MAX_RED_WIDTH_FRACTION, RED_FRAME_HEIGHT_FRACTION,
    REFERENCE_ROOM_WIDTH_MM, REFERENCE_WIDTH_FRACTION,
};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Derived, read-only geometry for one canvas size and room size.
///
/// Recompute with [`compute_scale`] whenever either changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleInfo {
    /// Pixels per millimetre horizontally (constant across room widths)
    pub scale_x: f64,
    /// Pixels per millimetre vertically
    pub scale_y: f64,
    pub blue_frame: Rect,
    pub red_frame: Rect,
}

/// Compute the frames and scales for a canvas of `canvas_width_px` by
/// `canvas_height_px` showing a wall of `room_width_mm` by `room_height_mm`.
pub fn compute_scale(
    canvas_width_px: f64,
    canvas_height_px: f64,
    room_width_mm: f64,
    room_height_mm: f64,
) -> ScaleInfo {
    let blue_frame = Rect::new(
        canvas_width_px * BLUE_FRAME_MARGIN,
        canvas_height_px * BLUE_FRAME_MARGIN,
        canvas_width_px * (1.0 - BLUE_FRAME_MARGIN * 2.0),
        canvas_height_px * (1.0 - BLUE_FRAME_MARGIN * 2.0),
    );

    let fixed_red_height = canvas_height_px * RED_FRAME_HEIGHT_FRACTION;
    let scale_x = blue_frame.width * REFERENCE_WIDTH_FRACTION / REFERENCE_ROOM_WIDTH_MM;
    let scale_y = fixed_red_height / room_height_mm;

    let red_width = (room_width_mm * scale_x).min(blue_frame.width * MAX_RED_WIDTH_FRACTION);
    let red_height = room_height_mm * scale_y;

    let (blue_cx, blue_cy) = blue_frame.center();
    let red_frame = Rect::new(
        blue_cx - red_width / 2.0,
        blue_cy - red_height / 2.0,
        red_width,
        red_height,
    );

    ScaleInfo {
        scale_x,
        scale_y,
        blue_frame,
        red_frame,
    }
}

impl ScaleInfo {
    /// Wall x (mm from the left end) to canvas x.
    #[inline]
    pub fn mm_to_px_x(&self, x_mm: f64) -> f64 {
        self.red_frame.x + x_mm * self.scale_x
    }

    /// Height above the floor (mm) to canvas y.
    #[inline]
    pub fn mm_to_px_y(&self, y_mm: f64) -> f64 {
        self.red_frame.bottom() - y_mm * self.scale_y
    }

    /// Canvas x to wall x (mm).
    #[inline]
    pub fn px_to_mm_x(&self, x_px: f64) -> f64 {
        (x_px - self.red_frame.x) / self.scale_x
    }

    /// Canvas y to height above the floor (mm).
    #[inline]
    pub fn px_to_mm_y(&self, y_px: f64) -> f64 {
        (self.red_frame.bottom() - y_px) / self.scale_y
    }

    /// The tallest height (mm) the red frame represents.
    #[inline]
    pub fn max_height_mm(&self) -> f64 {
        self.red_frame.height / self.scale_y
    }
}
