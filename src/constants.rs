//! Planner-wide constants.
//!
//! Centralizes the physical limits, spacing rules and canvas layout fractions
//! so the solvers and the hit-testing geometry agree on the same numbers.

// ============================================================================
// Room Limits
// ============================================================================

/// Minimum room (front wall) width in millimetres
pub const MIN_ROOM_WIDTH_MM: f64 = 1200.0;

/// Maximum room (front wall) width in millimetres
pub const MAX_ROOM_WIDTH_MM: f64 = 6000.0;

/// Room height used by the planner. Height is not user-configurable.
pub const FIXED_ROOM_HEIGHT_MM: f64 = 3400.0;

/// Legacy lower bound for a configurable room height (no longer enforced)
pub const LEGACY_MIN_ROOM_HEIGHT_MM: f64 = 2000.0;

/// Legacy upper bound for a configurable room height (no longer enforced)
pub const LEGACY_MAX_ROOM_HEIGHT_MM: f64 = 3000.0;

/// Minimum room depth in millimetres
pub const MIN_ROOM_DEPTH_MM: f64 = 400.0;

/// Maximum room depth in millimetres
pub const MAX_ROOM_DEPTH_MM: f64 = 600.0;

/// Default room width
pub const DEFAULT_ROOM_WIDTH_MM: f64 = 5000.0;

/// Default room depth
pub const DEFAULT_ROOM_DEPTH_MM: f64 = 500.0;

// ============================================================================
// Pillar Rules
// ============================================================================

/// Minimum gap between adjacent normal pillars
pub const MIN_PILLAR_SPACING_MM: f64 = 400.0;

/// Maximum gap between adjacent normal pillars
pub const MAX_PILLAR_SPACING_MM: f64 = 1000.0;

/// Offset of a newly added pillar from the rightmost existing one
pub const NEW_PILLAR_OFFSET_MM: f64 = 700.0;

/// How far a pillar may be dragged past either end of the front wall
pub const CORNER_OVERSHOOT_MM: f64 = 300.0;

// ============================================================================
// Shelf Rules
// ============================================================================

/// Baseline shelf-to-shelf spacing (the `normal` type clearance)
pub const MIN_SHELF_SPACING_MM: f64 = 300.0;

/// Minimum shelf length (informational; bays are already >= pillar spacing)
pub const MIN_SHELF_LENGTH_MM: f64 = 500.0;

/// Distance below the top of the wall for the first shelf in a bay
pub const FIRST_SHELF_DROP_MM: f64 = 300.0;

/// Distance below the lowest existing shelf for each further shelf in a bay
pub const NEXT_SHELF_DROP_MM: f64 = 400.0;

// ============================================================================
// Grid
// ============================================================================

/// Default snapping grid
pub const DEFAULT_GRID_SIZE_MM: f64 = 100.0;

// ============================================================================
// Frame Layout (fractions of the canvas)
// ============================================================================

/// Margin around the blue (outer) frame on each side
pub const BLUE_FRAME_MARGIN: f64 = 0.05;

/// Red frame height as a fraction of canvas height
pub const RED_FRAME_HEIGHT_FRACTION: f64 = 0.6;

/// Room width that defines the constant horizontal scale
pub const REFERENCE_ROOM_WIDTH_MM: f64 = 5000.0;

/// Share of the blue frame width the reference room occupies
pub const REFERENCE_WIDTH_FRACTION: f64 = 0.7;

/// Upper bound of the red frame width relative to the blue frame
pub const MAX_RED_WIDTH_FRACTION: f64 = 0.95;

/// Canvas size assumed until the host reports a real one
pub const DEFAULT_CANVAS_SIZE_PX: (f64, f64) = (1000.0, 800.0);

// ============================================================================
// Hit Areas (pixels)
// ============================================================================

/// Drawn pillar width
pub const PILLAR_WIDTH_PX: f64 = 10.0;

/// Drawn shelf thickness
pub const SHELF_THICKNESS_PX: f64 = 10.0;

/// Extra tolerance around pillars and shelves for hit testing
pub const HIT_TOLERANCE_PX: f64 = 5.0;

/// Add-pillar button size
pub const ADD_PILLAR_BUTTON_SIZE_PX: (f64, f64) = (70.0, 30.0);

/// Add-pillar button distance right of the rightmost pillar
pub const ADD_PILLAR_BUTTON_OFFSET_MM: f64 = 600.0;

/// Add-shelf button radius
pub const ADD_SHELF_BUTTON_RADIUS_PX: f64 = 17.5;

/// Add-shelf button distance below the lowest shelf (or the wall top)
pub const ADD_SHELF_BUTTON_DROP_MM: f64 = 400.0;

// ============================================================================
// Notifications
// ============================================================================

/// Default toast lifetime in milliseconds
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;
