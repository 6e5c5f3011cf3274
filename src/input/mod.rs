//! Pointer input handling for the wall canvas.
//!
//! This module implements the pointer interaction logic of the planner:
//! hit testing, pillar and shelf dragging, and the prompts a release can open.
//!
//! ## Architecture
//!
//! The input system uses an explicit state machine (`DragState`) to track the
//! drag in progress. Every handler is an `impl LayoutEditor` block that runs
//! to completion before the next event.
//!
//! ## Modules
//!
//! - `state` - Drag state machine, selection and pending prompts
//! - `pointer_down` - Hit testing and drag start
//! - `drag` - Pointer move handling (pillar and shelf drags)
//! - `pointer_up` - Release, leave and corner-pillar confirmation
//! - `transform` - Canvas size and pixel/millimetre conversion on the editor

pub mod coords;
mod drag;
mod pointer_down;
mod pointer_up;
mod state;
mod transform;

pub use coords::{CoordinateConverter, Point, WallPoint};
pub use state::{DragState, PendingPrompt, ReleaseOutcome, Selection};
