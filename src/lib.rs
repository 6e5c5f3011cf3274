//! Shelfboard - placement and coordinate engine for a wall shelving planner.
//!
//! Pillars stand along a front wall and shelves hang in the bays between
//! adjacent pillars. This crate maps the wall onto a canvas, snaps and
//! constrains drags, decides where new entities go, and owns the layout
//! state a front-end renders.
//!
//! ## Layers
//!
//! - [`scale`], [`grid`] - pixel/millimetre transform and grid snapping
//! - [`constraints`] - pure pillar and shelf solvers
//! - [`placement`] - default positions and span checks for new entities
//! - [`store`] - the owned layout container with cascade rules
//! - [`app`], [`input`] - the editor and its pointer state machine

pub mod app;
pub mod constants;
pub mod constraints;
pub mod error;
pub mod grid;
pub mod input;
pub mod logging;
pub mod notifications;
pub mod placement;
pub mod scale;
pub mod settings;
pub mod settings_watcher;
pub mod spatial_index;
pub mod store;
pub mod types;

pub use app::LayoutEditor;
pub use error::{EditError, PlacementRejection, RoomError, SettingsError, StoreError};
pub use notifications::{Notifier, ToastManager};
pub use scale::{ScaleInfo, compute_scale};
pub use store::LayoutStore;
pub use types::{Bay, Pillar, PillarId, PillarKind, PillarStyle, Room, Shelf, ShelfId, ShelfType};
