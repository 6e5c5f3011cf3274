//! Core types for the shelving planner.
//!
//! Plain entity shapes for the room, its pillars and the shelves hung between
//! them. Every optional field of the stored format has an explicit default at
//! construction time, so call sites never need fallback logic.

use crate::constants::{DEFAULT_ROOM_DEPTH_MM, DEFAULT_ROOM_WIDTH_MM, FIXED_ROOM_HEIGHT_MM};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Identifiers
// ============================================================================

/// Unique identifier of a pillar.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PillarId(String);

/// Unique identifier of a shelf.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShelfId(String);

macro_rules! string_id {
    ($ty:ident, $prefix:literal) => {
        impl $ty {
            /// Generate a fresh random id.
            pub fn generate() -> Self {
                Self(format!(concat!($prefix, "-{}"), uuid::Uuid::new_v4()))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $ty {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $ty {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(PillarId, "pillar");
string_id!(ShelfId, "shelf");

// ============================================================================
// Room
// ============================================================================

/// Physical dimensions of the front wall being furnished.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub width_mm: f64,
    pub height_mm: f64,
    pub depth_mm: f64,
}

impl Room {
    pub fn new(width_mm: f64) -> Self {
        Self {
            width_mm,
            ..Self::default()
        }
    }

    /// Header label, e.g. `"5.0m"`.
    pub fn width_m_label(&self) -> String {
        format!("{:.1}m", self.width_mm / 1000.0)
    }

    /// True when `x_mm` lies on the front wall span `[0, width]`.
    #[inline]
    pub fn contains_x(&self, x_mm: f64) -> bool {
        (0.0..=self.width_mm).contains(&x_mm)
    }
}

impl Default for Room {
    fn default() -> Self {
        Self {
            width_mm: DEFAULT_ROOM_WIDTH_MM,
            height_mm: FIXED_ROOM_HEIGHT_MM,
            depth_mm: DEFAULT_ROOM_DEPTH_MM,
        }
    }
}

// ============================================================================
// Pillars
// ============================================================================

/// Structural wall anchors vs. user-placed pillars.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PillarKind {
    /// Fixed anchor; never dragged, never constrained
    Wall,
    #[default]
    Normal,
}

/// How the pillar is mounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PillarStyle {
    #[default]
    RearSingle,
    CenterSingle,
    Dual,
}

/// A vertical divider, positioned by its distance from the left end of the wall.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pillar {
    pub id: PillarId,
    pub x_mm: f64,
    pub kind: PillarKind,
    #[serde(default)]
    pub is_corner_pillar: bool,
    #[serde(default)]
    pub style: PillarStyle,
}

impl Pillar {
    /// A normal pillar with a fresh id.
    pub fn new(x_mm: f64, style: PillarStyle) -> Self {
        Self::with_id(PillarId::generate(), x_mm, style)
    }

    pub fn with_id(id: impl Into<PillarId>, x_mm: f64, style: PillarStyle) -> Self {
        Self {
            id: id.into(),
            x_mm,
            kind: PillarKind::Normal,
            is_corner_pillar: false,
            style,
        }
    }

    /// A structural wall pillar.
    pub fn wall(id: impl Into<PillarId>, x_mm: f64) -> Self {
        Self {
            kind: PillarKind::Wall,
            ..Self::with_id(id, x_mm, PillarStyle::default())
        }
    }

    #[inline]
    pub fn is_normal(&self) -> bool {
        self.kind == PillarKind::Normal
    }
}

// ============================================================================
// Shelves
// ============================================================================

/// Shelf variants. Each carries its own clearance requirements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShelfType {
    #[default]
    Normal,
    /// Clothes rail; needs a tall free space below it
    Hanger,
    /// Drawer unit; needs extra room above it
    Drawer,
}

impl ShelfType {
    pub const ALL: [ShelfType; 3] = [ShelfType::Normal, ShelfType::Hanger, ShelfType::Drawer];

    pub fn label(&self) -> &'static str {
        match self {
            ShelfType::Normal => "normal",
            ShelfType::Hanger => "hanger",
            ShelfType::Drawer => "drawer",
        }
    }
}

/// The span between two pillars, identified by its ordered pillar pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bay {
    pub start_pillar_id: PillarId,
    pub end_pillar_id: PillarId,
}

impl Bay {
    pub fn new(start: impl Into<PillarId>, end: impl Into<PillarId>) -> Self {
        Self {
            start_pillar_id: start.into(),
            end_pillar_id: end.into(),
        }
    }

    /// True when the bay references `pillar_id` at either end.
    pub fn touches(&self, pillar_id: &PillarId) -> bool {
        &self.start_pillar_id == pillar_id || &self.end_pillar_id == pillar_id
    }
}

/// A horizontal board hung between two pillars.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shelf {
    pub id: ShelfId,
    pub start_pillar_id: PillarId,
    pub end_pillar_id: PillarId,
    /// Height above the floor of the wall span
    pub height_mm: f64,
    #[serde(rename = "type", default)]
    pub shelf_type: ShelfType,
    #[serde(default)]
    pub is_corner_shelf: bool,
}

impl Shelf {
    /// A shelf with a fresh id.
    pub fn new(bay: Bay, height_mm: f64, shelf_type: ShelfType) -> Self {
        Self::with_id(ShelfId::generate(), bay, height_mm, shelf_type)
    }

    pub fn with_id(id: impl Into<ShelfId>, bay: Bay, height_mm: f64, shelf_type: ShelfType) -> Self {
        Self {
            id: id.into(),
            start_pillar_id: bay.start_pillar_id,
            end_pillar_id: bay.end_pillar_id,
            height_mm,
            shelf_type,
            is_corner_shelf: false,
        }
    }

    pub fn corner(mut self, is_corner_shelf: bool) -> Self {
        self.is_corner_shelf = is_corner_shelf;
        self
    }

    /// True when both shelves hang on the same ordered pillar pair.
    #[inline]
    pub fn same_bay(&self, other: &Shelf) -> bool {
        self.start_pillar_id == other.start_pillar_id && self.end_pillar_id == other.end_pillar_id
    }

    pub fn is_in_bay(&self, bay: &Bay) -> bool {
        self.start_pillar_id == bay.start_pillar_id && self.end_pillar_id == bay.end_pillar_id
    }

    pub fn bay(&self) -> Bay {
        Bay::new(self.start_pillar_id.clone(), self.end_pillar_id.clone())
    }
}

/// Display form of a length, e.g. `"1200mm (1.2m)"`.
pub fn format_mm(mm: f64) -> String {
    format!("{}mm ({:.1}m)", mm.round() as i64, mm / 1000.0)
}
