//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestLayoutBuilder` - Builder pattern for creating layouts and editors
//! - Pointer helpers that turn wall millimetres into canvas points
//! - `seeded_rng` - a fixed-seed `StdRng` for property-style loops

#![allow(dead_code)]

use rand::SeedableRng;
use rand::rngs::StdRng;
use shelfboard::input::{Point, WallPoint};
use shelfboard::settings::Settings;
use shelfboard::{Bay, LayoutEditor, LayoutStore, Pillar, PillarId, PillarStyle, Room, Shelf, ShelfType};

// ============================================================================
// TestLayoutBuilder - Builder pattern for creating test layouts
// ============================================================================

/// Builder for creating test layouts with pillars and shelves.
///
/// # Example
/// ```ignore
/// let editor = TestLayoutBuilder::new()
///     .with_pillars(&[("a", 0.0), ("b", 700.0)])
///     .with_shelf("s", ("a", "b"), 2000.0, ShelfType::Normal)
///     .build_editor();
/// ```
pub struct TestLayoutBuilder {
    room: Room,
    pillars: Vec<Pillar>,
    shelves: Vec<Shelf>,
    settings: Settings,
}

impl Default for TestLayoutBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestLayoutBuilder {
    /// A 5000mm wall with nothing on it.
    pub fn new() -> Self {
        Self {
            room: Room::default(),
            pillars: Vec::new(),
            shelves: Vec::new(),
            settings: Settings::default(),
        }
    }

    pub fn with_room_width(mut self, width_mm: f64) -> Self {
        self.room.width_mm = width_mm;
        self
    }

    pub fn with_pillar(mut self, id: &str, x_mm: f64) -> Self {
        self.pillars.push(Pillar::with_id(id, x_mm, PillarStyle::default()));
        self
    }

    pub fn with_pillars(mut self, pillars: &[(&str, f64)]) -> Self {
        for (id, x_mm) in pillars {
            self = self.with_pillar(id, *x_mm);
        }
        self
    }

    /// Add `count` pillars named `p0`, `p1`, ... spaced `spacing_mm` apart
    /// from the left end.
    pub fn with_evenly_spaced_pillars(mut self, count: usize, spacing_mm: f64) -> Self {
        for i in 0..count {
            let id = format!("p{i}");
            self = self.with_pillar(&id, i as f64 * spacing_mm);
        }
        self
    }

    pub fn with_corner_pillar(mut self, id: &str, x_mm: f64) -> Self {
        let mut pillar = Pillar::with_id(id, x_mm, PillarStyle::default());
        pillar.is_corner_pillar = true;
        self.pillars.push(pillar);
        self
    }

    pub fn with_wall_pillar(mut self, id: &str, x_mm: f64) -> Self {
        self.pillars.push(Pillar::wall(id, x_mm));
        self
    }

    pub fn with_shelf(mut self, id: &str, bay: (&str, &str), height_mm: f64, shelf_type: ShelfType) -> Self {
        self.shelves
            .push(Shelf::with_id(id, Bay::new(bay.0, bay.1), height_mm, shelf_type));
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    pub fn build(self) -> LayoutStore {
        let mut store = LayoutStore::new(self.room);
        for pillar in self.pillars {
            store.add_pillar(pillar);
        }
        for shelf in self.shelves {
            store.add_shelf(shelf).expect("shelf pillars exist");
        }
        store
    }

    /// Editor that collects rejection messages in a `Vec<String>`.
    pub fn build_editor(self) -> LayoutEditor<Vec<String>> {
        let settings = self.settings.clone();
        LayoutEditor::with_notifier(self.build(), settings, Vec::new())
    }
}

// ============================================================================
// Pointer helpers
// ============================================================================

/// Canvas point over the wall position `(x_mm, y_mm)`.
pub fn at_mm(editor: &LayoutEditor<Vec<String>>, x_mm: f64, y_mm: f64) -> Point {
    editor.wall_to_canvas(WallPoint { x_mm, y_mm })
}

/// Press on the pillar, move it to `to_x_mm`, release.
pub fn drag_pillar(editor: &mut LayoutEditor<Vec<String>>, id: &str, to_x_mm: f64) -> Option<f64> {
    let from = editor.store().pillar(&PillarId::from(id)).expect("pillar exists").x_mm;
    let press = at_mm(editor, from, 200.0);
    editor.pointer_down(press);
    let to = at_mm(editor, to_x_mm, 200.0);
    editor.pointer_move(to)
}

/// Press on the shelf's right half, move it to `to_height_mm`.
pub fn drag_shelf(editor: &mut LayoutEditor<Vec<String>>, id: &str, to_height_mm: f64) -> Option<f64> {
    let store = editor.store();
    let shelf = store.shelf(&id.into()).expect("shelf exists");
    let start = store.pillar(&shelf.start_pillar_id).expect("start pillar").x_mm;
    let end = store.pillar(&shelf.end_pillar_id).expect("end pillar").x_mm;
    let x_mm = start + (end - start) * 0.75;
    let height = shelf.height_mm;
    let press = at_mm(editor, x_mm, height);
    editor.pointer_down(press);
    let to = at_mm(editor, x_mm, to_height_mm);
    editor.pointer_move(to)
}

// ============================================================================
// Assertions
// ============================================================================

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

pub fn pillar_x(store: &LayoutStore, id: &str) -> f64 {
    store.pillar(&PillarId::from(id)).expect("pillar exists").x_mm
}

pub fn pillar_xs(store: &LayoutStore) -> Vec<f64> {
    store.pillars.iter().map(|p| p.x_mm).collect()
}

// ============================================================================
// Seeded randomness
// ============================================================================

/// Fixed-seed RNG so property loops replay identically.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
