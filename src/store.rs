//! Layout store - the explicitly owned container for the room and its entities.
//!
//! The solvers never see this type; they take slices borrowed from it. The
//! store is where entity lifetime rules live: pillar deletion cascades to the
//! shelves hanging on it, and resizing the room clears everything.

use crate::constants::FIXED_ROOM_HEIGHT_MM;
use crate::constraints::sorted_normal_pillars;
use crate::error::{StoreError, StoreResult};
use crate::placement::validate_room_width;
use crate::types::{Bay, Pillar, PillarId, PillarStyle, Room, Shelf, ShelfId};
use serde::{Deserialize, Serialize};

/// A measured gap, for the spacing labels drawn between entities.
#[derive(Clone, Debug, PartialEq)]
pub struct SpacingLabel<Id> {
    pub from: Id,
    pub to: Id,
    pub spacing_mm: f64,
}

impl<Id> SpacingLabel<Id> {
    /// Rounded label text, e.g. `"700mm"`.
    pub fn text(&self) -> String {
        format!("{}mm", self.spacing_mm.round() as i64)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutStore {
    pub room: Room,
    #[serde(default)]
    pub pillars: Vec<Pillar>,
    #[serde(default)]
    pub shelves: Vec<Shelf>,
}

impl LayoutStore {
    pub fn new(room: Room) -> Self {
        Self {
            room,
            pillars: Vec::new(),
            shelves: Vec::new(),
        }
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    pub fn pillar(&self, id: &PillarId) -> Option<&Pillar> {
        self.pillars.iter().find(|p| &p.id == id)
    }

    pub fn pillar_mut(&mut self, id: &PillarId) -> Option<&mut Pillar> {
        self.pillars.iter_mut().find(|p| &p.id == id)
    }

    pub fn shelf(&self, id: &ShelfId) -> Option<&Shelf> {
        self.shelves.iter().find(|s| &s.id == id)
    }

    pub fn shelf_mut(&mut self, id: &ShelfId) -> Option<&mut Shelf> {
        self.shelves.iter_mut().find(|s| &s.id == id)
    }

    /// Normal pillars in x order.
    pub fn normal_pillars(&self) -> Vec<&Pillar> {
        sorted_normal_pillars(&self.pillars)
    }

    /// Adjacent normal-pillar pairs, left to right.
    pub fn bays(&self) -> Vec<Bay> {
        self.normal_pillars()
            .windows(2)
            .map(|pair| Bay::new(pair[0].id.clone(), pair[1].id.clone()))
            .collect()
    }

    pub fn shelves_in_bay(&self, bay: &Bay) -> Vec<&Shelf> {
        self.shelves.iter().filter(|s| s.is_in_bay(bay)).collect()
    }

    pub fn has_furniture(&self) -> bool {
        !self.pillars.is_empty() || !self.shelves.is_empty()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    pub fn add_pillar(&mut self, pillar: Pillar) {
        tracing::info!(pillar = %pillar.id, x_mm = pillar.x_mm, "Pillar added");
        self.pillars.push(pillar);
    }

    /// Add a shelf. Both referenced pillars must exist.
    pub fn add_shelf(&mut self, shelf: Shelf) -> StoreResult<()> {
        for pillar in [&shelf.start_pillar_id, &shelf.end_pillar_id] {
            if self.pillar(pillar).is_none() {
                return Err(StoreError::DanglingShelf {
                    shelf: shelf.id.clone(),
                    pillar: pillar.clone(),
                });
            }
        }
        tracing::info!(shelf = %shelf.id, height_mm = shelf.height_mm, kind = shelf.shelf_type.label(), "Shelf added");
        self.shelves.push(shelf);
        Ok(())
    }

    /// Delete a pillar and every shelf left hanging on it.
    pub fn delete_pillar(&mut self, id: &PillarId) -> StoreResult<Pillar> {
        let index = self
            .pillars
            .iter()
            .position(|p| &p.id == id)
            .ok_or_else(|| StoreError::UnknownPillar(id.clone()))?;
        let removed = self.pillars.remove(index);
        let orphans = self.collect_orphans();
        tracing::info!(pillar = %id, orphans, "Pillar deleted");
        Ok(removed)
    }

    pub fn delete_shelf(&mut self, id: &ShelfId) -> StoreResult<Shelf> {
        let index = self
            .shelves
            .iter()
            .position(|s| &s.id == id)
            .ok_or_else(|| StoreError::UnknownShelf(id.clone()))?;
        tracing::info!(shelf = %id, "Shelf deleted");
        Ok(self.shelves.remove(index))
    }

    /// Drop shelves whose start or end pillar no longer exists.
    /// Returns how many were removed.
    pub fn collect_orphans(&mut self) -> usize {
        let before = self.shelves.len();
        let pillars = &self.pillars;
        let exists = |id: &PillarId| pillars.iter().any(|p| &p.id == id);
        self.shelves
            .retain(|s| exists(&s.start_pillar_id) && exists(&s.end_pillar_id));
        before - self.shelves.len()
    }

    /// Change the room width. Any change clears all pillars and shelves;
    /// positions are not migrated. The height is always the fixed value.
    pub fn resize_room(&mut self, width_mm: f64) -> StoreResult<()> {
        let width_mm = validate_room_width(width_mm)?;
        if width_mm != self.room.width_mm {
            tracing::info!(
                from = self.room.width_mm,
                to = width_mm,
                pillars = self.pillars.len(),
                shelves = self.shelves.len(),
                "Room resized, clearing layout"
            );
            self.clear();
        }
        self.room.width_mm = width_mm;
        self.room.height_mm = FIXED_ROOM_HEIGHT_MM;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.pillars.clear();
        self.shelves.clear();
    }

    pub fn set_pillar_x(&mut self, id: &PillarId, x_mm: f64) -> StoreResult<()> {
        let pillar = self
            .pillar_mut(id)
            .ok_or_else(|| StoreError::UnknownPillar(id.clone()))?;
        pillar.x_mm = x_mm;
        Ok(())
    }

    pub fn set_shelf_height(&mut self, id: &ShelfId, height_mm: f64) -> StoreResult<()> {
        let shelf = self
            .shelf_mut(id)
            .ok_or_else(|| StoreError::UnknownShelf(id.clone()))?;
        shelf.height_mm = height_mm;
        Ok(())
    }

    /// Restore x order after a drag.
    pub fn sort_pillars(&mut self) {
        self.pillars.sort_by(|a, b| a.x_mm.total_cmp(&b.x_mm));
    }

    /// Restyle every normal pillar.
    pub fn set_pillar_style_all(&mut self, style: PillarStyle) {
        for pillar in self.pillars.iter_mut().filter(|p| p.is_normal()) {
            pillar.style = style;
        }
    }

    // ========================================================================
    // Spacing labels
    // ========================================================================

    /// Gaps between x-adjacent pillars (all kinds), left to right.
    pub fn pillar_spacings(&self) -> Vec<SpacingLabel<PillarId>> {
        let mut sorted: Vec<&Pillar> = self.pillars.iter().collect();
        sorted.sort_by(|a, b| a.x_mm.total_cmp(&b.x_mm));
        sorted
            .windows(2)
            .map(|pair| SpacingLabel {
                from: pair[0].id.clone(),
                to: pair[1].id.clone(),
                spacing_mm: pair[1].x_mm - pair[0].x_mm,
            })
            .collect()
    }

    /// Gaps between vertically adjacent shelves in each bay, top to bottom.
    pub fn shelf_spacings(&self) -> Vec<SpacingLabel<ShelfId>> {
        let mut bays: Vec<Bay> = Vec::new();
        for shelf in &self.shelves {
            let bay = shelf.bay();
            if !bays.contains(&bay) {
                bays.push(bay);
            }
        }

        let mut labels = Vec::new();
        for bay in &bays {
            let mut group = self.shelves_in_bay(bay);
            group.sort_by(|a, b| b.height_mm.total_cmp(&a.height_mm));
            labels.extend(group.windows(2).map(|pair| SpacingLabel {
                from: pair[0].id.clone(),
                to: pair[1].id.clone(),
                spacing_mm: pair[0].height_mm - pair[1].height_mm,
            }));
        }
        labels
    }

    // ========================================================================
    // Serialization
    // ========================================================================

    pub fn to_json(&self) -> StoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a stored layout and drop any shelves with dangling pillar refs.
    pub fn from_json(json: &str) -> StoreResult<Self> {
        let mut store: Self = serde_json::from_str(json)?;
        let dropped = store.collect_orphans();
        if dropped > 0 {
            tracing::warn!(dropped, "Dropped orphaned shelves while loading layout");
        }
        Ok(store)
    }
}
