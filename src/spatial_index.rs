//! Spatial Index Module
//!
//! R-tree over the canvas hit areas of the current layout: the add buttons,
//! shelves and pillars, all in pixel space. Rebuilt whenever the layout or the
//! scale changes; queried on pointer-down to find what was clicked.

use crate::constants::{
    ADD_PILLAR_BUTTON_OFFSET_MM, ADD_PILLAR_BUTTON_SIZE_PX, ADD_SHELF_BUTTON_DROP_MM,
    ADD_SHELF_BUTTON_RADIUS_PX, HIT_TOLERANCE_PX, PILLAR_WIDTH_PX, SHELF_THICKNESS_PX,
};
use crate::placement::{lowest_shelf_in_bay, rightmost_pillar};
use crate::scale::ScaleInfo;
use crate::store::LayoutStore;
use crate::types::{Bay, PillarId, ShelfId};
use rstar::{AABB, RTree, RTreeObject};

/// Something on the canvas that reacts to a click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HitTarget {
    AddPillarButton,
    AddShelfButton(Bay),
    Shelf(ShelfId),
    Pillar(PillarId),
}

impl HitTarget {
    /// Lower wins when hit areas overlap.
    pub fn priority(&self) -> u8 {
        match self {
            HitTarget::AddPillarButton => 0,
            HitTarget::AddShelfButton(_) => 1,
            HitTarget::Shelf(_) => 2,
            HitTarget::Pillar(_) => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum HitShape {
    Rect,
    Circle { cx: f64, cy: f64, radius: f64 },
}

/// A hit area with its bounding box.
#[derive(Clone, Debug, PartialEq)]
pub struct SpatialEntry {
    pub target: HitTarget,
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    shape: HitShape,
    order: usize,
}

impl SpatialEntry {
    fn rect(target: HitTarget, min: (f64, f64), max: (f64, f64), order: usize) -> Self {
        Self {
            target,
            min_x: min.0.min(max.0),
            min_y: min.1.min(max.1),
            max_x: min.0.max(max.0),
            max_y: min.1.max(max.1),
            shape: HitShape::Rect,
            order,
        }
    }

    fn circle(target: HitTarget, center: (f64, f64), radius: f64, order: usize) -> Self {
        Self {
            target,
            min_x: center.0 - radius,
            min_y: center.1 - radius,
            max_x: center.0 + radius,
            max_y: center.1 + radius,
            shape: HitShape::Circle {
                cx: center.0,
                cy: center.1,
                radius,
            },
            order,
        }
    }

    #[inline]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        match self.shape {
            HitShape::Rect => x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y,
            HitShape::Circle { cx, cy, radius } => (x - cx).hypot(y - cy) <= radius,
        }
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners([self.min_x, self.min_y], [self.max_x, self.max_y])
    }
}

/// Spatial index for canvas hit areas.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    /// Build the hit areas for `store` drawn at `scale`.
    pub fn build(store: &LayoutStore, scale: &ScaleInfo) -> Self {
        let entries = layout_entries(store, scale);
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    pub fn rebuild(&mut self, store: &LayoutStore, scale: &ScaleInfo) {
        self.tree = RTree::bulk_load(layout_entries(store, scale));
    }

    /// Every hit area containing the point, best match first.
    pub fn query_point(&self, x: f64, y: f64) -> Vec<&SpatialEntry> {
        let mut hits: Vec<&SpatialEntry> = self
            .tree
            .locate_in_envelope_intersecting(&AABB::from_point([x, y]))
            .filter(|entry| entry.contains_point(x, y))
            .collect();
        hits.sort_by_key(|entry| (entry.target.priority(), entry.order));
        hits
    }

    /// The topmost hit target at the point, if any.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<HitTarget> {
        self.query_point(x, y).first().map(|entry| entry.target.clone())
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    pub fn clear(&mut self) {
        self.tree = RTree::new();
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Centre of the add-pillar button, in pixels.
pub fn add_pillar_button_center(store: &LayoutStore, scale: &ScaleInfo) -> (f64, f64) {
    let x_mm = rightmost_pillar(&store.pillars)
        .map_or(ADD_PILLAR_BUTTON_OFFSET_MM, |p| p.x_mm + ADD_PILLAR_BUTTON_OFFSET_MM);
    let red = scale.red_frame;
    (scale.mm_to_px_x(x_mm), red.y + red.height * 0.5)
}

/// Centre of the add-shelf button for `bay`, in pixels. `None` if either
/// pillar of the bay is missing.
pub fn add_shelf_button_center(store: &LayoutStore, scale: &ScaleInfo, bay: &Bay) -> Option<(f64, f64)> {
    let start = store.pillar(&bay.start_pillar_id)?;
    let end = store.pillar(&bay.end_pillar_id)?;
    let center_x_mm = (start.x_mm + end.x_mm) / 2.0;
    let height_mm = match lowest_shelf_in_bay(bay, &store.shelves) {
        Some(lowest) => lowest.height_mm - ADD_SHELF_BUTTON_DROP_MM,
        None => scale.max_height_mm() - ADD_SHELF_BUTTON_DROP_MM,
    };
    Some((scale.mm_to_px_x(center_x_mm), scale.mm_to_px_y(height_mm)))
}

fn layout_entries(store: &LayoutStore, scale: &ScaleInfo) -> Vec<SpatialEntry> {
    let mut entries: Vec<SpatialEntry> = Vec::new();

    let (bx, by) = add_pillar_button_center(store, scale);
    let (bw, bh) = ADD_PILLAR_BUTTON_SIZE_PX;
    entries.push(SpatialEntry::rect(
        HitTarget::AddPillarButton,
        (bx - bw / 2.0, by - bh / 2.0),
        (bx + bw / 2.0, by + bh / 2.0),
        entries.len(),
    ));

    for bay in store.bays() {
        if let Some(center) = add_shelf_button_center(store, scale, &bay) {
            let order = entries.len();
            entries.push(SpatialEntry::circle(
                HitTarget::AddShelfButton(bay),
                center,
                ADD_SHELF_BUTTON_RADIUS_PX,
                order,
            ));
        }
    }

    let shelf_half = SHELF_THICKNESS_PX / 2.0 + HIT_TOLERANCE_PX;
    for shelf in &store.shelves {
        let (Some(start), Some(end)) = (store.pillar(&shelf.start_pillar_id), store.pillar(&shelf.end_pillar_id)) else {
            continue;
        };
        let y = scale.mm_to_px_y(shelf.height_mm);
        let order = entries.len();
        entries.push(SpatialEntry::rect(
            HitTarget::Shelf(shelf.id.clone()),
            (scale.mm_to_px_x(start.x_mm), y - shelf_half),
            (scale.mm_to_px_x(end.x_mm), y + shelf_half),
            order,
        ));
    }

    let pillar_half = PILLAR_WIDTH_PX / 2.0 + HIT_TOLERANCE_PX;
    let red = scale.red_frame;
    for pillar in store.pillars.iter().filter(|p| p.is_normal()) {
        let x = scale.mm_to_px_x(pillar.x_mm);
        let order = entries.len();
        entries.push(SpatialEntry::rect(
            HitTarget::Pillar(pillar.id.clone()),
            (x - pillar_half, red.y),
            (x + pillar_half, red.bottom()),
            order,
        ));
    }

    entries
}
