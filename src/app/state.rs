//! Editor state - the LayoutEditor struct definition and sub-structs.

use crate::input::{DragState, PendingPrompt, Selection};
use crate::notifications::{Notifier, ToastManager};
use crate::scale::ScaleInfo;
use crate::settings::Settings;
use crate::settings_watcher::SettingsWatcher;
use crate::spatial_index::SpatialIndex;
use crate::store::LayoutStore;

/// Canvas geometry and pointer interaction state.
pub struct CanvasState {
    /// Canvas size in pixels as last reported by the host
    pub size_px: (f64, f64),
    pub scale: ScaleInfo,
    pub hit_index: SpatialIndex,
    /// Set when the layout or scale changed since the index was built
    pub index_dirty: bool,
    pub drag: DragState,
    pub selection: Selection,
    pub prompt: Option<PendingPrompt>,
}

/// Settings state
pub struct SettingsState {
    pub data: Settings,
    pub watcher: Option<SettingsWatcher>,
}

/// The planner editor: owns the layout and routes pointer input and actions
/// through the solvers and the placement orchestrator.
///
/// Rejected placements are reported through the injected [`Notifier`].
pub struct LayoutEditor<N: Notifier = ToastManager> {
    pub(crate) store: LayoutStore,
    pub(crate) notifier: N,
    pub(crate) canvas: CanvasState,
    pub(crate) settings: SettingsState,
}

impl<N: Notifier> LayoutEditor<N> {
    pub fn store(&self) -> &LayoutStore {
        &self.store
    }

    /// Mutable access for hosts that edit the layout directly (loading a
    /// saved layout, undo). Marks the hit index stale.
    pub fn store_mut(&mut self) -> &mut LayoutStore {
        self.canvas.index_dirty = true;
        &mut self.store
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn settings(&self) -> &Settings {
        &self.settings.data
    }

    pub fn scale(&self) -> &ScaleInfo {
        &self.canvas.scale
    }

    pub fn drag_state(&self) -> &DragState {
        &self.canvas.drag
    }

    pub fn selection(&self) -> &Selection {
        &self.canvas.selection
    }

    pub fn pending_prompt(&self) -> Option<&PendingPrompt> {
        self.canvas.prompt.as_ref()
    }

    /// Wall-top height in millimetres at the current scale.
    pub fn max_height_mm(&self) -> f64 {
        self.canvas.scale.max_height_mm()
    }

    /// Hit index for the current layout, rebuilt if stale.
    pub fn hit_index(&mut self) -> &SpatialIndex {
        if self.canvas.index_dirty {
            self.canvas.hit_index.rebuild(&self.store, &self.canvas.scale);
            self.canvas.index_dirty = false;
        }
        &self.canvas.hit_index
    }

    pub(crate) fn invalidate_hit_index(&mut self) {
        self.canvas.index_dirty = true;
    }
}
