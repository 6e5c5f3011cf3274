//! Editor construction and settings hot-reload.

use super::state::{CanvasState, LayoutEditor, SettingsState};
use crate::constants::DEFAULT_CANVAS_SIZE_PX;
use crate::input::{DragState, Selection};
use crate::notifications::{Notifier, ToastManager};
use crate::scale::compute_scale;
use crate::settings::Settings;
use crate::settings_watcher::{SettingsEvent, SettingsWatcher};
use crate::spatial_index::SpatialIndex;
use crate::store::LayoutStore;
use std::path::PathBuf;

impl LayoutEditor<ToastManager> {
    /// An editor on an empty wall sized from `settings.default_room`, reporting
    /// through a toast queue.
    pub fn new(settings: Settings) -> Self {
        let notifier = ToastManager::new().with_notify_duration(settings.toast_duration());
        let store = LayoutStore::new(settings.default_room);
        Self::with_notifier(store, settings, notifier)
    }
}

impl<N: Notifier> LayoutEditor<N> {
    pub fn with_notifier(store: LayoutStore, settings: Settings, notifier: N) -> Self {
        let (width_px, height_px) = DEFAULT_CANVAS_SIZE_PX;
        let scale = compute_scale(width_px, height_px, store.room.width_mm, store.room.height_mm);
        let hit_index = SpatialIndex::build(&store, &scale);

        Self {
            store,
            notifier,
            canvas: CanvasState {
                size_px: DEFAULT_CANVAS_SIZE_PX,
                scale,
                hit_index,
                index_dirty: false,
                drag: DragState::Idle,
                selection: Selection::None,
                prompt: None,
            },
            settings: SettingsState {
                data: settings,
                watcher: None,
            },
        }
    }

    /// Start watching `path` for settings changes. Polled by
    /// [`check_settings_reload`](Self::check_settings_reload).
    pub fn watch_settings(&mut self, path: PathBuf) -> anyhow::Result<()> {
        self.settings.watcher = Some(SettingsWatcher::new(path)?);
        Ok(())
    }

    /// Watch the default settings file, if the platform has a config dir.
    pub fn watch_default_settings(&mut self) {
        let Some(path) = crate::settings_watcher::default_settings_path() else {
            return;
        };
        if let Err(e) = self.watch_settings(path.clone()) {
            tracing::warn!("Failed to watch settings at {:?}: {}", path, e);
        }
    }

    /// Check for settings file changes and reload if needed. Returns true when
    /// new settings were applied.
    pub fn check_settings_reload(&mut self) -> bool {
        let Some(ref mut watcher) = self.settings.watcher else {
            return false;
        };
        let Some(event) = watcher.poll() else {
            return false;
        };
        let path = watcher.path().to_path_buf();

        match event {
            SettingsEvent::Modified | SettingsEvent::Created => {
                tracing::info!("Settings file changed, reloading...");
                match Settings::load_from(&path) {
                    Ok(settings) => {
                        self.apply_settings(settings);
                        self.notifier.inform("Settings reloaded");
                        true
                    }
                    Err(e) => {
                        tracing::warn!("Failed to reload settings from {:?}: {}", path, e);
                        false
                    }
                }
            }
            SettingsEvent::Deleted => {
                tracing::warn!("Settings file deleted");
                self.notifier.notify("Settings file deleted");
                false
            }
            SettingsEvent::Error(e) => {
                tracing::error!("Settings watch error: {}", e);
                false
            }
        }
    }

    /// Replace the active settings. The room and layout are left alone; the
    /// new grid and pillar style apply to the next drag or added pillar, the
    /// toast duration to the next message.
    pub fn apply_settings(&mut self, settings: Settings) {
        self.notifier.set_duration(settings.toast_duration());
        self.settings.data = settings;
    }
}
