//! Planner settings, persisted as JSON in the user config directory.

use crate::constants::{CORNER_OVERSHOOT_MM, DEFAULT_GRID_SIZE_MM, DEFAULT_TOAST_DURATION_MS};
use crate::error::SettingsError;
use crate::types::{PillarStyle, Room};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Snapping grid for drags and clearance bounds
    pub grid_size_mm: f64,
    /// Room used for a fresh layout
    pub default_room: Room,
    /// Style applied to newly added pillars
    pub pillar_style: PillarStyle,
    pub toast_duration_ms: u64,
    /// How far past the wall ends a pillar may be dragged
    pub corner_overshoot_mm: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_size_mm: DEFAULT_GRID_SIZE_MM,
            default_room: Room::default(),
            pillar_style: PillarStyle::default(),
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            corner_overshoot_mm: CORNER_OVERSHOOT_MM,
        }
    }
}

/// `<config dir>/shelfboard/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("shelfboard").join("settings.json"))
}

impl Settings {
    /// Load from the default path. Missing or unreadable files fall back to
    /// defaults.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        Self::load_from(&path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load settings from {:?}: {}", path, e);
            Self::default()
        })
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn save(&self) -> Result<(), SettingsError> {
        match default_settings_path() {
            Some(path) => self.save_to(&path),
            None => Ok(()),
        }
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if !(self.grid_size_mm.is_finite() && self.grid_size_mm > 0.0) {
            return Err(SettingsError::InvalidGrid(self.grid_size_mm));
        }
        if !(self.corner_overshoot_mm.is_finite() && self.corner_overshoot_mm >= 0.0) {
            return Err(SettingsError::InvalidOvershoot(self.corner_overshoot_mm));
        }
        Ok(())
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}
