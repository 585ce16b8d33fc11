//! Editor settings - minimum sizes, clamping and new-area defaults.
//!
//! Settings live in `<config dir>/hotarea/settings.json`. Every field has a
//! default, so a partial file only overrides what it names.

use crate::constants::{DEFAULT_MIN_HEIGHT, DEFAULT_MIN_WIDTH, HANDLE_SIZE, SETTINGS_DIR, SETTINGS_FILE};
use crate::error::HotAreaResult;
use crate::types::HotAreaRect;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Width a resize can never go below
    pub min_width: f32,
    /// Height a resize can never go below
    pub min_height: f32,
    /// Keep dragged areas inside the image
    pub bound_to_parent: bool,
    /// Edge length of the corner resize handles
    pub handle_size: f32,
    /// Geometry of areas created with "add area"
    pub default_area: HotAreaRect,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            min_width: DEFAULT_MIN_WIDTH,
            min_height: DEFAULT_MIN_HEIGHT,
            bound_to_parent: true,
            handle_size: HANDLE_SIZE,
            default_area: HotAreaRect::default(),
        }
    }
}

impl EditorSettings {
    /// Load from the default location, falling back to defaults.
    pub fn load() -> Self {
        let Some(path) = default_settings_path() else {
            return Self::default();
        };
        if !path.exists() {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(e) => {
                warn!(path = %path.display(), "failed to load settings, using defaults: {}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> HotAreaResult<Self> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn save_to(&self, path: &Path) -> HotAreaResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// `<config dir>/hotarea/settings.json`, if the platform has a config dir.
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(SETTINGS_DIR).join(SETTINGS_FILE))
}
