//! Editor-wide constants.
//!
//! Centralizes default geometry so the trackers, the board and the settings
//! file agree on the same numbers.

// ============================================================================
// Size Limits
// ============================================================================

/// Default minimum width of a hot area
pub const DEFAULT_MIN_WIDTH: f32 = 20.0;

/// Default minimum height of a hot area
pub const DEFAULT_MIN_HEIGHT: f32 = 20.0;

// ============================================================================
// Area Defaults
// ============================================================================

/// Geometry of a freshly added hot area: (x, y, width, height)
pub const DEFAULT_AREA: (f32, f32, f32, f32) = (0.0, 0.0, 50.0, 50.0);

/// Edge length of the square resize handle drawn on each corner
pub const HANDLE_SIZE: f32 = 10.0;

// ============================================================================
// Container
// ============================================================================

/// Container size used by the demo session when no image is given
pub const DEMO_CONTAINER_SIZE: (f32, f32) = (375.0, 316.0);

// ============================================================================
// Settings
// ============================================================================

/// Directory name under the platform config dir
pub const SETTINGS_DIR: &str = "hotarea";

/// Settings file name
pub const SETTINGS_FILE: &str = "settings.json";
