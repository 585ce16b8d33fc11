//! Draggable, resizable hot areas over an image.
//!
//! Each hot area is driven by two cooperating trackers: a drag tracker that
//! owns its origin and a resize tracker that owns its size. Both read live
//! bounding boxes through an element handle and subscribe to global pointer
//! moves only while their gesture is active.
//!
//! Rendering, and persisting the resulting rectangles, are left to the host.

pub mod area;
pub mod board;
pub mod constants;
pub mod element;
pub mod emitter;
pub mod error;
pub mod input;
pub mod perf;
pub mod settings;
pub mod spatial_index;
pub mod types;

pub use area::{AreaContext, HotArea};
pub use board::ImageHotArea;
pub use error::{HotAreaError, HotAreaResult};
pub use settings::EditorSettings;
pub use types::{AreaId, HotAreaRect, Position, Rect, ResizeDirection, Size};
