//! Pointer input handling for hot areas.
//!
//! This module implements the interaction engine: a drag tracker owning the
//! area's origin, a resize tracker owning its size, and the pointer bus both
//! subscribe to while a gesture is active.
//!
//! ## Architecture
//!
//! The two trackers are coupled by composition. The resize tracker holds an
//! injected [`PositionTarget`] (in practice the drag tracker) and shifts its
//! origin when a left or top edge is dragged.
//!
//! ## Modules
//!
//! - `pointer` - Pointer events and the shared subscription bus
//! - `state` - Gesture state derived from bus subscriptions
//! - `drag` - Position tracker (drag gesture, container clamp)
//! - `resize` - Size tracker (four corner gestures, min-size clamp)
//! - `hit` - Corner handle and body hit testing

mod drag;
mod hit;
mod pointer;
mod resize;
mod state;

pub use drag::{DragOptions, DragTracker, PositionTarget};
pub use hit::{HitTarget, hit_test};
pub use pointer::{GestureHandler, PointerBus, PointerEvent, PointerPhase};
pub use resize::{ResizeOptions, ResizeTracker};
pub use state::GestureState;
