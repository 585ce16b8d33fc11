//! Gesture state of one hot area, derived from its pointer subscriptions.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging             (pointer down on the area body)
//! Idle -> Resizing(direction)  (pointer down on a corner handle)
//!
//! Any -> Idle                  (pointer up)
//! ```
//!
//! The trackers keep no separate flag: what they have subscribed on the
//! pointer bus is the state. Only one gesture is supported at a time per
//! area; interleaved pointer-downs without a pointer-up are undefined.

use crate::input::pointer::{GestureHandler, PointerBus, PointerPhase};
use crate::types::{AreaId, ResizeDirection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    /// No active gesture
    #[default]
    Idle,
    /// Moving the area with the pointer
    Dragging,
    /// Resizing from one corner
    Resizing(ResizeDirection),
}

impl GestureState {
    /// Read the state of `owner` off the bus.
    pub fn of(bus: &PointerBus, owner: AreaId) -> Self {
        bus.handlers_for(owner, PointerPhase::Move)
            .into_iter()
            .find_map(|handler| match handler {
                GestureHandler::DragMove => Some(Self::Dragging),
                GestureHandler::ResizeMove(direction) => Some(Self::Resizing(direction)),
                _ => None,
            })
            .unwrap_or_default()
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging)
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing(_))
    }

    /// Get the resize direction, if resizing
    pub fn resize_direction(&self) -> Option<ResizeDirection> {
        match self {
            Self::Resizing(direction) => Some(*direction),
            _ => None,
        }
    }
}
