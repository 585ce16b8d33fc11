//! Pointer events and the shared document-level subscription set.
//!
//! While a gesture is active its tracker subscribes the matching move and up
//! handlers on the [`PointerBus`]; the host forwards every global pointer
//! move/up to the hot areas, and each area only reacts to handlers it has
//! subscribed. Ending the gesture removes them again.
//!
//! If the host never delivers the pointer-up (focus lost, window hidden), the
//! subscription stays in place and the area keeps reacting to moves. There is
//! no cancel path; dropping the `HotArea` is what clears it.

use crate::types::{AreaId, ResizeDirection};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A pointer sample in client coordinates.
#[derive(Debug, Clone, Default)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
    propagation_stopped: Cell<bool>,
}

impl PointerEvent {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            propagation_stopped: Cell::new(false),
        }
    }

    /// Keep this event from reaching handlers further up the element tree.
    pub fn stop_propagation(&self) {
        self.propagation_stopped.set(true);
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped.get()
    }
}

/// Which global pointer channel a handler listens on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    Move,
    Up,
}

/// Handlers a tracker can subscribe while its gesture runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GestureHandler {
    DragMove,
    DragUp,
    ResizeMove(ResizeDirection),
    ResizeUp,
}

impl GestureHandler {
    pub fn phase(self) -> PointerPhase {
        match self {
            Self::DragMove | Self::ResizeMove(_) => PointerPhase::Move,
            Self::DragUp | Self::ResizeUp => PointerPhase::Up,
        }
    }
}

/// Shared set of active pointer subscriptions.
///
/// Clones share the same set. Subscribing an already present
/// `(owner, handler)` pair does nothing, and removing an absent one is a
/// no-op, so ending a gesture twice is harmless.
#[derive(Clone, Debug, Default)]
pub struct PointerBus {
    subscriptions: Rc<RefCell<Vec<(AreaId, GestureHandler)>>>,
}

impl PointerBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the subscription was added.
    pub fn subscribe(&self, owner: AreaId, handler: GestureHandler) -> bool {
        let mut subs = self.subscriptions.borrow_mut();
        if subs.contains(&(owner, handler)) {
            return false;
        }
        subs.push((owner, handler));
        true
    }

    /// Returns true if a subscription was removed.
    pub fn unsubscribe(&self, owner: AreaId, handler: GestureHandler) -> bool {
        let mut subs = self.subscriptions.borrow_mut();
        match subs.iter().position(|s| *s == (owner, handler)) {
            Some(index) => {
                subs.remove(index);
                true
            }
            None => false,
        }
    }

    /// Drop every subscription held by `owner`, returning how many there were.
    pub fn remove_owner(&self, owner: AreaId) -> usize {
        let mut subs = self.subscriptions.borrow_mut();
        let before = subs.len();
        subs.retain(|(o, _)| *o != owner);
        before - subs.len()
    }

    pub fn is_subscribed(&self, owner: AreaId, handler: GestureHandler) -> bool {
        self.subscriptions.borrow().contains(&(owner, handler))
    }

    /// Handlers `owner` has on `phase`, in subscription order.
    pub fn handlers_for(&self, owner: AreaId, phase: PointerPhase) -> Vec<GestureHandler> {
        self.subscriptions
            .borrow()
            .iter()
            .filter(|(o, h)| *o == owner && h.phase() == phase)
            .map(|(_, h)| *h)
            .collect()
    }

    pub fn has_subscriptions(&self, owner: AreaId) -> bool {
        self.subscriptions.borrow().iter().any(|(o, _)| *o == owner)
    }

    pub fn len(&self) -> usize {
        self.subscriptions.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.borrow().is_empty()
    }
}
