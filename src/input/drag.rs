//! Drag gesture - moves a hot area's top-left corner inside its container.
//!
//! ## Performance Notes
//!
//! `on_pointer_move` runs for every pointer sample while a drag is active.
//! It reads two bounding boxes and does a handful of comparisons; nothing
//! is allocated.

use crate::element::{ElementHandle, NoSelection, TextSelection};
use crate::emitter::{Emitter, Listener, TrackerEvent};
use crate::input::pointer::{GestureHandler, PointerBus};
use crate::profile_scope;
use crate::types::{AreaId, Position};
use std::rc::Rc;
use tracing::{debug, trace};

/// Something that owns an origin the resize tracker can shift.
pub trait PositionTarget {
    fn position(&self) -> Position;
    fn set_x(&mut self, x: f32);
    fn set_y(&mut self, y: f32);
}

/// Construction parameters for [`DragTracker`].
pub struct DragOptions {
    pub x: f32,
    pub y: f32,
    pub element: Rc<dyn ElementHandle>,
}

/// Pointer and origin captured when the drag started.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct DragSnapshot {
    start_x: f32,
    start_y: f32,
    memo_x: f32,
    memo_y: f32,
}

/// Position tracker: owns `(x, y)` of one hot area.
pub struct DragTracker {
    x: f32,
    y: f32,
    element: Rc<dyn ElementHandle>,
    /// Keep the area inside its parent while dragging
    bound_to_parent: bool,
    snapshot: DragSnapshot,
    selection: Rc<dyn TextSelection>,
    bus: PointerBus,
    owner: AreaId,
    events: Emitter<TrackerEvent, Position>,
}

impl DragTracker {
    pub fn new(opts: DragOptions) -> Self {
        Self {
            x: opts.x,
            y: opts.y,
            element: opts.element,
            bound_to_parent: true,
            snapshot: DragSnapshot {
                memo_x: opts.x,
                memo_y: opts.y,
                ..Default::default()
            },
            selection: Rc::new(NoSelection),
            bus: PointerBus::new(),
            owner: 0,
            events: Emitter::new(),
        }
    }

    /// Subscribe gestures on a shared bus under `owner`.
    pub fn with_bus(mut self, bus: PointerBus, owner: AreaId) -> Self {
        self.bus = bus;
        self.owner = owner;
        self
    }

    pub fn with_selection(mut self, selection: Rc<dyn TextSelection>) -> Self {
        self.selection = selection;
        self
    }

    pub fn set_selection(&mut self, selection: Rc<dyn TextSelection>) {
        self.selection = selection;
    }

    pub fn set_element(&mut self, element: Rc<dyn ElementHandle>) {
        self.element = element;
    }

    pub fn is_bound_to_parent(&self) -> bool {
        self.bound_to_parent
    }

    pub fn set_bound_to_parent(&mut self, bound: bool) {
        self.bound_to_parent = bound;
    }

    /// True between `begin_drag` and `end_drag`.
    pub fn is_dragging(&self) -> bool {
        self.bus.is_subscribed(self.owner, GestureHandler::DragMove)
    }

    pub fn subscribe(&mut self, event: TrackerEvent, listener: Listener<Position>) {
        self.events.subscribe(event, listener);
    }

    pub fn unsubscribe(&mut self, event: Option<&TrackerEvent>, listener: Option<&Listener<Position>>) {
        self.events.unsubscribe(event, listener);
    }

    pub fn begin_drag(&mut self, pointer_x: f32, pointer_y: f32) {
        self.selection.clear();
        self.snapshot = DragSnapshot {
            start_x: pointer_x,
            start_y: pointer_y,
            memo_x: self.x,
            memo_y: self.y,
        };
        self.bus.subscribe(self.owner, GestureHandler::DragMove);
        self.bus.subscribe(self.owner, GestureHandler::DragUp);
        debug!(area = self.owner, x = self.x, y = self.y, "drag started");
    }

    pub fn on_pointer_move(&mut self, pointer_x: f32, pointer_y: f32) {
        profile_scope!("drag_move");

        let Some(element_rect) = self.element.bounding_rect() else {
            return;
        };
        self.selection.clear();

        let diff_x = pointer_x - self.snapshot.start_x;
        let diff_y = pointer_y - self.snapshot.start_y;
        self.x = self.snapshot.memo_x + diff_x;
        self.y = self.snapshot.memo_y + diff_y;

        if !self.bound_to_parent {
            self.notify();
            return;
        }

        self.x = self.x.max(0.0);
        self.y = self.y.max(0.0);
        if let Some(parent_rect) = self.element.parent_rect() {
            self.x = self.x.min(parent_rect.width - element_rect.width);
            self.y = self.y.min(parent_rect.height - element_rect.height);
        }
        trace!(area = self.owner, x = self.x, y = self.y, "drag move");
        self.notify();
    }

    pub fn end_drag(&mut self, _pointer_x: f32, _pointer_y: f32) {
        self.snapshot = DragSnapshot {
            memo_x: self.x,
            memo_y: self.y,
            ..Default::default()
        };
        let removed = self.bus.unsubscribe(self.owner, GestureHandler::DragMove)
            | self.bus.unsubscribe(self.owner, GestureHandler::DragUp);
        if removed {
            debug!(area = self.owner, x = self.x, y = self.y, "drag ended");
        }
    }

    fn notify(&self) {
        self.events.publish(&TrackerEvent::Update, &self.position());
    }
}

impl PositionTarget for DragTracker {
    fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    fn set_x(&mut self, x: f32) {
        self.x = x;
        self.notify();
    }

    fn set_y(&mut self, y: f32) {
        self.y = y;
        self.notify();
    }
}
