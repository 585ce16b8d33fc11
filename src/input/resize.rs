//! Resize gestures - four corner handles with min-size and container clamps.
//!
//! Every direction follows the same shape: snapshot the element's edges on
//! pointer-down, then on each move compute how far the moving edges travelled
//! (clamped at the container edge), derive the tentative size and clamp it
//! to the minimum. Directions that move the left or top edge also shift the
//! origin through the injected [`PositionTarget`] so the opposite edge stays
//! put.
//!
//! The origin only shifts while the tentative size (before the min clamp)
//! is at least the minimum. Once an axis is pinned at its floor the origin
//! stops moving on that axis, otherwise the area would slide while pinned.

use crate::constants::{DEFAULT_MIN_HEIGHT, DEFAULT_MIN_WIDTH};
use crate::element::{ElementHandle, NoSelection, TextSelection};
use crate::emitter::{Emitter, Listener, TrackerEvent};
use crate::input::drag::PositionTarget;
use crate::input::pointer::{GestureHandler, PointerBus, PointerEvent};
use crate::profile_scope;
use crate::types::{AreaId, Rect, ResizeDirection, Size};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::{debug, trace};

/// Construction parameters for [`ResizeTracker`].
pub struct ResizeOptions {
    pub width: f32,
    pub height: f32,
    pub element: Option<Rc<dyn ElementHandle>>,
    /// Defaults to 20; negative values are treated as 0
    pub min_width: Option<f32>,
    /// Defaults to 20; negative values are treated as 0
    pub min_height: Option<f32>,
    pub position: Rc<RefCell<dyn PositionTarget>>,
}

/// Client-space edges and origin captured when the resize started.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct ResizeSnapshot {
    right: f32,
    bottom: f32,
    left: f32,
    top: f32,
    memo_w: f32,
    memo_h: f32,
    anchor_x: f32,
    anchor_y: f32,
}

/// Size tracker: owns `(width, height)` of one hot area.
pub struct ResizeTracker {
    w: f32,
    h: f32,
    min_w: f32,
    min_h: f32,
    element: Option<Rc<dyn ElementHandle>>,
    position: Rc<RefCell<dyn PositionTarget>>,
    snapshot: ResizeSnapshot,
    selection: Rc<dyn TextSelection>,
    bus: PointerBus,
    owner: AreaId,
    events: Emitter<TrackerEvent, Size>,
}

fn sanitize_min(value: Option<f32>, default: f32) -> f32 {
    value.map_or(default, |v| v.max(0.0))
}

impl ResizeTracker {
    pub fn new(opts: ResizeOptions) -> Self {
        Self {
            w: opts.width,
            h: opts.height,
            min_w: sanitize_min(opts.min_width, DEFAULT_MIN_WIDTH),
            min_h: sanitize_min(opts.min_height, DEFAULT_MIN_HEIGHT),
            element: opts.element,
            position: opts.position,
            snapshot: ResizeSnapshot {
                memo_w: opts.width,
                memo_h: opts.height,
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

    pub fn width(&self) -> f32 {
        self.w
    }

    pub fn height(&self) -> f32 {
        self.h
    }

    pub fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }

    pub fn min_size(&self) -> Size {
        Size::new(self.min_w, self.min_h)
    }

    pub fn set_element(&mut self, element: Option<Rc<dyn ElementHandle>>) {
        if element.is_some() {
            self.element = element;
        }
    }

    /// Direction of the running resize, if any.
    pub fn active_direction(&self) -> Option<ResizeDirection> {
        ResizeDirection::ALL
            .into_iter()
            .find(|d| self.bus.is_subscribed(self.owner, GestureHandler::ResizeMove(*d)))
    }

    pub fn subscribe(&mut self, event: TrackerEvent, listener: Listener<Size>) {
        self.events.subscribe(event, listener);
    }

    pub fn unsubscribe(&mut self, event: Option<&TrackerEvent>, listener: Option<&Listener<Size>>) {
        self.events.unsubscribe(event, listener);
    }

    fn element_rect(&self) -> Option<Rect> {
        self.element.as_ref().and_then(|el| el.bounding_rect())
    }

    fn container_rect(&self) -> Option<Rect> {
        self.element.as_ref().and_then(|el| el.parent_rect())
    }

    /// Start a resize from the `direction` corner.
    ///
    /// Stops `event` so the body's drag handler does not also start.
    pub fn begin_resize(&mut self, direction: ResizeDirection, event: &PointerEvent) {
        event.stop_propagation();
        let Some(rect) = self.element_rect() else {
            debug!(area = self.owner, ?direction, "resize ignored, element not mounted");
            return;
        };
        let anchor = self.position.borrow().position();
        self.snapshot = ResizeSnapshot {
            right: rect.right(),
            bottom: rect.bottom(),
            left: rect.left(),
            top: rect.top(),
            memo_w: rect.width,
            memo_h: rect.height,
            anchor_x: anchor.x,
            anchor_y: anchor.y,
        };
        self.bus.subscribe(self.owner, GestureHandler::ResizeUp);
        self.bus.subscribe(self.owner, GestureHandler::ResizeMove(direction));
        debug!(area = self.owner, ?direction, w = self.w, h = self.h, "resize started");
    }

    pub fn on_pointer_move(&mut self, direction: ResizeDirection, pointer_x: f32, pointer_y: f32) {
        profile_scope!("resize_move");

        let Some(container) = self.container_rect() else {
            return;
        };
        self.selection.clear();

        let diff_w = self.horizontal_delta(direction, &container, pointer_x);
        let diff_h = self.vertical_delta(direction, &container, pointer_y);
        self.w = self.snapshot.memo_w + diff_w;
        self.h = self.snapshot.memo_h + diff_h;

        // Checked against the tentative size so a pinned axis stops moving
        if direction.moves_left_edge() && self.w >= self.min_w {
            self.position.borrow_mut().set_x(self.snapshot.anchor_x - diff_w);
        }
        if direction.moves_top_edge() && self.h >= self.min_h {
            self.position.borrow_mut().set_y(self.snapshot.anchor_y - diff_h);
        }

        self.limit_min_size();
        trace!(area = self.owner, ?direction, w = self.w, h = self.h, "resize move");
        self.notify();
    }

    /// Growth of the width, positive when the moving edge goes outward.
    fn horizontal_delta(&self, direction: ResizeDirection, container: &Rect, pointer_x: f32) -> f32 {
        if direction.moves_left_edge() {
            if pointer_x <= container.left() {
                self.snapshot.left - container.left()
            } else {
                self.snapshot.left - pointer_x
            }
        } else if pointer_x >= container.right() {
            container.right() - self.snapshot.right
        } else {
            pointer_x - self.snapshot.right
        }
    }

    /// Growth of the height, positive when the moving edge goes outward.
    fn vertical_delta(&self, direction: ResizeDirection, container: &Rect, pointer_y: f32) -> f32 {
        if direction.moves_top_edge() {
            if pointer_y <= container.top() {
                self.snapshot.top - container.top()
            } else {
                self.snapshot.top - pointer_y
            }
        } else if pointer_y >= container.bottom() {
            container.bottom() - self.snapshot.bottom
        } else {
            pointer_y - self.snapshot.bottom
        }
    }

    fn limit_min_size(&mut self) {
        if self.w <= self.min_w {
            self.w = self.min_w;
        }
        if self.h <= self.min_h {
            self.h = self.min_h;
        }
    }

    pub fn end_resize(&mut self, event: &PointerEvent) {
        event.stop_propagation();
        self.snapshot.right = 0.0;
        self.snapshot.bottom = 0.0;
        self.snapshot.memo_w = self.w;
        self.snapshot.memo_h = self.h;

        let mut removed = false;
        for direction in ResizeDirection::ALL {
            removed |= self.bus.unsubscribe(self.owner, GestureHandler::ResizeMove(direction));
        }
        removed |= self.bus.unsubscribe(self.owner, GestureHandler::ResizeUp);
        if removed {
            debug!(area = self.owner, w = self.w, h = self.h, "resize ended");
        }
    }

    fn notify(&self) {
        self.events.publish(&TrackerEvent::Update, &self.size());
    }
}
