//! One interactive hot area: an element plus its drag and resize trackers.
//!
//! The trackers publish their new state on every change. The area keeps its
//! [`ElementRef`] in sync from those notifications, which is what lets the
//! trackers read a live bounding box on the next pointer move.

use crate::element::{Container, ElementHandle, ElementRef, NoSelection, TextSelection};
use crate::emitter::{Listener, TrackerEvent, listener};
use crate::input::{
    DragOptions, DragTracker, GestureHandler, GestureState, HitTarget, PointerBus, PointerEvent,
    PointerPhase, PositionTarget, ResizeOptions, ResizeTracker, hit_test,
};
use crate::settings::EditorSettings;
use crate::types::{AreaId, HotAreaRect, Position, Rect, Size};
use std::cell::RefCell;
use std::rc::Rc;

/// Everything the hot areas of one board share.
#[derive(Clone)]
pub struct AreaContext {
    pub container: Container,
    pub bus: PointerBus,
    pub selection: Rc<dyn TextSelection>,
    pub settings: EditorSettings,
}

impl AreaContext {
    pub fn new(container: Container, settings: EditorSettings) -> Self {
        Self {
            container,
            bus: PointerBus::new(),
            selection: Rc::new(NoSelection),
            settings,
        }
    }
}

/// A consumer listener and the per-tracker wrappers forwarding to it.
struct Forwarder {
    listener: Listener<HotAreaRect>,
    on_position: Listener<Position>,
    on_size: Listener<Size>,
}

pub struct HotArea {
    id: AreaId,
    element: ElementRef,
    drag: Rc<RefCell<DragTracker>>,
    resize: ResizeTracker,
    bus: PointerBus,
    handle_size: f32,
    forwarders: Vec<Forwarder>,
}

impl HotArea {
    pub fn new(id: AreaId, rect: HotAreaRect, ctx: &AreaContext) -> Self {
        let element = ElementRef::mounted(&ctx.container, rect.to_rect());
        let handle: Rc<dyn ElementHandle> = Rc::new(element.clone());

        let mut drag = DragTracker::new(DragOptions {
            x: rect.x,
            y: rect.y,
            element: handle.clone(),
        })
        .with_bus(ctx.bus.clone(), id)
        .with_selection(ctx.selection.clone());
        drag.set_bound_to_parent(ctx.settings.bound_to_parent);
        let rendered = element.clone();
        drag.subscribe(
            TrackerEvent::Update,
            listener(move |p: &Position| rendered.set_position(*p)),
        );
        let drag = Rc::new(RefCell::new(drag));

        let position: Rc<RefCell<dyn PositionTarget>> = drag.clone();
        let mut resize = ResizeTracker::new(ResizeOptions {
            width: rect.width,
            height: rect.height,
            element: Some(handle),
            min_width: Some(ctx.settings.min_width),
            min_height: Some(ctx.settings.min_height),
            position,
        })
        .with_bus(ctx.bus.clone(), id)
        .with_selection(ctx.selection.clone());
        let rendered = element.clone();
        resize.subscribe(
            TrackerEvent::Update,
            listener(move |s: &Size| rendered.set_size(*s)),
        );

        Self {
            id,
            element,
            drag,
            resize,
            bus: ctx.bus.clone(),
            handle_size: ctx.settings.handle_size,
            forwarders: Vec::new(),
        }
    }

    pub fn id(&self) -> AreaId {
        self.id
    }

    pub fn position(&self) -> Position {
        self.drag.borrow().position()
    }

    pub fn size(&self) -> Size {
        self.resize.size()
    }

    /// Current container-relative geometry.
    pub fn rect(&self) -> HotAreaRect {
        HotAreaRect::from(Rect::from_parts(self.position(), self.size()))
    }

    pub fn element(&self) -> &ElementRef {
        &self.element
    }

    pub fn gesture_state(&self) -> GestureState {
        GestureState::of(&self.bus, self.id)
    }

    pub fn is_active(&self) -> bool {
        self.bus.has_subscriptions(self.id)
    }

    pub fn set_bound_to_parent(&self, bound: bool) {
        self.drag.borrow_mut().set_bound_to_parent(bound);
    }

    /// Selection both trackers clear while a gesture runs.
    pub fn set_selection(&mut self, selection: Rc<dyn TextSelection>) {
        self.drag.borrow_mut().set_selection(selection.clone());
        self.resize.set_selection(selection);
    }

    /// Call `listener` with the rendered geometry after every change.
    ///
    /// A north-west resize reports up to three times per move: once per
    /// origin shift and once for the new size. Listeners run while the
    /// trackers are mid-update and must not call back into this area.
    pub fn subscribe(&mut self, listener: Listener<HotAreaRect>) {
        let on_position: Listener<Position> = {
            let element = self.element.clone();
            let listener = listener.clone();
            Rc::new(move |_: &Position| {
                if let Some(rect) = element.local_rect() {
                    listener(&HotAreaRect::from(rect));
                }
            })
        };
        let on_size: Listener<Size> = {
            let element = self.element.clone();
            let listener = listener.clone();
            Rc::new(move |_: &Size| {
                if let Some(rect) = element.local_rect() {
                    listener(&HotAreaRect::from(rect));
                }
            })
        };
        self.drag
            .borrow_mut()
            .subscribe(TrackerEvent::Update, on_position.clone());
        self.resize.subscribe(TrackerEvent::Update, on_size.clone());
        self.forwarders.push(Forwarder {
            listener,
            on_position,
            on_size,
        });
    }

    pub fn unsubscribe(&mut self, listener: &Listener<HotAreaRect>) {
        let Some(index) = self
            .forwarders
            .iter()
            .position(|f| Rc::ptr_eq(&f.listener, listener))
        else {
            return;
        };
        let forwarder = self.forwarders.remove(index);
        self.drag
            .borrow_mut()
            .unsubscribe(Some(&TrackerEvent::Update), Some(&forwarder.on_position));
        self.resize
            .unsubscribe(Some(&TrackerEvent::Update), Some(&forwarder.on_size));
    }

    /// Hit-test a container-relative point against this area.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<HitTarget> {
        let rect = self.element.local_rect()?;
        hit_test(&rect, self.handle_size, x, y)
    }

    /// Deliver a pointer-down that landed on `target`.
    ///
    /// Like event bubbling: the handle runs first and stops propagation, so
    /// the body only starts a drag when no handle took the event.
    pub fn pointer_down(&mut self, target: HitTarget, event: &PointerEvent) {
        if let HitTarget::Handle(direction) = target {
            self.resize.begin_resize(direction, event);
        }
        if !event.is_propagation_stopped() {
            self.drag.borrow_mut().begin_drag(event.x, event.y);
        }
    }

    /// Deliver a global pointer-move. Ignored unless a gesture is active.
    pub fn pointer_move(&mut self, event: &PointerEvent) {
        for handler in self.bus.handlers_for(self.id, PointerPhase::Move) {
            match handler {
                GestureHandler::DragMove => {
                    self.drag.borrow_mut().on_pointer_move(event.x, event.y)
                }
                GestureHandler::ResizeMove(direction) => {
                    self.resize.on_pointer_move(direction, event.x, event.y)
                }
                GestureHandler::DragUp | GestureHandler::ResizeUp => {}
            }
        }
    }

    /// Deliver a global pointer-up. Ends whatever gesture is active.
    pub fn pointer_up(&mut self, event: &PointerEvent) {
        for handler in self.bus.handlers_for(self.id, PointerPhase::Up) {
            match handler {
                GestureHandler::DragUp => self.drag.borrow_mut().end_drag(event.x, event.y),
                GestureHandler::ResizeUp => self.resize.end_resize(event),
                GestureHandler::DragMove | GestureHandler::ResizeMove(_) => {}
            }
        }
    }
}

impl Drop for HotArea {
    fn drop(&mut self) {
        self.bus.remove_owner(self.id);
        self.element.unmount();
    }
}
