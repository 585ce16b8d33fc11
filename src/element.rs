//! Read-only handles onto the rendered hot area and its container.
//!
//! The trackers never own layout. They ask an [`ElementHandle`] for the
//! element's bounding box and its parent's bounding box on every pointer
//! move, so container scrolling or resizing mid-gesture is picked up.
//! A handle that resolves to nothing turns the move into a no-op.

use crate::types::{Position, Rect, Size};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Bounding-box queries in client space.
pub trait ElementHandle {
    /// Box of the element itself, `None` when not mounted.
    fn bounding_rect(&self) -> Option<Rect>;

    /// Box of the element's immediate parent, `None` when not mounted.
    fn parent_rect(&self) -> Option<Rect>;
}

/// Clears any active text selection so a drag does not paint highlights.
pub trait TextSelection {
    fn clear(&self);
}

/// Selection primitive for hosts without selectable text.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSelection;

impl TextSelection for NoSelection {
    fn clear(&self) {}
}

/// Client-space bounds of the container all hot areas of a board live in.
///
/// Clones share the same bounds; the host updates them on scroll or resize.
#[derive(Clone, Debug)]
pub struct Container {
    bounds: Rc<Cell<Rect>>,
}

impl Container {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds: Rc::new(Cell::new(bounds)),
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds.get()
    }

    pub fn set_bounds(&self, bounds: Rect) {
        self.bounds.set(bounds);
    }

    pub fn set_origin(&self, origin: Position) {
        let mut bounds = self.bounds.get();
        bounds.x = origin.x;
        bounds.y = origin.y;
        self.bounds.set(bounds);
    }

    pub fn set_size(&self, size: Size) {
        let mut bounds = self.bounds.get();
        bounds.width = size.width;
        bounds.height = size.height;
        self.bounds.set(bounds);
    }
}

#[derive(Debug)]
struct MountedElement {
    container: Container,
    /// Container-relative box as last rendered
    rect: Rect,
}

/// A mountable element, the way a UI framework hands out element refs.
///
/// The rendered box is updated from tracker notifications, which is what a
/// re-render does for a DOM node. Clones share the same node.
#[derive(Clone, Debug, Default)]
pub struct ElementRef {
    node: Rc<RefCell<Option<MountedElement>>>,
}

impl ElementRef {
    /// An element that is not mounted yet.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mounted(container: &Container, rect: Rect) -> Self {
        let element = Self::new();
        element.mount(container, rect);
        element
    }

    pub fn mount(&self, container: &Container, rect: Rect) {
        *self.node.borrow_mut() = Some(MountedElement {
            container: container.clone(),
            rect,
        });
    }

    pub fn unmount(&self) {
        *self.node.borrow_mut() = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.node.borrow().is_some()
    }

    /// Re-render the element at a new container-relative position.
    pub fn set_position(&self, position: Position) {
        if let Some(node) = self.node.borrow_mut().as_mut() {
            node.rect.x = position.x;
            node.rect.y = position.y;
        }
    }

    /// Re-render the element with a new size.
    pub fn set_size(&self, size: Size) {
        if let Some(node) = self.node.borrow_mut().as_mut() {
            node.rect.width = size.width;
            node.rect.height = size.height;
        }
    }

    /// Container-relative box as last rendered.
    pub fn local_rect(&self) -> Option<Rect> {
        self.node.borrow().as_ref().map(|node| node.rect)
    }
}

impl ElementHandle for ElementRef {
    fn bounding_rect(&self) -> Option<Rect> {
        self.node
            .borrow()
            .as_ref()
            .map(|node| node.rect.offset(node.container.bounds().position()))
    }

    fn parent_rect(&self) -> Option<Rect> {
        self.node.borrow().as_ref().map(|node| node.container.bounds())
    }
}
