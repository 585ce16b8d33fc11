//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestBoardBuilder` - Builder pattern for creating boards with areas
//! - Gesture helpers like `drag()` and `resize_from()`
//! - `UpdateLog` for counting change notifications

use hotarea::emitter::{Listener, listener};
use hotarea::input::PointerEvent;
use hotarea::{AreaId, EditorSettings, HotAreaRect, ImageHotArea, Position, ResizeDirection};
use std::cell::RefCell;
use std::rc::Rc;

// ============================================================================
// TestBoardBuilder - Builder pattern for creating test boards
// ============================================================================

/// Builder for creating test boards.
///
/// # Example
/// ```ignore
/// let board = TestBoardBuilder::new()
///     .with_area(0.0, 0.0, 50.0, 50.0)
///     .with_container_origin(20.0, 40.0)
///     .build();
/// ```
pub struct TestBoardBuilder {
    size: (f32, f32),
    origin: (f32, f32),
    areas: Vec<HotAreaRect>,
    settings: EditorSettings,
}

impl Default for TestBoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBoardBuilder {
    /// A 375x316 container at the client origin with default settings.
    pub fn new() -> Self {
        Self {
            size: (375.0, 316.0),
            origin: (0.0, 0.0),
            areas: Vec::new(),
            settings: EditorSettings::default(),
        }
    }

    pub fn with_container_size(mut self, width: f32, height: f32) -> Self {
        self.size = (width, height);
        self
    }

    pub fn with_container_origin(mut self, x: f32, y: f32) -> Self {
        self.origin = (x, y);
        self
    }

    pub fn with_area(mut self, x: f32, y: f32, width: f32, height: f32) -> Self {
        self.areas.push(HotAreaRect::new(x, y, width, height));
        self
    }

    pub fn with_min_size(mut self, width: f32, height: f32) -> Self {
        self.settings.min_width = width;
        self.settings.min_height = height;
        self
    }

    pub fn unbounded(mut self) -> Self {
        self.settings.bound_to_parent = false;
        self
    }

    pub fn build(self) -> ImageHotArea {
        let board = ImageHotArea::new(
            "test.png",
            self.size.0,
            self.size.1,
            &self.areas,
            self.settings,
        );
        board.set_container_origin(Position::new(self.origin.0, self.origin.1));
        board
    }
}

// ============================================================================
// Gesture helpers
// ============================================================================

/// Press at `from`, move through `path`, release at the last point.
pub fn drag(board: &mut ImageHotArea, from: (f32, f32), path: &[(f32, f32)]) {
    board.pointer_down(&PointerEvent::new(from.0, from.1));
    for &(x, y) in path {
        board.pointer_move(&PointerEvent::new(x, y));
    }
    let end = path.last().copied().unwrap_or(from);
    board.pointer_up(&PointerEvent::new(end.0, end.1));
}

/// Client-space position of `direction`'s handle on area `id`.
pub fn handle_of(board: &ImageHotArea, id: AreaId, direction: ResizeDirection) -> (f32, f32) {
    let rect = board.area(id).expect("area exists").rect().to_rect();
    let origin = board.container().bounds().position();
    let (x, y) = direction.corner_of(&rect);
    (x + origin.x, y + origin.y)
}

/// Resize area `id` from its `direction` handle through `path`.
pub fn resize_from(
    board: &mut ImageHotArea,
    id: AreaId,
    direction: ResizeDirection,
    path: &[(f32, f32)],
) {
    let start = handle_of(board, id, direction);
    drag(board, start, path);
}

pub fn rect_of(board: &ImageHotArea, id: AreaId) -> HotAreaRect {
    board.area(id).expect("area exists").rect()
}

// ============================================================================
// Notification recording
// ============================================================================

/// Collects every value a listener receives.
pub struct UpdateLog<T> {
    entries: Rc<RefCell<Vec<T>>>,
}

impl<T: Clone + 'static> UpdateLog<T> {
    pub fn new() -> Self {
        Self {
            entries: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn listener(&self) -> Listener<T> {
        let entries = self.entries.clone();
        listener(move |value: &T| entries.borrow_mut().push(value.clone()))
    }

    pub fn count(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn entries(&self) -> Vec<T> {
        self.entries.borrow().clone()
    }

    pub fn last(&self) -> Option<T> {
        self.entries.borrow().last().cloned()
    }
}
