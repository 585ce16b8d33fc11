//! Core geometry types for hot areas.
//!
//! Client-space rectangles (as reported by the element handle) and
//! container-relative rectangles share the same `Rect` type; which space a
//! value lives in is stated where it is produced.

use serde::{Deserialize, Serialize};

/// Identifier of one hot area inside a board.
pub type AreaId = u64;

/// Top-left corner of a hot area relative to its container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Width and height of a hot area.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_parts(position: Position, size: Size) -> Self {
        Self::new(position.x, position.y, size.width, size.height)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Shift this rectangle by `origin`, e.g. container-relative to client space.
    pub fn offset(&self, origin: Position) -> Self {
        Self::new(self.x + origin.x, self.y + origin.y, self.width, self.height)
    }

    /// Grow the rectangle by `amount` on every side.
    pub fn inflate(&self, amount: f32) -> Self {
        Self::new(
            self.x - amount,
            self.y - amount,
            self.width + amount * 2.0,
            self.height + amount * 2.0,
        )
    }

    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left() && x <= self.right() && y >= self.top() && y <= self.bottom()
    }
}

/// Corner a resize gesture is started from.
///
/// The variant decides which edges follow the pointer; the opposite edges
/// stay anchored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResizeDirection {
    /// Bottom-right corner: right and bottom edges move
    SouthEast,
    /// Bottom-left corner: left and bottom edges move, x shifts
    SouthWest,
    /// Top-right corner: right and top edges move, y shifts
    NorthEast,
    /// Top-left corner: left and top edges move, x and y shift
    NorthWest,
}

impl ResizeDirection {
    pub const ALL: [ResizeDirection; 4] = [
        ResizeDirection::SouthEast,
        ResizeDirection::SouthWest,
        ResizeDirection::NorthEast,
        ResizeDirection::NorthWest,
    ];

    /// True if the left edge follows the pointer (origin x shifts).
    pub fn moves_left_edge(self) -> bool {
        matches!(self, Self::SouthWest | Self::NorthWest)
    }

    /// True if the top edge follows the pointer (origin y shifts).
    pub fn moves_top_edge(self) -> bool {
        matches!(self, Self::NorthEast | Self::NorthWest)
    }

    /// Corner point of `rect` where this direction's handle sits.
    pub fn corner_of(self, rect: &Rect) -> (f32, f32) {
        let x = if self.moves_left_edge() { rect.left() } else { rect.right() };
        let y = if self.moves_top_edge() { rect.top() } else { rect.bottom() };
        (x, y)
    }
}

/// Serializable geometry of one hot area, container-relative.
///
/// This is what the surrounding application stores and feeds back in.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HotAreaRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl HotAreaRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn to_rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

impl Default for HotAreaRect {
    fn default() -> Self {
        let (x, y, width, height) = crate::constants::DEFAULT_AREA;
        Self::new(x, y, width, height)
    }
}

impl From<Rect> for HotAreaRect {
    fn from(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}
