//! Hit testing of a single hot area: corner handles first, then the body.

use crate::types::{Rect, ResizeDirection};

/// What part of a hot area a pointer-down landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    /// The area body, starts a drag
    Body,
    /// A corner handle, starts a resize in that direction
    Handle(ResizeDirection),
}

/// Hit-test `rect` at `(x, y)`, both in the same coordinate space.
///
/// Handles are squares of `handle_size` centered on the corners, so they
/// reach half a handle outside the area.
pub fn hit_test(rect: &Rect, handle_size: f32, x: f32, y: f32) -> Option<HitTarget> {
    let half = handle_size / 2.0;
    for direction in ResizeDirection::ALL {
        let (cx, cy) = direction.corner_of(rect);
        if (x - cx).abs() <= half && (y - cy).abs() <= half {
            return Some(HitTarget::Handle(direction));
        }
    }
    rect.contains(x, y).then_some(HitTarget::Body)
}
