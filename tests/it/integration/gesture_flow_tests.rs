//! End-to-end gesture flows through the board.

use crate::helpers::{TestBoardBuilder, drag, handle_of, rect_of, resize_from};
use hotarea::input::{GestureState, HitTarget, PointerEvent};
use hotarea::{HotAreaRect, ResizeDirection};

#[test]
fn test_drag_past_corner_stops_at_edge() {
    let mut board = TestBoardBuilder::new().build();
    let id = board.add_area();

    drag(&mut board, (10.0, 10.0), &[(500.0, 500.0)]);

    assert_eq!(rect_of(&board, id), HotAreaRect::new(325.0, 266.0, 50.0, 50.0));
}

#[test]
fn test_unbounded_drag_leaves_container() {
    let mut board = TestBoardBuilder::new()
        .unbounded()
        .with_area(0.0, 0.0, 50.0, 50.0)
        .build();

    drag(&mut board, (10.0, 10.0), &[(500.0, 500.0)]);

    assert_eq!(rect_of(&board, 0), HotAreaRect::new(490.0, 490.0, 50.0, 50.0));
}

#[test]
fn test_consecutive_drags_accumulate() {
    let mut board = TestBoardBuilder::new().with_area(0.0, 0.0, 50.0, 50.0).build();

    drag(&mut board, (25.0, 25.0), &[(45.0, 35.0)]);
    drag(&mut board, (45.0, 35.0), &[(75.0, 65.0)]);

    assert_eq!(rect_of(&board, 0), HotAreaRect::new(50.0, 40.0, 50.0, 50.0));
}

#[test]
fn test_handle_press_resizes_without_dragging() {
    let mut board = TestBoardBuilder::new().with_area(100.0, 100.0, 50.0, 50.0).build();
    let start = handle_of(&board, 0, ResizeDirection::SouthEast);

    let hit = board.pointer_down(&PointerEvent::new(start.0, start.1));
    assert_eq!(hit, Some((0, HitTarget::Handle(ResizeDirection::SouthEast))));
    assert_eq!(
        board.area(0).map(|a| a.gesture_state()),
        Some(GestureState::Resizing(ResizeDirection::SouthEast))
    );

    board.pointer_move(&PointerEvent::new(start.0 + 30.0, start.1 + 10.0));
    board.pointer_up(&PointerEvent::new(start.0 + 30.0, start.1 + 10.0));

    assert_eq!(rect_of(&board, 0), HotAreaRect::new(100.0, 100.0, 80.0, 60.0));
}

#[test]
fn test_bottom_right_shrink_floors_at_minimum() {
    let mut board = TestBoardBuilder::new().with_area(0.0, 0.0, 50.0, 50.0).build();

    resize_from(&mut board, 0, ResizeDirection::SouthEast, &[(-10.0, -5.0)]);

    assert_eq!(rect_of(&board, 0), HotAreaRect::new(0.0, 0.0, 20.0, 20.0));
}

#[test]
fn test_top_left_grow_moves_origin() {
    let mut board = TestBoardBuilder::new().with_area(100.0, 100.0, 50.0, 50.0).build();

    resize_from(&mut board, 0, ResizeDirection::NorthWest, &[(70.0, 100.0)]);

    assert_eq!(rect_of(&board, 0), HotAreaRect::new(70.0, 100.0, 80.0, 50.0));
}

#[test]
fn test_bottom_left_keeps_right_edge_while_above_minimum() {
    let mut board = TestBoardBuilder::new().with_area(100.0, 100.0, 50.0, 50.0).build();
    board.pointer_down(&PointerEvent::new(100.0, 150.0));

    for x in [80.0, 40.0, 95.0, 120.0, 130.0] {
        board.pointer_move(&PointerEvent::new(x, 150.0));
        let rect = rect_of(&board, 0);
        assert_eq!(rect.x + rect.width, 150.0, "pointer x={x}");
    }
    for x in [140.0, 200.0] {
        board.pointer_move(&PointerEvent::new(x, 150.0));
        assert_eq!(rect_of(&board, 0), HotAreaRect::new(130.0, 100.0, 20.0, 50.0));
    }
    board.pointer_up(&PointerEvent::new(200.0, 150.0));
}

#[test]
fn test_top_right_keeps_bottom_edge() {
    let mut board = TestBoardBuilder::new().with_area(100.0, 100.0, 50.0, 50.0).build();

    resize_from(&mut board, 0, ResizeDirection::NorthEast, &[(160.0, 80.0), (140.0, 120.0)]);

    let rect = rect_of(&board, 0);
    assert_eq!(rect, HotAreaRect::new(100.0, 120.0, 40.0, 30.0));
    assert_eq!(rect.y + rect.height, 150.0);
}

#[test]
fn test_min_size_holds_under_wild_paths() {
    let path = [
        (-900.0, -900.0),
        (900.0, 900.0),
        (187.0, 158.0),
        (-900.0, 900.0),
        (900.0, -900.0),
        (187.0, 158.0),
    ];
    for direction in ResizeDirection::ALL {
        let mut board = TestBoardBuilder::new()
            .with_min_size(35.0, 15.0)
            .with_area(150.0, 130.0, 60.0, 60.0)
            .build();

        resize_from(&mut board, 0, direction, &path);

        let rect = rect_of(&board, 0);
        assert!(rect.width >= 35.0, "{direction:?}: {rect:?}");
        assert!(rect.height >= 15.0, "{direction:?}: {rect:?}");
        assert!(board.is_idle());
    }
}

#[test]
fn test_resize_growth_stops_at_container_edges() {
    let mut board = TestBoardBuilder::new().with_area(100.0, 100.0, 50.0, 50.0).build();

    resize_from(&mut board, 0, ResizeDirection::SouthEast, &[(1_000.0, 1_000.0)]);
    assert_eq!(rect_of(&board, 0), HotAreaRect::new(100.0, 100.0, 275.0, 216.0));

    resize_from(&mut board, 0, ResizeDirection::NorthWest, &[(-1_000.0, -1_000.0)]);
    assert_eq!(rect_of(&board, 0), HotAreaRect::new(0.0, 0.0, 375.0, 316.0));
}

#[test]
fn test_gesture_ends_on_pointer_up() {
    let mut board = TestBoardBuilder::new().with_area(0.0, 0.0, 50.0, 50.0).build();

    board.pointer_down(&PointerEvent::new(25.0, 25.0));
    assert_eq!(board.area(0).map(|a| a.gesture_state()), Some(GestureState::Dragging));

    board.pointer_up(&PointerEvent::new(25.0, 25.0));
    board.pointer_up(&PointerEvent::new(25.0, 25.0));
    assert!(board.is_idle());

    // Moves after release do nothing
    board.pointer_move(&PointerEvent::new(200.0, 200.0));
    assert_eq!(rect_of(&board, 0), HotAreaRect::new(0.0, 0.0, 50.0, 50.0));
}

#[test]
fn test_missing_pointer_up_keeps_gesture_alive() {
    let mut board = TestBoardBuilder::new().with_area(0.0, 0.0, 50.0, 50.0).build();

    board.pointer_down(&PointerEvent::new(25.0, 25.0));
    board.pointer_move(&PointerEvent::new(35.0, 35.0));

    // Release happened outside the host; the area still follows the pointer
    board.pointer_move(&PointerEvent::new(125.0, 125.0));
    assert_eq!(rect_of(&board, 0), HotAreaRect::new(100.0, 100.0, 50.0, 50.0));
    assert!(!board.is_idle());
}

#[test]
fn test_moves_reach_only_the_active_area() {
    let mut board = TestBoardBuilder::new()
        .with_area(0.0, 0.0, 50.0, 50.0)
        .with_area(200.0, 200.0, 50.0, 50.0)
        .build();

    drag(&mut board, (225.0, 225.0), &[(245.0, 245.0)]);

    assert_eq!(rect_of(&board, 0), HotAreaRect::new(0.0, 0.0, 50.0, 50.0));
    assert_eq!(rect_of(&board, 1), HotAreaRect::new(220.0, 220.0, 50.0, 50.0));
}
