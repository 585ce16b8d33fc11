//! Unit tests for gesture timing statistics.

use hotarea::perf::{GestureStats, OperationStats, ScopedTimer, TARGET_FRAME_MS};

#[test]
fn test_operation_stats_average_and_max() {
    let mut stats = OperationStats::default();
    assert_eq!(stats.average(), 0.0);

    stats.record(2.0);
    stats.record(4.0);
    stats.record(9.0);

    assert_eq!(stats.average(), 5.0);
    assert_eq!(stats.max(), 9.0);
    assert_eq!(stats.count(), 3);
}

#[test]
fn test_average_uses_recent_samples_only() {
    let mut stats = OperationStats::default();
    stats.record(1_000.0);
    for _ in 0..100 {
        stats.record(1.0);
    }

    // The slow sample fell out of the window but still counts as the max
    assert_eq!(stats.average(), 1.0);
    assert_eq!(stats.max(), 1_000.0);
    assert_eq!(stats.count(), 101);
}

#[test]
fn test_measure_records_under_name() {
    let mut stats = GestureStats::new();
    let value = stats.measure("drag_move", || 41 + 1);
    stats.measure("drag_move", || ());

    assert_eq!(value, 42);
    assert_eq!(stats.get("drag_move").map(OperationStats::count), Some(2));
    assert!(stats.get("resize_move").is_none());
}

#[test]
fn test_log_slow_operations_does_not_panic() {
    let mut stats = GestureStats::new();
    stats.record("resize_move", TARGET_FRAME_MS * 3.0);
    stats.record("drag_move", 0.1);
    stats.log_slow_operations();
}

#[test]
fn test_scoped_timer_elapsed_grows() {
    let timer = ScopedTimer::new("test", 1_000.0);
    let first = timer.elapsed_ms();
    std::thread::sleep(std::time::Duration::from_millis(2));
    assert!(timer.elapsed_ms() > first);
}
