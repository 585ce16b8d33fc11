//! Unit tests for loading and saving editor settings.

use hotarea::{EditorSettings, HotAreaError, HotAreaRect};
use tempfile::TempDir;

#[test]
fn test_save_then_load_keeps_every_field() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("settings.json");
    let settings = EditorSettings {
        min_width: 32.0,
        min_height: 12.5,
        bound_to_parent: false,
        handle_size: 14.0,
        default_area: HotAreaRect::new(10.0, 10.0, 80.0, 60.0),
    };

    settings.save_to(&path).unwrap();
    let loaded = EditorSettings::load_from(&path).unwrap();

    assert_eq!(loaded, settings);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = EditorSettings::load_from(&dir.path().join("absent.json"));
    assert!(matches!(result, Err(HotAreaError::Io(_))));
}

#[test]
fn test_malformed_file_is_json_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ min_width: ").unwrap();

    let result = EditorSettings::load_from(&path);
    assert!(matches!(result, Err(HotAreaError::Json(_))));
}

#[test]
fn test_empty_object_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{}").unwrap();

    assert_eq!(EditorSettings::load_from(&path).unwrap(), EditorSettings::default());
}

#[test]
fn test_negative_minimum_from_file_is_floored_by_tracker() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "min_width": -15.0, "min_height": -1.0 }"#).unwrap();
    let settings = EditorSettings::load_from(&path).unwrap();

    let mut board = hotarea::ImageHotArea::new(
        "test.png",
        375.0,
        316.0,
        &[HotAreaRect::new(0.0, 0.0, 50.0, 50.0)],
        settings,
    );
    crate::helpers::resize_from(
        &mut board,
        0,
        hotarea::ResizeDirection::SouthEast,
        &[(-100.0, -100.0)],
    );

    let rect = crate::helpers::rect_of(&board, 0);
    assert_eq!((rect.width, rect.height), (0.0, 0.0));
}
