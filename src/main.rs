//! Replays a short gesture session against a hot-area board and prints the
//! resulting rectangles as JSON.
//!
//! ```sh
//! hotarea [IMAGE]
//! RUST_LOG=hotarea=debug hotarea
//! ```

use anyhow::{Context, Result};
use hotarea::constants::DEMO_CONTAINER_SIZE;
use hotarea::input::PointerEvent;
use hotarea::{EditorSettings, ImageHotArea};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = EditorSettings::load();
    let mut board = match std::env::args().nth(1) {
        Some(path) => ImageHotArea::from_image(&path, settings)
            .with_context(|| format!("Failed to open image {}", path))?,
        None => {
            let (width, height) = DEMO_CONTAINER_SIZE;
            ImageHotArea::new("demo.png", width, height, &[], settings)
        }
    };
    let bounds = board.container().bounds();
    info!(src = %board.src().display(), width = bounds.width, height = bounds.height, "board ready");

    let id = board.add_area();

    // Drag the new area far past the bottom-right corner; it stops at the edge
    board.pointer_down(&PointerEvent::new(10.0, 10.0));
    board.pointer_move(&PointerEvent::new(bounds.width * 2.0, bounds.height * 2.0));
    board.pointer_up(&PointerEvent::new(bounds.width * 2.0, bounds.height * 2.0));

    // Shrink it from the bottom-right handle below the minimum size
    let rect = board
        .area(id)
        .map(|area| area.rect())
        .context("Area vanished during drag")?;
    let (corner_x, corner_y) = (rect.x + rect.width, rect.y + rect.height);
    board.pointer_down(&PointerEvent::new(corner_x, corner_y));
    board.pointer_move(&PointerEvent::new(corner_x - 45.0, corner_y - 26.0));
    board.pointer_up(&PointerEvent::new(corner_x - 45.0, corner_y - 26.0));

    board.stats().log_slow_operations();
    println!("{}", serde_json::to_string_pretty(&board.rects())?);
    Ok(())
}
