//! Image hot-area board - an image container holding a list of hot areas.
//!
//! The board turns host pointer events into hot-area gestures:
//! - pointer down: hit-test the topmost area (last added wins) and start a
//!   resize on a corner handle or a drag on the body
//! - pointer move/up: forwarded to every area; only areas with an active
//!   gesture react
//!
//! ## Performance Notes
//!
//! Pointer-down hit testing goes through an R-tree, so the cost is
//! O(log n) in the number of areas. The index is refreshed when a gesture
//! ends, which is the only time an area's geometry settles.
//!
//! Every pointer-down hit test and pointer-move dispatch is timed into the
//! board's [`GestureStats`].

use crate::area::{AreaContext, HotArea};
use crate::element::{Container, TextSelection};
use crate::error::{HotAreaError, HotAreaResult};
use crate::input::{HitTarget, PointerBus, PointerEvent};
use crate::perf::GestureStats;
use crate::profile_scope;
use crate::settings::EditorSettings;
use crate::spatial_index::SpatialIndex;
use crate::types::{AreaId, HotAreaRect, Position, Rect, Size};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Instant;
use tracing::debug;

pub struct ImageHotArea {
    src: PathBuf,
    ctx: AreaContext,
    areas: Vec<HotArea>,
    index: SpatialIndex,
    next_area_id: AreaId,
    stats: GestureStats,
}

impl ImageHotArea {
    /// A board over `src` displayed at `width` x `height`, seeded with `areas`.
    pub fn new(
        src: impl Into<PathBuf>,
        width: f32,
        height: f32,
        areas: &[HotAreaRect],
        settings: EditorSettings,
    ) -> Self {
        let container = Container::new(Rect::new(0.0, 0.0, width, height));
        let index = SpatialIndex::new(settings.handle_size / 2.0);
        let mut board = Self {
            src: src.into(),
            ctx: AreaContext::new(container, settings),
            areas: Vec::new(),
            index,
            next_area_id: 0,
            stats: GestureStats::new(),
        };
        for rect in areas {
            board.spawn_area(*rect);
        }
        board.index.rebuild(
            board
                .areas
                .iter()
                .map(|area| (area.id(), area.rect().to_rect())),
        );
        board
    }

    /// A board sized to the natural dimensions of the image at `path`.
    pub fn from_image(path: impl AsRef<Path>, settings: EditorSettings) -> HotAreaResult<Self> {
        let path = path.as_ref();
        let (width, height) = image::image_dimensions(path)?;
        if width == 0 || height == 0 {
            return Err(HotAreaError::EmptyImage {
                path: path.to_path_buf(),
            });
        }
        debug!(path = %path.display(), width, height, "hot area image loaded");
        Ok(Self::new(path, width as f32, height as f32, &[], settings))
    }

    /// Use `selection` to clear text selection during gestures.
    pub fn with_selection(mut self, selection: Rc<dyn TextSelection>) -> Self {
        for area in &mut self.areas {
            area.set_selection(selection.clone());
        }
        self.ctx.selection = selection;
        self
    }

    pub fn src(&self) -> &Path {
        &self.src
    }

    pub fn settings(&self) -> &EditorSettings {
        &self.ctx.settings
    }

    pub fn container(&self) -> &Container {
        &self.ctx.container
    }

    pub fn bus(&self) -> &PointerBus {
        &self.ctx.bus
    }

    /// Move the container in client space, e.g. after the page scrolled.
    pub fn set_container_origin(&self, origin: Position) {
        self.ctx.container.set_origin(origin);
    }

    pub fn set_container_size(&self, size: Size) {
        self.ctx.container.set_size(size);
    }

    /// Add an area with the configured default geometry.
    pub fn add_area(&mut self) -> AreaId {
        let rect = self.ctx.settings.default_area;
        self.insert_area(rect)
    }

    pub fn insert_area(&mut self, rect: HotAreaRect) -> AreaId {
        let id = self.spawn_area(rect);
        self.index.insert(id, rect.to_rect());
        id
    }

    /// Create and append an area without touching the hit index.
    fn spawn_area(&mut self, rect: HotAreaRect) -> AreaId {
        let id = self.next_area_id;
        self.next_area_id += 1;
        self.areas.push(HotArea::new(id, rect, &self.ctx));
        debug!(area = id, ?rect, "hot area added");
        id
    }

    /// Remove an area, dropping any gesture subscriptions it still holds.
    pub fn remove_area(&mut self, id: AreaId) -> bool {
        let Some(pos) = self.areas.iter().position(|a| a.id() == id) else {
            return false;
        };
        self.areas.remove(pos);
        self.index.remove(id);
        debug!(area = id, "hot area removed");
        true
    }

    pub fn area(&self, id: AreaId) -> Option<&HotArea> {
        self.areas.iter().find(|a| a.id() == id)
    }

    pub fn area_mut(&mut self, id: AreaId) -> Option<&mut HotArea> {
        self.areas.iter_mut().find(|a| a.id() == id)
    }

    pub fn areas(&self) -> &[HotArea] {
        &self.areas
    }

    /// Geometry of every area, in insertion order.
    pub fn rects(&self) -> Vec<HotAreaRect> {
        self.areas.iter().map(HotArea::rect).collect()
    }

    /// True when no area has a gesture running.
    pub fn is_idle(&self) -> bool {
        self.ctx.bus.is_empty()
    }

    /// Which area and part a client-space point would hit.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<(AreaId, HitTarget)> {
        profile_scope!("hit_test_areas");

        let origin = self.ctx.container.bounds().position();
        let (local_x, local_y) = (x - origin.x, y - origin.y);
        let candidates: HashSet<AreaId> = self
            .index
            .query_point(local_x, local_y)
            .into_iter()
            .collect();

        // Reverse insertion order: later areas render on top
        self.areas
            .iter()
            .rev()
            .filter(|area| candidates.contains(&area.id()))
            .find_map(|area| area.hit_test(local_x, local_y).map(|hit| (area.id(), hit)))
    }

    /// Start a gesture on whatever the pointer landed on.
    pub fn pointer_down(&mut self, event: &PointerEvent) -> Option<(AreaId, HitTarget)> {
        let start = Instant::now();
        let hit = self.hit_test(event.x, event.y);
        self.stats
            .record("hit_test", start.elapsed().as_secs_f64() * 1000.0);
        let (id, target) = hit?;
        if let Some(area) = self.area_mut(id) {
            area.pointer_down(target, event);
        }
        Some((id, target))
    }

    pub fn pointer_move(&mut self, event: &PointerEvent) {
        let areas = &mut self.areas;
        self.stats.measure("pointer_move", || {
            for area in areas.iter_mut() {
                area.pointer_move(event);
            }
        });
    }

    pub fn pointer_up(&mut self, event: &PointerEvent) {
        for area in &mut self.areas {
            if area.is_active() {
                area.pointer_up(event);
                self.index.insert(area.id(), area.rect().to_rect());
            }
        }
    }

    /// Pointer-down and pointer-move timings collected so far.
    pub fn stats(&self) -> &GestureStats {
        &self.stats
    }
}
