//! Spatial Index Module
//!
//! R-tree over hot area bounds for pointer-down hit testing. Entries are the
//! area rectangles grown by half a handle, so a press on a handle that sticks
//! out past the area still finds it.

use crate::types::{AreaId, Rect};
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// Hit box of one hot area, container-relative.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    pub area_id: AreaId,
    pub bounds: Rect,
}

impl SpatialEntry {
    pub fn new(area_id: AreaId, bounds: Rect) -> Self {
        Self { area_id, bounds }
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.bounds.left(), self.bounds.top()],
            [self.bounds.right(), self.bounds.bottom()],
        )
    }
}

impl PartialEq for SpatialEntry {
    fn eq(&self, other: &Self) -> bool {
        self.area_id == other.area_id
    }
}

/// Spatial index for hot areas, keyed by area id.
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
    entries: HashMap<AreaId, SpatialEntry>,
    /// Added on every side of an area's rect
    margin: f32,
}

impl SpatialIndex {
    pub fn new(margin: f32) -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
            margin,
        }
    }

    /// Insert or replace the hit box of `area_id`.
    pub fn insert(&mut self, area_id: AreaId, rect: Rect) {
        if let Some(old_entry) = self.entries.remove(&area_id) {
            self.tree.remove(&old_entry);
        }

        let entry = SpatialEntry::new(area_id, rect.inflate(self.margin));
        self.tree.insert(entry);
        self.entries.insert(area_id, entry);
    }

    pub fn remove(&mut self, area_id: AreaId) -> bool {
        if let Some(entry) = self.entries.remove(&area_id) {
            self.tree.remove(&entry);
            true
        } else {
            false
        }
    }

    /// Ids of areas whose hit box contains the point.
    pub fn query_point(&self, x: f32, y: f32) -> Vec<AreaId> {
        let point_envelope = AABB::from_point([x, y]);

        self.tree
            .locate_in_envelope_intersecting(&point_envelope)
            .filter(|entry| entry.bounds.contains(x, y))
            .map(|entry| entry.area_id)
            .collect()
    }

    pub fn rebuild<I>(&mut self, areas: I)
    where
        I: Iterator<Item = (AreaId, Rect)>,
    {
        let entries: Vec<SpatialEntry> = areas
            .map(|(id, rect)| SpatialEntry::new(id, rect.inflate(self.margin)))
            .collect();

        self.entries = entries.iter().map(|e| (e.area_id, *e)).collect();
        self.tree = RTree::bulk_load(entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
