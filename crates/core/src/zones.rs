//! Drop zones (bins) along the bottom of the play field.

use crate::types::{Category, Point, Rect, BIN_HEIGHT, BIN_LEFT, BIN_STRIDE, BIN_TOP, BIN_WIDTH};

/// A bin accepting letters of one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropZone {
    pub category: Category,
    pub rect: Rect,
}

impl DropZone {
    pub const fn new(category: Category, rect: Rect) -> Self {
        Self { category, rect }
    }

    pub fn contains(&self, p: Point) -> bool {
        self.rect.contains(p)
    }
}

/// Standard layout: one bin per category, left to right in declaration order.
pub fn default_zones() -> [DropZone; 3] {
    let mut zones = [DropZone::new(Category::Toys, Rect::default()); 3];
    for (i, category) in Category::ALL.into_iter().enumerate() {
        let x = BIN_LEFT + BIN_STRIDE * i as i32;
        zones[i] = DropZone::new(category, Rect::new(x, BIN_TOP, BIN_WIDTH, BIN_HEIGHT));
    }
    zones
}

/// First zone (in slice order) containing `p`.
///
/// Overlapping zones resolve to the earliest one.
pub fn zone_at(zones: &[DropZone], p: Point) -> Option<&DropZone> {
    zones.iter().find(|z| z.contains(p))
}
