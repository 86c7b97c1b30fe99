//! Store floor geometry.
//!
//! Fixed 1000 × 700 canvas with entrance/exit at the bottom centre, checkout
//! just above it, the warehouse in the top-right corner, and one shelf per
//! selected brand arranged on a near-square grid between fixed margins.
//! Everything is in pixels; agents navigate these points directly (straight
//! lines, no pathfinding).

use shop_core::Point;

pub const CANVAS_WIDTH:  f32 = 1_000.0;
pub const CANVAS_HEIGHT: f32 = 700.0;

/// Half-extents of the jitter box applied to shelf targets (±20 px).
pub const SHELF_JITTER_HALF: (f32, f32) = (20.0, 20.0);
/// Half-extents of the jitter box applied to checkout targets (±30, ±15 px).
pub const CHECKOUT_JITTER_HALF: (f32, f32) = (30.0, 15.0);

// ── StockBand ─────────────────────────────────────────────────────────────────

/// Coarse stock-level classification used by renderers for shelf colouring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockBand {
    /// More than 3 000 units.
    High,
    /// 1 001 – 3 000 units.
    Medium,
    /// 1 000 units or fewer.
    Low,
}

impl StockBand {
    pub fn from_level(level: u32) -> Self {
        if level > 3_000 {
            StockBand::High
        } else if level > 1_000 {
            StockBand::Medium
        } else {
            StockBand::Low
        }
    }
}

impl std::fmt::Display for StockBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            StockBand::High => "high",
            StockBand::Medium => "medium",
            StockBand::Low => "low",
        };
        write!(f, "{label}")
    }
}

// ── FloorPlan ─────────────────────────────────────────────────────────────────

/// Fixed landmark positions plus one shelf per selection slot.
///
/// Rebuilt whenever the brand selection changes (shelf count and grid shape
/// depend on how many brands are on display).
#[derive(Debug, Clone)]
pub struct FloorPlan {
    pub width:  f32,
    pub height: f32,

    pub entrance:  Point,
    pub exit:      Point,
    pub checkout:  Point,
    pub warehouse: Point,

    /// Customers in state `exiting` are retired once their y-position
    /// reaches this line.
    pub exit_boundary_y: f32,

    /// Shelf centre per selection slot.
    shelves: Vec<Point>,
}

impl FloorPlan {
    /// Lay out `slot_count` shelves on a `ceil(sqrt(n))`-column grid.
    pub fn new(slot_count: usize) -> Self {
        let door = Point::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT - 30.0);

        Self {
            width:  CANVAS_WIDTH,
            height: CANVAS_HEIGHT,

            entrance:  door,
            exit:      door,
            checkout:  Point::new(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT - 150.0),
            warehouse: Point::new(CANVAS_WIDTH - 100.0, 50.0),

            exit_boundary_y: CANVAS_HEIGHT - 20.0,

            shelves: shelf_grid(slot_count),
        }
    }

    /// Shelf centre for a selection slot; `None` when the slot is out of
    /// range (e.g. an agent outliving a selection change mid-reset).
    pub fn shelf(&self, slot: usize) -> Option<Point> {
        self.shelves.get(slot).copied()
    }

    pub fn shelf_count(&self) -> usize {
        self.shelves.len()
    }
}

/// Grid positions for `count` shelves between fixed margins.
fn shelf_grid(count: usize) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }

    let cols = (count as f32).sqrt().ceil() as usize;
    let rows = count.div_ceil(cols);

    let start_x = 150.0;
    let start_y = 150.0;
    let spacing_x = (CANVAS_WIDTH - 300.0) / (cols.saturating_sub(1)).max(1) as f32;
    let spacing_y = (CANVAS_HEIGHT - 400.0) / (rows.saturating_sub(1)).max(1) as f32;

    (0..count)
        .map(|i| {
            let col = (i % cols) as f32;
            let row = (i / cols) as f32;
            Point::new(start_x + col * spacing_x, start_y + row * spacing_y)
        })
        .collect()
}
