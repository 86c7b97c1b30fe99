//! Plain data row types written by output backends.

/// Per-tick floor summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSummaryRow {
    /// 0-based tick index since recording started.
    pub tick:         u64,
    pub day_in_month: u32,
    pub customers:    u64,
    pub employees:    u64,
    /// Customers spawned since the engine's last full reset.
    pub total_spawned: u64,
}

/// One brand's shelf stock at a day boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockLevelRow {
    pub day_in_month: u32,
    pub brand_id:     u16,
    /// Shelf slot within the brand selection.
    pub slot:  usize,
    pub level: u32,
    /// Stock band label (`high` / `medium` / `low`).
    pub band: String,
}
