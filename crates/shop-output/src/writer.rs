//! The `OutputWriter` trait implemented by backend writers.

use crate::{FrameSummaryRow, OutputResult, StockLevelRow};

/// Backend-agnostic sink for replay output.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`ReplayOutputObserver::take_error`](crate::ReplayOutputObserver::take_error).
pub trait OutputWriter {
    /// Write one per-tick frame summary row.
    fn write_frame_summary(&mut self, row: &FrameSummaryRow) -> OutputResult<()>;

    /// Write a batch of day-boundary stock rows.
    fn write_stock_levels(&mut self, rows: &[StockLevelRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
