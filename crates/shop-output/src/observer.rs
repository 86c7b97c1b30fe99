//! `ReplayOutputObserver<W>` — bridges `EngineObserver` to an `OutputWriter`.

use shop_engine::{EngineObserver, Frame};

use crate::writer::OutputWriter;
use crate::{FrameSummaryRow, OutputError, StockLevelRow};

/// An [`EngineObserver`] that records frame summaries every tick and shelf
/// stock levels at each day boundary.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After the run, check for errors with
/// [`take_error`][Self::take_error].
pub struct ReplayOutputObserver<W: OutputWriter> {
    writer:     W,
    tick:       u64,
    /// Day whose stock has already been recorded this run.
    last_stock_day: Option<u32>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> ReplayOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            tick: 0,
            last_stock_day: None,
            last_error: None,
        }
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> EngineObserver for ReplayOutputObserver<W> {
    fn on_frame(&mut self, frame: &Frame) {
        if self.last_stock_day != Some(frame.day_in_month) {
            self.last_stock_day = Some(frame.day_in_month);
            let rows: Vec<StockLevelRow> = frame
                .shelves
                .iter()
                .map(|shelf| StockLevelRow {
                    day_in_month: frame.day_in_month,
                    brand_id:     shelf.brand.0,
                    slot:         shelf.slot,
                    level:        shelf.level,
                    band:         shelf.band.to_string(),
                })
                .collect();
            if !rows.is_empty() {
                let result = self.writer.write_stock_levels(&rows);
                self.store_err(result);
            }
        }

        let row = FrameSummaryRow {
            tick:          self.tick,
            day_in_month:  frame.day_in_month,
            customers:     frame.customers.len() as u64,
            employees:     frame.employees.len() as u64,
            total_spawned: frame.total_spawned,
        };
        self.tick += 1;
        let result = self.writer.write_frame_summary(&row);
        self.store_err(result);
    }

    fn on_month_complete(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
