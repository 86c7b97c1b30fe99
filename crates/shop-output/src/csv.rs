//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `frame_summaries.csv`
//! - `stock_levels.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{FrameSummaryRow, OutputResult, StockLevelRow};

/// Writes replay output to two CSV files.
pub struct CsvWriter {
    frames:   Writer<File>,
    stock:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut frames = Writer::from_path(dir.join("frame_summaries.csv"))?;
        frames.write_record(["tick", "day_in_month", "customers", "employees", "total_spawned"])?;

        let mut stock = Writer::from_path(dir.join("stock_levels.csv"))?;
        stock.write_record(["day_in_month", "brand_id", "slot", "level", "band"])?;

        Ok(Self {
            frames,
            stock,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_frame_summary(&mut self, row: &FrameSummaryRow) -> OutputResult<()> {
        self.frames.write_record(&[
            row.tick.to_string(),
            row.day_in_month.to_string(),
            row.customers.to_string(),
            row.employees.to_string(),
            row.total_spawned.to_string(),
        ])?;
        Ok(())
    }

    fn write_stock_levels(&mut self, rows: &[StockLevelRow]) -> OutputResult<()> {
        for row in rows {
            self.stock.write_record(&[
                row.day_in_month.to_string(),
                row.brand_id.to_string(),
                row.slot.to_string(),
                row.level.to_string(),
                row.band.clone(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.frames.flush()?;
        self.stock.flush()?;
        Ok(())
    }
}
