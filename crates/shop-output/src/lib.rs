//! Replay output writers.
//!
//! Records a running replay to disk for offline analysis: one per-tick floor
//! summary plus per-day shelf stock levels.
//!
//! | File                  | Contents                                    |
//! |-----------------------|---------------------------------------------|
//! | `frame_summaries.csv` | tick, day, agent counts, spawn total        |
//! | `stock_levels.csv`    | per-brand stock at each day boundary        |
//!
//! # Usage
//!
//! ```rust,ignore
//! use shop_output::{CsvWriter, ReplayOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = ReplayOutputObserver::new(writer);
//! loop {
//!     engine.tick(now(), &mut obs);
//! }
//! let mut writer = obs.into_writer();
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::ReplayOutputObserver;
pub use row::{FrameSummaryRow, StockLevelRow};
pub use writer::OutputWriter;
