//! CSV dataset loaders.
//!
//! # CSV formats
//!
//! One file per record kind, headers matching the record field names:
//!
//! ```csv
//! day,date,brand,demand,sales,stock_before,stock_after,revenue,stockout,lost_sales,price_per_unit,season,season_type,quarter,festival,festival_multiplier
//! 0,2024-01-01,NIKE,120,118,4000,3882,11800.0,0,0,100.0,Winter,High Season,Q1,,1.0
//! ```
//!
//! ```csv
//! month,brand,total_sales,total_revenue,avg_stock,stockout_days
//! 1,NIKE,3500,350000.0,3100.5,0
//! ```
//!
//! The config file carries the brand name alongside the config columns:
//!
//! ```csv
//! brand,initial_stock,restock_days,restock_quantity,reorder_point,reorder_quantity,demand_multiplier
//! NIKE,4000,25,500,200,500,1.0
//! ```
//!
//! Every loader has a `_csv` (path) and `_reader` (any `io::Read`) variant;
//! tests pass a `std::io::Cursor`.  Loaded vectors are handed to
//! [`DatasetBuilder`][crate::DatasetBuilder] for interning and indexing.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::record::{BrandConfig, DailyRecord, MonthlyRecord, RestockEvent};
use crate::{DataError, DataResult};

// ── Generic row reader ────────────────────────────────────────────────────────

fn read_rows<T: for<'de> Deserialize<'de>, R: Read>(reader: R) -> DataResult<Vec<T>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize::<T>()
        .map(|row| row.map_err(|e| DataError::Parse(e.to_string())))
        .collect()
}

fn open(path: &Path) -> DataResult<std::fs::File> {
    std::fs::File::open(path).map_err(DataError::Io)
}

// ── Daily records ─────────────────────────────────────────────────────────────

/// Load day-granularity ground truth rows from a CSV file.
pub fn load_daily_csv(path: &Path) -> DataResult<Vec<DailyRecord>> {
    load_daily_reader(open(path)?)
}

/// Like [`load_daily_csv`] but accepts any `Read` source.
pub fn load_daily_reader<R: Read>(reader: R) -> DataResult<Vec<DailyRecord>> {
    read_rows(reader)
}

// ── Monthly records ───────────────────────────────────────────────────────────

/// Load month-aggregate rows from a CSV file.
pub fn load_monthly_csv(path: &Path) -> DataResult<Vec<MonthlyRecord>> {
    load_monthly_reader(open(path)?)
}

/// Like [`load_monthly_csv`] but accepts any `Read` source.
pub fn load_monthly_reader<R: Read>(reader: R) -> DataResult<Vec<MonthlyRecord>> {
    read_rows(reader)
}

// ── Restock events ────────────────────────────────────────────────────────────

/// Load restock-event rows from a CSV file.
pub fn load_restocks_csv(path: &Path) -> DataResult<Vec<RestockEvent>> {
    load_restocks_reader(open(path)?)
}

/// Like [`load_restocks_csv`] but accepts any `Read` source.
pub fn load_restocks_reader<R: Read>(reader: R) -> DataResult<Vec<RestockEvent>> {
    read_rows(reader)
}

// ── Brand configs ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct ConfigRow {
    brand:             String,
    initial_stock:     u32,
    restock_days:      u32,
    restock_quantity:  u32,
    reorder_point:     u32,
    reorder_quantity:  u32,
    demand_multiplier: f32,
}

/// Load per-brand configs from a CSV file.
pub fn load_configs_csv(path: &Path) -> DataResult<Vec<(String, BrandConfig)>> {
    load_configs_reader(open(path)?)
}

/// Like [`load_configs_csv`] but accepts any `Read` source.
pub fn load_configs_reader<R: Read>(reader: R) -> DataResult<Vec<(String, BrandConfig)>> {
    let rows: Vec<ConfigRow> = read_rows(reader)?;
    Ok(rows
        .into_iter()
        .map(|r| {
            (
                r.brand,
                BrandConfig {
                    initial_stock:     r.initial_stock,
                    restock_days:      r.restock_days,
                    restock_quantity:  r.restock_quantity,
                    reorder_point:     r.reorder_point,
                    reorder_quantity:  r.reorder_quantity,
                    demand_multiplier: r.demand_multiplier,
                },
            )
        })
        .collect())
}
