//! `shop-data` — the external, read-only dataset the engine replays.
//!
//! The upstream simulation service produces day-granularity ground truth
//! (one [`DailyRecord`] per (day, brand)), month aggregates
//! ([`MonthlyRecord`]), restock events, and per-brand configuration.  A
//! data-fetch collaborator delivers all of it fully resident in memory
//! before the engine starts; this crate gives it typed shape, interns brand
//! names to dense [`BrandId`][shop_core::BrandId]s, and indexes the daily
//! records for O(1) (day, brand) lookup.
//!
//! Nothing here is ever mutated after [`DatasetBuilder::build`] — the replay
//! engine only approximates these numbers visually, it never writes back.

pub mod dataset;
pub mod error;
pub mod loader;
pub mod record;
pub mod roster;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use dataset::{Dataset, DatasetBuilder};
pub use error::{DataError, DataResult};
pub use loader::{
    load_configs_csv, load_configs_reader, load_daily_csv, load_daily_reader,
    load_monthly_csv, load_monthly_reader, load_restocks_csv, load_restocks_reader,
};
pub use record::{BrandConfig, DailyRecord, MonthlyRecord, RestockEvent};
pub use roster::BrandRoster;
