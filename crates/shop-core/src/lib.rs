//! `shop-core` — foundational types for the `shopfloor` replay engine.
//!
//! This crate is a dependency of every other `shop-*` crate.  It intentionally
//! has no `shop-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `CustomerId`, `EmployeeId`, `BrandId`                 |
//! | [`point`]   | `Point`, Euclidean distance, straight-line stepping   |
//! | [`time`]    | `Millis`, `ReplayConfig`, `SpawnTuning`               |
//! | [`rng`]     | `SimRng` (seeded, weighted draws, positional jitter)  |
//! | [`error`]   | `ShopError`, `ShopResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod error;
pub mod ids;
pub mod point;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{ShopError, ShopResult};
pub use ids::{BrandId, CustomerId, EmployeeId};
pub use point::Point;
pub use rng::SimRng;
pub use time::{Millis, ReplayConfig, SpawnTuning};
