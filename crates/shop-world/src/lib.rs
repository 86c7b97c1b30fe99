//! `shop-world` — the static world the agents move through.
//!
//! Three concerns live here, all read-only from the tick loop's perspective:
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`lookup`]    | `WorldState` — maps (viewed month, day-in-month) onto   |
//! |               | the absolute day-indexed dataset and derives per-brand  |
//! |               | starting stock, target stock, and daily sales targets   |
//! | [`layout`]    | `FloorPlan` — entrance/checkout/warehouse positions and |
//! |               | the shelf grid, plus jitter boxes and stock bands       |
//! | [`selection`] | `BrandSelection` — the currently viewed brand subset    |
//! |               | and its display slots/colors                            |

pub mod layout;
pub mod lookup;
pub mod selection;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use layout::{FloorPlan, StockBand, CHECKOUT_JITTER_HALF, SHELF_JITTER_HALF};
pub use lookup::{DayPlan, WorldState};
pub use selection::BrandSelection;
