//! Engine event hooks.
//!
//! Hosts plug a renderer, a recorder, or test instrumentation into the tick
//! loop by implementing `EngineObserver`.  Every method has a no-op default,
//! so implementors override only what they care about.

use shop_agents::{Customer, Employee};

use crate::frame::Frame;

pub trait EngineObserver {
    /// A new simulated day began (also fired for the initial day after a
    /// seek).
    fn on_day_started(&mut self, _day_in_month: u32) {}

    /// The viewed month's last day finished; playback stopped.
    fn on_month_complete(&mut self) {}

    /// A customer entered the store.
    fn on_customer_spawned(&mut self, _customer: &Customer) {}

    /// An employee left the warehouse with a delivery.
    fn on_employee_dispatched(&mut self, _employee: &Employee) {}

    /// End of tick; the frame is the engine's render snapshot.
    fn on_frame(&mut self, _frame: &Frame) {}
}

/// Observer that ignores everything.
pub struct NoopObserver;

impl EngineObserver for NoopObserver {}
