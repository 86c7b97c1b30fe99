//! Agent layer: the people on the shop floor.
//!
//! | Module       | Contents                                              |
//! |--------------|-------------------------------------------------------|
//! | `allocation` | Per-day sales allocation against the daily target     |
//! | `customer`   | Customer state machine and pool                       |
//! | `employee`   | Restocking-employee state machine and pool            |
//!
//! # Why this exists
//!
//! Agents are pure visualization mechanics: nothing they do feeds back into
//! the authoritative dataset.  Keeping them apart from the engine lets the
//! pools be exercised directly in tests — feed a floor plan, a ledger, and a
//! seeded RNG, step the pool, and assert on positions and purchases without
//! ever standing up the full replay loop.

pub mod allocation;
pub mod customer;
pub mod employee;


pub use allocation::DailyAllocator;
pub use customer::{Customer, CustomerCtx, CustomerPool, CustomerState};
pub use employee::{Employee, EmployeeCtx, EmployeePool, EmployeeState};
