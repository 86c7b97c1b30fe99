//! Replay engine for the store-floor visualization.
//!
//! | Module       | Contents                                            |
//! |--------------|-----------------------------------------------------|
//! | `controller` | Day cadence and playback state                      |
//! | `spawner`    | Customer spawn scheduler and weighted brand draw    |
//! | `engine`     | `ReplayEngine`: tick loop and control surface       |
//! | `frame`      | Per-tick render snapshot                            |
//! | `observer`   | Event hooks for renderers, recorders, tests         |
//! | `error`      | Engine-level error type                             |
//!
//! The engine is single-threaded and host-driven: the embedding application
//! calls [`ReplayEngine::tick`] once per render frame with a wall-clock
//! timestamp and draws the [`Frame`] it receives through its observer.

pub mod controller;
pub mod engine;
pub mod error;
pub mod frame;
pub mod observer;
pub mod spawner;


pub use controller::{DayAdvance, TimeController};
pub use engine::{EngineBuilder, ReplayEngine};
pub use error::{EngineError, EngineResult};
pub use frame::{CustomerView, EmployeeView, Frame, ShelfStock};
pub use observer::{EngineObserver, NoopObserver};
pub use spawner::SpawnScheduler;
