//! The replay engine proper.
//!
//! # Tick loop
//!
//! The host calls [`ReplayEngine::tick`] once per render frame with the
//! current wall-clock timestamp.  A running tick does, in order:
//!
//! 1. **Day boundary** — when a full day duration has elapsed, advance the
//!    day: reset the allocator, rewrite the ledger from the authoritative
//!    starting stock, and dispatch one employee per recorded stock increase.
//!    Advancing past the month's last day stops playback instead.
//! 2. **Customer spawn** — when the spawn interval has elapsed and the floor
//!    is under the concurrency cap, spawn one customer for a weighted-drawn
//!    in-stock brand.
//! 3. **Pool advance** — step every customer, then every employee.
//! 4. **Frame** — snapshot the floor and hand it to the observer.
//!
//! A paused (or month-complete) tick is a no-op: no movement, no spawns, no
//! frame.
//!
//! # Determinism
//!
//! State changes only inside `tick` and the control-surface methods, and all
//! randomness flows through the single seeded RNG, so identical (dataset,
//! config, timestamp sequence) triples replay identically.

use shop_agents::{CustomerCtx, CustomerPool, DailyAllocator, EmployeeCtx, EmployeePool};
use shop_core::{Millis, ReplayConfig, SimRng};
use shop_data::Dataset;
use shop_ledger::StockLedger;
use shop_world::{BrandSelection, FloorPlan, StockBand, WorldState};

use crate::controller::{DayAdvance, TimeController};
use crate::error::EngineResult;
use crate::frame::{CustomerView, EmployeeView, Frame, ShelfStock};
use crate::observer::EngineObserver;
use crate::spawner::SpawnScheduler;

/// The whole replay: world, floor, agents, and playback state.
pub struct ReplayEngine {
    config:    ReplayConfig,
    world:     WorldState,
    selection: BrandSelection,
    plan:      FloorPlan,

    ledger:    StockLedger,
    allocator: DailyAllocator,
    customers: CustomerPool,
    employees: EmployeePool,

    controller: TimeController,
    spawner:    SpawnScheduler,
    rng:        SimRng,

    /// Today's sales target per brand, indexed by `BrandId` over the roster.
    today_targets: Vec<u32>,
}

impl ReplayEngine {
    pub(crate) fn from_parts(
        dataset: Dataset,
        config: ReplayConfig,
        selection: BrandSelection,
        viewed_month: usize,
    ) -> EngineResult<Self> {
        let brand_count = dataset.roster().len();
        let mut world = WorldState::new(dataset);
        world.set_viewed_month(viewed_month);

        let plan = FloorPlan::new(selection.len());
        let mut spawner = SpawnScheduler::default();
        spawner.retune(&config.spawn, &selection, &world);

        let seed = config.seed;
        let mut engine = Self {
            config,
            world,
            plan,
            ledger:    StockLedger::new(brand_count),
            allocator: DailyAllocator::new(brand_count),
            customers: CustomerPool::new(brand_count),
            employees: EmployeePool::new(),
            controller: TimeController::new(),
            spawner,
            rng: SimRng::new(seed),
            today_targets: vec![0; brand_count],
            selection,
        };
        engine.load_day(1);
        Ok(engine)
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Advance the replay by one tick at wall-clock time `now`.
    pub fn tick<O: EngineObserver>(&mut self, now: Millis, observer: &mut O) {
        if !self.controller.is_running() {
            return;
        }

        if self.controller.day_elapsed(now, self.config.day_duration_ms) {
            match self.controller.advance(self.world.days_per_month()) {
                DayAdvance::MonthComplete => {
                    observer.on_month_complete();
                    return;
                }
                DayAdvance::Advanced(day) => {
                    self.load_day(day);
                    let dispatched_from = self.employees.len();
                    self.dispatch_restocks(day);
                    observer.on_day_started(day);
                    for employee in &self.employees.employees()[dispatched_from..] {
                        observer.on_employee_dispatched(employee);
                    }
                }
            }
        }

        self.spawn_customer(now, observer);

        let mut customer_ctx = CustomerCtx {
            plan:          &self.plan,
            selection:     &self.selection,
            arrive_radius: self.config.arrive_radius,
            sales_targets: &self.today_targets,
            allocator:     &mut self.allocator,
            ledger:        &mut self.ledger,
            rng:           &mut self.rng,
        };
        self.customers.advance(&mut customer_ctx);

        let mut employee_ctx = EmployeeCtx {
            plan:          &self.plan,
            arrive_radius: self.config.arrive_radius,
            restock_ticks: self.config.restock_ticks,
            ledger:        &mut self.ledger,
        };
        self.employees.advance(&mut employee_ctx);

        let frame = self.frame();
        observer.on_frame(&frame);
    }

    /// Day-boundary bookkeeping: allocation and targets restart from the
    /// day's records and the ledger is rewritten from the authoritative
    /// starting stock.  Shared by the ticked day advance and by
    /// reset/seek — neither path may leave stale targets behind.
    fn load_day(&mut self, day_in_month: u32) {
        self.allocator.reset();
        self.today_targets.fill(0);

        for &brand in self.selection.ids() {
            let day_plan = self.world.day_plan(day_in_month, brand);
            self.ledger.set_level(brand, day_plan.starting_stock);
            if let Some(target) = self.today_targets.get_mut(brand.index()) {
                *target = day_plan.sales_target;
            }
        }
    }

    /// Dispatch one employee per recorded stock increase entering this day.
    ///
    /// Only the ticked day advance calls this: a seek or reset yields an
    /// empty floor, so the delivery animation is skipped and the increase
    /// simply appears when the next boundary reloads the ledger from the
    /// authoritative records.
    fn dispatch_restocks(&mut self, day_in_month: u32) {
        for (slot, &brand) in self.selection.ids().iter().enumerate() {
            if let Some(delta) = self.world.restock_delta(day_in_month, brand) {
                if let Some(shelf) = self.plan.shelf(slot) {
                    self.employees.spawn(
                        brand,
                        BrandSelection::color_of_slot(slot),
                        delta,
                        self.plan.warehouse,
                        shelf,
                        self.config.employee_speed,
                    );
                }
            }
        }
    }

    fn spawn_customer<O: EngineObserver>(&mut self, now: Millis, observer: &mut O) {
        if self.customers.len() >= self.spawner.cap() || !self.spawner.due(now) {
            return;
        }
        let Some(brand) = self.spawner.pick_brand(&self.selection, &self.ledger, &mut self.rng)
        else {
            return;
        };

        let slot = self.selection.slot_of(brand).unwrap_or(0);
        let (min, max) = (self.config.customer_speed_min, self.config.customer_speed_max);
        let speed = if max > min { self.rng.gen_range(min..max) } else { min };

        self.customers.spawn(
            brand,
            BrandSelection::color_of_slot(slot),
            self.plan.entrance,
            speed,
        );
        if let Some(customer) = self.customers.customers().last() {
            observer.on_customer_spawned(customer);
        }
    }

    // ── Control surface ───────────────────────────────────────────────────

    pub fn play(&mut self) {
        self.controller.resume();
    }

    pub fn pause(&mut self) {
        self.controller.pause();
    }

    pub fn toggle(&mut self) {
        if self.controller.is_running() {
            self.pause();
        } else {
            self.play();
        }
    }

    /// Back to day 1 of the viewed month: agents gone, counters zeroed, RNG
    /// reseeded.  The next run of the month replays identically.
    pub fn reset(&mut self) {
        self.controller.reset();
        self.customers.clear();
        self.customers.reset_stats();
        self.employees.clear();
        self.spawner.reset();
        self.rng = SimRng::new(self.config.seed);
        self.load_day(1);
    }

    /// Jump to a day within the viewed month (clamped).  Live agents are
    /// dropped and the ledger restarts from that day's authoritative stock;
    /// spawn statistics survive.
    pub fn seek(&mut self, day_in_month: u32) {
        self.controller.seek(day_in_month, self.world.days_per_month());
        self.customers.clear();
        self.employees.clear();
        self.spawner.reset();
        self.load_day(self.controller.day_in_month());
    }

    /// Switch the viewed month window; implies a full reset.
    pub fn set_viewed_month(&mut self, index: usize) {
        self.world.set_viewed_month(index);
        self.spawner.retune(&self.config.spawn, &self.selection, &self.world);
        self.reset();
    }

    /// Replace the displayed brand subset; implies a full reset (shelf count
    /// and colours depend on the selection).
    pub fn set_selected_brands(&mut self, names: &[String]) -> EngineResult<()> {
        let selection = BrandSelection::from_names(self.world.dataset().roster(), names)?;
        self.plan = FloorPlan::new(selection.len());
        self.selection = selection;
        self.spawner.retune(&self.config.spawn, &self.selection, &self.world);
        self.reset();
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn day_in_month(&self) -> u32 {
        self.controller.day_in_month()
    }

    pub fn is_running(&self) -> bool {
        self.controller.is_running()
    }

    pub fn is_month_complete(&self) -> bool {
        self.controller.is_month_complete()
    }

    pub fn world(&self) -> &WorldState {
        &self.world
    }

    pub fn selection(&self) -> &BrandSelection {
        &self.selection
    }

    pub fn floor_plan(&self) -> &FloorPlan {
        &self.plan
    }

    pub fn ledger(&self) -> &StockLedger {
        &self.ledger
    }

    pub fn customers(&self) -> &CustomerPool {
        &self.customers
    }

    pub fn employees(&self) -> &EmployeePool {
        &self.employees
    }

    /// Snapshot the current floor as a render frame.
    pub fn frame(&self) -> Frame {
        let customers = self
            .customers
            .customers()
            .iter()
            .map(|c| CustomerView {
                id:    c.id,
                brand: c.brand,
                pos:   c.pos,
                state: c.state,
                color: c.color,
            })
            .collect();

        let employees = self
            .employees
            .employees()
            .iter()
            .map(|e| EmployeeView {
                id:       e.id,
                brand:    e.brand,
                pos:      e.pos,
                state:    e.state,
                color:    e.color,
                quantity: e.quantity,
            })
            .collect();

        let shelves = self
            .selection
            .ids()
            .iter()
            .enumerate()
            .filter_map(|(slot, &brand)| {
                let shelf = self.plan.shelf(slot)?;
                let level = self.ledger.level(brand);
                Some(ShelfStock {
                    slot,
                    brand,
                    shelf,
                    level,
                    band:  StockBand::from_level(level),
                    color: BrandSelection::color_of_slot(slot),
                })
            })
            .collect();

        Frame {
            day_in_month:   self.controller.day_in_month(),
            running:        self.controller.is_running(),
            month_complete: self.controller.is_month_complete(),
            customers,
            employees,
            shelves,
            total_spawned: self.customers.total_spawned(),
        }
    }
}

/// Fluent constructor for [`ReplayEngine`].
pub struct EngineBuilder {
    dataset:      Dataset,
    config:       ReplayConfig,
    brands:       Option<Vec<String>>,
    viewed_month: usize,
}

impl EngineBuilder {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            config: ReplayConfig::default(),
            brands: None,
            viewed_month: 0,
        }
    }

    pub fn config(mut self, config: ReplayConfig) -> Self {
        self.config = config;
        self
    }

    /// Display only these brands (roster order otherwise).
    pub fn brands<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.brands = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn viewed_month(mut self, index: usize) -> Self {
        self.viewed_month = index;
        self
    }

    pub fn build(self) -> EngineResult<ReplayEngine> {
        let roster = self.dataset.roster();
        if roster.is_empty() {
            return Err(crate::error::EngineError::EmptyRoster);
        }

        let selection = match &self.brands {
            Some(names) => BrandSelection::from_names(roster, names)?,
            None => {
                let all = roster.iter().map(|(id, _)| id).collect();
                BrandSelection::from_ids(roster.len(), all)
            }
        };

        ReplayEngine::from_parts(self.dataset, self.config, selection, self.viewed_month)
    }
}
