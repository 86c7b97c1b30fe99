//! minimart — smallest runnable replay of the shopfloor engine.
//!
//! Replays one synthetic 30-day month for a two-brand corner store and
//! records the run to CSV.  Swap the embedded tables for a real exported
//! dataset (daily, monthly, configs, restocks CSVs) to replay production
//! data; the engine is the same.

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use shop_core::{Millis, ReplayConfig};
use shop_data::loader::{load_configs_reader, load_monthly_reader};
use shop_data::record::DailyRecord;
use shop_data::DatasetBuilder;
use shop_engine::{EngineBuilder, EngineObserver, Frame, ReplayEngine};
use shop_output::{CsvWriter, OutputWriter, ReplayOutputObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:            u64 = 42;
const SIM_DAYS:        u32 = 30;
const TICK_STEP_MS:    f64 = 16.0; // ~60 fps host callback
const MAX_TICKS:       u64 = 20_000;
const DAY_DURATION_MS: f64 = 2_000.0;

// ── Embedded tables ───────────────────────────────────────────────────────────

const MONTHLY_CSV: &str = "\
month,brand,total_sales,total_revenue,avg_stock,stockout_days\n\
1,NIKE,3600,432000.0,3400.0,0\n\
1,ADIDAS,1800,162000.0,2100.0,0\n\
";

const CONFIGS_CSV: &str = "\
brand,initial_stock,restock_days,restock_quantity,reorder_point,reorder_quantity,demand_multiplier\n\
NIKE,5000,25,500,200,500,1.0\n\
ADIDAS,2500,25,500,200,500,1.0\n\
";

/// Daily ground truth for January: NIKE sells 120/day with a +800 delivery
/// landing on day 15, ADIDAS sells 60/day.
fn synthetic_daily() -> Vec<DailyRecord> {
    let mut rows = Vec::new();
    let mut nike_stock = 5_000u32;
    let mut adidas_stock = 2_500u32;

    for day in 0..SIM_DAYS {
        let date = format!("2024-01-{:02}", day + 1);
        for (brand, stock, sales, restock) in [
            ("NIKE", &mut nike_stock, 120u32, if day == 14 { 800 } else { 0 }),
            ("ADIDAS", &mut adidas_stock, 60u32, 0),
        ] {
            let stock_before = *stock;
            let stock_after = stock_before - sales + restock;
            rows.push(DailyRecord {
                day,
                date: date.clone(),
                brand: brand.into(),
                demand: sales,
                sales,
                stock_before,
                stock_after,
                revenue: sales as f64 * 100.0,
                stockout: 0,
                lost_sales: 0,
                price_per_unit: 100.0,
                season: "Winter".into(),
                season_type: "High Season".into(),
                quarter: "Q1".into(),
                festival: String::new(),
                festival_multiplier: 1.0,
            });
            *stock = stock_after;
        }
    }
    rows
}

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:      ReplayOutputObserver<W>,
    frames:     usize,
    days:       usize,
    dispatches: usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: ReplayOutputObserver<W>) -> Self {
        Self { inner, frames: 0, days: 0, dispatches: 0 }
    }
}

impl<W: OutputWriter> EngineObserver for CountingObserver<W> {
    fn on_day_started(&mut self, day_in_month: u32) {
        self.days += 1;
        self.inner.on_day_started(day_in_month);
    }

    fn on_month_complete(&mut self) {
        self.inner.on_month_complete();
    }

    fn on_employee_dispatched(&mut self, employee: &shop_agents::Employee) {
        self.dispatches += 1;
        self.inner.on_employee_dispatched(employee);
    }

    fn on_frame(&mut self, frame: &Frame) {
        self.frames += 1;
        self.inner.on_frame(frame);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== minimart — shopfloor replay engine ===");
    println!("Brands: 2  |  Days: {SIM_DAYS}  |  Seed: {SEED}");
    println!();

    // 1. Assemble the dataset from the embedded tables.
    let dataset = DatasetBuilder::new(SIM_DAYS)
        .daily(synthetic_daily())
        .monthly(load_monthly_reader(Cursor::new(MONTHLY_CSV))?)
        .configs(load_configs_reader(Cursor::new(CONFIGS_CSV))?)
        .build()?;
    println!(
        "Dataset: {} brands, {} days, {} month(s)",
        dataset.brand_count(),
        dataset.simulation_days(),
        dataset.months().len()
    );

    // 2. Engine config: 2 s per simulated day, deterministic seed.
    let mut config = ReplayConfig::with_seed(SEED);
    config.day_duration_ms = DAY_DURATION_MS;

    let mut engine: ReplayEngine = EngineBuilder::new(dataset).config(config).build()?;
    println!(
        "Floor: {} shelves for {} selected brands",
        engine.floor_plan().shelf_count(),
        engine.selection().len()
    );
    println!();

    // 3. Set up output.
    std::fs::create_dir_all("output/minimart")?;
    let writer = CsvWriter::new(Path::new("output/minimart"))?;
    let mut obs = CountingObserver::new(ReplayOutputObserver::new(writer));

    // 4. Run the month with synthetic ~60 fps timestamps.
    let t0 = Instant::now();
    let mut ticks = 0u64;
    while engine.is_running() && ticks < MAX_TICKS {
        engine.tick(Millis(ticks as f64 * TICK_STEP_MS), &mut obs);
        ticks += 1;
    }
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }
    let mut writer = obs.inner.into_writer();
    writer.finish()?;

    // 5. Summary.
    println!("Replay complete in {:.3} s", elapsed.as_secs_f64());
    println!("  ticks                : {ticks}");
    println!("  day boundaries       : {}", obs.days);
    println!("  employee dispatches  : {}", obs.dispatches);
    println!("  frame_summaries.csv  : {} rows", obs.frames);
    println!("  customers spawned    : {}", engine.customers().total_spawned());
    println!("  month complete       : {}", engine.is_month_complete());
    println!();

    // 6. Final shelf table.
    let frame = engine.frame();
    println!("{:<10} {:<8} {:<8} {:<8}", "Brand", "Slot", "Stock", "Band");
    println!("{}", "-".repeat(36));
    for shelf in &frame.shelves {
        let name = engine
            .world()
            .dataset()
            .roster()
            .name_of(shelf.brand)
            .unwrap_or("?");
        println!(
            "{:<10} {:<8} {:<8} {:<8}",
            name, shelf.slot, shelf.level, shelf.band
        );
    }

    Ok(())
}
