//! `Dataset` — the fully-resident, indexed view of one simulation run.

use rustc_hash::FxHashMap;

use shop_core::BrandId;

use crate::record::{BrandConfig, DailyRecord, MonthlyRecord, RestockEvent};
use crate::roster::BrandRoster;
use crate::{DataError, DataResult};

// ── Dataset ───────────────────────────────────────────────────────────────────

/// Immutable, indexed container for everything the engine replays.
///
/// Construct via [`DatasetBuilder`].  All brand names from every source are
/// interned into one [`BrandRoster`]; daily and monthly records are indexed
/// by `(day | month, BrandId)` for O(1) lookup during ticks.
#[derive(Debug)]
pub struct Dataset {
    roster:  BrandRoster,
    configs: Vec<Option<BrandConfig>>,

    daily:       Vec<DailyRecord>,
    daily_index: FxHashMap<(u32, BrandId), usize>,

    monthly:       Vec<MonthlyRecord>,
    monthly_index: FxHashMap<(u32, BrandId), usize>,

    restocks: Vec<RestockEvent>,

    /// Total days in the upstream run (not the per-month window).
    simulation_days: u32,
    /// Distinct calendar months present in the monthly data, ascending.
    months: Vec<u32>,
}

impl Dataset {
    pub fn roster(&self) -> &BrandRoster {
        &self.roster
    }

    pub fn brand_count(&self) -> usize {
        self.roster.len()
    }

    /// Ground-truth record for `(day, brand)`, if the upstream run produced
    /// one.  Absence is normal (sparse data) and handled by lookup fallbacks.
    pub fn daily(&self, day: u32, brand: BrandId) -> Option<&DailyRecord> {
        self.daily_index
            .get(&(day, brand))
            .map(|&i| &self.daily[i])
    }

    /// Month aggregate for `(calendar month, brand)`.
    pub fn monthly(&self, month: u32, brand: BrandId) -> Option<&MonthlyRecord> {
        self.monthly_index
            .get(&(month, brand))
            .map(|&i| &self.monthly[i])
    }

    /// Total units sold in `month` by `brand`; 0 when no aggregate exists.
    pub fn monthly_sales(&self, month: u32, brand: BrandId) -> u64 {
        self.monthly(month, brand).map_or(0, |m| m.total_sales)
    }

    /// Brand configuration, if supplied.
    pub fn config(&self, brand: BrandId) -> Option<&BrandConfig> {
        self.configs.get(brand.index()).and_then(Option::as_ref)
    }

    /// All restock events whose absolute day lies in `[start_day, end_day)`.
    pub fn restocks_in(&self, start_day: u32, end_day: u32) -> impl Iterator<Item = &RestockEvent> {
        self.restocks
            .iter()
            .filter(move |e| e.day >= start_day && e.day < end_day)
    }

    /// Distinct calendar months in the dataset, ascending.
    pub fn months(&self) -> &[u32] {
        &self.months
    }

    pub fn simulation_days(&self) -> u32 {
        self.simulation_days
    }
}

// ── DatasetBuilder ────────────────────────────────────────────────────────────

/// Assembles and validates a [`Dataset`] from loaded record vectors.
///
/// ```rust,ignore
/// let dataset = DatasetBuilder::new(simulation_days)
///     .daily(daily_rows)
///     .monthly(monthly_rows)
///     .configs(config_rows)
///     .restocks(restock_rows)
///     .build()?;
/// ```
pub struct DatasetBuilder {
    simulation_days: u32,
    daily:           Vec<DailyRecord>,
    monthly:         Vec<MonthlyRecord>,
    configs:         Vec<(String, BrandConfig)>,
    restocks:        Vec<RestockEvent>,
}

impl DatasetBuilder {
    pub fn new(simulation_days: u32) -> Self {
        Self {
            simulation_days,
            daily:    Vec::new(),
            monthly:  Vec::new(),
            configs:  Vec::new(),
            restocks: Vec::new(),
        }
    }

    pub fn daily(mut self, rows: Vec<DailyRecord>) -> Self {
        self.daily = rows;
        self
    }

    pub fn monthly(mut self, rows: Vec<MonthlyRecord>) -> Self {
        self.monthly = rows;
        self
    }

    pub fn configs(mut self, rows: Vec<(String, BrandConfig)>) -> Self {
        self.configs = rows;
        self
    }

    pub fn restocks(mut self, rows: Vec<RestockEvent>) -> Self {
        self.restocks = rows;
        self
    }

    /// Intern all brand names, build the (day, brand) / (month, brand)
    /// indexes, and validate the month set.
    ///
    /// Duplicate (day, brand) or (month, brand) rows keep the *last*
    /// occurrence, matching the upstream service's overwrite-on-regenerate
    /// behavior.
    pub fn build(self) -> DataResult<Dataset> {
        if self.simulation_days == 0 {
            return Err(DataError::Config("simulation_days must be positive".into()));
        }

        let mut roster = BrandRoster::new();

        // ── Daily index ───────────────────────────────────────────────────
        let mut daily_index = FxHashMap::default();
        for (i, row) in self.daily.iter().enumerate() {
            let brand = roster.intern(&row.brand);
            daily_index.insert((row.day, brand), i);
        }

        // ── Monthly index + distinct month list ───────────────────────────
        let mut monthly_index = FxHashMap::default();
        let mut months: Vec<u32> = Vec::new();
        for (i, row) in self.monthly.iter().enumerate() {
            let brand = roster.intern(&row.brand);
            monthly_index.insert((row.month, brand), i);
            if !months.contains(&row.month) {
                months.push(row.month);
            }
        }
        months.sort_unstable();

        if months.is_empty() {
            return Err(DataError::Config(
                "monthly data contains no months — nothing to view".into(),
            ));
        }

        // ── Configs by BrandId ────────────────────────────────────────────
        for (name, _) in &self.configs {
            roster.intern(name);
        }
        for event in &self.restocks {
            roster.intern(&event.brand);
        }

        let mut configs: Vec<Option<BrandConfig>> = vec![None; roster.len()];
        for (name, config) in self.configs {
            // Interned above, so the lookup cannot miss.
            if let Some(id) = roster.id_of(&name) {
                configs[id.index()] = Some(config);
            }
        }

        Ok(Dataset {
            roster,
            configs,
            daily: self.daily,
            daily_index,
            monthly: self.monthly,
            monthly_index,
            restocks: self.restocks,
            simulation_days: self.simulation_days,
            months,
        })
    }
}
