//! Day cadence and playback state.
//!
//! Simulated days advance on a fixed wall-clock cadence while playback is
//! running.  The controller only decides *when* a day boundary occurs and
//! *which* day the viewer is on; everything that happens at the boundary
//! (ledger rewrite, allocator reset, employee dispatch) belongs to the
//! engine.

use shop_core::Millis;

/// Outcome of a day-boundary crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayAdvance {
    /// Moved to this (1-based) day within the month.
    Advanced(u32),
    /// The viewed month's last day already played out; playback stops.
    MonthComplete,
}

/// Playback cursor over one viewed month.
#[derive(Debug, Clone)]
pub struct TimeController {
    day_in_month:     u32,
    running:          bool,
    month_complete:   bool,
    last_day_advance: Option<Millis>,
}

impl Default for TimeController {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeController {
    /// Start at day 1, playing.
    pub fn new() -> Self {
        Self {
            day_in_month:     1,
            running:          true,
            month_complete:   false,
            last_day_advance: None,
        }
    }

    /// Current 1-based day within the viewed month.
    pub fn day_in_month(&self) -> u32 {
        self.day_in_month
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_month_complete(&self) -> bool {
        self.month_complete
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Resume playback.  A completed month stays stopped until a seek or
    /// reset rewinds it.
    pub fn resume(&mut self) {
        if !self.month_complete {
            self.running = true;
        }
    }

    /// `true` when a full day duration has elapsed since the last boundary.
    /// The first tick after a (re)start arms the cadence without advancing.
    pub fn day_elapsed(&mut self, now: Millis, day_duration_ms: f64) -> bool {
        match self.last_day_advance {
            None => {
                self.last_day_advance = Some(now);
                false
            }
            Some(last) => {
                if now.since(last) >= day_duration_ms {
                    self.last_day_advance = Some(now);
                    true
                } else {
                    false
                }
            }
        }
    }

    /// Cross one day boundary within a month of `days_per_month` days.
    pub fn advance(&mut self, days_per_month: u32) -> DayAdvance {
        let next = self.day_in_month + 1;
        if next > days_per_month {
            self.day_in_month = days_per_month;
            self.month_complete = true;
            self.running = false;
            DayAdvance::MonthComplete
        } else {
            self.day_in_month = next;
            DayAdvance::Advanced(next)
        }
    }

    /// Jump to a specific day, clamped to `[1, days_per_month]`.  Landing on
    /// the last day marks the month complete; anywhere earlier resumes
    /// playback.
    pub fn seek(&mut self, day_in_month: u32, days_per_month: u32) {
        let day = day_in_month.clamp(1, days_per_month.max(1));
        self.day_in_month = day;
        self.month_complete = day >= days_per_month;
        self.running = !self.month_complete;
        self.last_day_advance = None;
    }

    /// Back to day 1, playing, cadence re-armed.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
