//! The simulated calendar. Only for show; orbits run on angles, not on this.

use crate::config::SimConfig;

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};

const MONTHS: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// The moment the simulation is showing, in UTC.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SimClock {
    at: DateTime<Utc>,
}

impl SimClock {
    /// Start at `unix_ms` milliseconds since the epoch. Out of range values start at the epoch.
    pub fn starting_at(unix_ms: f64) -> Self {
        let at = Utc.timestamp_millis_opt(unix_ms as i64).single();
        if at.is_none() {
            log::warn!("Start date {} ms is out of range, using the epoch", unix_ms);
        }
        SimClock {
            at: at.unwrap_or_default(),
        }
    }

    pub fn unix_ms(&self) -> f64 {
        self.at.timestamp_millis() as f64
    }

    pub fn datetime(&self) -> DateTime<Utc> {
        self.at
    }

    /// One tick's worth of time at this speed.
    pub fn advance(&mut self, multiplier: f64, config: &SimConfig) {
        let step = Duration::milliseconds((multiplier * config.clock_ms_per_tick).round() as i64);
        if let Some(next) = self.at.checked_add_signed(step) {
            self.at = next;
        }
    }

    /// (year, month 1-12, day 1-31)
    pub fn date(&self) -> (i32, u32, u32) {
        (self.at.year(), self.at.month(), self.at.day())
    }

    /// Like "18 Oktober 2026"
    pub fn date_string(&self) -> String {
        let (y, m, d) = self.date();
        format!("{} {} {}", d, MONTHS[m as usize - 1], y)
    }
}
