//! Calendar system for simulation time tracking
//!
//! Tracks hour/day/month/year with 1-based fields and provides the day
//! phases that drive the NPC schedule.

use serde::{Deserialize, Serialize};

pub const HOURS_PER_DAY: i32 = 24;
pub const DAYS_PER_MONTH: i32 = 30; // 360-day year
pub const MONTHS_PER_YEAR: i32 = 12;

/// Daily schedule phases for NPC behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayPhase {
    Rest,   // 23:00-06:00, go home and sleep
    Work,   // 07:00-14:00, work at home place
    Social, // 15:00-22:00, wander and talk
}

impl DayPhase {
    pub fn from_hour(hour: i32) -> Self {
        if !(7..=22).contains(&hour) {
            DayPhase::Rest
        } else if hour <= 14 {
            DayPhase::Work
        } else {
            DayPhase::Social
        }
    }
}

/// Calendar tracks simulation time with hour granularity
///
/// All fields are 1-based: a fresh calendar reads year 1, month 1,
/// day 1, hour 1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Calendar {
    hour: i32,
    day: i32,
    month: i32,
    year: i32,
}

impl Calendar {
    pub fn new() -> Self {
        Self {
            hour: 1,
            day: 1,
            month: 1,
            year: 1,
        }
    }

    /// Advance one hour, cascading day/month/year roll-over.
    pub fn advance(&mut self) {
        self.hour += 1;
        if self.hour > HOURS_PER_DAY {
            self.hour = 1;
            self.day += 1;
            if self.day > DAYS_PER_MONTH {
                self.day = 1;
                self.month += 1;
                if self.month > MONTHS_PER_YEAR {
                    self.month = 1;
                    self.year += 1;
                }
            }
        }
    }

    pub fn hour(&self) -> i32 {
        self.hour
    }

    pub fn day(&self) -> i32 {
        self.day
    }

    pub fn month(&self) -> i32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn phase(&self) -> DayPhase {
        DayPhase::from_hour(self.hour)
    }

    /// Formatted as `Year: YYYY Month: MM Day: DD Hour: HH`.
    pub fn date_string(&self) -> String {
        format!(
            "Year: {:04} Month: {:2} Day: {:2} Hour: {:2}",
            self.year, self.month, self.day, self.hour
        )
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new()
    }
}
