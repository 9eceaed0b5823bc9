// src/model/month.rs

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Calendar month keys as stored in the persisted state ("jan".."dec").
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Month of a calendar date.
    pub fn of(date: NaiveDate) -> Month {
        Month::ALL[date.month0() as usize]
    }

    /// The persisted month key.
    pub fn key(self) -> &'static str {
        match self {
            Month::Jan => "jan",
            Month::Feb => "feb",
            Month::Mar => "mar",
            Month::Apr => "apr",
            Month::May => "may",
            Month::Jun => "jun",
            Month::Jul => "jul",
            Month::Aug => "aug",
            Month::Sep => "sep",
            Month::Oct => "oct",
            Month::Nov => "nov",
            Month::Dec => "dec",
        }
    }
}

/// Day of week numbered the way the supplier settings store it:
/// 0 = Sunday .. 6 = Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct DayOfWeek(u8);

impl DayOfWeek {
    pub fn new(day: u8) -> Option<DayOfWeek> {
        (day <= 6).then_some(DayOfWeek(day))
    }

    /// Day of week of a calendar date.
    pub fn of(date: NaiveDate) -> DayOfWeek {
        DayOfWeek(date.weekday().num_days_from_sunday() as u8)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    /// Days forward (0..=6) until the next occurrence of `target`.
    pub fn days_until(self, target: DayOfWeek) -> i64 {
        (i64::from(target.0) - i64::from(self.0)).rem_euclid(7)
    }

    pub fn label(self) -> &'static str {
        match self.0 {
            0 => "Sunday",
            1 => "Monday",
            2 => "Tuesday",
            3 => "Wednesday",
            4 => "Thursday",
            5 => "Friday",
            _ => "Saturday",
        }
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        DayOfWeek::new(value).ok_or_else(|| format!("day of week out of range: {value}"))
    }
}

impl From<DayOfWeek> for u8 {
    fn from(day: DayOfWeek) -> u8 {
        day.0
    }
}
