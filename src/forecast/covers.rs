// src/forecast/covers.rs

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::model::{DailyCoversState, Month};

/// Hour after which the current day's lunch service is considered done.
pub const LUNCH_CUTOFF_HOUR: u32 = 15;

/// Expected guests over a date window, lunch and dinner split out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CoverForecast {
    pub total: u32,
    pub midi: u32,
    pub soir: u32,
}

/// Sums expected covers from `now`'s date through `window_end` inclusive.
///
/// Days with no calendar entry, or whose lunch value is unset, contribute
/// nothing at all. On the current day itself dinner always counts, but lunch
/// only while the local time is before 15:00: after that it has already been
/// served and must not be forecast again.
pub fn forecast_covers(
    window_end: NaiveDate,
    calendar: &DailyCoversState,
    now: NaiveDateTime,
) -> CoverForecast {
    let mut midi = 0u32;
    let mut soir = 0u32;
    let mut day = now.date();
    while day <= window_end {
        let entry = calendar
            .get(&Month::of(day))
            .and_then(|month| month.get(day.day0() as usize));
        if let Some(entry) = entry {
            if let Some(lunch) = entry.midi {
                let lunch_pending = day != now.date() || now.time().hour() < LUNCH_CUTOFF_HOUR;
                if lunch_pending {
                    midi += lunch;
                }
                soir += entry.soir.unwrap_or(0);
            }
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    CoverForecast {
        total: midi + soir,
        midi,
        soir,
    }
}

/// Total of every entered cover value across the whole calendar, with no
/// windowing and no same-day rule. Feeds the settings overview.
pub fn total_entered_covers(calendar: &DailyCoversState) -> u32 {
    calendar
        .values()
        .flatten()
        .map(|day| day.midi.unwrap_or(0) + day.soir.unwrap_or(0))
        .sum()
}
