// src/schedule/window.rs

use chrono::{Duration, NaiveDate, NaiveDateTime};

use crate::model::{DayOfWeek, SupplierConfig};

/// A supplier's weekly rotation resolved against one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryWindow {
    /// Last instant the upcoming order can still be placed.
    pub cutoff: NaiveDateTime,
    /// Next delivery following that cutoff.
    pub delivery: NaiveDate,
    /// The delivery after `delivery`, one rotation later.
    pub next_delivery: NaiveDate,
    /// Last day the upcoming order has to cover: the eve of `next_delivery`.
    pub forecast_end: NaiveDate,
}

impl DeliveryWindow {
    /// Replaces the computed delivery with a manually picked date. The
    /// forecast window then runs until the eve of that date.
    pub fn with_delivery_override(self, date: NaiveDate) -> DeliveryWindow {
        DeliveryWindow {
            delivery: date,
            forecast_end: date - Duration::days(1),
            ..self
        }
    }
}

/// Resolves the next cutoff and delivery dates for a supplier.
///
/// Cutoff and delivery days are always resolved forward from `now`, never
/// backward: once this week's cutoff instant has passed, the whole rotation
/// targets the following week.
pub fn compute_delivery_window(config: &SupplierConfig, now: NaiveDateTime) -> DeliveryWindow {
    let to_cutoff = DayOfWeek::of(now.date()).days_until(config.cutoff_day);
    let mut cutoff =
        (now.date() + Duration::days(to_cutoff)).and_time(config.cutoff_time.to_naive());
    if now > cutoff {
        cutoff += Duration::days(7);
    }

    // A zero offset would put the delivery on the cutoff day of the same
    // cycle; the goods always arrive on the *next* occurrence of the
    // delivery day.
    let mut offset = config.cutoff_day.days_until(config.delivery_day);
    if offset == 0 {
        offset = 7;
    }

    let delivery = cutoff.date() + Duration::days(offset);
    let next_delivery = delivery + Duration::days(7);
    DeliveryWindow {
        cutoff,
        delivery,
        next_delivery,
        forecast_end: next_delivery - Duration::days(1),
    }
}
