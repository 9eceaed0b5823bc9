// src/forecast/mod.rs

pub mod covers;

pub use covers::{forecast_covers, total_entered_covers, CoverForecast, LUNCH_CUTOFF_HOUR};
