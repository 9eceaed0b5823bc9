// src/model/mod.rs

pub mod blank;
pub mod covers;
pub mod month;
pub mod product;
pub mod snapshot;
pub mod supplier;

pub use covers::{
    DailyCover, DailyCoversState, MonthlyCovers, OrderState, ValidatedMonths, DEFAULT_MARGIN,
    MARGIN_STEPS,
};
pub use month::{DayOfWeek, Month};
pub use product::Product;
pub use snapshot::{clear_supplier_counts, toggle_month_validation, Snapshot};
pub use supplier::{CutoffTime, SupplierConfig};
