// src/ratio/mod.rs

pub mod engine;
pub mod import;

pub use engine::{
    compute_product_stats, effective_month_value, MonthStat, ProductStats, ValueSource,
};
pub use import::{
    extract_import_names, imported_value_for_product, CsvTable, CONSUMPTION_COLUMN,
};
