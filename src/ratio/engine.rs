// src/ratio/engine.rs

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{Month, MonthlyCovers, Product, ValidatedMonths};

use super::import::imported_value_for_product;

/// Where a month's effective consumption value came from. The order screen
/// highlights imported and frozen values differently, so the engine exposes
/// the distinction even though rendering lives elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    History,
    Imported,
    Validated,
}

/// One month's effective value and its ratio against realized covers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthStat {
    pub value: f64,
    pub ratio: f64,
    pub source: ValueSource,
}

/// Per-product ratio analysis over the whole year.
#[derive(Debug, Clone)]
pub struct ProductStats {
    pub avg_ratio: f64,
    pub months: BTreeMap<Month, MonthStat>,
}

/// Effective consumption for one month: frozen history when the month is
/// validated, otherwise the imported value when one matches, otherwise the
/// recorded history (rounded to whole units either way).
pub fn effective_month_value(
    product: &Product,
    month: Month,
    imports: &BTreeMap<Month, String>,
    validated: &ValidatedMonths,
) -> f64 {
    month_value_and_source(product, month, imports, validated).0
}

fn month_value_and_source(
    product: &Product,
    month: Month,
    imports: &BTreeMap<Month, String>,
    validated: &ValidatedMonths,
) -> (f64, ValueSource) {
    let frozen = validated.get(&month).copied().unwrap_or(false);
    if frozen {
        return (product.history(month).round(), ValueSource::Validated);
    }
    let imported = imports.get(&month).and_then(|csv| {
        imported_value_for_product(csv, &product.search_name, product.import_divisor)
    });
    match imported {
        Some(value) => (value, ValueSource::Imported),
        None => (product.history(month).round(), ValueSource::History),
    }
}

/// Computes every month's effective value and sales-to-covers ratio plus
/// their average.
///
/// Months with no consumption are left out of the average so an empty
/// January cannot drag a seasonal product's ratio down; a realized cover
/// count of zero divides by 1 instead.
pub fn compute_product_stats(
    product: &Product,
    imports: &BTreeMap<Month, String>,
    validated: &ValidatedMonths,
    covers: &MonthlyCovers,
) -> ProductStats {
    let mut months = BTreeMap::new();
    let mut total = 0.0;
    let mut counted = 0u32;
    for month in Month::ALL {
        let (value, source) = month_value_and_source(product, month, imports, validated);
        let recorded = covers.get(&month).copied().unwrap_or(0.0);
        let denominator = if recorded == 0.0 { 1.0 } else { recorded };
        let ratio = value / denominator;
        if value > 0.0 {
            total += ratio;
            counted += 1;
        }
        months.insert(month, MonthStat { value, ratio, source });
    }
    ProductStats {
        avg_ratio: if counted > 0 {
            total / f64::from(counted)
        } else {
            0.0
        },
        months,
    }
}
