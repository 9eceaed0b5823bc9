// src/model/snapshot.rs

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ratio;

use super::covers::{DailyCoversState, MonthlyCovers, OrderState, ValidatedMonths, DEFAULT_MARGIN};
use super::month::Month;
use super::product::Product;
use super::supplier::SupplierConfig;

/// The whole session state the engine computes against.
///
/// The planner only ever reads a snapshot; edits go through the transition
/// functions below so the surrounding application can persist a consistent
/// copy after each change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Snapshot {
    pub products: Vec<Product>,
    pub supplier_configs: BTreeMap<String, SupplierConfig>,
    /// Realized covers per month.
    pub covers: MonthlyCovers,
    pub daily_covers: DailyCoversState,
    /// Imported consumption tables, raw CSV text per month.
    pub detailed_inventory: BTreeMap<Month, String>,
    pub validated_months: ValidatedMonths,
    pub order_states: BTreeMap<String, OrderState>,
    /// Manually picked delivery dates overriding the weekly rotation.
    pub delivery_date_by_supplier: BTreeMap<String, NaiveDate>,
}

impl Snapshot {
    pub fn is_validated(&self, month: Month) -> bool {
        self.validated_months.get(&month).copied().unwrap_or(false)
    }

    /// Safety margin for one product, falling back to the default.
    pub fn margin_for(&self, product_id: &str) -> u8 {
        self.order_states
            .get(product_id)
            .map(|s| s.margin)
            .unwrap_or(DEFAULT_MARGIN)
    }

    pub fn supplier_products<'a>(
        &'a self,
        supplier_id: &'a str,
    ) -> impl Iterator<Item = &'a Product> {
        self.products
            .iter()
            .filter(move |p| p.supplier_id == supplier_id)
    }
}

/// Flips a month's validation flag.
///
/// Turning it on freezes each product's current effective value (import or
/// history) into `sales_history`, so later imports can no longer move it.
/// Turning it off only clears the flag and leaves history untouched, which
/// makes the transition idempotent after its first application.
pub fn toggle_month_validation(snapshot: &mut Snapshot, month: Month) {
    let enabling = !snapshot.is_validated(month);
    if enabling {
        let frozen: Vec<f64> = snapshot
            .products
            .iter()
            .map(|p| {
                ratio::effective_month_value(
                    p,
                    month,
                    &snapshot.detailed_inventory,
                    &snapshot.validated_months,
                )
            })
            .collect();
        for (product, value) in snapshot.products.iter_mut().zip(frozen) {
            product.sales_history.insert(month, value.round());
        }
    }
    snapshot.validated_months.insert(month, enabling);
}

/// Resets one supplier's stock and inbound counts back to "unknown".
pub fn clear_supplier_counts(snapshot: &mut Snapshot, supplier_id: &str) {
    for product in snapshot
        .products
        .iter_mut()
        .filter(|p| p.supplier_id == supplier_id)
    {
        product.stock = None;
        product.upcoming_delivery = None;
    }
}
