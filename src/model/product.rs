// src/model/product.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::blank;
use super::month::Month;

/// One orderable catalog entry.
///
/// Numeric fields the operator has not filled in yet are `None` ("unknown"),
/// which the calculators treat differently from an explicit 0: an unknown
/// stock blocks target-mode sizing entirely, an unknown packaging disables
/// case rounding.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub supplier_id: String,
    pub name: String,
    /// Cell value looked up in imported consumption tables.
    pub search_name: String,
    /// Units per case.
    #[serde(default, with = "blank")]
    pub packaging: Option<f64>,
    /// Current on-hand units.
    #[serde(default, with = "blank")]
    pub stock: Option<f64>,
    /// Units already inbound from a confirmed order.
    #[serde(default, with = "blank")]
    pub upcoming_delivery: Option<f64>,
    /// Desired on-hand units for target mode.
    #[serde(default, with = "blank")]
    pub target_stock: Option<f64>,
    /// Unit-conversion divisor applied to imported values (e.g. kg -> pieces).
    #[serde(default, with = "blank")]
    pub import_divisor: Option<f64>,
    /// Recorded unit sales per month.
    #[serde(default)]
    pub sales_history: BTreeMap<Month, f64>,
}

impl Product {
    /// Packaging as a number; unset behaves like a non-positive case size.
    pub fn packaging_units(&self) -> f64 {
        self.packaging.unwrap_or(0.0)
    }

    /// Recorded sales for one month, 0 when nothing was entered.
    pub fn history(&self, month: Month) -> f64 {
        self.sales_history.get(&month).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_the_persisted_shape() {
        let json = r#"{
            "id": "1",
            "supplierId": "beverages",
            "name": "cola 33cl",
            "searchName": "Cola 33cl vc",
            "packaging": 24,
            "stock": "",
            "upcomingDelivery": 12,
            "targetStock": "",
            "salesHistory": {"jan": 120, "feb": 96}
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.supplier_id, "beverages");
        assert_eq!(product.packaging, Some(24.0));
        assert_eq!(product.stock, None);
        assert_eq!(product.upcoming_delivery, Some(12.0));
        assert_eq!(product.import_divisor, None);
        assert_eq!(product.history(Month::Jan), 120.0);
        assert_eq!(product.history(Month::Mar), 0.0);

        let text = serde_json::to_string(&product).unwrap();
        assert!(text.contains("\"searchName\""));
        assert!(text.contains("\"stock\":\"\""));
        let back: Product = serde_json::from_str(&text).unwrap();
        assert_eq!(back.stock, None);
        assert_eq!(back.packaging, Some(24.0));
    }

    #[test]
    fn unset_packaging_reads_as_zero() {
        let product: Product = serde_json::from_str(
            r#"{"id": "x", "supplierId": "s", "name": "n", "searchName": "n"}"#,
        )
        .unwrap();
        assert_eq!(product.packaging_units(), 0.0);
    }
}
