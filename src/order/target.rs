// src/order/target.rs

use serde::Serialize;

use super::rounding::{sanitize, whole_cases};

/// Target-stock-mode breakdown for one product line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetOrder {
    /// Stock expected to remain when the delivery arrives.
    pub projected_stock: f64,
    /// Units short of the target at that point.
    pub missing: f64,
    /// Cases to order.
    pub to_order: u32,
}

/// Refills toward a desired on-hand level.
///
/// The order is capped at the target's own case ceiling so a bad consumption
/// estimate cannot balloon it. A projected stockout before the delivery
/// (`stock - consumption <= 0`, "rupture") raises the cap by one case, since
/// the shortfall has already eaten into the buffer.
///
/// An unknown current stock makes the order unsizable: everything is 0.
pub fn calculate_target_order(
    target_stock_units: f64,
    current_stock: Option<f64>,
    estimated_consumption: f64,
    packaging: f64,
) -> TargetOrder {
    let Some(stock) = current_stock else {
        return TargetOrder::default();
    };
    let stock = sanitize(stock);
    let target = sanitize(target_stock_units);
    let consumption = sanitize(estimated_consumption);
    let packaging = sanitize(packaging);

    let target_cases = whole_cases(target, packaging);
    let remaining = stock - consumption;
    let (raw_cases, cap) = if remaining <= 0.0 {
        (whole_cases(target + consumption, packaging), target_cases + 1)
    } else {
        let need = (target - remaining).max(0.0);
        (whole_cases(need, packaging), target_cases)
    };

    let projected_stock = remaining.max(0.0);
    TargetOrder {
        projected_stock,
        missing: (target - projected_stock).max(0.0),
        to_order: raw_cases.min(cap),
    }
}
