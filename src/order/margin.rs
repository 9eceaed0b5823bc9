// src/order/margin.rs

use serde::Serialize;

use super::rounding::{effective_packaging, sanitize, whole_cases};

/// Margin-mode breakdown for one product line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarginOrder {
    /// Raw gap once inbound goods and current stock are deducted.
    pub net: f64,
    /// Gap inflated by the safety margin, rounded up to whole units.
    pub need_with_margin: f64,
    /// Units actually arriving if `to_order` cases are bought.
    pub real_need: f64,
    /// Cases to order.
    pub to_order: u32,
}

/// Sizes an order to cover the theoretical need with a safety margin on
/// top, then rounds up to whole cases.
///
/// `theoretical_need` is the caller's `ceil(avg_ratio x forecast covers)`.
pub fn calculate_order(
    theoretical_need: f64,
    upcoming_delivery: f64,
    stock: f64,
    margin_percent: u8,
    packaging: f64,
) -> MarginOrder {
    let packaging = sanitize(packaging);
    let net = (sanitize(theoretical_need) - sanitize(upcoming_delivery) - sanitize(stock)).max(0.0);
    let need_with_margin = (net * (1.0 + f64::from(margin_percent) / 100.0)).ceil();
    let to_order = whole_cases(need_with_margin, packaging);
    MarginOrder {
        net,
        need_with_margin,
        real_need: f64::from(to_order) * effective_packaging(packaging),
        to_order,
    }
}
