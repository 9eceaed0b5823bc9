// src/order/policy.rs

use serde::{Deserialize, Serialize};

use crate::model::Product;

use super::margin::{calculate_order, MarginOrder};
use super::target::{calculate_target_order, TargetOrder};

/// Which sizing algorithm the order screen runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalculationMode {
    Margin,
    Target,
}

impl CalculationMode {
    /// The policy implementing this mode.
    pub fn policy(self) -> Box<dyn OrderPolicy> {
        match self {
            CalculationMode::Margin => Box::new(MarginPolicy),
            CalculationMode::Target => Box::new(TargetPolicy),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CalculationMode::Margin => "margin",
            CalculationMode::Target => "target",
        }
    }
}

/// Everything a policy may look at for one product line.
#[derive(Debug, Clone, Copy)]
pub struct OrderContext<'a> {
    pub product: &'a Product,
    /// Units expected to move before the forecast window closes
    /// (average ratio x forecast covers, rounded up).
    pub estimated_consumption: f64,
    /// Safety margin in percent; only margin mode reads it.
    pub margin_percent: u8,
}

/// Either mode's full breakdown. The case count is what gets ordered; the
/// rest feeds the line's detail columns.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OrderDecision {
    Margin(MarginOrder),
    Target(TargetOrder),
}

impl OrderDecision {
    pub fn cases_to_order(&self) -> u32 {
        match self {
            OrderDecision::Margin(order) => order.to_order,
            OrderDecision::Target(order) => order.to_order,
        }
    }
}

/// Decision logic for one product line. Implementations are interchangeable
/// so the planner can swap modes without caring which breakdown comes back.
pub trait OrderPolicy {
    fn decide(&self, ctx: &OrderContext<'_>) -> OrderDecision;
}

/// Sizes the gap between forecast consumption and what is already on hand
/// or inbound, plus a safety margin. Unknown stock counts as empty here.
#[derive(Debug, Clone, Copy)]
pub struct MarginPolicy;

impl OrderPolicy for MarginPolicy {
    fn decide(&self, ctx: &OrderContext<'_>) -> OrderDecision {
        let product = ctx.product;
        OrderDecision::Margin(calculate_order(
            ctx.estimated_consumption,
            product.upcoming_delivery.unwrap_or(0.0),
            product.stock.unwrap_or(0.0),
            ctx.margin_percent,
            product.packaging_units(),
        ))
    }
}

/// Refills toward the product's configured target stock. Unknown stock
/// blocks the calculation entirely.
#[derive(Debug, Clone, Copy)]
pub struct TargetPolicy;

impl OrderPolicy for TargetPolicy {
    fn decide(&self, ctx: &OrderContext<'_>) -> OrderDecision {
        let product = ctx.product;
        OrderDecision::Target(calculate_target_order(
            product.target_stock.unwrap_or(0.0),
            product.stock,
            ctx.estimated_consumption,
            product.packaging_units(),
        ))
    }
}
