// src/planner/engine.rs

use chrono::NaiveDateTime;
use log::debug;
use thiserror::Error;

use crate::forecast::{forecast_covers, CoverForecast};
use crate::model::Snapshot;
use crate::order::{sanitize, CalculationMode, OrderContext, OrderDecision};
use crate::ratio::compute_product_stats;
use crate::schedule::{compute_delivery_window, DeliveryWindow};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("unknown supplier `{0}`")]
    UnknownSupplier(String),
}

/// One product's order proposal.
#[derive(Debug, Clone)]
pub struct OrderLine {
    pub product_id: String,
    pub product_name: String,
    pub avg_ratio: f64,
    /// Units expected to move before the window closes:
    /// `ceil(avg_ratio x forecast covers)`.
    pub theoretical_need: f64,
    pub decision: OrderDecision,
}

/// A supplier's full proposal for the upcoming cutoff.
#[derive(Debug, Clone)]
pub struct SupplierPlan {
    pub supplier_id: String,
    pub supplier_name: String,
    pub mode: CalculationMode,
    pub window: DeliveryWindow,
    pub forecast: CoverForecast,
    pub lines: Vec<OrderLine>,
}

impl SupplierPlan {
    /// Lines that actually require ordering something.
    pub fn open_lines(&self) -> impl Iterator<Item = &OrderLine> {
        self.lines
            .iter()
            .filter(|line| line.decision.cases_to_order() > 0)
    }
}

/// Plans one supplier's order: resolve the delivery window (honoring a
/// manual override), forecast covers until the window closes, then size
/// every product line under the requested mode.
///
/// Pure over the snapshot and `now`: the same inputs always produce the
/// same plan.
pub fn plan_supplier_orders(
    snapshot: &Snapshot,
    supplier_id: &str,
    mode: CalculationMode,
    now: NaiveDateTime,
) -> Result<SupplierPlan, PlanError> {
    let config = snapshot
        .supplier_configs
        .get(supplier_id)
        .ok_or_else(|| PlanError::UnknownSupplier(supplier_id.to_string()))?;

    let mut window = compute_delivery_window(config, now);
    if let Some(date) = snapshot.delivery_date_by_supplier.get(supplier_id) {
        window = window.with_delivery_override(*date);
    }

    let forecast = forecast_covers(window.forecast_end, &snapshot.daily_covers, now);
    debug!(
        "{supplier_id}: {} covers until {}, delivery {}",
        forecast.total, window.forecast_end, window.delivery
    );

    let policy = mode.policy();
    let mut lines = Vec::new();
    for product in snapshot.supplier_products(supplier_id) {
        let stats = compute_product_stats(
            product,
            &snapshot.detailed_inventory,
            &snapshot.validated_months,
            &snapshot.covers,
        );
        let theoretical_need = (sanitize(stats.avg_ratio) * f64::from(forecast.total)).ceil();
        let decision = policy.decide(&OrderContext {
            product,
            estimated_consumption: theoretical_need,
            margin_percent: snapshot.margin_for(&product.id),
        });
        lines.push(OrderLine {
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            avg_ratio: stats.avg_ratio,
            theoretical_need,
            decision,
        });
    }

    Ok(SupplierPlan {
        supplier_id: supplier_id.to_string(),
        supplier_name: config.name.clone(),
        mode,
        window,
        forecast,
        lines,
    })
}
