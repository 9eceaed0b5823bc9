// src/io/reporting.rs

use std::path::Path;

use serde::Serialize;

use crate::planner::SupplierPlan;

/// Flattened export row, one per product line.
#[derive(Debug, Clone, Serialize)]
struct OrderRecord<'a> {
    supplier: &'a str,
    product: &'a str,
    mode: &'static str,
    forecast_covers: u32,
    avg_ratio: f64,
    theoretical_need: f64,
    cases_to_order: u32,
}

/// Writes every plan's lines to a CSV file and returns the row count.
pub fn write_order_log<P: AsRef<Path>>(
    path: P,
    plans: &[SupplierPlan],
) -> Result<usize, csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    let mut written = 0;
    for plan in plans {
        for line in &plan.lines {
            writer.serialize(OrderRecord {
                supplier: &plan.supplier_name,
                product: &line.product_name,
                mode: plan.mode.label(),
                forecast_covers: plan.forecast.total,
                avg_ratio: line.avg_ratio,
                theoretical_need: line.theoretical_need,
                cases_to_order: line.decision.cases_to_order(),
            })?;
            written += 1;
        }
    }

    // Flush the buffer to ensure all data is written.
    writer.flush()?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::CoverForecast;
    use crate::order::{CalculationMode, MarginOrder, OrderDecision};
    use crate::planner::OrderLine;
    use crate::schedule::DeliveryWindow;
    use chrono::NaiveDate;

    fn plan() -> SupplierPlan {
        let delivery = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        SupplierPlan {
            supplier_id: "beverages".to_string(),
            supplier_name: "City Beverages".to_string(),
            mode: CalculationMode::Margin,
            window: DeliveryWindow {
                cutoff: delivery.pred_opt().unwrap().and_hms_opt(10, 0, 0).unwrap(),
                delivery,
                next_delivery: delivery + chrono::Duration::days(7),
                forecast_end: delivery + chrono::Duration::days(6),
            },
            forecast: CoverForecast {
                total: 800,
                midi: 400,
                soir: 400,
            },
            lines: vec![OrderLine {
                product_id: "p1".to_string(),
                product_name: "cola 33cl".to_string(),
                avg_ratio: 0.2,
                theoretical_need: 160.0,
                decision: OrderDecision::Margin(MarginOrder {
                    net: 130.0,
                    need_with_margin: 169.0,
                    real_need: 192.0,
                    to_order: 8,
                }),
            }],
        }
    }

    #[test]
    fn writes_one_row_per_line_plus_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.csv");

        let written = write_order_log(&path, &[plan()]).unwrap();
        assert_eq!(written, 1);

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "supplier,product,mode,forecast_covers,avg_ratio,theoretical_need,cases_to_order"
        );
        assert_eq!(lines[1], "City Beverages,cola 33cl,margin,800,0.2,160.0,8");
    }
}
