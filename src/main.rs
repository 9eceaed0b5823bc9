mod forecast;
mod io;
mod model;
mod order;
mod planner;
mod ratio;
mod schedule;

use std::env;
use std::path::Path;

use anyhow::Context;

use crate::io::reporting;
use crate::io::sample;
use crate::io::state::StateStore;
use crate::order::CalculationMode;
use crate::planner::plan_supplier_orders;
use crate::ratio::extract_import_names;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    println!("=== Restock Planner ===");

    // 1. LOAD STATE
    // A state file saved by the application can be passed as the first
    // argument; without one we plan against the built-in demo snapshot.
    let snapshot = match env::args().nth(1) {
        Some(path) => StateStore::new(path.as_str())
            .load()
            .with_context(|| format!("loading state from {path}"))?,
        None => sample::sample_snapshot(),
    };
    log::info!(
        "{} products, {} suppliers, {} covers entered over the year",
        snapshot.products.len(),
        snapshot.supplier_configs.len(),
        forecast::total_entered_covers(&snapshot.daily_covers)
    );

    // Products whose search name matches nothing in the imports would fall
    // back to history silently; surface them like the ratio screen does.
    if !snapshot.detailed_inventory.is_empty() {
        let known_names = extract_import_names(&snapshot.detailed_inventory);
        for product in &snapshot.products {
            if !product.search_name.trim().is_empty()
                && !known_names.contains(product.search_name.as_str())
            {
                log::warn!("`{}` matches no imported row", product.search_name);
            }
        }
    }

    let now = chrono::Local::now().naive_local();

    // 2. PLAN EVERY SUPPLIER
    // Margin mode is the default the order screen opens on; target mode is
    // a per-screen toggle.
    let mut plans = Vec::new();
    for supplier_id in snapshot.supplier_configs.keys() {
        let plan = plan_supplier_orders(&snapshot, supplier_id, CalculationMode::Margin, now)?;

        let config = &snapshot.supplier_configs[supplier_id];
        println!("\n--- {} ---", plan.supplier_name);
        println!(
            "Rotation:  cutoff {} / delivery {}",
            config.cutoff_day.label(),
            config.delivery_day.label()
        );
        println!("Cutoff:    {}", plan.window.cutoff.format("%A %Y-%m-%d %H:%M"));
        println!("Delivery:  {}", plan.window.delivery.format("%A %Y-%m-%d"));
        println!(
            "Window:    through {} | {} covers ({} lunch / {} dinner)",
            plan.window.forecast_end, plan.forecast.total, plan.forecast.midi, plan.forecast.soir
        );
        for line in plan.open_lines() {
            println!(
                "  {:<24} {:>3} cases  (need {})",
                line.product_name,
                line.decision.cases_to_order(),
                line.theoretical_need
            );
        }

        plans.push(plan);
    }

    // 3. EXPORT PROPOSALS
    let output = "order_proposals.csv";
    let rows = reporting::write_order_log(Path::new(output), &plans)
        .context("writing order proposals")?;
    println!("\n{rows} proposal rows written to ./{output}");

    Ok(())
}
