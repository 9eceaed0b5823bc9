// src/io/sample.rs

use rand_distr::{Distribution, Normal};

use crate::model::{
    CutoffTime, DailyCover, DayOfWeek, Month, Product, Snapshot, SupplierConfig,
};

/// Calendar slice where every day has the exact same service sizes. Useful
/// as a predictable baseline.
pub fn generate_flat_covers(days: usize, midi: u32, soir: u32) -> Vec<DailyCover> {
    vec![DailyCover::new(midi, soir); days]
}

/// Calendar slice with normally distributed attendance around the given
/// means. Negative samples clamp to an empty dining room.
pub fn generate_normal_covers(
    days: usize,
    midi_mean: f64,
    soir_mean: f64,
    std_dev: f64,
) -> Vec<DailyCover> {
    let mut rng = rand::thread_rng();
    let midi = Normal::new(midi_mean, std_dev).unwrap();
    let soir = Normal::new(soir_mean, std_dev).unwrap();

    let mut schedule = Vec::with_capacity(days);
    for _ in 0..days {
        schedule.push(DailyCover::new(
            sample_covers(&midi, &mut rng),
            sample_covers(&soir, &mut rng),
        ));
    }
    schedule
}

fn sample_covers(normal: &Normal<f64>, rng: &mut impl rand::Rng) -> u32 {
    let value = normal.sample(rng).round();
    if value < 0.0 {
        0
    } else {
        value as u32
    }
}

/// Fully populated demo state: two suppliers on a weekly rotation and a
/// small catalog with a year of sales history, enough to exercise every
/// planner path without a state file.
pub fn sample_snapshot() -> Snapshot {
    let mut snapshot = Snapshot::default();

    snapshot.supplier_configs.insert(
        "beverages".to_string(),
        SupplierConfig {
            id: "beverages".to_string(),
            name: "City Beverages".to_string(),
            delivery_day: DayOfWeek::new(3).unwrap(), // Wednesday
            cutoff_day: DayOfWeek::new(2).unwrap(),   // Tuesday
            cutoff_time: CutoffTime::new(10, 0).unwrap(),
        },
    );
    snapshot.supplier_configs.insert(
        "butcher".to_string(),
        SupplierConfig {
            id: "butcher".to_string(),
            name: "Plaine Butchery".to_string(),
            delivery_day: DayOfWeek::new(5).unwrap(), // Friday
            cutoff_day: DayOfWeek::new(4).unwrap(),   // Thursday
            cutoff_time: CutoffTime::new(11, 0).unwrap(),
        },
    );

    snapshot.products = vec![
        product("b1", "beverages", "cola 33cl", "Cola 33cl vc", 24.0, &[
            310.0, 280.0, 300.0, 295.0, 320.0, 305.0, 350.0, 360.0, 270.0, 330.0, 315.0, 400.0,
        ]),
        product("b2", "beverages", "sparkling water 1l", "Sparkling water 100cl", 12.0, &[
            150.0, 140.0, 150.0, 160.0, 170.0, 165.0, 190.0, 200.0, 130.0, 150.0, 145.0, 180.0,
        ]),
        product("b3", "beverages", "lager keg 20l", "Lager 5° keg 20l", 1.0, &[
            8.0, 7.0, 8.0, 9.0, 10.0, 11.0, 13.0, 14.0, 7.0, 9.0, 8.0, 12.0,
        ]),
        product("m1", "butcher", "ribeye 300g", "Ribeye 300g", 1.0, &[
            220.0, 205.0, 215.0, 210.0, 230.0, 225.0, 260.0, 270.0, 190.0, 235.0, 228.0, 300.0,
        ]),
        product("m2", "butcher", "tartare 180g", "Tartare 180g", 1.0, &[
            120.0, 110.0, 118.0, 115.0, 130.0, 125.0, 150.0, 155.0, 100.0, 128.0, 122.0, 160.0,
        ]),
    ];
    // The rib roast arrives by weight; orders count pieces of ~0.8 kg.
    snapshot.products.push(Product {
        import_divisor: Some(0.8),
        ..product("m3", "butcher", "rib roast (kg)", "Rib roast kg", 1.0, &[
            90.0, 85.0, 88.0, 86.0, 95.0, 92.0, 110.0, 115.0, 78.0, 94.0, 90.0, 125.0,
        ])
    });

    for (i, month) in Month::ALL.into_iter().enumerate() {
        // Realized covers hover around 4 300 a month with a winter dip.
        let covers = 4300.0 + 400.0 * ((i as f64) - 5.5).abs() / 5.5 - 200.0;
        snapshot.covers.insert(month, covers.round());
        snapshot
            .daily_covers
            .insert(month, generate_normal_covers(31, 70.0, 80.0, 25.0));
    }

    snapshot
}

fn product(
    id: &str,
    supplier: &str,
    name: &str,
    search_name: &str,
    packaging: f64,
    history: &[f64; 12],
) -> Product {
    Product {
        id: id.to_string(),
        supplier_id: supplier.to_string(),
        name: name.to_string(),
        search_name: search_name.to_string(),
        packaging: Some(packaging),
        stock: Some(packaging),
        upcoming_delivery: None,
        target_stock: Some(packaging * 4.0),
        import_divisor: None,
        sales_history: Month::ALL.into_iter().zip(history.iter().copied()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_covers_repeat_the_same_day() {
        let days = generate_flat_covers(31, 50, 60);
        assert_eq!(days.len(), 31);
        assert!(days.iter().all(|d| *d == DailyCover::new(50, 60)));
    }

    #[test]
    fn normal_covers_stay_non_negative() {
        let days = generate_normal_covers(100, 10.0, 10.0, 50.0);
        assert_eq!(days.len(), 100);
        assert!(days.iter().all(|d| d.midi.is_some() && d.soir.is_some()));
    }

    #[test]
    fn the_demo_snapshot_is_complete() {
        let snapshot = sample_snapshot();
        assert_eq!(snapshot.supplier_configs.len(), 2);
        assert!(snapshot.products.len() >= 5);
        assert_eq!(snapshot.daily_covers.len(), 12);
        assert_eq!(snapshot.covers.len(), 12);
        // Every product belongs to a configured supplier.
        assert!(snapshot
            .products
            .iter()
            .all(|p| snapshot.supplier_configs.contains_key(&p.supplier_id)));
        // A year of history everywhere.
        assert!(snapshot.products.iter().all(|p| p.sales_history.len() == 12));
    }
}
