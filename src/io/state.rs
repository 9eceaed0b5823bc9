// src/io/state.rs

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

use crate::model::Snapshot;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("state file i/o: {0}")]
    Io(#[from] std::io::Error),
    #[error("state file format: {0}")]
    Format(#[from] serde_json::Error),
}

/// JSON-file-backed snapshot repository.
///
/// The engine never touches this: the surrounding application loads a
/// snapshot, computes against it, and saves the edited copy back.
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> StateStore {
        StateStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Snapshot, StoreError> {
        let text = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&text)?)
    }

    pub fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, text)?;
        info!("state saved to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CutoffTime, DayOfWeek, Month, Product, SupplierConfig};

    fn snapshot() -> Snapshot {
        let mut snapshot = Snapshot::default();
        snapshot.supplier_configs.insert(
            "beverages".to_string(),
            SupplierConfig {
                id: "beverages".to_string(),
                name: "City Beverages".to_string(),
                delivery_day: DayOfWeek::new(3).unwrap(),
                cutoff_day: DayOfWeek::new(2).unwrap(),
                cutoff_time: CutoffTime::new(10, 0).unwrap(),
            },
        );
        snapshot.products.push(Product {
            id: "p1".to_string(),
            supplier_id: "beverages".to_string(),
            name: "cola 33cl".to_string(),
            search_name: "Cola 33cl vc".to_string(),
            packaging: Some(24.0),
            stock: None,
            upcoming_delivery: Some(12.0),
            target_stock: None,
            import_divisor: None,
            sales_history: [(Month::Jan, 120.0)].into_iter().collect(),
        });
        snapshot.validated_months.insert(Month::Jan, true);
        snapshot
    }

    #[test]
    fn snapshots_round_trip_through_the_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path().join("state.json"));

        store.save(&snapshot()).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded.products.len(), 1);
        let product = &loaded.products[0];
        assert_eq!(product.stock, None);
        assert_eq!(product.upcoming_delivery, Some(12.0));
        assert_eq!(product.history(Month::Jan), 120.0);
        assert!(loaded.is_validated(Month::Jan));
        assert_eq!(
            loaded.supplier_configs["beverages"].cutoff_day.index(),
            2
        );
    }

    #[test]
    fn blank_sentinels_survive_the_written_json() {
        let dir = tempfile::tempdir().unwrap();
        let store = StateStore::new(dir.path().join("state.json"));
        store.save(&snapshot()).unwrap();

        let text = fs::read_to_string(store.path()).unwrap();
        assert!(text.contains("\"stock\": \"\""));
        assert!(text.contains("\"cutoffTime\": \"10:00\""));
    }

    #[test]
    fn a_missing_file_reports_io() {
        let store = StateStore::new("/nonexistent/state.json");
        assert!(matches!(store.load(), Err(StoreError::Io(_))));
    }
}
