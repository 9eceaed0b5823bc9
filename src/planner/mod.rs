// src/planner/mod.rs

pub mod engine;

pub use engine::{plan_supplier_orders, OrderLine, PlanError, SupplierPlan};
