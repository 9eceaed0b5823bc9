// src/schedule/mod.rs

pub mod window;

pub use window::{compute_delivery_window, DeliveryWindow};
