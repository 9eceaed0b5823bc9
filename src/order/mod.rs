// src/order/mod.rs

pub mod margin;
pub mod policy;
pub mod rounding;
pub mod target;

pub use margin::{calculate_order, MarginOrder};
pub use policy::{
    CalculationMode, MarginPolicy, OrderContext, OrderDecision, OrderPolicy, TargetPolicy,
};
pub use rounding::{effective_packaging, sanitize, whole_cases};
pub use target::{calculate_target_order, TargetOrder};
