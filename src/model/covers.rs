// src/model/covers.rs

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::blank;
use super::month::Month;

/// Guest counts for one calendar day. `None` means "not entered"; the
/// forecaster skips a day entirely while its lunch value is unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCover {
    #[serde(default, with = "blank")]
    pub midi: Option<u32>,
    #[serde(default, with = "blank")]
    pub soir: Option<u32>,
}

impl DailyCover {
    pub const BLANK: DailyCover = DailyCover {
        midi: None,
        soir: None,
    };

    pub fn new(midi: u32, soir: u32) -> DailyCover {
        DailyCover {
            midi: Some(midi),
            soir: Some(soir),
        }
    }
}

/// Per-month day-indexed cover calendar; index 0 = day 1 of the month.
pub type DailyCoversState = BTreeMap<Month, Vec<DailyCover>>;

/// Realized covers per month, the denominator of the sales ratio.
pub type MonthlyCovers = BTreeMap<Month, f64>;

/// Months whose recorded sales value is frozen against later imports.
pub type ValidatedMonths = BTreeMap<Month, bool>;

/// Safety margins offered on the order screen, in percent.
pub const MARGIN_STEPS: [u8; 11] = [0, 5, 10, 15, 20, 25, 30, 35, 40, 45, 50];

pub const DEFAULT_MARGIN: u8 = 30;

/// Transient per-product calculation parameters, keyed by product id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderState {
    #[serde(default = "default_margin")]
    pub margin: u8,
}

impl Default for OrderState {
    fn default() -> OrderState {
        OrderState {
            margin: DEFAULT_MARGIN,
        }
    }
}

fn default_margin() -> u8 {
    DEFAULT_MARGIN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_cover_keeps_blank_entries() {
        let json = r#"[{"midi": 100, "soir": 50}, {"midi": "", "soir": ""}]"#;
        let days: Vec<DailyCover> = serde_json::from_str(json).unwrap();
        assert_eq!(days[0], DailyCover::new(100, 50));
        assert_eq!(days[1], DailyCover::BLANK);

        let text = serde_json::to_string(&days).unwrap();
        assert_eq!(text, r#"[{"midi":100,"soir":50},{"midi":"","soir":""}]"#);
    }

    #[test]
    fn order_state_defaults_to_thirty_percent() {
        let state: OrderState = serde_json::from_str("{}").unwrap();
        assert_eq!(state.margin, 30);
        assert!(MARGIN_STEPS.contains(&state.margin));
    }
}
