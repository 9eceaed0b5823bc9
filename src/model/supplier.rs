// src/model/supplier.rs

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::month::DayOfWeek;

/// Weekly order deadline, persisted as "HH:mm".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CutoffTime(NaiveTime);

impl CutoffTime {
    pub fn new(hour: u32, minute: u32) -> Option<CutoffTime> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(CutoffTime)
    }

    pub fn to_naive(self) -> NaiveTime {
        self.0
    }
}

impl TryFrom<String> for CutoffTime {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        NaiveTime::parse_from_str(&value, "%H:%M")
            .map(CutoffTime)
            .map_err(|e| format!("invalid cutoff time `{value}`: {e}"))
    }
}

impl From<CutoffTime> for String {
    fn from(time: CutoffTime) -> String {
        time.0.format("%H:%M").to_string()
    }
}

/// Weekly rotation settings for one supplier. Days use the 0=Sunday
/// numbering of [`DayOfWeek`]; the rotation is only ever resolved forward
/// from "now".
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierConfig {
    pub id: String,
    pub name: String,
    pub delivery_day: DayOfWeek,
    pub cutoff_day: DayOfWeek,
    pub cutoff_time: CutoffTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cutoff_time_parses_and_prints_hh_mm() {
        let time = CutoffTime::try_from("10:00".to_string()).unwrap();
        assert_eq!(String::from(time), "10:00");
        assert_eq!(time.to_naive(), NaiveTime::from_hms_opt(10, 0, 0).unwrap());
    }

    #[test]
    fn cutoff_time_rejects_garbage() {
        assert!(CutoffTime::try_from("25:99".to_string()).is_err());
        assert!(CutoffTime::try_from("noon".to_string()).is_err());
    }

    #[test]
    fn config_round_trips_with_numeric_days() {
        let json = r#"{
            "id": "beverages",
            "name": "City Beverages",
            "deliveryDay": 3,
            "cutoffDay": 2,
            "cutoffTime": "10:00"
        }"#;
        let config: SupplierConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.delivery_day.index(), 3);
        assert_eq!(config.cutoff_day.index(), 2);

        let text = serde_json::to_string(&config).unwrap();
        assert!(text.contains("\"deliveryDay\":3"));
        assert!(text.contains("\"cutoffTime\":\"10:00\""));
    }
}
