#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Compact monthly payload and derived query result types.
//!
//! The compact types mirror the wire format produced by the external
//! data pipeline: single-letter keys keep the embedded payload small,
//! and the format is frozen for compatibility with existing consumers.
//! The derived types are what the query engine hands to rendering
//! consumers; they use full field names and camelCase serialization.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Metadata block of the compact monthly payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactMeta {
    /// Payload schema version.
    #[serde(rename = "v")]
    pub version: u32,
    /// Human-readable generation timestamp.
    #[serde(rename = "t")]
    pub generated_at: String,
    /// Number of facility records in the payload. Reporting only —
    /// never used as an iteration bound.
    #[serde(rename = "f")]
    pub facility_count: u32,
    /// Available month keys (`"YYYY-MM"`), ascending chronological
    /// order. Defines the index space for all population arrays.
    #[serde(rename = "m")]
    pub months: Vec<String>,
    /// Latest month key; equals the last entry of `months`.
    #[serde(rename = "l")]
    pub latest_month: String,
    /// Free-form payload description. Optional at decode time since the
    /// validation gate does not inspect it.
    #[serde(rename = "d", default)]
    pub description: String,
}

/// A facility record in the compact payload. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompactFacility {
    /// Unique facility identifier, stable across months.
    #[serde(rename = "i")]
    pub id: i64,
    /// Display name.
    #[serde(rename = "n")]
    pub name: String,
    /// Latitude in degrees. Zero is the "unknown location" sentinel.
    #[serde(rename = "lat")]
    pub latitude: f64,
    /// Longitude in degrees. Zero is the "unknown location" sentinel.
    #[serde(rename = "lng")]
    pub longitude: f64,
    /// Street address.
    #[serde(rename = "a")]
    pub address: String,
}

/// The full compact monthly payload: facility metadata plus one
/// population array per facility, indexed by the shared month list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompactMonthlyData {
    /// Payload metadata.
    pub meta: CompactMeta,
    /// Facility records. Insertion order is stable so query output is
    /// deterministic.
    pub facilities: Vec<CompactFacility>,
    /// Facility id -> per-month population counts, one entry per month
    /// key. A missing entry means no population data for any month.
    pub data: BTreeMap<i64, Vec<u64>>,
}

/// One month-slice entry: a facility together with its population count
/// for the selected month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyFacilityData {
    /// Unique facility identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Street address.
    pub address: String,
    /// Population count for the selected month. Strictly positive for
    /// every entry the query engine emits.
    pub population_count: u64,
}

/// One point in a facility's population trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityTrendPoint {
    /// Month key (`"YYYY-MM"`).
    pub month: String,
    /// Population count for that month, 0 where no data is stored.
    pub population: u64,
}

/// A facility's population change between two months.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityChange {
    /// The facility, in compact form.
    pub facility: CompactFacility,
    /// Population at the earlier month.
    pub from_population: u64,
    /// Population at the later month.
    pub to_population: u64,
    /// Signed difference, `to - from`.
    pub change: i64,
    /// Percent change relative to the earlier month; 0 when the
    /// baseline is zero.
    pub change_percent: f64,
}

/// A month selector option: raw key plus display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthOption {
    /// Month key (`"YYYY-MM"`).
    pub value: String,
    /// Display label (e.g. `"January 2024"`).
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_payload_decodes_short_keys() {
        let payload: CompactMonthlyData = serde_json::from_str(
            r#"{
                "meta": {
                    "v": 1,
                    "t": "2024-03-01",
                    "f": 1,
                    "m": ["2024-01", "2024-02"],
                    "l": "2024-02",
                    "d": "test"
                },
                "facilities": [
                    { "i": 7, "n": "Riverside", "lat": 40.0, "lng": -75.0, "a": "1 River Rd" }
                ],
                "data": { "7": [3, 9] }
            }"#,
        )
        .unwrap();

        assert_eq!(payload.meta.months.len(), 2);
        assert_eq!(payload.meta.latest_month, "2024-02");
        assert_eq!(payload.facilities[0].id, 7);
        assert_eq!(payload.facilities[0].name, "Riverside");
        assert_eq!(payload.data.get(&7), Some(&vec![3, 9]));
    }

    #[test]
    fn missing_description_defaults_to_empty() {
        let meta: CompactMeta = serde_json::from_str(
            r#"{ "v": 1, "t": "now", "f": 0, "m": [], "l": "" }"#,
        )
        .unwrap();
        assert_eq!(meta.description, "");
    }

    #[test]
    fn slice_entries_serialize_camel_case() {
        let entry = MonthlyFacilityData {
            id: 1,
            name: "Riverside".to_string(),
            latitude: 40.0,
            longitude: -75.0,
            address: "1 River Rd".to_string(),
            population_count: 12,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["populationCount"], 12);
        assert_eq!(json["latitude"], 40.0);
    }
}
