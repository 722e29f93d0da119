//! Query functions over the compact monthly dataset.
//!
//! All queries are pure reads over the store, deterministic given the
//! store and their parameters. Month keys are matched exactly against
//! the payload's month list; an unknown key is "no data", never an
//! error.

use std::cmp::Reverse;

use facility_map_monthly_models::{
    FacilityChange, FacilityTrendPoint, MonthOption, MonthlyFacilityData,
};

use crate::MonthlyStore;

/// Default number of entries returned by
/// [`MonthlyStore::top_facilities_for_month`].
pub const DEFAULT_TOP_LIMIT: usize = 10;

impl MonthlyStore {
    fn month_index(&self, month_year: &str) -> Option<usize> {
        self.payload()
            .meta
            .months
            .iter()
            .position(|month| month == month_year)
    }

    /// Returns the slice of facilities with a strictly positive
    /// population count for the given month, in facility order.
    ///
    /// An unknown month key yields an empty slice and a warning.
    /// Facilities without a population array, and array entries missing
    /// for the month index, count as zero and are excluded.
    #[must_use]
    pub fn facilities_for_month(&self, month_year: &str) -> Vec<MonthlyFacilityData> {
        let Some(month_index) = self.month_index(month_year) else {
            log::warn!("Month {month_year} not found in available months");
            return Vec::new();
        };

        let payload = self.payload();
        let mut facilities = Vec::new();

        for facility in &payload.facilities {
            let Some(populations) = payload.data.get(&facility.id) else {
                continue;
            };
            let population_count = populations.get(month_index).copied().unwrap_or(0);
            if population_count > 0 {
                facilities.push(MonthlyFacilityData {
                    id: facility.id,
                    name: facility.name.clone(),
                    latitude: facility.latitude,
                    longitude: facility.longitude,
                    address: facility.address.clone(),
                    population_count,
                });
            }
        }

        facilities
    }

    /// Returns all available month keys, ascending.
    #[must_use]
    pub fn available_months(&self) -> &[String] {
        &self.payload().meta.months
    }

    /// Returns the latest available month key.
    #[must_use]
    pub fn latest_month(&self) -> &str {
        &self.payload().meta.latest_month
    }

    /// Returns the number of facilities with population data for the
    /// given month.
    #[must_use]
    pub fn facility_count_for_month(&self, month_year: &str) -> usize {
        self.facilities_for_month(month_year).len()
    }

    /// Returns the top facilities by population for the given month,
    /// largest first, truncated to `limit`.
    ///
    /// The sort is stable: facilities with equal counts keep their
    /// original order.
    #[must_use]
    pub fn top_facilities_for_month(
        &self,
        month_year: &str,
        limit: usize,
    ) -> Vec<MonthlyFacilityData> {
        let mut facilities = self.facilities_for_month(month_year);
        facilities.sort_by_key(|facility| Reverse(facility.population_count));
        facilities.truncate(limit);
        facilities
    }

    /// Returns the total population across all facilities for the given
    /// month, 0 when the month has no data.
    #[must_use]
    pub fn total_population_for_month(&self, month_year: &str) -> u64 {
        self.facilities_for_month(month_year)
            .iter()
            .map(|facility| facility.population_count)
            .sum()
    }

    /// Returns the population trend for a facility across all months.
    ///
    /// The result always has one entry per available month; a facility
    /// with no stored array yields a zero-filled trend so "no data"
    /// charts render uniformly.
    #[must_use]
    pub fn facility_trend(&self, facility_id: i64) -> Vec<FacilityTrendPoint> {
        let payload = self.payload();
        let populations = payload.data.get(&facility_id);

        payload
            .meta
            .months
            .iter()
            .enumerate()
            .map(|(index, month)| FacilityTrendPoint {
                month: month.clone(),
                population: populations
                    .and_then(|values| values.get(index))
                    .copied()
                    .unwrap_or(0),
            })
            .collect()
    }

    /// Returns facilities whose population changed between two months,
    /// sorted by the magnitude of the change, largest first.
    ///
    /// If either month key is unknown the result is empty. Facilities
    /// whose two values are equal are skipped. The percent change is
    /// defined as 0 when the baseline is zero.
    #[must_use]
    pub fn facilities_with_changes(&self, from_month: &str, to_month: &str) -> Vec<FacilityChange> {
        let (Some(from_index), Some(to_index)) =
            (self.month_index(from_month), self.month_index(to_month))
        else {
            return Vec::new();
        };

        let payload = self.payload();
        let mut changes = Vec::new();

        for facility in &payload.facilities {
            let Some(populations) = payload.data.get(&facility.id) else {
                continue;
            };
            let from_population = populations.get(from_index).copied().unwrap_or(0);
            let to_population = populations.get(to_index).copied().unwrap_or(0);
            if from_population == to_population {
                continue;
            }

            #[allow(clippy::cast_possible_wrap)]
            let change = to_population as i64 - from_population as i64;
            #[allow(clippy::cast_precision_loss)]
            let change_percent = if from_population > 0 {
                change as f64 / from_population as f64 * 100.0
            } else {
                0.0
            };

            changes.push(FacilityChange {
                facility: facility.clone(),
                from_population,
                to_population,
                change,
                change_percent,
            });
        }

        changes.sort_by_key(|change| Reverse(change.change.unsigned_abs()));
        changes
    }

    /// Returns month selector options, most recent first, with
    /// display-formatted labels.
    #[must_use]
    pub fn month_options(&self) -> Vec<MonthOption> {
        self.payload()
            .meta
            .months
            .iter()
            .rev()
            .map(|month| MonthOption {
                value: month.clone(),
                label: format_month_year(month),
            })
            .collect()
    }
}

/// Formats a `"YYYY-MM"` month key for display (e.g. `"January 2024"`).
///
/// Keys should be drawn from [`MonthlyStore::available_months`]; a key
/// that does not parse is returned unchanged.
#[must_use]
pub fn format_month_year(month_year: &str) -> String {
    chrono::NaiveDate::parse_from_str(&format!("{month_year}-01"), "%Y-%m-%d").map_or_else(
        |_| month_year.to_string(),
        |date| date.format("%B %Y").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{DEFAULT_TOP_LIMIT, format_month_year};
    use crate::MonthlyStore;

    fn store() -> MonthlyStore {
        MonthlyStore::from_value(json!({
            "meta": {
                "v": 1,
                "t": "2024-03-01T00:00:00Z",
                "f": 4,
                "m": ["2024-01", "2024-02"],
                "l": "2024-02",
                "d": "test payload"
            },
            "facilities": [
                { "i": 1, "n": "Origin Hold", "lat": 0.0, "lng": 0.0, "a": "" },
                { "i": 2, "n": "Riverside", "lat": 40.0, "lng": -75.0, "a": "1 River Rd" },
                { "i": 3, "n": "Hilltop", "lat": 35.2, "lng": -80.8, "a": "9 Hill St" },
                { "i": 4, "n": "Flatline", "lat": 33.0, "lng": -90.0, "a": "2 Flat Ave" }
            ],
            "data": {
                "1": [5, 0],
                "2": [0, 12],
                "3": [100, 150],
                "4": [7, 7]
            }
        }))
        .unwrap()
    }

    #[test]
    fn slice_includes_only_positive_counts() {
        let slice = store().facilities_for_month("2024-01");
        let ids: Vec<i64> = slice.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 3, 4]);
        assert_eq!(slice[0].population_count, 5);
        assert_eq!(slice[1].population_count, 100);
    }

    #[test]
    fn slice_picks_up_facilities_as_they_gain_population() {
        let store = store();
        let january: Vec<i64> = store
            .facilities_for_month("2024-01")
            .iter()
            .map(|f| f.id)
            .collect();
        assert!(!january.contains(&2));

        let february = store.facilities_for_month("2024-02");
        let riverside = february.iter().find(|f| f.id == 2).unwrap();
        assert_eq!(riverside.population_count, 12);
    }

    #[test]
    fn unknown_month_yields_empty_results() {
        let store = store();
        assert!(store.facilities_for_month("2030-01").is_empty());
        assert_eq!(store.total_population_for_month("2030-01"), 0);
        assert!(store.top_facilities_for_month("2030-01", 5).is_empty());
        assert_eq!(store.facility_count_for_month("2030-01"), 0);
    }

    #[test]
    fn total_matches_slice_sum() {
        let store = store();
        for month in store.available_months().to_vec() {
            let sum: u64 = store
                .facilities_for_month(&month)
                .iter()
                .map(|f| f.population_count)
                .sum();
            assert_eq!(store.total_population_for_month(&month), sum);
        }
    }

    #[test]
    fn top_is_a_sorted_prefix_of_the_slice() {
        let store = store();
        let top = store.top_facilities_for_month("2024-01", 2);
        let ids: Vec<i64> = top.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![3, 4]);

        let all = store.top_facilities_for_month("2024-01", DEFAULT_TOP_LIMIT);
        assert_eq!(all.len(), 3);
        assert!(
            all.windows(2)
                .all(|pair| pair[0].population_count >= pair[1].population_count)
        );
    }

    #[test]
    fn top_tie_break_preserves_facility_order() {
        let store = MonthlyStore::from_value(json!({
            "meta": { "v": 1, "t": "now", "f": 2, "m": ["2024-01"], "l": "2024-01", "d": "" },
            "facilities": [
                { "i": 9, "n": "First", "lat": 1.0, "lng": 1.0, "a": "" },
                { "i": 8, "n": "Second", "lat": 2.0, "lng": 2.0, "a": "" }
            ],
            "data": { "9": [10], "8": [10] }
        }))
        .unwrap();

        let top = store.top_facilities_for_month("2024-01", 2);
        let ids: Vec<i64> = top.iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![9, 8]);
    }

    #[test]
    fn trend_always_spans_every_month() {
        let store = store();

        let riverside = store.facility_trend(2);
        assert_eq!(riverside.len(), 2);
        assert_eq!(riverside[0].population, 0);
        assert_eq!(riverside[1].population, 12);
        assert_eq!(riverside[0].month, "2024-01");

        let unknown = store.facility_trend(999);
        assert_eq!(unknown.len(), 2);
        assert!(unknown.iter().all(|point| point.population == 0));
    }

    #[test]
    fn changes_skip_equal_values_and_sort_by_magnitude() {
        let changes = store().facilities_with_changes("2024-01", "2024-02");
        let ids: Vec<i64> = changes.iter().map(|c| c.facility.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);

        let hilltop = &changes[0];
        assert_eq!(hilltop.change, 50);
        assert!((hilltop.change_percent - 50.0).abs() < f64::EPSILON);

        let riverside = &changes[1];
        assert_eq!(riverside.change, 12);
        assert!(riverside.change_percent.abs() < f64::EPSILON);

        let origin = &changes[2];
        assert_eq!(origin.change, -5);
        assert!((origin.change_percent + 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn changes_with_unknown_month_are_empty() {
        let store = store();
        assert!(store.facilities_with_changes("2030-01", "2024-02").is_empty());
        assert!(store.facilities_with_changes("2024-01", "2030-01").is_empty());
    }

    #[test]
    fn month_options_are_most_recent_first() {
        let options = store().month_options();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].value, "2024-02");
        assert_eq!(options[0].label, "February 2024");
        assert_eq!(options[1].value, "2024-01");
        assert_eq!(options[1].label, "January 2024");
    }

    #[test]
    fn latest_month_and_available_months_come_from_meta() {
        let store = store();
        assert_eq!(store.latest_month(), "2024-02");
        assert_eq!(store.available_months(), ["2024-01", "2024-02"]);
    }

    #[test]
    fn format_month_year_is_long_form() {
        assert_eq!(format_month_year("2024-01"), "January 2024");
        assert_eq!(format_month_year("2019-12"), "December 2019");
    }

    #[test]
    fn format_month_year_passes_malformed_keys_through() {
        assert_eq!(format_month_year("not-a-month"), "not-a-month");
        assert_eq!(format_month_year(""), "");
    }
}
