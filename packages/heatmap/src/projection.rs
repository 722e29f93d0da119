//! Month-slice to weighted-point projection.

use facility_map_heatmap_models::WeightedPoint;
use facility_map_monthly_models::MonthlyFacilityData;

/// Returns `true` if a facility's coordinates are plottable.
///
/// Zero is the upstream sentinel for "unknown location"; plotting it
/// would anchor a density spike at the null geographic origin.
#[allow(clippy::float_cmp)]
fn has_plottable_position(facility: &MonthlyFacilityData) -> bool {
    facility.latitude.is_finite()
        && facility.longitude.is_finite()
        && facility.latitude != 0.0
        && facility.longitude != 0.0
}

/// Projects a month slice into weighted geographic points.
///
/// Entries with sentinel or non-finite coordinates are dropped, as are
/// entries without a strictly positive population count. The positivity
/// re-check is intentional: projection accepts slices from any source,
/// not only the query engine, and both filters are normal anticipated
/// cases rather than errors. Output order follows input order.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn project_slice(slice: &[MonthlyFacilityData]) -> Vec<WeightedPoint> {
    slice
        .iter()
        .filter(|facility| has_plottable_position(facility) && facility.population_count > 0)
        .map(|facility| WeightedPoint {
            position: [facility.longitude, facility.latitude],
            weight: facility.population_count as f64,
            facility: facility.clone(),
        })
        .collect()
}
