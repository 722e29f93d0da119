#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Render-layer descriptor types for the facility density map.
//!
//! These are the data contracts handed to the external map renderer: a
//! continuous density surface plus a discrete, pickable marker layer.
//! The descriptors carry data and resolved visual state only; rendering
//! mechanics live entirely in the consumer.

use facility_map_monthly_models::MonthlyFacilityData;
use serde::{Deserialize, Serialize};

/// An RGB color, one channel per byte.
pub type Rgb = [u8; 3];

/// An RGBA color, one channel per byte.
pub type Rgba = [u8; 4];

/// A geographic point weighted for density aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedPoint {
    /// `[longitude, latitude]` position.
    pub position: [f64; 2],
    /// Aggregation weight (the facility's population count).
    pub weight: f64,
    /// The facility behind this point, for tooltips and popups.
    pub facility: MonthlyFacilityData,
}

/// How overlapping point weights combine in the density surface.
///
/// The token values are frozen by the renderer contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WeightAggregation {
    /// Overlapping weights add together.
    Sum,
    /// Overlapping weights average.
    Mean,
}

/// Continuous density surface built from all weighted points.
///
/// Tuning values (radius, intensity, threshold) are fixed configuration
/// constants, never computed from the data distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DensityLayer {
    /// Layer identifier for the renderer.
    pub id: String,
    /// Weighted points feeding the surface.
    pub points: Vec<WeightedPoint>,
    /// Pixel radius of each point's contribution.
    pub radius_pixels: f64,
    /// Overall surface intensity multiplier.
    pub intensity: f64,
    /// Weight threshold below which nothing is drawn.
    pub threshold: f64,
    /// Color ramp from lowest to highest density.
    pub color_range: Vec<Rgb>,
    /// Weight combination mode. The density surface always uses
    /// [`WeightAggregation::Sum`].
    pub aggregation: WeightAggregation,
    /// Whether the surface reports picks. Tooltip only — interaction
    /// events come exclusively from the marker layer.
    pub pickable: bool,
}

/// One discrete marker with resolved visual state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    /// `[longitude, latitude]` position.
    pub position: [f64; 2],
    /// The facility behind this marker.
    pub facility: MonthlyFacilityData,
    /// Marker radius in meters.
    pub radius: f64,
    /// Fill color.
    pub fill_color: Rgba,
    /// Outline color.
    pub line_color: Rgba,
    /// Outline width; zero for non-highlighted markers.
    pub line_width: f64,
}

/// Discrete marker layer; the exclusive source of hover/click picks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerLayer {
    /// Layer identifier for the renderer.
    pub id: String,
    /// One marker per projected point, in input order.
    pub markers: Vec<Marker>,
    /// Marker layers are always pickable.
    pub pickable: bool,
}

/// A render layer descriptor consumed by the external map renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RenderLayer {
    /// Continuous density surface.
    Density(DensityLayer),
    /// Discrete interactive markers.
    Markers(MarkerLayer),
}
