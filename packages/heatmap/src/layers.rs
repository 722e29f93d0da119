//! Render-layer construction.
//!
//! Builds the density surface and marker overlay from projected points.
//! Tuning values are fixed constants, not derived from the data
//! distribution, so two renders of the same slice are always identical.

use facility_map_heatmap_models::{
    DensityLayer, Marker, MarkerLayer, RenderLayer, Rgb, Rgba, WeightAggregation, WeightedPoint,
};

use crate::interaction::InteractionState;

/// Density layer identifier.
pub const DENSITY_LAYER_ID: &str = "facility-density";

/// Marker layer identifier.
pub const MARKER_LAYER_ID: &str = "facility-markers";

/// Pixel radius of each point's contribution to the density surface,
/// tuned for sparse data.
pub const DENSITY_RADIUS_PIXELS: f64 = 30.0;

/// Density surface intensity multiplier.
pub const DENSITY_INTENSITY: f64 = 1.0;

/// Density threshold below which nothing is drawn.
pub const DENSITY_THRESHOLD: f64 = 0.05;

/// Default color ramp, light yellow through dark red.
pub const COLOR_RANGE: [Rgb; 9] = [
    [255, 255, 204],
    [255, 237, 160],
    [254, 217, 118],
    [254, 178, 76],
    [253, 141, 60],
    [252, 78, 42],
    [227, 26, 28],
    [189, 0, 38],
    [128, 0, 38],
];

/// Base marker radius in meters.
pub const MARKER_RADIUS: f64 = 5000.0;

/// Radius of the hovered marker.
pub const MARKER_RADIUS_HIGHLIGHTED: f64 = 8000.0;

/// Base marker fill.
pub const MARKER_FILL: Rgba = [255, 0, 0, 180];

/// Fill and outline color of the hovered marker.
pub const MARKER_FILL_HIGHLIGHTED: Rgba = [255, 165, 0, 255];

/// Transparent outline for non-highlighted markers.
pub const MARKER_LINE: Rgba = [0, 0, 0, 0];

/// Outline width of the hovered marker.
pub const MARKER_LINE_WIDTH_HIGHLIGHTED: f64 = 3.0;

/// Builds the render layers for one set of projected points.
///
/// Returns an empty sequence when there are no points — "no data", not
/// an error. Otherwise returns exactly two layers: the density surface
/// (summation aggregation) followed by the marker layer. Marker visual
/// state is a pure function of whether the marker's facility name
/// matches the hovered name in `interaction`.
#[must_use]
pub fn build_layers(
    points: &[WeightedPoint],
    interaction: &InteractionState,
    color_range: &[Rgb],
) -> Vec<RenderLayer> {
    if points.is_empty() {
        return Vec::new();
    }

    let markers = points
        .iter()
        .map(|point| {
            let highlighted = interaction.is_hovered(&point.facility.name);
            Marker {
                position: point.position,
                facility: point.facility.clone(),
                radius: if highlighted {
                    MARKER_RADIUS_HIGHLIGHTED
                } else {
                    MARKER_RADIUS
                },
                fill_color: if highlighted {
                    MARKER_FILL_HIGHLIGHTED
                } else {
                    MARKER_FILL
                },
                line_color: if highlighted {
                    MARKER_FILL_HIGHLIGHTED
                } else {
                    MARKER_LINE
                },
                line_width: if highlighted {
                    MARKER_LINE_WIDTH_HIGHLIGHTED
                } else {
                    0.0
                },
            }
        })
        .collect();

    vec![
        RenderLayer::Density(DensityLayer {
            id: DENSITY_LAYER_ID.to_string(),
            points: points.to_vec(),
            radius_pixels: DENSITY_RADIUS_PIXELS,
            intensity: DENSITY_INTENSITY,
            threshold: DENSITY_THRESHOLD,
            color_range: color_range.to_vec(),
            aggregation: WeightAggregation::Sum,
            pickable: true,
        }),
        RenderLayer::Markers(MarkerLayer {
            id: MARKER_LAYER_ID.to_string(),
            markers,
            pickable: true,
        }),
    ]
}
