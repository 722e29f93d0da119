//! Hover and click selection state for the rendered map.
//!
//! Owned exclusively by the rendering layer. Map marker picks and the
//! ranked facility list both write the same hover state, keeping the
//! two input surfaces visually synchronized. The two axes are
//! independent: clicking never clears hover and vice versa, and neither
//! expires on a timer.

use facility_map_monthly_models::MonthlyFacilityData;

/// Hovered/clicked selection state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    hovered_facility_name: Option<String>,
    clicked_facility: Option<MonthlyFacilityData>,
}

impl InteractionState {
    /// Creates an empty state: nothing hovered, nothing clicked.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the pointer entering a marker or ranked-list row.
    pub fn pointer_enter(&mut self, facility_name: impl Into<String>) {
        self.hovered_facility_name = Some(facility_name.into());
    }

    /// Clears the hover axis.
    pub fn pointer_leave(&mut self) {
        self.hovered_facility_name = None;
    }

    /// Records a click on a marker. Persists until [`Self::dismiss`].
    pub fn click(&mut self, facility: MonthlyFacilityData) {
        self.clicked_facility = Some(facility);
    }

    /// Clears the click axis.
    pub fn dismiss(&mut self) {
        self.clicked_facility = None;
    }

    /// The currently hovered facility name, if any.
    #[must_use]
    pub fn hovered_facility_name(&self) -> Option<&str> {
        self.hovered_facility_name.as_deref()
    }

    /// Returns `true` if the given facility name is the hovered one.
    #[must_use]
    pub fn is_hovered(&self, facility_name: &str) -> bool {
        self.hovered_facility_name.as_deref() == Some(facility_name)
    }

    /// The currently clicked facility, if any.
    #[must_use]
    pub const fn clicked_facility(&self) -> Option<&MonthlyFacilityData> {
        self.clicked_facility.as_ref()
    }
}
