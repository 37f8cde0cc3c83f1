//! # Parsed Building
//!
//! `ParsedBuilding` is the derived, numeric view of a [`BuildingInput`]:
//! dimensions resolved from list notation, the slope profile, design
//! pressures and the governing frame load. The input itself is never
//! mutated; this struct is computed once at the head of the pipeline and
//! read by every generator after it.

use serde::{Deserialize, Serialize};

use crate::input::BuildingInput;
use crate::parser::list::{get_building_dimension, get_list, ParsedList};
use crate::parser::slope::{calculate_slope_profile, SlopeProfile};
use crate::quickest;

/// Derived building geometry and governing loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ParsedBuilding {
    /// Building width across the spans, meters
    pub width: f64,

    /// Building length along the bays, meters
    pub length: f64,

    /// Number of frame spans across the width
    pub num_spans: f64,

    /// Governing (largest) span, meters
    pub max_span: f64,

    /// Spans as parsed
    pub span_list: ParsedList,

    /// Number of bays along the length
    pub num_bays: f64,

    /// Typical bay spacing, meters
    pub bay_spacing: f64,

    /// Back/front eave heights, meters
    pub back_eave: f64,
    pub front_eave: f64,

    /// Roof geometry
    pub profile: SlopeProfile,

    /// Design wind pressure, kN/m² (0.0000473 · V² with V in km/h)
    pub wind_pressure: f64,

    /// Gravity floor load: dead + live + collateral, kN/m²
    pub floor_load: f64,

    /// Governing frame load: `max(floor, 0.75·(wind − dead))`, kN/m²
    pub governing_load: f64,

    /// Minimum fabricable frame weight per meter, kg/m
    pub mwplm: f64,

    /// Footprint area, m²
    pub building_area: f64,

    /// Sloped roof area, m²
    pub roof_area: f64,
}

impl ParsedBuilding {
    /// Resolve an input into its derived geometry.
    pub fn from_input(input: &BuildingInput) -> Self {
        let span_dim = get_building_dimension(&input.spans);
        let width = if span_dim.total > 0.0 {
            span_dim.total
        } else {
            span_dim.max_span
        };
        let num_spans = span_dim.bay_count.max(1.0);

        let bay_dim = get_building_dimension(&input.bays);
        let length = if bay_dim.total > 0.0 {
            bay_dim.total
        } else {
            bay_dim.max_span
        };
        let num_bays = bay_dim.bay_count.max(1.0);
        let bay_spacing = if bay_dim.bay_spacing > 0.0 {
            bay_dim.bay_spacing
        } else {
            bay_dim.max_span
        };

        let profile = calculate_slope_profile(
            &get_list(&input.slopes),
            width,
            input.back_eave_height,
            input.front_eave_height,
        );

        let wind_pressure = 0.0000473 * input.wind_speed * input.wind_speed;
        let floor_load = input.dead_load + input.live_load + input.collateral_load;
        let governing_load = floor_load.max(0.75 * (wind_pressure - input.dead_load));

        ParsedBuilding {
            width,
            length,
            num_spans,
            max_span: span_dim.max_span,
            span_list: get_list(&input.spans),
            num_bays,
            bay_spacing,
            back_eave: input.back_eave_height,
            front_eave: input.front_eave_height,
            wind_pressure,
            floor_load,
            governing_load,
            mwplm: quickest::min_weight_per_meter(input.min_web_thickness),
            building_area: width * length,
            roof_area: profile.rafter_length * length,
            profile,
        }
    }

    /// Mean eave height, meters.
    pub fn mean_eave(&self) -> f64 {
        (self.back_eave + self.front_eave) / 2.0
    }

    /// Physical wall area for an opening location string.
    ///
    /// Sidewalls get length × their eave height; endwalls get the sloped
    /// endwall area from the profile.
    pub fn wall_area(&self, location: &str) -> f64 {
        match location {
            "Back Sidewall" => self.length * self.back_eave,
            "Front Sidewall" => self.length * self.front_eave,
            "Left Endwall" | "Right Endwall" => self.profile.endwall_area,
            _ => self.length * self.mean_eave(),
        }
    }

    /// Default full-opening width/height for a wall location (used by
    /// openings of kind "Full" entered with zero size).
    pub fn full_opening_size(&self, location: &str) -> (f64, f64) {
        match location {
            "Back Sidewall" => (self.length, self.back_eave),
            "Front Sidewall" => (self.length, self.front_eave),
            "Left Endwall" | "Right Endwall" => (self.width, self.mean_eave()),
            _ => (self.length, self.mean_eave()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> BuildingInput {
        BuildingInput {
            spans: "1@24".to_string(),
            bays: "4@6".to_string(),
            back_eave_height: 6.0,
            front_eave_height: 6.0,
            wind_speed: 130.0,
            ..BuildingInput::default()
        }
    }

    #[test]
    fn test_dimensions_resolve() {
        let b = ParsedBuilding::from_input(&scenario());
        assert_eq!(b.width, 24.0);
        assert_eq!(b.length, 24.0);
        assert_eq!(b.num_bays, 4.0);
        assert_eq!(b.bay_spacing, 6.0);
        assert_eq!(b.building_area, 576.0);
    }

    #[test]
    fn test_governing_load_wind_vs_gravity() {
        let mut input = scenario();
        let gravity = ParsedBuilding::from_input(&input);
        assert_eq!(gravity.governing_load, gravity.floor_load);

        input.wind_speed = 260.0;
        input.live_load = 0.0;
        let windy = ParsedBuilding::from_input(&input);
        assert!(windy.governing_load > windy.floor_load);
        assert!(
            (windy.governing_load - 0.75 * (windy.wind_pressure - input.dead_load)).abs() < 1e-12
        );
    }

    #[test]
    fn test_bare_number_dimensions() {
        let mut input = scenario();
        input.bays = "30".to_string();
        let b = ParsedBuilding::from_input(&input);
        assert_eq!(b.length, 30.0);
        assert_eq!(b.num_bays, 1.0);
        assert_eq!(b.bay_spacing, 30.0);
    }

    #[test]
    fn test_wall_areas() {
        let b = ParsedBuilding::from_input(&scenario());
        assert_eq!(b.wall_area("Front Sidewall"), 144.0);
        assert!(b.wall_area("Left Endwall") > 24.0 * 6.0 - 1.0);
        let (w, h) = b.full_opening_size("Back Sidewall");
        assert_eq!((w, h), (24.0, 6.0));
    }
}
