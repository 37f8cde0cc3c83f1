//! # Building Input
//!
//! `BuildingInput` is the flat field mapping an estimation run starts from.
//! It mirrors the quotation entry form of the legacy estimating sheet: every
//! field has a default literal, so a near-empty (even fully empty) input still
//! produces a meaningful single-span building estimate. The struct is never
//! mutated by the pipeline; parsing produces derived values held elsewhere.
//!
//! Spacing fields ("spans", "bays", "slopes") use the legacy list notation:
//! `count@value` groups joined by commas, e.g. `"1@6+2@9"` (`+` and several
//! other characters are accepted as separators, see [`crate::parser::list`]).
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "quote_number": "Q-26-0412",
//!   "customer": "Desert Logistics Co",
//!   "spans": "1@24",
//!   "bays": "4@6",
//!   "back_eave_height": 6.0,
//!   "front_eave_height": 6.0,
//!   "frame_type": "Clear Span",
//!   "base_type": "Pinned Base",
//!   "wind_speed": 130.0,
//!   "roof_top_skin": "M45-250 AZ 0.5",
//!   "wall_top_skin": "M45-250 AZ 0.5",
//!   "openings": [
//!     { "location": "Front Sidewall", "width": 4.0, "height": 4.5, "kind": "Sliding Door" }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Maximum number of opening descriptors honored per building.
///
/// The legacy entry sheet has nine opening rows; extra entries are ignored.
pub const MAX_OPENINGS: usize = 9;

/// One framed opening (door, window, open area) in a wall or the roof.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Opening {
    /// Wall location: "Front Sidewall", "Back Sidewall", "Left Endwall",
    /// "Right Endwall"
    #[serde(default = "default_opening_location")]
    pub location: String,

    /// Clear width in meters. 0 with `kind` "Full" means full wall width.
    #[serde(default)]
    pub width: f64,

    /// Clear height in meters. 0 with `kind` "Full" means full wall height.
    #[serde(default)]
    pub height: f64,

    /// Opening kind: "Sliding Door", "Roll-Up Door", "Window", "Louver",
    /// "Open Area", "Full"
    #[serde(default = "default_opening_kind")]
    pub kind: String,

    /// Count of identical openings of this size at this location
    #[serde(default = "default_one")]
    pub qty: f64,

    /// Whether the opening needs extra purlin/girt framing support
    #[serde(default)]
    pub purlin_support: bool,

    /// Whether the opening displaces a braced panel (forces portal bracing)
    #[serde(default)]
    pub bracing: bool,
}

impl Default for Opening {
    fn default() -> Self {
        Opening {
            location: default_opening_location(),
            width: 0.0,
            height: 0.0,
            kind: default_opening_kind(),
            qty: 1.0,
            purlin_support: false,
            bracing: false,
        }
    }
}

/// One requested accessory line: a catalog product code plus quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AccessoryRequest {
    /// Catalog product code (e.g. "TURBOVENT", "SKY-3660")
    #[serde(default)]
    pub code: String,

    /// Quantity in the product's catalog unit
    #[serde(default = "default_one")]
    pub qty: f64,

    /// Optional free-text description overriding the catalog description
    #[serde(default)]
    pub description: String,
}

/// Flat building description driving the whole estimation pipeline.
///
/// Field defaults reproduce the legacy sheet's seed values; the pipeline is
/// designed to run meaningfully even on `BuildingInput::default()`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BuildingInput {
    // ------------------------------------------------------------------
    // Job metadata
    // ------------------------------------------------------------------
    /// Quotation number (free text, carried into reports)
    pub quote_number: String,

    /// Customer name
    pub customer: String,

    /// Job number used by the ERP export header (9 chars, space padded)
    pub job_number: String,

    /// Building identifier within the job (10 chars in the ERP header)
    pub building_id: String,

    /// Contract value for the ERP header; 0 means "use FOB price"
    pub contract_value: f64,

    /// Contract date as dd-mm-yyyy; empty means today at export time
    pub contract_date: String,

    /// Fiscal year stamped on every ERP line
    pub fiscal_year: u32,

    // ------------------------------------------------------------------
    // Dimensions
    // ------------------------------------------------------------------
    /// Span list across the width, list notation (default one 28.5 m span)
    pub spans: String,

    /// Bay spacing list along the length, list notation
    pub bays: String,

    /// Roof slope list as `width@slope` groups, slope in x:10.
    /// A group width of exactly 1 means half the building width.
    pub slopes: String,

    /// Eave height at the back sidewall, meters
    pub back_eave_height: f64,

    /// Eave height at the front sidewall, meters
    pub front_eave_height: f64,

    // ------------------------------------------------------------------
    // Structural options
    // ------------------------------------------------------------------
    /// "Clear Span", "Multi Span", "Lean To", "Roof System"
    pub frame_type: String,

    /// "Pinned Base" or "Fixed Base"
    pub base_type: String,

    /// "Cable", "Rod", "Angle", "Portal", "None"
    pub wall_bracing_type: String,

    /// "Cable", "Rod", "Angle", "None"
    pub roof_bracing_type: String,

    /// Secondary-member finish: "Painted" or "Galvanized"
    pub finish: String,

    /// Minimum built-up web thickness in mm (drives the mwplm floor)
    pub min_web_thickness: f64,

    /// Interior column spacing list for Multi Span frames, list notation
    pub interior_columns: String,

    // ------------------------------------------------------------------
    // Loads
    // ------------------------------------------------------------------
    /// Dead load, kN/m²
    pub dead_load: f64,

    /// Roof live load, kN/m²
    pub live_load: f64,

    /// Collateral load (suspended services), kN/m²
    pub collateral_load: f64,

    /// Design wind speed, km/h
    pub wind_speed: f64,

    // ------------------------------------------------------------------
    // Sheeting & insulation
    // ------------------------------------------------------------------
    /// Roof outer skin selector: catalog panel description or "None"
    pub roof_top_skin: String,

    /// Wall outer skin selector: catalog panel description or "None"
    pub wall_top_skin: String,

    /// Roof panel profile name; "M45-250" has full-coverage width, every
    /// other profile carries a 0.9 coverage correction
    pub roof_panel_profile: String,

    /// Wall panel profile name
    pub wall_panel_profile: String,

    /// Roof insulation selector: catalog code or "None"
    pub roof_insulation: String,

    /// Wall insulation selector: catalog code or "None"
    pub wall_insulation: String,

    /// Sandwich-panel core thickness in mm when a SWP skin is selected
    pub swp_thickness: f64,

    // ------------------------------------------------------------------
    // Openings & accessories
    // ------------------------------------------------------------------
    /// Up to [`MAX_OPENINGS`] opening descriptors; extras ignored
    pub openings: Vec<Opening>,

    /// Requested accessory lines (vents, skylights, doors by code)
    pub accessories: Vec<AccessoryRequest>,

    // ------------------------------------------------------------------
    // Paint & roof monitor
    // ------------------------------------------------------------------
    /// Paint system: "Standard Primer", "High Build", "Epoxy", "None"
    pub paint_system: String,

    /// Roof monitor throat width in meters; 0 means no monitor
    pub monitor_throat_width: f64,

    /// Roof monitor length in meters; 0 means full building length
    pub monitor_length: f64,

    // ------------------------------------------------------------------
    // Freight & commercial
    // ------------------------------------------------------------------
    /// Freight rate per truck load; 0 uses the catalog rate for FREIGHT
    pub freight_rate: f64,

    /// Explicit total loads override ("total loads" sheet line); 0 = computed
    pub total_loads_override: f64,

    /// Steel markup override (categories A-D); 0 uses the default 0.8089
    pub steel_markup: f64,

    /// Panel markup override (categories F-J); 0 uses the default 1.0
    pub panel_markup: f64,
}

impl Default for BuildingInput {
    fn default() -> Self {
        BuildingInput {
            quote_number: String::new(),
            customer: String::new(),
            job_number: String::new(),
            building_id: String::new(),
            contract_value: 0.0,
            contract_date: String::new(),
            fiscal_year: 2026,
            spans: "1@28.5".to_string(),
            bays: "5@7.6".to_string(),
            slopes: "1@1".to_string(),
            back_eave_height: 6.0,
            front_eave_height: 6.0,
            frame_type: "Clear Span".to_string(),
            base_type: "Pinned Base".to_string(),
            wall_bracing_type: "Cable".to_string(),
            roof_bracing_type: "Cable".to_string(),
            finish: "Painted".to_string(),
            min_web_thickness: 4.0,
            interior_columns: String::new(),
            dead_load: 0.1,
            live_load: 0.57,
            collateral_load: 0.0,
            wind_speed: 130.0,
            roof_top_skin: "M45-250 AZ 0.5".to_string(),
            wall_top_skin: "M45-250 AZ 0.5".to_string(),
            roof_panel_profile: "M45-250".to_string(),
            wall_panel_profile: "M45-250".to_string(),
            roof_insulation: "None".to_string(),
            wall_insulation: "None".to_string(),
            swp_thickness: 50.0,
            openings: Vec::new(),
            accessories: Vec::new(),
            paint_system: "Standard Primer".to_string(),
            monitor_throat_width: 0.0,
            monitor_length: 0.0,
            freight_rate: 0.0,
            total_loads_override: 0.0,
            steel_markup: 0.0,
            panel_markup: 0.0,
        }
    }
}

impl BuildingInput {
    /// True when the roof monitor fields describe an actual monitor.
    pub fn has_roof_monitor(&self) -> bool {
        self.monitor_throat_width > 0.0
    }

    /// Openings honored by the pipeline (the legacy nine-row cap).
    pub fn capped_openings(&self) -> &[Opening] {
        let n = self.openings.len().min(MAX_OPENINGS);
        &self.openings[..n]
    }
}

fn default_opening_location() -> String {
    "Front Sidewall".to_string()
}

fn default_opening_kind() -> String {
    "Open Area".to_string()
}

fn default_one() -> f64 {
    1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_meaningful() {
        let input = BuildingInput::default();
        assert_eq!(input.spans, "1@28.5");
        assert_eq!(input.frame_type, "Clear Span");
        assert!(input.back_eave_height > 0.0);
    }

    #[test]
    fn test_empty_json_deserializes_to_defaults() {
        let input: BuildingInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input, BuildingInput::default());
    }

    #[test]
    fn test_openings_capped_at_nine() {
        let mut input = BuildingInput::default();
        input.openings = vec![Opening::default(); 12];
        assert_eq!(input.capped_openings().len(), MAX_OPENINGS);
    }

    #[test]
    fn test_partial_json_keeps_other_defaults() {
        let input: BuildingInput =
            serde_json::from_str(r#"{"spans":"2@20","wind_speed":160.0}"#).unwrap();
        assert_eq!(input.spans, "2@20");
        assert_eq!(input.wind_speed, 160.0);
        assert_eq!(input.base_type, "Pinned Base");
    }
}
