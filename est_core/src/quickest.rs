//! # Quick Estimation Formulas
//!
//! The calibrated formulas and selection tables behind the quick estimate:
//! frame weights per meter, purlin/girt section selection, endwall column
//! selection, bracing counts, wind-strut distribution, portal weights and
//! the small wet-trade quantities (bead mastic, downspouts).
//!
//! Every function here is pure: numbers in, numbers (or catalog codes) out.
//! The tables are calibrated against fabricated-buildings history; boundary
//! values are inclusive upper bounds and indices past every tier select the
//! highest tier. Do not "improve" the constants - downstream pricing is
//! calibrated against them.

use crate::parser::codes::first_match;

// ============================================================================
// Section selection tables
// ============================================================================

/// Purlin/girt design-code selection by purlin design index.
///
/// `pd_index = load * tributary_span²` (kN/m² × m²). Eight tiers from
/// Z150x1.5 up to Z300x3.0; anything past the last threshold gets the
/// heaviest stocked section.
pub fn purlin_design_code(pd_index: f64) -> &'static str {
    const TIERS: [(f64, &str); 7] = [
        (14.0, "Z15015"),
        (20.0, "Z20015"),
        (26.0, "Z20018"),
        (32.0, "Z20020"),
        (40.0, "Z25020"),
        (48.0, "Z25025"),
        (58.0, "Z30025"),
    ];
    first_match(&TIERS, pd_index).unwrap_or("Z30030")
}

/// Endwall column code selection by column design index and finish.
///
/// `ec_index = wind pressure * tributary width * height²`-class index.
/// Eleven parallel tiers for painted and galvanized finishes (same sections,
/// different product codes).
pub fn endwall_column_code(ec_index: f64, galvanized: bool) -> &'static str {
    const PAINTED: [(f64, &str); 10] = [
        (30.0, "EC150P"),
        (55.0, "EC200P"),
        (85.0, "EC250P"),
        (120.0, "EC300P"),
        (160.0, "EC350P"),
        (205.0, "EC400P"),
        (255.0, "EC450P"),
        (310.0, "EC500P"),
        (370.0, "EC550P"),
        (435.0, "EC600P"),
    ];
    const GALVANIZED: [(f64, &str); 10] = [
        (30.0, "EC150G"),
        (55.0, "EC200G"),
        (85.0, "EC250G"),
        (120.0, "EC300G"),
        (160.0, "EC350G"),
        (205.0, "EC400G"),
        (255.0, "EC450G"),
        (310.0, "EC500G"),
        (370.0, "EC550G"),
        (435.0, "EC600G"),
    ];
    if galvanized {
        first_match(&GALVANIZED, ec_index).unwrap_or("EC650G")
    } else {
        first_match(&PAINTED, ec_index).unwrap_or("EC650P")
    }
}

// ============================================================================
// Frame weight formulas
// ============================================================================

/// Rigid frame weight per meter of rafter run.
///
/// `(0.1·load·tributary_bay + 0.3)·(2·span − 9)` kg/m. Negative for small
/// spans; callers clamp against [`min_weight_per_meter`], not this function.
pub fn frame_weight_per_meter(load: f64, tributary_bay: f64, span: f64) -> f64 {
    (0.1 * load * tributary_bay + 0.3) * (2.0 * span - 9.0)
}

/// Minimum fabricable frame weight per meter (mwplm) from the minimum
/// built-up web thickness in mm: `sqrt(t/3.5)·18.5` kg/m.
pub fn min_weight_per_meter(min_web_thickness: f64) -> f64 {
    (min_web_thickness / 3.5).sqrt() * 18.5
}

/// Fixed-base weight multiplier.
///
/// 1.0 unless the base is fixed with a positive eave height, in which case
/// `(12/eave)^0.15` - short fixed-base columns attract moment and weight.
pub fn fixed_base_index(base_type: &str, eave_height: f64) -> f64 {
    if base_type == "Fixed Base" && eave_height > 0.0 {
        (12.0 / eave_height).powf(0.15)
    } else {
        1.0
    }
}

/// Portal frame weight: the sizing formula floored at the minimum
/// fabricable portal. The floor is a structural minimum, not a default.
pub fn portal_frame_weight(bay_spacing: f64, eave_height: f64) -> f64 {
    let formula_weight = (2.0 * eave_height + bay_spacing) * 11.0;
    let minimum_weight = 350.0;
    formula_weight.max(minimum_weight)
}

// ============================================================================
// Bracing & struts
// ============================================================================

/// Number of braced bays along the length: `round(num_bays/5 + 1)`.
pub fn bracing_bay_count(num_bays: f64) -> f64 {
    (num_bays / 5.0 + 1.0).round()
}

/// Braced panels per braced bay: an eave-height term plus a width term,
/// plus the front-eave term except on Lean To frames (their low side ties
/// into the host building).
pub fn bracing_panel_count(
    back_eave: f64,
    front_eave: f64,
    width: f64,
    frame_type: &str,
) -> f64 {
    let mut panels = (back_eave / 6.0).ceil() + (width / 24.0).ceil();
    if frame_type != "Lean To" {
        panels += (front_eave / 6.0).ceil();
    }
    panels
}

/// Index decrement per wind-strut distribution cycle.
const STRUT_INDEX_DECREMENT: f64 = 3.0;

/// Distribute wind struts across the five tube-size buckets.
///
/// All struts start in the largest size. The loop walks `strut_index` down
/// through the demand bands (10/20/30/40); each cycle moves two struts from
/// the current band's bucket into the next smaller one and subtracts a fixed
/// decrement from the index. Terminates because the decrement is positive.
/// Bucket order is smallest (TUB-100) to largest (TUB-200).
pub fn wind_strut_buckets(total_struts: f64, strut_index: f64) -> [f64; 5] {
    let mut buckets = [0.0; 5];
    buckets[4] = total_struts;
    let mut index = strut_index;
    while index > 4.0 {
        let band = if index > 40.0 {
            4
        } else if index > 30.0 {
            3
        } else if index > 20.0 {
            2
        } else if index > 10.0 {
            1
        } else {
            0
        };
        if band > 0 && buckets[band] >= 2.0 {
            buckets[band] -= 2.0;
            buckets[band - 1] += 2.0;
        }
        index -= STRUT_INDEX_DECREMENT;
    }
    buckets
}

/// Catalog codes matching the [`wind_strut_buckets`] positions.
pub const STRUT_CODES: [&str; 5] = ["TUB-100", "TUB-125", "TUB-150", "TUB-175", "TUB-200"];

// ============================================================================
// Wet-trade quantities
// ============================================================================

/// Bead mastic rolls for a total side-lap length (15 m per roll, rounded up).
pub fn bead_mastic_rolls(lap_length: f64) -> f64 {
    if lap_length <= 0.0 {
        0.0
    } else {
        (lap_length / 15.0).ceil()
    }
}

/// Downspouts per building: one per started 12 m of eave, both sidewalls.
pub fn downspout_count(building_length: f64) -> f64 {
    if building_length <= 0.0 {
        0.0
    } else {
        2.0 * (building_length / 12.0).ceil()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_purlin_code_boundaries() {
        assert_eq!(purlin_design_code(14.0), "Z15015");
        assert_eq!(purlin_design_code(14.001), "Z20015");
        assert_eq!(purlin_design_code(20.0), "Z20015");
        assert_eq!(purlin_design_code(58.0), "Z30025");
        assert_eq!(purlin_design_code(200.0), "Z30030");
    }

    #[test]
    fn test_endwall_column_tables_parallel() {
        assert_eq!(endwall_column_code(30.0, false), "EC150P");
        assert_eq!(endwall_column_code(30.0, true), "EC150G");
        assert_eq!(endwall_column_code(430.0, false), "EC600P");
        assert_eq!(endwall_column_code(1000.0, true), "EC650G");
    }

    #[test]
    fn test_frame_weight_negative_for_small_spans() {
        // (0.1*1*6 + 0.3)*(2*4 - 9) = 0.9 * -1
        assert!(frame_weight_per_meter(1.0, 6.0, 4.0) < 0.0);
        assert!(frame_weight_per_meter(1.0, 7.6, 28.5) > 0.0);
    }

    #[test]
    fn test_mwplm() {
        let mwplm = min_weight_per_meter(3.5);
        assert!((mwplm - 18.5).abs() < 1e-9);
        assert!(min_weight_per_meter(5.0) > mwplm);
    }

    #[test]
    fn test_fixed_base_index() {
        assert_eq!(fixed_base_index("Pinned Base", 6.0), 1.0);
        assert_eq!(fixed_base_index("Fixed Base", 0.0), 1.0);
        let idx = fixed_base_index("Fixed Base", 6.0);
        assert!((idx - (2.0f64).powf(0.15)).abs() < 1e-12);
    }

    #[test]
    fn test_portal_weight_floor() {
        assert_eq!(portal_frame_weight(6.0, 4.0), 350.0);
        assert!(portal_frame_weight(12.0, 30.0) > 350.0);
    }

    #[test]
    fn test_bracing_bay_count() {
        assert_eq!(bracing_bay_count(4.0), 2.0);
        assert_eq!(bracing_bay_count(10.0), 3.0);
        assert_eq!(bracing_bay_count(13.0), 4.0);
    }

    #[test]
    fn test_bracing_panels_lean_to_drops_front_term() {
        let full = bracing_panel_count(6.0, 6.0, 24.0, "Clear Span");
        let lean = bracing_panel_count(6.0, 6.0, 24.0, "Lean To");
        assert_eq!(full - lean, 1.0);
    }

    #[test]
    fn test_wind_struts_conserved_and_terminates() {
        let buckets = wind_strut_buckets(12.0, 55.0);
        let total: f64 = buckets.iter().sum();
        assert_eq!(total, 12.0);
        // high index keeps most struts in the large buckets
        assert!(buckets[4] < 12.0);
    }

    #[test]
    fn test_wind_struts_low_index_untouched() {
        let buckets = wind_strut_buckets(8.0, 4.0);
        assert_eq!(buckets, [0.0, 0.0, 0.0, 0.0, 8.0]);
    }

    #[test]
    fn test_bead_mastic_and_downspouts() {
        assert_eq!(bead_mastic_rolls(0.0), 0.0);
        assert_eq!(bead_mastic_rolls(15.0), 1.0);
        assert_eq!(bead_mastic_rolls(15.1), 2.0);
        assert_eq!(downspout_count(30.0), 6.0);
        assert_eq!(downspout_count(36.0), 6.0);
    }
}
