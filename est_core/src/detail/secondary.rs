//! Secondary member passes: bracing sets, wind struts, roof purlins and
//! wall girts. Sag rods accumulate across the purlin and girt passes (the
//! carried `n_sag_rods` field) and are emitted as one line after the girts;
//! portal bracing bolts accumulate into `pg_bolts` and are emitted after
//! the wind struts.

use crate::building::ParsedBuilding;
use crate::detail::{cost_code, sales_code, DetailGenerator};
use crate::input::BuildingInput;
use crate::quickest::{self, STRUT_CODES};

/// Purlin/girt piece length extension over the bay spacing: a fixed lap
/// allowance, plus additional lap past 6.5 m and again past 9 m. The
/// thresholds trigger independently and add.
fn piece_extension(bay_spacing: f64) -> f64 {
    let mut ext = 0.107;
    if bay_spacing > 6.5 {
        ext += 0.599;
    }
    if bay_spacing > 9.0 {
        ext += 0.706;
    }
    ext
}

/// Bracing sets for walls and roof. Cable/rod/angle systems emit catalog
/// sets; portal bracing emits fabricated portal frames instead and banks
/// their connection bolts in `pg_bolts` for the wind-strut pass.
pub fn bracing(gen: &mut DetailGenerator, input: &BuildingInput, building: &ParsedBuilding) {
    gen.insert_code("Bracing", "-", "", 0.0, 0.0, "");

    let braced_bays = quickest::bracing_bay_count(building.num_bays);
    let panels = quickest::bracing_panel_count(
        building.back_eave,
        building.front_eave,
        building.width,
        &input.frame_type,
    );

    let wall_sets = braced_bays * panels;
    match input.wall_bracing_type.as_str() {
        "Cable" => gen.insert_code("", "CAB-12", sales_code::STEEL, 0.0, wall_sets, cost_code::BRACING),
        "Rod" => gen.insert_code("", "ROD-20", sales_code::STEEL, 0.0, wall_sets, cost_code::BRACING),
        "Angle" => gen.insert_code("", "ANG-50", sales_code::STEEL, 0.0, wall_sets, cost_code::BRACING),
        "Portal" => {
            let portals = braced_bays * 2.0;
            let weight =
                quickest::portal_frame_weight(building.bay_spacing, building.back_eave) * portals;
            gen.insert_code("", "BU-PORTAL", sales_code::STEEL, 0.0, weight, cost_code::BRACING);
            gen.pg_bolts += portals * 16.0;
        }
        _ => {}
    }

    let roof_sets = braced_bays * building.num_spans;
    match input.roof_bracing_type.as_str() {
        "Cable" => gen.insert_code("", "CAB-12", sales_code::STEEL, 0.0, roof_sets, cost_code::BRACING),
        "Rod" => gen.insert_code("", "ROD-20", sales_code::STEEL, 0.0, roof_sets, cost_code::BRACING),
        "Angle" => gen.insert_code("", "ANG-50", sales_code::STEEL, 0.0, roof_sets, cost_code::BRACING),
        _ => {}
    }

    // Openings flagged as displacing a braced panel force a portal there.
    let forced_portals: f64 = input
        .capped_openings()
        .iter()
        .filter(|o| o.bracing)
        .map(|o| o.qty)
        .sum();
    if forced_portals > 0.0 {
        let weight = quickest::portal_frame_weight(building.bay_spacing, building.back_eave)
            * forced_portals;
        gen.insert_code("", "BU-PORTAL", sales_code::STEEL, 0.0, weight, cost_code::BRACING);
        gen.pg_bolts += forced_portals * 16.0;
    }
}

/// Eave wind struts distributed across the five tube sizes, then the
/// banked portal bolts from the bracing pass.
pub fn wind_struts(gen: &mut DetailGenerator, _input: &BuildingInput, building: &ParsedBuilding) {
    gen.insert_code("Wind Struts", "-", "", 0.0, 0.0, "");

    let braced_bays = quickest::bracing_bay_count(building.num_bays);
    let total_struts = braced_bays * (building.num_spans + 1.0);
    let strut_index = building.wind_pressure * building.bay_spacing * building.back_eave;

    let buckets = quickest::wind_strut_buckets(total_struts, strut_index);
    for (i, qty) in buckets.iter().enumerate() {
        if *qty > 0.0 {
            gen.insert_code(
                "",
                STRUT_CODES[i],
                sales_code::STEEL,
                building.bay_spacing,
                *qty,
                cost_code::WIND_STRUTS,
            );
        }
    }

    if gen.pg_bolts > 0.0 {
        let qty = gen.pg_bolts.ceil();
        gen.insert_code("", "HSB-M24", sales_code::STEEL, 0.0, qty, cost_code::BOLTS);
    }
}

/// Roof purlins: lines along the rafter at 1.5 m spacing, section selected
/// from the purlin design index for the tributary bay.
pub fn purlins(gen: &mut DetailGenerator, _input: &BuildingInput, building: &ParsedBuilding) {
    gen.insert_code("Roof Purlins", "-", "", 0.0, 0.0, "");

    if building.profile.rafter_length <= 0.0 || building.num_bays <= 0.0 {
        return;
    }

    let lines = (building.profile.rafter_length / 1.5).ceil() + 1.0;
    let pd_index = building.governing_load * building.bay_spacing * building.bay_spacing;
    let code = quickest::purlin_design_code(pd_index);
    let size = building.bay_spacing + piece_extension(building.bay_spacing);
    let qty = lines * building.num_bays;

    gen.insert_code("", code, sales_code::STEEL, size, qty, cost_code::PURLINS);

    let sag_rows = if building.bay_spacing > 6.5 { 2.0 } else { 1.0 };
    gen.n_sag_rods += qty * sag_rows;
}

/// Wall girts for sidewalls and endwalls, framed-opening girts for
/// supported openings, then the accumulated sag-rod line. Roof System
/// buildings have no walls and skip everything but the header.
pub fn girts(gen: &mut DetailGenerator, input: &BuildingInput, building: &ParsedBuilding) {
    gen.insert_code("Wall Girts", "-", "", 0.0, 0.0, "");

    if input.frame_type != "Roof System" {
        let gd_index = building.wind_pressure * building.bay_spacing * building.bay_spacing * 10.0;
        let code = quickest::purlin_design_code(gd_index);

        let side_lines = (building.mean_eave() / 1.5).ceil();
        let side_qty = side_lines * building.num_bays * 2.0;
        let side_size = building.bay_spacing + piece_extension(building.bay_spacing);
        if side_qty > 0.0 {
            gen.insert_code("", code, sales_code::STEEL, side_size, side_qty, cost_code::GIRTS);
        }

        // Endwall girts run between the endwall columns.
        let ew_cols = (building.width / 6.0).ceil() + 1.0;
        if ew_cols >= 2.0 {
            let ew_spacing = building.width / (ew_cols - 1.0);
            let ew_lines = (building.profile.peak_height / 1.5).ceil();
            let ew_qty = ew_lines * (ew_cols - 1.0) * 2.0;
            let ew_size = ew_spacing + 0.107;
            gen.insert_code("", code, sales_code::STEEL, ew_size, ew_qty, cost_code::GIRTS);
        }

        // Framed openings needing girt support get a jamb/header set each.
        let supported: f64 = input
            .capped_openings()
            .iter()
            .filter(|o| o.purlin_support)
            .map(|o| o.qty)
            .sum();
        if supported > 0.0 {
            let opening_size = building.bay_spacing.min(6.0) + 0.3;
            gen.insert_code("", code, sales_code::STEEL, opening_size, supported * 4.0, cost_code::GIRTS);
        }

        let side_sag = if building.bay_spacing > 6.5 { 2.0 } else { 1.0 };
        gen.n_sag_rods += side_qty * side_sag;
    }

    if gen.n_sag_rods > 0.0 {
        let qty = gen.n_sag_rods.ceil();
        gen.insert_code("", "SAG-ROD", sales_code::STEEL, 0.0, qty, cost_code::SAG_RODS);
    }
}
