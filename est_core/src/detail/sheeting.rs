//! Sheeting passes: roof and wall skins with their fasteners and sealant,
//! opening-area deductions, and insulation. A skin selector of "None"
//! leaves only the section header; all areas are IEEE doubles rounded only
//! at the quantity boundary (screw counts).

use crate::building::ParsedBuilding;
use crate::detail::{cost_code, sales_code, DetailGenerator};
use crate::input::BuildingInput;
use crate::parser::codes::{generate_swp_code, get_screw_codes};
use crate::quickest;

/// Main fasteners per m² of sheeting.
const SCREWS_PER_M2: f64 = 5.0;

/// Stitch screws per m² of sheeting.
const STITCH_SCREWS_PER_M2: f64 = 2.0;

/// Resolve a skin selector to its catalog code. Sandwich panel selectors
/// snap to the stocked core thickness; single-skin selectors are catalog
/// codes already.
pub(crate) fn skin_code(skin: &str, swp_thickness: f64) -> String {
    if skin.starts_with("SWP") {
        generate_swp_code(swp_thickness).to_string()
    } else {
        skin.to_string()
    }
}

/// Coverage-corrected purchase area: every profile except M45-250 loses a
/// tenth of its width to rib overlap.
fn coverage_area(area: f64, profile: &str) -> f64 {
    if profile == "M45-250" {
        area
    } else {
        area / 0.9
    }
}

/// Opening area charged against one wall, capped at the physical wall area.
/// "Full" openings entered with zero size take the wall's own dimensions.
fn wall_opening_deduction(input: &BuildingInput, building: &ParsedBuilding, location: &str) -> f64 {
    let mut sum = 0.0;
    for opening in input.capped_openings() {
        if opening.location != location {
            continue;
        }
        let (full_w, full_h) = building.full_opening_size(location);
        let w = if opening.width > 0.0 { opening.width } else if opening.kind == "Full" { full_w } else { 0.0 };
        let h = if opening.height > 0.0 { opening.height } else if opening.kind == "Full" { full_h } else { 0.0 };
        sum += w * h * opening.qty;
    }
    sum.min(building.wall_area(location))
}

/// Net sheeted wall area after opening deductions, all four walls.
pub(crate) fn net_wall_area(input: &BuildingInput, building: &ParsedBuilding) -> f64 {
    const WALLS: [&str; 4] = ["Back Sidewall", "Front Sidewall", "Left Endwall", "Right Endwall"];
    let gross: f64 = WALLS.iter().map(|w| building.wall_area(w)).sum();
    let deductions: f64 = WALLS
        .iter()
        .map(|w| wall_opening_deduction(input, building, w))
        .sum();
    (gross - deductions).max(0.0)
}

/// Roof skin, fasteners and bead mastic.
pub fn roof_sheeting(gen: &mut DetailGenerator, input: &BuildingInput, building: &ParsedBuilding) {
    gen.insert_code("Roof Sheeting", "-", "", 0.0, 0.0, "");
    if input.roof_top_skin == "None" {
        return;
    }

    let code = skin_code(&input.roof_top_skin, input.swp_thickness);
    let area = coverage_area(building.roof_area, &input.roof_panel_profile);
    if area <= 0.0 {
        return;
    }
    gen.insert_code("", &code, sales_code::SHEETING, 0.0, area, cost_code::ROOF_SHEETING);

    let screws = get_screw_codes(&code);
    gen.insert_code("", screws.fastener, sales_code::SHEETING, 0.0, (area * SCREWS_PER_M2).ceil(), cost_code::ROOF_SHEETING);
    gen.insert_code("", screws.stitch, sales_code::SHEETING, 0.0, (area * STITCH_SCREWS_PER_M2).ceil(), cost_code::ROOF_SHEETING);

    // Side laps run the full rafter, one per meter of length past the first
    // panel; every lap gets a mastic bead.
    let lap_length = (building.length - 1.0).max(0.0) * building.profile.rafter_length;
    let rolls = quickest::bead_mastic_rolls(lap_length);
    if rolls > 0.0 {
        gen.insert_code("", "BMASTIC", sales_code::SHEETING, 0.0, rolls, cost_code::ROOF_SHEETING);
    }
}

/// Wall skin and fasteners, net of opening deductions. Roof System
/// buildings carry no walls.
pub fn wall_sheeting(gen: &mut DetailGenerator, input: &BuildingInput, building: &ParsedBuilding) {
    gen.insert_code("Wall Sheeting", "-", "", 0.0, 0.0, "");
    if input.wall_top_skin == "None" || input.frame_type == "Roof System" {
        return;
    }

    let net = net_wall_area(input, building);
    let area = coverage_area(net, &input.wall_panel_profile);
    if area <= 0.0 {
        return;
    }

    let code = skin_code(&input.wall_top_skin, input.swp_thickness);
    gen.insert_code("", &code, sales_code::SHEETING, 0.0, area, cost_code::WALL_SHEETING);

    let screws = get_screw_codes(&code);
    gen.insert_code("", screws.fastener, sales_code::SHEETING, 0.0, (area * SCREWS_PER_M2).ceil(), cost_code::WALL_SHEETING);
    gen.insert_code("", screws.stitch, sales_code::SHEETING, 0.0, (area * STITCH_SCREWS_PER_M2).ceil(), cost_code::WALL_SHEETING);
}

/// Roof and wall insulation lines (nominal areas, no coverage correction).
pub fn insulation(gen: &mut DetailGenerator, input: &BuildingInput, building: &ParsedBuilding) {
    gen.insert_code("Insulation", "-", "", 0.0, 0.0, "");

    if input.roof_insulation != "None" && !input.roof_insulation.is_empty() {
        gen.insert_code("", &input.roof_insulation, sales_code::SHEETING, 0.0, building.roof_area, cost_code::INSULATION);
    }
    if input.wall_insulation != "None"
        && !input.wall_insulation.is_empty()
        && input.frame_type != "Roof System"
    {
        let net = net_wall_area(input, building);
        if net > 0.0 {
            gen.insert_code("", &input.wall_insulation, sales_code::SHEETING, 0.0, net, cost_code::INSULATION);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;
    use crate::input::Opening;

    fn scenario() -> (BuildingInput, ParsedBuilding) {
        let input = BuildingInput {
            spans: "1@24".to_string(),
            bays: "4@6".to_string(),
            ..BuildingInput::default()
        };
        let building = ParsedBuilding::from_input(&input);
        (input, building)
    }

    #[test]
    fn test_none_skin_emits_header_only() {
        let (mut input, _) = scenario();
        input.roof_top_skin = "None".to_string();
        input.wall_top_skin = "None".to_string();
        let building = ParsedBuilding::from_input(&input);
        let mut gen = DetailGenerator::new(MemoryCatalog::builtin());
        roof_sheeting(&mut gen, &input, &building);
        wall_sheeting(&mut gen, &input, &building);

        assert!(gen.items().iter().all(|i| i.is_header));
        assert_eq!(gen.items().len(), 2);
    }

    #[test]
    fn test_m45_profile_has_no_coverage_correction() {
        let (input, building) = scenario();
        let mut gen = DetailGenerator::new(MemoryCatalog::builtin());
        roof_sheeting(&mut gen, &input, &building);

        let panel = gen.items().iter().find(|i| i.code == "M45-250 AZ 0.5").unwrap();
        assert!((panel.qty - building.roof_area).abs() < 1e-9);
    }

    #[test]
    fn test_other_profile_divides_by_09() {
        let (mut input, _) = scenario();
        input.roof_panel_profile = "R32-300".to_string();
        let building = ParsedBuilding::from_input(&input);
        let mut gen = DetailGenerator::new(MemoryCatalog::builtin());
        roof_sheeting(&mut gen, &input, &building);

        let panel = gen.items().iter().find(|i| i.code == "M45-250 AZ 0.5").unwrap();
        assert!((panel.qty - building.roof_area / 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_swp_skin_resolves_code_and_screws() {
        let (mut input, _) = scenario();
        input.wall_top_skin = "SWP Panel".to_string();
        input.swp_thickness = 75.0;
        let building = ParsedBuilding::from_input(&input);
        let mut gen = DetailGenerator::new(MemoryCatalog::builtin());
        wall_sheeting(&mut gen, &input, &building);

        assert!(gen.items().iter().any(|i| i.code == "SWP075"));
        assert!(gen.items().iter().any(|i| i.code == "SCR-SWP-115"));
    }

    #[test]
    fn test_opening_deduction_capped_at_wall_area() {
        let (mut input, _) = scenario();
        // A 500 m² opening on a 144 m² wall: deduction caps at the wall.
        input.openings = vec![Opening {
            location: "Front Sidewall".to_string(),
            width: 50.0,
            height: 10.0,
            ..Opening::default()
        }];
        let building = ParsedBuilding::from_input(&input);
        let deduct = wall_opening_deduction(&input, &building, "Front Sidewall");
        assert!((deduct - building.wall_area("Front Sidewall")).abs() < 1e-9);
    }

    #[test]
    fn test_full_opening_defaults_from_building() {
        let (mut input, _) = scenario();
        input.openings = vec![Opening {
            location: "Back Sidewall".to_string(),
            kind: "Full".to_string(),
            ..Opening::default()
        }];
        let building = ParsedBuilding::from_input(&input);
        let deduct = wall_opening_deduction(&input, &building, "Back Sidewall");
        // full wall: length * back eave
        assert!((deduct - 144.0).abs() < 1e-9);
    }

    #[test]
    fn test_insulation_uses_nominal_areas() {
        let (mut input, _) = scenario();
        input.roof_insulation = "INS-FG-50".to_string();
        let building = ParsedBuilding::from_input(&input);
        let mut gen = DetailGenerator::new(MemoryCatalog::builtin());
        insulation(&mut gen, &input, &building);

        let ins = gen.items().iter().find(|i| i.code == "INS-FG-50").unwrap();
        assert!((ins.qty - building.roof_area).abs() < 1e-9);
        assert_eq!(ins.cost_code, cost_code::INSULATION);
    }
}
