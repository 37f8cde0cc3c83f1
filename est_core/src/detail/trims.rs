//! Trim and flashing pass: ridge caps per peak, valley gutters per valley,
//! eave trims and gutters with downspouts, then the wall trims (gable,
//! corner, base). Trim finish follows the skin material through the
//! prefix-matched suffix, sandwich-panel suffixes taking priority.

use crate::building::ParsedBuilding;
use crate::detail::{cost_code, sales_code, DetailGenerator};
use crate::detail::sheeting::skin_code;
use crate::input::BuildingInput;
use crate::parser::codes::get_trim_suffix;
use crate::quickest;

fn trim_code(kind: &str, suffix: &str) -> String {
    format!("TRIM-{}{}", kind, suffix)
}

pub fn trims(gen: &mut DetailGenerator, input: &BuildingInput, building: &ParsedBuilding) {
    gen.insert_code("Trims & Flashings", "-", "", 0.0, 0.0, "");

    if input.roof_top_skin != "None" {
        let suffix = get_trim_suffix(&skin_code(&input.roof_top_skin, input.swp_thickness));

        let ridge_len = building.profile.num_peaks as f64 * building.length;
        if ridge_len > 0.0 {
            gen.insert_code("", &trim_code("RIDGE", suffix), sales_code::SHEETING, building.length, building.profile.num_peaks as f64, cost_code::TRIMS);
        }

        // Valley gutters are always heavy-gauge aluzinc regardless of skin.
        if building.profile.num_valleys > 0 {
            gen.insert_code("", "TRIM-VALLEY-AZ", sales_code::SHEETING, building.length, building.profile.num_valleys as f64, cost_code::TRIMS);
        }

        gen.insert_code("", &trim_code("EAVE", suffix), sales_code::SHEETING, building.length, 2.0, cost_code::TRIMS);
        gen.insert_code("", "GUTTER", sales_code::SHEETING, building.length, 2.0, cost_code::TRIMS);

        let downspouts = quickest::downspout_count(building.length);
        if downspouts > 0.0 {
            gen.insert_code("", "DSPOUT", sales_code::SHEETING, 0.0, downspouts, cost_code::TRIMS);
        }
    }

    if input.wall_top_skin != "None" && input.frame_type != "Roof System" {
        let suffix = get_trim_suffix(&skin_code(&input.wall_top_skin, input.swp_thickness));

        // Gable trims follow the roof line on both endwalls.
        gen.insert_code("", &trim_code("GABLE", suffix), sales_code::SHEETING, building.profile.rafter_length, 2.0, cost_code::TRIMS);
        gen.insert_code("", &trim_code("CORNER", suffix), sales_code::SHEETING, building.mean_eave(), 4.0, cost_code::TRIMS);

        let perimeter = 2.0 * (building.length + building.width);
        gen.insert_code("", &trim_code("BASE", suffix), sales_code::SHEETING, perimeter, 1.0, cost_code::TRIMS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;

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
    fn test_single_peak_gets_one_ridge_run() {
        let (input, building) = scenario();
        assert_eq!(building.profile.num_peaks, 1);

        let mut gen = DetailGenerator::new(MemoryCatalog::builtin());
        trims(&mut gen, &input, &building);

        let ridge = gen.items().iter().find(|i| i.code == "TRIM-RIDGE-AZ").unwrap();
        assert_eq!(ridge.qty, 1.0);
        assert_eq!(ridge.size, 24.0);
        assert!(!gen.items().iter().any(|i| i.code == "TRIM-VALLEY-AZ"));
    }

    #[test]
    fn test_valley_emitted_for_m_profile_roof() {
        let (mut input, _) = scenario();
        input.slopes = "6@1,6@-1,6@1".to_string();
        let building = ParsedBuilding::from_input(&input);
        assert_eq!(building.profile.num_valleys, 1);

        let mut gen = DetailGenerator::new(MemoryCatalog::builtin());
        trims(&mut gen, &input, &building);
        assert!(gen.items().iter().any(|i| i.code == "TRIM-VALLEY-AZ"));
    }

    #[test]
    fn test_trim_suffix_follows_wall_skin() {
        let (mut input, _) = scenario();
        input.wall_top_skin = "SWP Panel".to_string();
        let building = ParsedBuilding::from_input(&input);

        let mut gen = DetailGenerator::new(MemoryCatalog::builtin());
        trims(&mut gen, &input, &building);

        assert!(gen.items().iter().any(|i| i.code == "TRIM-CORNER-SWP"));
        // roof stays aluzinc
        assert!(gen.items().iter().any(|i| i.code == "TRIM-EAVE-AZ"));
    }

    #[test]
    fn test_no_skins_header_only() {
        let (mut input, _) = scenario();
        input.roof_top_skin = "None".to_string();
        input.wall_top_skin = "None".to_string();
        let building = ParsedBuilding::from_input(&input);

        let mut gen = DetailGenerator::new(MemoryCatalog::builtin());
        trims(&mut gen, &input, &building);
        assert_eq!(gen.items().len(), 1);
        assert!(gen.items()[0].is_header);
    }
}
