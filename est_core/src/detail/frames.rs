//! Primary framing passes: the building description line, interior rigid
//! frames with their connection and anchor bolts, and the endwall bearing
//! frames with their columns.

use crate::building::ParsedBuilding;
use crate::detail::{cost_code, sales_code, DetailGenerator};
use crate::input::BuildingInput;
use crate::parser::codes::{get_connection_type, get_fixed_base_type};
use crate::parser::slope::calculate_column_heights;
use crate::quickest;

/// Bolts per end-plate connection by connection-type bucket (1-5).
const BOLTS_PER_CONNECTION: [f64; 5] = [8.0, 12.0, 16.0, 20.0, 24.0];

/// Knee and splice connections per span of one frame.
const CONNECTIONS_PER_SPAN: f64 = 4.0;

/// Building description header opening the detail list.
pub fn description_line(gen: &mut DetailGenerator, input: &BuildingInput, building: &ParsedBuilding) {
    let description = format!(
        "{} BUILDING {:.1}M X {:.1}M X {:.1}M",
        input.frame_type.to_uppercase(),
        building.width,
        building.length,
        building.back_eave
    );
    gen.insert_code(&description, "-", "", 0.0, 0.0, "");
}

/// Interior rigid frames: weight from the calibrated weight-per-meter
/// formula, then connection bolts (with the post-loop bucket
/// redistribution) and anchor bolts for every column base.
pub fn main_frames(gen: &mut DetailGenerator, input: &BuildingInput, building: &ParsedBuilding) {
    gen.insert_code("Main Frames", "-", "", 0.0, 0.0, "");

    let interior_frames = (building.num_bays - 1.0).max(0.0);
    let continuity = if input.frame_type == "Multi Span" { 0.85 } else { 1.0 };
    let base_index = quickest::fixed_base_index(&input.base_type, building.back_eave);

    // Interior columns only exist on Multi Span frames.
    let interior_cols = if input.frame_type == "Multi Span" {
        crate::parser::list::get_list(&input.interior_columns).count()
    } else {
        0.0
    };

    let wplm = (quickest::frame_weight_per_meter(
        building.governing_load,
        building.bay_spacing,
        building.max_span,
    ) * base_index
        * continuity)
        .max(building.mwplm);

    let frame_run = building.profile.rafter_length
        + building.back_eave
        + building.front_eave
        + interior_cols * building.mean_eave();
    let total_weight = wplm * frame_run * interior_frames;

    if total_weight > 0.0 {
        gen.insert_code("", "BU-FRAME", sales_code::STEEL, 0.0, total_weight, cost_code::MAIN_FRAMES);
    }

    connection_bolts(gen, building, interior_frames);
    anchor_bolts(gen, input, building, interior_cols);
}

/// Connection-bolt counting by connection-type bucket.
///
/// The frame loop accumulates bolts into five size buckets; the cascading
/// redistribution then folds half of each bucket down into the next smaller
/// one, highest bucket first. This is a fixed post-processing step, not an
/// incremental one - the legacy sheet recomputes mfb[k] from the higher
/// buckets only after the loop completes.
fn connection_bolts(gen: &mut DetailGenerator, building: &ParsedBuilding, frame_count: f64) {
    if frame_count <= 0.0 {
        return;
    }

    let mut mfb = [0.0_f64; 5];
    let spans = &building.span_list;
    if spans.groups.is_empty() {
        let bucket = get_connection_type(building.max_span) as usize;
        mfb[bucket - 1] +=
            frame_count * CONNECTIONS_PER_SPAN * BOLTS_PER_CONNECTION[bucket - 1];
    } else {
        for group in &spans.groups {
            let bucket = get_connection_type(group.value) as usize;
            mfb[bucket - 1] += frame_count
                * group.count
                * CONNECTIONS_PER_SPAN
                * BOLTS_PER_CONNECTION[bucket - 1];
        }
    }

    for k in (0..4).rev() {
        mfb[k] += mfb[k + 1] / 2.0;
    }

    let m20 = (mfb[0] + mfb[1] + mfb[2]).ceil();
    let m24 = (mfb[3] + mfb[4]).ceil();
    if m20 > 0.0 {
        gen.insert_code("", "HSB-M20", sales_code::STEEL, 0.0, m20, cost_code::BOLTS);
    }
    if m24 > 0.0 {
        gen.insert_code("", "HSB-M24", sales_code::STEEL, 0.0, m24, cost_code::BOLTS);
    }
}

/// Anchor bolts for every column base; fixed bases carry six per column,
/// pinned four.
fn anchor_bolts(
    gen: &mut DetailGenerator,
    input: &BuildingInput,
    building: &ParsedBuilding,
    interior_cols: f64,
) {
    let code = get_fixed_base_type(&input.base_type, building.back_eave);
    let per_column = if input.base_type == "Fixed Base" { 6.0 } else { 4.0 };

    let sidewall_cols = (building.num_bays + 1.0) * 2.0;
    let interior = interior_cols * (building.num_bays - 1.0).max(0.0);
    let endwall_cols = endwall_column_count(building) * 2.0;
    let qty = ((sidewall_cols + interior + endwall_cols) * per_column).ceil();

    gen.insert_code("", code, sales_code::STEEL, 0.0, qty, cost_code::BOLTS);
}

/// Columns per endwall including the corner columns.
fn endwall_column_count(building: &ParsedBuilding) -> f64 {
    (building.width / 6.0).ceil() + 1.0
}

/// Endwall bearing frames: light rafters at the minimum fabricable weight
/// plus the endwall column schedule sized from the wind-column table.
pub fn bearing_frames(gen: &mut DetailGenerator, input: &BuildingInput, building: &ParsedBuilding) {
    gen.insert_code("Endwall Bearing Frames", "-", "", 0.0, 0.0, "");

    let rafter_weight = 2.0 * building.mwplm * building.profile.rafter_length;
    if rafter_weight > 0.0 {
        gen.insert_code("", "BU-ENDWALL", sales_code::STEEL, 0.0, rafter_weight, cost_code::ENDWALL_FRAMES);
    }

    let n = endwall_column_count(building);
    if n < 2.0 || building.width <= 0.0 {
        return;
    }
    let spacing = building.width / (n - 1.0);
    let positions: Vec<f64> = (0..n as usize).map(|i| i as f64 * spacing).collect();
    let heights = calculate_column_heights(&building.profile, building.back_eave, &positions);

    let galvanized = input.finish == "Galvanized";

    // Group column lines by selected section, first-seen order.
    let mut groups: Vec<(&'static str, f64, f64)> = Vec::new();
    for h in heights {
        let ec_index = building.wind_pressure * spacing * h * h;
        let code = quickest::endwall_column_code(ec_index, galvanized);
        match groups.iter_mut().find(|(c, _, _)| *c == code) {
            Some((_, len, count)) => {
                *len += h;
                *count += 1.0;
            }
            None => groups.push((code, h, 1.0)),
        }
    }

    for (code, total_len, count) in groups {
        // Both endwalls carry the same schedule.
        let qty = count * 2.0;
        let size = total_len / count;
        gen.insert_code("", code, sales_code::STEEL, size, qty, cost_code::ENDWALL_COLUMNS);
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
    fn test_main_frames_emit_header_and_weight() {
        let (input, building) = scenario();
        let mut gen = DetailGenerator::new(MemoryCatalog::builtin());
        main_frames(&mut gen, &input, &building);

        let items = gen.items();
        assert_eq!(items[0].description, "Main Frames");
        assert!(items[0].is_header);
        let frame = items.iter().find(|i| i.code == "BU-FRAME").unwrap();
        assert!(frame.total_weight() > 0.0);
        assert_eq!(frame.cost_code, cost_code::MAIN_FRAMES);
    }

    #[test]
    fn test_small_span_clamps_to_mwplm() {
        // A 4 m span drives the raw formula negative; the clamp must win.
        let input = BuildingInput {
            spans: "1@4".to_string(),
            bays: "2@6".to_string(),
            ..BuildingInput::default()
        };
        let building = ParsedBuilding::from_input(&input);
        assert!(quickest::frame_weight_per_meter(building.governing_load, 6.0, 4.0) < 0.0);

        let mut gen = DetailGenerator::new(MemoryCatalog::builtin());
        main_frames(&mut gen, &input, &building);
        let frame = gen.items().iter().find(|i| i.code == "BU-FRAME").unwrap();
        assert!(frame.total_weight() > 0.0);
    }

    #[test]
    fn test_connection_bolts_both_sizes_for_wide_span() {
        let input = BuildingInput {
            spans: "1@36".to_string(), // bucket 5
            bays: "4@6".to_string(),
            ..BuildingInput::default()
        };
        let building = ParsedBuilding::from_input(&input);
        let mut gen = DetailGenerator::new(MemoryCatalog::builtin());
        main_frames(&mut gen, &input, &building);

        // The cascade pushes half of every bucket downwards, so M20 bolts
        // appear even when every span lands in the largest bucket.
        assert!(gen.items().iter().any(|i| i.code == "HSB-M24"));
        assert!(gen.items().iter().any(|i| i.code == "HSB-M20"));
    }

    #[test]
    fn test_anchor_bolts_fixed_base_six_per_column() {
        let (mut input, _) = scenario();
        input.base_type = "Fixed Base".to_string();
        let building = ParsedBuilding::from_input(&input);
        let mut gen = DetailGenerator::new(MemoryCatalog::builtin());
        anchor_bolts(&mut gen, &input, &building, 0.0);

        let item = &gen.items()[0];
        assert_eq!(item.code, "AB-M24-600");
        // 10 sidewall + 10 endwall columns at 6 bolts each
        assert_eq!(item.qty, 120.0);
    }

    #[test]
    fn test_endwall_columns_sized_from_profile() {
        let (input, building) = scenario();
        let mut gen = DetailGenerator::new(MemoryCatalog::builtin());
        bearing_frames(&mut gen, &input, &building);

        let cols: Vec<_> = gen
            .items()
            .iter()
            .filter(|i| i.cost_code == cost_code::ENDWALL_COLUMNS)
            .collect();
        assert!(!cols.is_empty());
        // 5 columns per endwall, both endwalls
        let total: f64 = cols.iter().map(|i| i.qty).sum();
        assert_eq!(total, 10.0);
        assert!(cols.iter().all(|i| i.code.starts_with("EC")));
        assert!(cols.iter().all(|i| i.code.ends_with('P')));
    }
}
