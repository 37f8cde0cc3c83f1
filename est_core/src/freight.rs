//! # Freight Calculator
//!
//! Computes truck-load counts per material category from the generated
//! detail weights, reconciles them against an explicit "total loads" memo
//! line when one exists (cost code 60711, typically merged in from an
//! imported detail sheet), and appends at most two new detail items:
//! Freight (cost code 40111) and Container Skids (cost code 30111). The
//! following FCPBS pass picks those up under categories O and M - the code
//! pairing is load-bearing, changing either side breaks attribution
//! silently.

use serde::{Deserialize, Serialize};

use crate::detail::{cost_code, sales_code, DetailGenerator};
use crate::input::BuildingInput;

/// Material categories with their truck capacity in metric tons and the
/// cost codes whose weights they carry.
const FREIGHT_CATEGORIES: [(&str, f64, &[&str]); 8] = [
    ("Built-Up Frames", 15.0, &[
        cost_code::MAIN_FRAMES,
        cost_code::ENDWALL_FRAMES,
        cost_code::MONITOR_FRAMES,
    ]),
    ("Mill Sections", 20.0, &[cost_code::ENDWALL_COLUMNS]),
    ("Cold Formed", 5.3, &[
        cost_code::PURLINS,
        cost_code::GIRTS,
        cost_code::SAG_RODS,
        cost_code::WIND_STRUTS,
    ]),
    ("Sheeting Panels", 8.0, &[
        cost_code::ROOF_SHEETING,
        cost_code::WALL_SHEETING,
    ]),
    ("Trims & Flashings", 10.0, &[cost_code::TRIMS]),
    ("Bracing & Hardware", 20.0, &[cost_code::BRACING, cost_code::BOLTS]),
    ("Insulation", 10.0, &[cost_code::INSULATION]),
    ("Accessories", 5.0, &[cost_code::ACCESSORIES]),
];

/// One category's freight load line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreightLoad {
    pub category: String,
    pub weight_kg: f64,
    pub capacity_mt: f64,
    pub loads: f64,
}

/// Reconciled loads breakdown returned alongside the appended items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FreightBreakdown {
    pub loads: Vec<FreightLoad>,

    /// Sum of the per-category load counts
    pub computed_loads: f64,

    /// Quantity of the 60711 memo line, 0 when absent
    pub detail_loads: f64,

    /// `max(detail_loads − computed_loads, 0)`
    pub adjustment: f64,

    /// The billed load count: the memo quantity when present, otherwise
    /// computed + adjustment
    pub total_loads: f64,
}

/// Run the freight pass over everything generated so far.
pub fn generate(gen: &mut DetailGenerator, input: &BuildingInput) -> FreightBreakdown {
    // An explicit override from the input becomes the 60711 memo line so
    // the reconciliation below sees it like an imported one.
    if input.total_loads_override > 0.0 {
        gen.insert_code("", "LOADS", sales_code::OTHER, 0.0, input.total_loads_override, cost_code::TOTAL_LOADS);
    }

    let mut breakdown = FreightBreakdown::default();
    for (name, capacity, codes) in FREIGHT_CATEGORIES {
        let weight_kg: f64 = gen
            .items()
            .iter()
            .filter(|i| codes.contains(&i.cost_code.as_str()))
            .map(|i| i.total_weight())
            .sum();
        let loads = if weight_kg > 0.0 {
            (weight_kg / 1000.0 / capacity).ceil()
        } else {
            0.0
        };
        breakdown.computed_loads += loads;
        breakdown.loads.push(FreightLoad {
            category: name.to_string(),
            weight_kg,
            capacity_mt: capacity,
            loads,
        });
    }

    breakdown.detail_loads = gen
        .items()
        .iter()
        .filter(|i| i.cost_code == cost_code::TOTAL_LOADS)
        .map(|i| i.qty)
        .sum();
    breakdown.adjustment = (breakdown.detail_loads - breakdown.computed_loads).max(0.0);
    breakdown.total_loads = if breakdown.detail_loads > 0.0 {
        breakdown.detail_loads
    } else {
        breakdown.computed_loads + breakdown.adjustment
    };

    gen.insert_code("Freight", "-", "", 0.0, 0.0, "");
    if breakdown.total_loads > 0.0 {
        gen.insert_code("", "FREIGHT", sales_code::OTHER, 0.0, breakdown.total_loads, cost_code::FREIGHT);
        if input.freight_rate > 0.0 {
            gen.override_last_rate(input.freight_rate);
        }
        gen.insert_code("", "CSKID", sales_code::OTHER, 0.0, breakdown.total_loads, cost_code::CONTAINER_SKIDS);
    }

    breakdown
}
