//! # Roof Monitor Calculator
//!
//! Side generator for the optional ridge monitor (a raised ventilation
//! structure running along the ridge). Emits its framing steel, side
//! sheeting and cap trim as additional detail lines; a zero throat width
//! means no monitor and the pass is a no-op.

use serde::{Deserialize, Serialize};

use crate::building::ParsedBuilding;
use crate::detail::sheeting::skin_code;
use crate::detail::{cost_code, sales_code, DetailGenerator};
use crate::input::BuildingInput;
use crate::parser::codes::get_trim_suffix;

/// Monitor framing weight per meter of run, per meter of throat girth.
const FRAMING_KG_PER_M: f64 = 6.5;

/// Monitor side-cheek height, meters.
const CHEEK_HEIGHT: f64 = 0.8;

/// Result of the roof-monitor pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MonitorSummary {
    /// Monitor run length, meters (0 when absent)
    pub length: f64,

    /// Throat width, meters
    pub throat_width: f64,

    /// Framing steel weight, kg
    pub framing_weight: f64,

    /// Side sheeting area, m²
    pub sheeting_area: f64,
}

pub fn generate(
    gen: &mut DetailGenerator,
    input: &BuildingInput,
    building: &ParsedBuilding,
) -> MonitorSummary {
    if !input.has_roof_monitor() {
        return MonitorSummary::default();
    }

    let length = if input.monitor_length > 0.0 {
        input.monitor_length.min(building.length)
    } else {
        building.length
    };
    let throat = input.monitor_throat_width;

    gen.insert_code("Roof Monitor", "-", "", 0.0, 0.0, "");

    // Girth: throat top plus the two cheeks, framed every meter of run.
    let framing_weight = (2.0 * throat + 2.0 * CHEEK_HEIGHT) * length * FRAMING_KG_PER_M;
    gen.insert_code("", "BU-MONITOR", sales_code::STEEL, 0.0, framing_weight, cost_code::MONITOR_FRAMES);

    let mut sheeting_area = 0.0;
    if input.roof_top_skin != "None" {
        let code = skin_code(&input.roof_top_skin, input.swp_thickness);
        sheeting_area = (throat + 2.0 * CHEEK_HEIGHT) * length;
        gen.insert_code("", &code, sales_code::SHEETING, 0.0, sheeting_area, cost_code::ROOF_SHEETING);

        let suffix = get_trim_suffix(&code);
        gen.insert_code("", &format!("TRIM-RIDGE{}", suffix), sales_code::SHEETING, length, 1.0, cost_code::TRIMS);
    }

    MonitorSummary {
        length,
        throat_width: throat,
        framing_weight,
        sheeting_area,
    }
}
