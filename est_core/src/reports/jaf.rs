//! Job approval form: the one-page summary management signs off on -
//! areas, tonnage, price splits and the unit rates derived from them.

use serde::{Deserialize, Serialize};

use crate::building::ParsedBuilding;
use crate::fcpbs::FcpbsReport;
use crate::input::BuildingInput;

/// Job approval summary figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct JafReport {
    pub quote_number: String,
    pub customer: String,

    /// Footprint area, m²
    pub building_area: f64,

    /// Sloped roof area, m²
    pub roof_area: f64,

    pub total_weight: f64,
    pub steel_price: f64,
    pub panel_price: f64,

    /// Non-FOB categories (M, O, Q, T)
    pub other_price: f64,

    pub total_price: f64,

    /// Total price per m² of footprint (0 when the footprint is 0)
    pub price_per_m2: f64,

    /// Total price per kg of shipped weight (0 when weightless)
    pub price_per_kg: f64,
}

pub fn generate(input: &BuildingInput, building: &ParsedBuilding, fcpbs: &FcpbsReport) -> JafReport {
    let other_price = fcpbs.total_selling - fcpbs.fob_price;
    let total_price = fcpbs.total_selling;

    JafReport {
        quote_number: input.quote_number.clone(),
        customer: input.customer.clone(),
        building_area: building.building_area,
        roof_area: building.roof_area,
        total_weight: fcpbs.total_weight,
        steel_price: fcpbs.steel_price,
        panel_price: fcpbs.panel_price,
        other_price,
        total_price,
        price_per_m2: if building.building_area > 0.0 {
            total_price / building.building_area
        } else {
            0.0
        },
        price_per_kg: if fcpbs.total_weight > 0.0 {
            total_price / fcpbs.total_weight
        } else {
            0.0
        },
    }
}
