//! Bill of quantities: nine fixed customer-facing lines, each composed
//! from one or more FCPBS categories. The composition table is fixed;
//! weight and price both follow it.

use serde::{Deserialize, Serialize};

use crate::fcpbs::FcpbsReport;

/// BOQ line composition: line number, description, source categories.
const BOQ_LINES: [(u8, &str, &str); 9] = [
    (1, "Primary Steel Framing", "A"),
    (2, "Secondary Steel Framing", "B"),
    (3, "Purlins, Girts & Bracing", "CD"),
    (4, "Roof Sheeting", "F"),
    (5, "Wall Sheeting", "G"),
    (6, "Trims & Flashings", "H"),
    (7, "Insulation", "I"),
    (8, "Accessories & Paint", "JQ"),
    (9, "Freight & Packing", "MOT"),
];

/// One BOQ line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BoqLine {
    pub item_no: u8,
    pub description: String,
    pub weight_kg: f64,
    pub selling_price: f64,
}

/// The nine-line BOQ plus totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BoqReport {
    pub lines: Vec<BoqLine>,
    pub total_weight: f64,
    pub total_price: f64,
}

pub fn generate(fcpbs: &FcpbsReport) -> BoqReport {
    let mut report = BoqReport::default();
    for (item_no, description, keys) in BOQ_LINES {
        let mut line = BoqLine {
            item_no,
            description: description.to_string(),
            ..BoqLine::default()
        };
        for key in keys.chars() {
            if let Some(cat) = fcpbs.category(key) {
                line.weight_kg += cat.weight_kg;
                line.selling_price += cat.selling_price;
            }
        }
        report.total_weight += line.weight_kg;
        report.total_price += line.selling_price;
        report.lines.push(line);
    }
    report
}
