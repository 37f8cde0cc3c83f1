//! Raw material summary: procurement tonnage grouped by product-code
//! prefix. The prefix table deliberately contains overlapping entries
//! ("C" vs "CAB" vs "CSKID", "S"-family codes); matching sorts the table
//! by prefix length descending so the most specific prefix always wins.

use serde::{Deserialize, Serialize};

use crate::detail::DetailItem;

/// Prefix -> raw material category. Overlaps are resolved longest-first
/// at match time; keep related prefixes adjacent for review, not order.
const PREFIX_CATEGORIES: [(&str, &str); 22] = [
    ("BU", "Built-Up Plate"),
    ("EC", "Mill Sections"),
    ("TUB", "Mill Sections"),
    ("ANG", "Mill Sections"),
    ("Z", "Cold Formed Coil"),
    ("C", "Miscellaneous"),
    ("CAB", "Cables & Fittings"),
    ("CSKID", "Packing Timber"),
    ("CRANE", "Crane Beams"),
    ("CON", "Connection Hardware"),
    ("ROD", "Rounds & Rods"),
    ("SAG", "Rounds & Rods"),
    ("HSB", "Fasteners"),
    ("AB", "Fasteners"),
    ("SCR", "Fasteners"),
    ("BMASTIC", "Sealants"),
    ("S", "Sheeting Coil"),
    ("SWP", "Sandwich Panels"),
    ("M45", "Sheeting Coil"),
    ("TRIM", "Trim Coil"),
    ("GUTTER", "Trim Coil"),
    ("DSPOUT", "Trim Coil"),
];

/// Category for unmatched codes.
const DEFAULT_CATEGORY: &str = "Buy-Out Items";

/// Raw material category for a product code, longest prefix wins.
pub fn categorize_code(code: &str) -> &'static str {
    let mut table = PREFIX_CATEGORIES;
    table.sort_by_key(|(prefix, _)| std::cmp::Reverse(prefix.len()));
    table
        .iter()
        .find(|(prefix, _)| code.starts_with(prefix))
        .map(|(_, category)| *category)
        .unwrap_or(DEFAULT_CATEGORY)
}

/// One raw material line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RawMatLine {
    pub category: String,
    pub weight_kg: f64,
}

/// Raw material tonnage report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RawMatReport {
    pub lines: Vec<RawMatLine>,
    pub total_weight: f64,
}

/// Aggregate weight by raw material category, categories in first-seen
/// order, weightless lines dropped.
pub fn generate(items: &[DetailItem]) -> RawMatReport {
    let mut report = RawMatReport::default();
    for item in items {
        if item.is_header || item.code.is_empty() {
            continue;
        }
        let weight = item.total_weight();
        if weight <= 0.0 {
            continue;
        }
        let category = categorize_code(&item.code);
        match report.lines.iter_mut().find(|l| l.category == category) {
            Some(line) => line.weight_kg += weight,
            None => report.lines.push(RawMatLine {
                category: category.to_string(),
                weight_kg: weight,
            }),
        }
        report.total_weight += weight;
    }
    report
}
