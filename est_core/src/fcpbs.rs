//! # FCPBS Generator
//!
//! Factory Cost Price Breakdown Summary: aggregates the full detail list
//! into 13 fixed categories (A B C D F G H I J M O Q T), applies the
//! category markups and produces weight/cost/price per category plus the
//! steel/panel subtotals and the FOB price.
//!
//! Stateless: recomputed from scratch on every call. The estimation
//! sequence runs it twice, once before and once after freight injection.
//!
//! Manufacturing and overhead costs are each fixed at 30% of material cost
//! and total cost at 160% - a deliberate simplification of the original
//! richer cost model. Downstream reports (SAL, BOQ, JAF) are calibrated
//! against these exact ratios; do not change them.

use serde::{Deserialize, Serialize};

use crate::detail::DetailItem;
use crate::input::BuildingInput;

/// The 13 category keys in fixed presentation order.
pub const CATEGORY_KEYS: [char; 13] = [
    'A', 'B', 'C', 'D', 'F', 'G', 'H', 'I', 'J', 'M', 'O', 'Q', 'T',
];

/// Manufacturing cost as a fraction of material cost.
const MANUFACTURING_RATIO: f64 = 0.3;

/// Overhead cost as a fraction of material cost.
const OVERHEAD_RATIO: f64 = 0.3;

/// Total cost as a fraction of material cost.
const TOTAL_COST_RATIO: f64 = 1.6;

/// Default markup for the steel categories A-D.
pub const DEFAULT_STEEL_MARKUP: f64 = 0.8089;

/// Default markup for the panel categories F-J.
pub const DEFAULT_PANEL_MARKUP: f64 = 1.0;

pub fn category_name(key: char) -> &'static str {
    match key {
        'A' => "Main Framing",
        'B' => "Secondary Framing",
        'C' => "Purlins & Girts",
        'D' => "Bracing & Fasteners",
        'F' => "Roof Sheeting",
        'G' => "Wall Sheeting",
        'H' => "Trims & Flashings",
        'I' => "Insulation",
        'J' => "Accessories",
        'M' => "Packing & Skids",
        'O' => "Freight",
        'Q' => "Paint",
        'T' => "Other Charges",
        _ => "Unknown",
    }
}

/// Fixed cost-code membership per category.
fn category_cost_codes(key: char) -> &'static [&'static str] {
    match key {
        'A' => &["10111", "10211", "10311"],
        'B' => &["11111"],
        'C' => &["12111", "12211", "12311"],
        'D' => &["13111", "13211", "13311"],
        'F' => &["20111"],
        'G' => &["20211"],
        'H' => &["21111"],
        'I' => &["22111"],
        'J' => &["23111"],
        'M' => &["30111"],
        'O' => &["40111", "60711"],
        'Q' => &["50111"],
        'T' => &["70111"],
        _ => &[],
    }
}

/// Product-code prefix fallback for items carrying no cost code, matched
/// longest prefix first.
const PREFIX_FALLBACK: [(&str, char); 27] = [
    ("BMASTIC", 'F'),
    ("FREIGHT", 'O'),
    ("GUTTER", 'H'),
    ("DSPOUT", 'H'),
    ("LOUVER", 'J'),
    ("CSKID", 'M'),
    ("LOADS", 'O'),
    ("PAINT", 'Q'),
    ("TURBO", 'J'),
    ("TRIM", 'H'),
    ("CAB", 'D'),
    ("ROD", 'D'),
    ("ANG", 'D'),
    ("HSB", 'D'),
    ("TUB", 'D'),
    ("SAG", 'C'),
    ("SWP", 'F'),
    ("M45", 'F'),
    ("SCR", 'F'),
    ("INS", 'I'),
    ("SKY", 'J'),
    ("SLD", 'J'),
    ("BU", 'A'),
    ("EC", 'B'),
    ("AB", 'D'),
    ("PD", 'J'),
    ("Z", 'C'),
];

/// Category for one detail item: cost-code membership first, then the
/// longest-prefix fallback on the product code. Headers never categorize.
pub fn categorize(item: &DetailItem) -> Option<char> {
    if item.is_header {
        return None;
    }
    if !item.cost_code.is_empty() {
        for key in CATEGORY_KEYS {
            if category_cost_codes(key).contains(&item.cost_code.as_str()) {
                return Some(key);
            }
        }
    }
    if item.code.is_empty() {
        return None;
    }
    let mut table = PREFIX_FALLBACK;
    table.sort_by_key(|(prefix, _)| std::cmp::Reverse(prefix.len()));
    table
        .iter()
        .find(|(prefix, _)| item.code.starts_with(prefix))
        .map(|(_, key)| *key)
}

/// Markup factors per category group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Markups {
    /// Categories A-D
    pub steel: f64,

    /// Categories F-J
    pub panels: f64,
}

impl Default for Markups {
    fn default() -> Self {
        Markups {
            steel: DEFAULT_STEEL_MARKUP,
            panels: DEFAULT_PANEL_MARKUP,
        }
    }
}

impl Markups {
    /// Defaults overridden by any positive markup fields on the input.
    pub fn from_input(input: &BuildingInput) -> Self {
        let mut markups = Markups::default();
        if input.steel_markup > 0.0 {
            markups.steel = input.steel_markup;
        }
        if input.panel_markup > 0.0 {
            markups.panels = input.panel_markup;
        }
        markups
    }

    fn for_category(&self, key: char) -> f64 {
        match key {
            'A' | 'B' | 'C' | 'D' => self.steel,
            'F' | 'G' | 'H' | 'I' | 'J' => self.panels,
            _ => 1.0,
        }
    }
}

/// One category's aggregated figures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FcpbsCategory {
    pub key: char,
    pub name: String,
    pub weight_kg: f64,
    pub material_cost: f64,
    pub manufacturing_cost: f64,
    pub overhead_cost: f64,
    pub total_cost: f64,
    pub markup: f64,
    pub selling_price: f64,

    /// Selling price less material cost
    pub value_added: f64,

    /// Share of total weight, percent (second pass)
    pub weight_pct: f64,

    /// Share of total selling price, percent (second pass)
    pub price_pct: f64,
}

/// The full breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FcpbsReport {
    pub categories: Vec<FcpbsCategory>,
    pub total_weight: f64,
    pub total_selling: f64,

    /// Steel subtotal: A+B+C+D
    pub steel_weight: f64,
    pub steel_price: f64,

    /// Panels subtotal: F+G+H+I+J
    pub panel_weight: f64,
    pub panel_price: f64,

    /// FOB price: steel + panels
    pub fob_price: f64,
}

impl FcpbsReport {
    /// Category by key.
    pub fn category(&self, key: char) -> Option<&FcpbsCategory> {
        self.categories.iter().find(|c| c.key == key)
    }
}

/// Aggregate the detail list. Two passes: sums and markups first, then the
/// percentage shares once the grand totals are known.
pub fn generate(items: &[DetailItem], markups: &Markups) -> FcpbsReport {
    let mut report = FcpbsReport::default();

    for key in CATEGORY_KEYS {
        let mut category = FcpbsCategory {
            key,
            name: category_name(key).to_string(),
            markup: markups.for_category(key),
            ..FcpbsCategory::default()
        };
        for item in items {
            if categorize(item) == Some(key) {
                category.weight_kg += item.total_weight();
                category.material_cost += item.total_cost();
            }
        }
        category.manufacturing_cost = category.material_cost * MANUFACTURING_RATIO;
        category.overhead_cost = category.material_cost * OVERHEAD_RATIO;
        category.total_cost = category.material_cost * TOTAL_COST_RATIO;
        category.selling_price = category.total_cost * category.markup;
        category.value_added = category.selling_price - category.material_cost;

        report.total_weight += category.weight_kg;
        report.total_selling += category.selling_price;
        match key {
            'A' | 'B' | 'C' | 'D' => {
                report.steel_weight += category.weight_kg;
                report.steel_price += category.selling_price;
            }
            'F' | 'G' | 'H' | 'I' | 'J' => {
                report.panel_weight += category.weight_kg;
                report.panel_price += category.selling_price;
            }
            _ => {}
        }
        report.categories.push(category);
    }
    report.fob_price = report.steel_price + report.panel_price;

    // Second pass: shares need the grand totals.
    for category in &mut report.categories {
        if report.total_weight > 0.0 {
            category.weight_pct = category.weight_kg / report.total_weight * 100.0;
        }
        if report.total_selling > 0.0 {
            category.price_pct = category.selling_price / report.total_selling * 100.0;
        }
    }

    report
}
