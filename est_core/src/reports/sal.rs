//! Sales analysis: the detail list bucketed by sales code (steel, sheeting,
//! accessories), with the other-charges lines (paint, freight, skids)
//! allocated across the buckets proportionally to their material cost share.

use serde::{Deserialize, Serialize};

use crate::detail::{sales_code, DetailItem};

/// The three sales buckets in report order.
const BUCKETS: [(&str, &str); 3] = [
    (sales_code::STEEL, "Steel Structure"),
    (sales_code::SHEETING, "Sheeting & Cladding"),
    (sales_code::ACCESSORIES, "Accessories"),
];

/// One sales bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SalLine {
    pub sales_code: String,
    pub description: String,
    pub weight_kg: f64,
    pub material_cost: f64,

    /// Share of the other-charges pool, by cost share
    pub allocated_charges: f64,

    /// Material cost plus allocated charges
    pub total: f64,
}

/// The sales analysis report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SalReport {
    pub lines: Vec<SalLine>,

    /// The pooled other-charges cost (sales code OT)
    pub other_charges: f64,

    pub total_weight: f64,
    pub total: f64,
}

pub fn generate(items: &[DetailItem]) -> SalReport {
    let mut report = SalReport::default();

    for (code, description) in BUCKETS {
        let mut line = SalLine {
            sales_code: code.to_string(),
            description: description.to_string(),
            ..SalLine::default()
        };
        for item in items.iter().filter(|i| !i.is_header && i.sales_code == code) {
            line.weight_kg += item.total_weight();
            line.material_cost += item.total_cost();
        }
        report.lines.push(line);
    }

    report.other_charges = items
        .iter()
        .filter(|i| !i.is_header && i.sales_code == sales_code::OTHER)
        .map(DetailItem::total_cost)
        .sum();

    let bucket_cost: f64 = report.lines.iter().map(|l| l.material_cost).sum();
    for line in &mut report.lines {
        if bucket_cost > 0.0 {
            line.allocated_charges = report.other_charges * line.material_cost / bucket_cost;
        }
        line.total = line.material_cost + line.allocated_charges;
        report.total_weight += line.weight_kg;
        report.total += line.total;
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;
    use crate::detail::{cost_code, DetailGenerator};

    fn items() -> Vec<DetailItem> {
        let mut gen = DetailGenerator::new(MemoryCatalog::builtin());
        // 1000 kg steel at 0.85 -> 850 cost
        gen.insert_code("", "BU-FRAME", sales_code::STEEL, 0.0, 1_000.0, cost_code::MAIN_FRAMES);
        // 100 m2 sheeting at 5.4 -> 540 cost
        gen.insert_code("", "M45-250 AZ 0.5", sales_code::SHEETING, 0.0, 100.0, cost_code::ROOF_SHEETING);
        // freight: 2 loads at 550 -> 1100 other charges
        gen.insert_code("", "FREIGHT", sales_code::OTHER, 0.0, 2.0, cost_code::FREIGHT);
        gen.into_items()
    }

    #[test]
    fn test_buckets_and_pool() {
        let report = generate(&items());
        assert_eq!(report.lines.len(), 3);
        assert!((report.other_charges - 1100.0).abs() < 1e-9);
        let steel = &report.lines[0];
        assert!((steel.material_cost - 850.0).abs() < 1e-9);
    }

    #[test]
    fn test_allocation_proportional_to_cost() {
        let report = generate(&items());
        let steel = &report.lines[0];
        let sheet = &report.lines[1];
        let expected_steel = 1100.0 * 850.0 / 1390.0;
        assert!((steel.allocated_charges - expected_steel).abs() < 1e-9);
        // allocations exhaust the pool across non-empty buckets
        let allocated: f64 = report.lines.iter().map(|l| l.allocated_charges).sum();
        assert!((allocated - report.other_charges).abs() < 1e-9);
        assert!(sheet.allocated_charges > 0.0);
    }

    #[test]
    fn test_total_includes_charges() {
        let report = generate(&items());
        assert!((report.total - (850.0 + 540.0 + 1100.0)).abs() < 1e-9);
    }
}
