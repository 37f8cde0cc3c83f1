//! # Paint Calculator
//!
//! Side generator invoked after the structural passes: sums the paintable
//! surface area carried on the generated steel lines (surface area per kg
//! comes from the catalog) and appends primer/top-coat litre lines under
//! the paint cost code. Galvanized secondary steel carries zero surface
//! area in the catalog and so never attracts paint.

use serde::{Deserialize, Serialize};

use crate::detail::{cost_code, sales_code, DetailGenerator};
use crate::input::BuildingInput;

/// Primer coverage, m² per litre.
const PRIMER_COVERAGE: f64 = 6.0;

/// Epoxy top-coat coverage, m² per litre.
const EPOXY_COVERAGE: f64 = 8.0;

/// Result of the paint pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PaintSummary {
    /// Paint system applied
    pub system: String,

    /// Total paintable steel surface, m²
    pub surface_area: f64,

    /// Primer litres
    pub primer_litres: f64,

    /// Top-coat litres (epoxy systems only)
    pub top_coat_litres: f64,
}

/// Compute surfaces from the items generated so far and append the paint
/// lines. "None" leaves only the section header.
pub fn generate(gen: &mut DetailGenerator, input: &BuildingInput) -> PaintSummary {
    let surface_area: f64 = gen.items().iter().map(|i| i.total_surface()).sum();

    gen.insert_code("Paint", "-", "", 0.0, 0.0, "");

    let mut summary = PaintSummary {
        system: input.paint_system.clone(),
        surface_area,
        ..PaintSummary::default()
    };
    if surface_area <= 0.0 {
        return summary;
    }

    match input.paint_system.as_str() {
        "Standard Primer" => {
            summary.primer_litres = (surface_area / PRIMER_COVERAGE).ceil();
            gen.insert_code("", "PAINT-PRIMER", sales_code::OTHER, 0.0, summary.primer_litres, cost_code::PAINT);
        }
        "High Build" => {
            summary.primer_litres = (surface_area / PRIMER_COVERAGE).ceil();
            gen.insert_code("", "PAINT-HB", sales_code::OTHER, 0.0, summary.primer_litres, cost_code::PAINT);
        }
        "Epoxy" => {
            summary.primer_litres = (surface_area / PRIMER_COVERAGE).ceil();
            summary.top_coat_litres = (surface_area / EPOXY_COVERAGE).ceil();
            gen.insert_code("", "PAINT-PRIMER", sales_code::OTHER, 0.0, summary.primer_litres, cost_code::PAINT);
            gen.insert_code("", "PAINT-EPOXY", sales_code::OTHER, 0.0, summary.top_coat_litres, cost_code::PAINT);
        }
        _ => {}
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;

    fn steel_gen(catalog: &MemoryCatalog) -> DetailGenerator<'_> {
        let mut gen = DetailGenerator::new(catalog);
        // 1000 kg of frame steel at 0.022 m²/kg -> 22 m² of surface
        gen.insert_code("", "BU-FRAME", sales_code::STEEL, 0.0, 1000.0, cost_code::MAIN_FRAMES);
        gen
    }

    #[test]
    fn test_standard_primer_litres() {
        let mut gen = steel_gen(MemoryCatalog::builtin());
        let input = BuildingInput::default();
        let summary = generate(&mut gen, &input);

        assert!((summary.surface_area - 22.0).abs() < 1e-9);
        assert_eq!(summary.primer_litres, 4.0); // ceil(22/6)
        assert!(gen.items().iter().any(|i| i.code == "PAINT-PRIMER"));
    }

    #[test]
    fn test_epoxy_adds_top_coat() {
        let mut gen = steel_gen(MemoryCatalog::builtin());
        let input = BuildingInput {
            paint_system: "Epoxy".to_string(),
            ..BuildingInput::default()
        };
        let summary = generate(&mut gen, &input);

        assert_eq!(summary.top_coat_litres, 3.0); // ceil(22/8)
        assert!(gen.items().iter().any(|i| i.code == "PAINT-EPOXY"));
    }

    #[test]
    fn test_none_system_header_only() {
        let mut gen = steel_gen(MemoryCatalog::builtin());
        let input = BuildingInput {
            paint_system: "None".to_string(),
            ..BuildingInput::default()
        };
        let before = gen.items().len();
        let summary = generate(&mut gen, &input);

        assert_eq!(summary.primer_litres, 0.0);
        assert_eq!(gen.items().len(), before + 1);
    }
}
