//! # Detail Generator
//!
//! The central orchestrator of the estimate: walks the building description
//! and emits the bill-of-material line items in fixed passage order -
//! description line, main frames, bearing frames and endwall columns,
//! bracing, wind struts, purlins, girts, roof sheeting, wall sheeting,
//! trims, insulation, accessories, blank separator. The side generators
//! (roof monitor, paint, freight) append further items through the same
//! machinery afterwards.
//!
//! Order is load-bearing twice over: `sort_order` is a strictly increasing
//! counter used for presentation grouping, and downstream aggregators key
//! off the cost codes that only specific insertion calls set.
//!
//! ## `insert_code`
//!
//! One call can emit up to two rows:
//!
//! - description non-empty and code empty or `"-"`: a header row
//!   (no catalog lookup, no weight/rate);
//! - code non-empty and not `"-"`: a data row enriched from the catalog
//!   (description falls back to the code itself on a catalog miss);
//! - both conditions hold: header then data row, consecutively.
//!
//! Catalog misses degrade to zero-valued rows; this generator never fails
//! for business-data reasons.

pub mod accessories;
pub mod frames;
pub mod secondary;
pub mod sheeting;
pub mod trims;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::building::ParsedBuilding;
use crate::catalog::{ProductRecord, ReferenceCatalog};
use crate::input::BuildingInput;

/// Cost codes the generators stamp on data rows. FCPBS category membership
/// and freight category capacities are both keyed on these exact values -
/// changing one silently breaks category attribution.
pub mod cost_code {
    pub const MAIN_FRAMES: &str = "10111";
    pub const ENDWALL_FRAMES: &str = "10211";
    pub const MONITOR_FRAMES: &str = "10311";
    pub const ENDWALL_COLUMNS: &str = "11111";
    pub const PURLINS: &str = "12111";
    pub const GIRTS: &str = "12211";
    pub const SAG_RODS: &str = "12311";
    pub const BRACING: &str = "13111";
    pub const WIND_STRUTS: &str = "13211";
    pub const BOLTS: &str = "13311";
    pub const ROOF_SHEETING: &str = "20111";
    pub const WALL_SHEETING: &str = "20211";
    pub const TRIMS: &str = "21111";
    pub const INSULATION: &str = "22111";
    pub const ACCESSORIES: &str = "23111";
    pub const CONTAINER_SKIDS: &str = "30111";
    pub const FREIGHT: &str = "40111";
    pub const PAINT: &str = "50111";
    pub const TOTAL_LOADS: &str = "60711";
    pub const OTHER_CHARGES: &str = "70111";
}

/// Sales codes bucketing lines for the SAL report.
pub mod sales_code {
    pub const STEEL: &str = "ST";
    pub const SHEETING: &str = "SH";
    pub const ACCESSORIES: &str = "AC";
    pub const OTHER: &str = "OT";
}

/// One bill-of-material line.
///
/// Header rows (`is_header`) carry no code or quantity; they exist purely
/// for display grouping. Data rows carry weight/rate/unit/surface area from
/// the catalog. Items are append-only: created in sequence order and never
/// mutated afterwards except by aggregators reading them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DetailItem {
    pub description: String,
    pub code: String,
    pub sales_code: String,
    pub cost_code: String,

    /// Per-piece size in the product unit (length, area); 0 for unit items
    pub size: f64,

    /// Piece count (or direct quantity when `size` is 0)
    pub qty: f64,

    pub is_header: bool,
    pub weight_per_unit: f64,
    pub rate: f64,
    pub unit: String,

    /// Paintable surface area per unit, m²
    pub surface_area: f64,

    /// Strictly increasing presentation order
    pub sort_order: u32,
}

impl DetailItem {
    /// Quantity in catalog units: `size × qty` when a size is present.
    pub fn effective_qty(&self) -> f64 {
        if self.size > 0.0 {
            self.size * self.qty
        } else {
            self.qty
        }
    }

    /// Line weight, kg.
    pub fn total_weight(&self) -> f64 {
        self.weight_per_unit * self.effective_qty()
    }

    /// Line material cost.
    pub fn total_cost(&self) -> f64 {
        self.rate * self.effective_qty()
    }

    /// Line paintable surface, m².
    pub fn total_surface(&self) -> f64 {
        self.surface_area * self.effective_qty()
    }
}

/// Total weight across a detail list, kg.
pub fn calculate_total_weight(items: &[DetailItem]) -> f64 {
    items.iter().map(DetailItem::total_weight).sum()
}

/// Total material cost across a detail list.
pub fn calculate_total_cost(items: &[DetailItem]) -> f64 {
    items.iter().map(DetailItem::total_cost).sum()
}

/// The detail generator. One instance per calculation; `generate` resets
/// all per-run state (items, sort counter, product cache, carried fields),
/// so instances must not be shared across concurrent calculations.
pub struct DetailGenerator<'a> {
    catalog: &'a dyn ReferenceCatalog,
    items: Vec<DetailItem>,
    next_sort: u32,

    /// Per-run memo of catalog lookups. Local to the run, never shared
    /// across calls, so catalog changes between calls are always seen.
    cache: HashMap<String, ProductRecord>,

    // Carried fields set by one sub-generator and read by a later one.
    pub(crate) pg_bolts: f64,
    pub(crate) n_sag_rods: f64,
    pub(crate) current_rafter_length: f64,
}

impl<'a> DetailGenerator<'a> {
    pub fn new(catalog: &'a dyn ReferenceCatalog) -> Self {
        DetailGenerator {
            catalog,
            items: Vec::new(),
            next_sort: 0,
            cache: HashMap::new(),
            pg_bolts: 0.0,
            n_sag_rods: 0.0,
            current_rafter_length: 0.0,
        }
    }

    /// Run the full passage over the building, replacing any previous run's
    /// output. Returns a view of the generated items.
    pub fn generate(&mut self, input: &BuildingInput, building: &ParsedBuilding) -> &[DetailItem] {
        self.items.clear();
        self.next_sort = 0;
        self.cache.clear();
        self.pg_bolts = 0.0;
        self.n_sag_rods = 0.0;
        self.current_rafter_length = building.profile.rafter_length;

        frames::description_line(self, input, building);
        frames::main_frames(self, input, building);
        frames::bearing_frames(self, input, building);
        secondary::bracing(self, input, building);
        secondary::wind_struts(self, input, building);
        secondary::purlins(self, input, building);
        secondary::girts(self, input, building);
        sheeting::roof_sheeting(self, input, building);
        sheeting::wall_sheeting(self, input, building);
        trims::trims(self, input, building);
        sheeting::insulation(self, input, building);
        accessories::accessories(self, input);
        self.insert_blank();

        &self.items
    }

    /// Items generated so far.
    pub fn items(&self) -> &[DetailItem] {
        &self.items
    }

    /// Consume the generator, yielding the item list.
    pub fn into_items(self) -> Vec<DetailItem> {
        self.items
    }

    /// Total weight of items generated so far, kg.
    pub fn calculate_total_weight(&self) -> f64 {
        calculate_total_weight(&self.items)
    }

    /// Memoized catalog lookup with the zero-miss fallback.
    pub(crate) fn lookup_product(&mut self, code: &str) -> ProductRecord {
        if let Some(hit) = self.cache.get(code) {
            return hit.clone();
        }
        let record = self.catalog.lookup_or_zero(code);
        self.cache.insert(code.to_string(), record.clone());
        record
    }

    /// The central insertion operation; see the module docs for the
    /// header/data dual-row semantics.
    pub fn insert_code(
        &mut self,
        description: &str,
        code: &str,
        sales_code: &str,
        size: f64,
        qty: f64,
        cost_code: &str,
    ) {
        if !description.is_empty() {
            self.push(DetailItem {
                description: description.to_string(),
                is_header: true,
                ..DetailItem::default()
            });
        }
        if !code.is_empty() && code != "-" {
            // A call carrying both a description and a code emits two
            // consecutive rows: the header above, then this data row.
            let product = self.lookup_product(code);
            self.push(DetailItem {
                description: product.description,
                code: code.to_string(),
                sales_code: sales_code.to_string(),
                cost_code: cost_code.to_string(),
                size,
                qty,
                is_header: false,
                weight_per_unit: product.weight_per_unit,
                rate: product.rate,
                unit: product.unit,
                surface_area: product.surface_area,
                sort_order: 0,
            });
        }
    }

    /// Blank display separator row.
    pub fn insert_blank(&mut self) {
        self.push(DetailItem {
            is_header: true,
            ..DetailItem::default()
        });
    }

    /// Override the rate on the most recent data row (freight rate
    /// overrides from the input are applied at creation time).
    pub(crate) fn override_last_rate(&mut self, rate: f64) {
        if let Some(item) = self.items.iter_mut().rev().find(|i| !i.is_header) {
            item.rate = rate;
        }
    }

    fn push(&mut self, mut item: DetailItem) {
        item.sort_order = self.next_sort;
        self.next_sort += 1;
        self.items.push(item);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;

    #[test]
    fn test_header_row_only() {
        let mut gen = DetailGenerator::new(MemoryCatalog::builtin());
        gen.insert_code("Main Frames", "-", "", 0.0, 0.0, "");
        assert_eq!(gen.items().len(), 1);
        assert!(gen.items()[0].is_header);
        assert!(gen.items()[0].code.is_empty());
    }

    #[test]
    fn test_data_row_enriched_from_catalog() {
        let mut gen = DetailGenerator::new(MemoryCatalog::builtin());
        gen.insert_code("", "Z20015", sales_code::STEEL, 6.107, 80.0, cost_code::PURLINS);
        let items = gen.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].description, "Z Purlin 200x1.5");
        assert!((items[0].total_weight() - 4.7 * 6.107 * 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_both_branches_emit_two_rows() {
        let mut gen = DetailGenerator::new(MemoryCatalog::builtin());
        gen.insert_code("BUILDING 24.0 x 24.0", "BU-FRAME", sales_code::STEEL, 1.0, 100.0, cost_code::MAIN_FRAMES);
        let items = gen.items();
        assert_eq!(items.len(), 2);
        assert!(items[0].is_header);
        assert!(!items[1].is_header);
        assert_eq!(items[1].code, "BU-FRAME");
    }

    #[test]
    fn test_catalog_miss_degrades_to_zero_row() {
        let mut gen = DetailGenerator::new(MemoryCatalog::builtin());
        gen.insert_code("", "MYSTERY-9", sales_code::ACCESSORIES, 0.0, 3.0, cost_code::ACCESSORIES);
        let item = &gen.items()[0];
        assert_eq!(item.description, "MYSTERY-9");
        assert_eq!(item.weight_per_unit, 0.0);
        assert_eq!(item.rate, 0.0);
    }

    #[test]
    fn test_sort_order_strictly_increasing() {
        let mut gen = DetailGenerator::new(MemoryCatalog::builtin());
        gen.insert_code("A", "-", "", 0.0, 0.0, "");
        gen.insert_code("", "BU-FRAME", sales_code::STEEL, 0.0, 1.0, cost_code::MAIN_FRAMES);
        gen.insert_blank();
        let orders: Vec<u32> = gen.items().iter().map(|i| i.sort_order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn test_effective_qty_size_semantics() {
        let with_size = DetailItem { size: 6.0, qty: 10.0, ..DetailItem::default() };
        let unit_item = DetailItem { size: 0.0, qty: 10.0, ..DetailItem::default() };
        assert_eq!(with_size.effective_qty(), 60.0);
        assert_eq!(unit_item.effective_qty(), 10.0);
    }
}
