//! # Reference Catalog
//!
//! Read-side product reference data: code -> description, unit, rate,
//! weight per unit and paintable surface area. The estimation core never
//! owns this data; it consumes it through the [`ReferenceCatalog`] trait so
//! the real application can back it with its cached store while tests and
//! the CLI use the built-in seed tables.
//!
//! Two legacy tables feed the catalog: MBSDB (fabricated/steel mill
//! products, weight-bearing) and SSDB (sheeting, fasteners, trims and
//! buy-out accessories). [`MemoryCatalog`] holds both in one map.
//!
//! ## The zero-miss contract
//!
//! An unknown code never errors. [`ReferenceCatalog::lookup_or_zero`]
//! converts a miss into a zero-valued record whose description is the code
//! itself, so a stale or incomplete catalog degrades an estimate instead of
//! blocking it. This is a deliberate policy the whole pipeline relies on.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProductRecord {
    /// Product code, the primary lookup key
    pub code: String,

    /// Display description
    pub description: String,

    /// Sales unit ("Kg", "m", "m2", "Pcs", "Ltr", "Roll", "Load")
    pub unit: String,

    /// Cost rate per unit
    pub rate: f64,

    /// Weight per unit, kg
    pub weight_per_unit: f64,

    /// Paintable surface area per unit, m²
    pub surface_area: f64,
}

impl ProductRecord {
    /// The zero-valued stand-in for an unknown code.
    pub fn zero(code: &str) -> Self {
        ProductRecord {
            code: code.to_string(),
            description: code.to_string(),
            ..ProductRecord::default()
        }
    }
}

/// Read-through catalog contract the estimation core consumes.
///
/// Implementations must be safe for concurrent reads; the core performs no
/// writes during estimation.
pub trait ReferenceCatalog: Send + Sync {
    /// Look up a product by code. `None` for unknown codes.
    fn lookup(&self, code: &str) -> Option<ProductRecord>;

    /// Categorized design-option list (e.g. "frame_type"), insertion order
    /// preserved. Empty for unknown categories.
    fn lookup_options(&self, category: &str) -> Vec<(String, String)>;

    /// Weight per unit for a code, 0.0 for unknown codes.
    fn lookup_weight(&self, code: &str) -> f64 {
        self.lookup(code).map(|p| p.weight_per_unit).unwrap_or(0.0)
    }

    /// Lookup that converts a miss into [`ProductRecord::zero`].
    /// Postcondition: never fails, always returns a record for `code`.
    fn lookup_or_zero(&self, code: &str) -> ProductRecord {
        self.lookup(code).unwrap_or_else(|| ProductRecord::zero(code))
    }
}

/// In-memory catalog backed by HashMaps. Cloneable and cheap to build in
/// tests; `builtin()` returns the seeded demo catalog.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    products: HashMap<String, ProductRecord>,
    options: HashMap<String, Vec<(String, String)>>,
}

impl MemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a product.
    pub fn insert(
        &mut self,
        code: &str,
        description: &str,
        unit: &str,
        rate: f64,
        weight_per_unit: f64,
        surface_area: f64,
    ) {
        self.products.insert(
            code.to_string(),
            ProductRecord {
                code: code.to_string(),
                description: description.to_string(),
                unit: unit.to_string(),
                rate,
                weight_per_unit,
                surface_area,
            },
        );
    }

    /// Register an option list under a category name.
    pub fn insert_options(&mut self, category: &str, options: &[(&str, &str)]) {
        self.options.insert(
            category.to_string(),
            options
                .iter()
                .map(|(c, d)| (c.to_string(), d.to_string()))
                .collect(),
        );
    }

    /// The seeded demo catalog covering every code the generators emit.
    pub fn builtin() -> &'static MemoryCatalog {
        &BUILTIN
    }
}

impl ReferenceCatalog for MemoryCatalog {
    fn lookup(&self, code: &str) -> Option<ProductRecord> {
        self.products.get(code).cloned()
    }

    fn lookup_options(&self, category: &str) -> Vec<(String, String)> {
        self.options.get(category).cloned().unwrap_or_default()
    }
}

static BUILTIN: Lazy<MemoryCatalog> = Lazy::new(|| {
    let mut cat = MemoryCatalog::new();

    // ------------------------------------------------------------------
    // MBSDB: fabricated steel (rate per kg, surface area per kg for paint)
    // ------------------------------------------------------------------
    cat.insert("BU-FRAME", "Built-Up Rigid Frame Steel", "Kg", 0.85, 1.0, 0.022);
    cat.insert("BU-PORTAL", "Built-Up Portal Frame Steel", "Kg", 0.92, 1.0, 0.022);
    cat.insert("BU-ENDWALL", "Endwall Bearing Frame Steel", "Kg", 0.85, 1.0, 0.024);
    cat.insert("BU-MONITOR", "Roof Monitor Framing Steel", "Kg", 0.95, 1.0, 0.024);

    // Endwall columns, painted (kg/m by section depth)
    cat.insert("EC150P", "Endwall Column UC 150 Painted", "m", 14.8, 17.9, 0.61);
    cat.insert("EC200P", "Endwall Column UC 200 Painted", "m", 18.6, 22.3, 0.77);
    cat.insert("EC250P", "Endwall Column UC 250 Painted", "m", 23.9, 28.4, 0.92);
    cat.insert("EC300P", "Endwall Column UC 300 Painted", "m", 29.7, 35.1, 1.05);
    cat.insert("EC350P", "Endwall Column UC 350 Painted", "m", 36.4, 42.7, 1.17);
    cat.insert("EC400P", "Endwall Column UC 400 Painted", "m", 43.8, 51.2, 1.28);
    cat.insert("EC450P", "Endwall Column UC 450 Painted", "m", 51.9, 60.5, 1.40);
    cat.insert("EC500P", "Endwall Column UC 500 Painted", "m", 60.8, 70.6, 1.52);
    cat.insert("EC550P", "Endwall Column UC 550 Painted", "m", 70.4, 81.5, 1.63);
    cat.insert("EC600P", "Endwall Column UC 600 Painted", "m", 80.7, 93.2, 1.75);
    cat.insert("EC650P", "Endwall Column UC 650 Painted", "m", 91.8, 105.7, 1.86);

    // Endwall columns, galvanized (same sections, galv rate premium)
    cat.insert("EC150G", "Endwall Column UC 150 Galvanized", "m", 17.6, 17.9, 0.0);
    cat.insert("EC200G", "Endwall Column UC 200 Galvanized", "m", 22.1, 22.3, 0.0);
    cat.insert("EC250G", "Endwall Column UC 250 Galvanized", "m", 28.3, 28.4, 0.0);
    cat.insert("EC300G", "Endwall Column UC 300 Galvanized", "m", 35.2, 35.1, 0.0);
    cat.insert("EC350G", "Endwall Column UC 350 Galvanized", "m", 43.1, 42.7, 0.0);
    cat.insert("EC400G", "Endwall Column UC 400 Galvanized", "m", 51.9, 51.2, 0.0);
    cat.insert("EC450G", "Endwall Column UC 450 Galvanized", "m", 61.5, 60.5, 0.0);
    cat.insert("EC500G", "Endwall Column UC 500 Galvanized", "m", 72.0, 70.6, 0.0);
    cat.insert("EC550G", "Endwall Column UC 550 Galvanized", "m", 83.4, 81.5, 0.0);
    cat.insert("EC600G", "Endwall Column UC 600 Galvanized", "m", 95.6, 93.2, 0.0);
    cat.insert("EC650G", "Endwall Column UC 650 Galvanized", "m", 108.8, 105.7, 0.0);

    // Cold-formed Z sections (purlins & girts, kg/m)
    cat.insert("Z15015", "Z Purlin 150x1.5", "m", 3.4, 3.8, 0.0);
    cat.insert("Z20015", "Z Purlin 200x1.5", "m", 4.2, 4.7, 0.0);
    cat.insert("Z20018", "Z Purlin 200x1.8", "m", 5.0, 5.6, 0.0);
    cat.insert("Z20020", "Z Purlin 200x2.0", "m", 5.6, 6.2, 0.0);
    cat.insert("Z25020", "Z Purlin 250x2.0", "m", 6.8, 7.6, 0.0);
    cat.insert("Z25025", "Z Purlin 250x2.5", "m", 8.5, 9.4, 0.0);
    cat.insert("Z30025", "Z Purlin 300x2.5", "m", 9.4, 10.4, 0.0);
    cat.insert("Z30030", "Z Purlin 300x3.0", "m", 11.2, 12.4, 0.0);

    // Bracing members and struts
    cat.insert("CAB-12", "Cable Brace 12mm c/w Fittings", "Set", 38.0, 9.5, 0.0);
    cat.insert("ROD-20", "Rod Brace 20mm c/w Fittings", "Set", 46.0, 14.2, 0.0);
    cat.insert("ANG-50", "Angle Brace 50x50x5", "Set", 52.0, 18.6, 0.0);
    cat.insert("SAG-ROD", "Sag Rod 12mm", "Pcs", 2.6, 1.4, 0.0);
    cat.insert("TUB-100", "Wind Strut Tube 100x100x3.2", "m", 8.9, 9.7, 0.0);
    cat.insert("TUB-125", "Wind Strut Tube 125x125x3.2", "m", 11.2, 12.2, 0.0);
    cat.insert("TUB-150", "Wind Strut Tube 150x150x4.0", "m", 16.5, 18.0, 0.0);
    cat.insert("TUB-175", "Wind Strut Tube 175x175x4.0", "m", 19.4, 21.2, 0.0);
    cat.insert("TUB-200", "Wind Strut Tube 200x200x5.0", "m", 27.5, 30.1, 0.0);

    // Bolts
    cat.insert("HSB-M20", "High Strength Bolt M20x60 Gr 8.8", "Pcs", 0.9, 0.32, 0.0);
    cat.insert("HSB-M24", "High Strength Bolt M24x75 Gr 8.8", "Pcs", 1.6, 0.56, 0.0);
    cat.insert("AB-M20-450", "Anchor Bolt M20x450", "Pcs", 2.8, 1.23, 0.0);
    cat.insert("AB-M24-600", "Anchor Bolt M24x600", "Pcs", 4.6, 2.37, 0.0);
    cat.insert("AB-M30-750", "Anchor Bolt M30x750", "Pcs", 8.3, 4.62, 0.0);
    cat.insert("AB-M36-900", "Anchor Bolt M36x900", "Pcs", 13.5, 8.01, 0.0);

    // ------------------------------------------------------------------
    // SSDB: sheeting, fasteners, trims, insulation, buy-outs
    // ------------------------------------------------------------------
    cat.insert("M45-250 AZ 0.5", "Single Skin Panel M45-250 Aluzinc 0.5", "m2", 5.4, 4.3, 0.0);
    cat.insert("M45-250 ALU 0.7", "Single Skin Panel M45-250 Aluminium 0.7", "m2", 9.8, 1.9, 0.0);
    cat.insert("SWP050", "Sandwich Panel 50mm PU Core", "m2", 16.5, 11.5, 0.0);
    cat.insert("SWP075", "Sandwich Panel 75mm PU Core", "m2", 19.0, 12.5, 0.0);
    cat.insert("SWP100", "Sandwich Panel 100mm PU Core", "m2", 21.5, 13.5, 0.0);
    cat.insert("SWP150", "Sandwich Panel 150mm PU Core", "m2", 26.5, 15.5, 0.0);

    cat.insert("SCR-SD-55", "Self Drilling Screw 5.5x55", "Pcs", 0.06, 0.012, 0.0);
    cat.insert("SCR-SWP-115", "Sandwich Panel Screw 5.5x115", "Pcs", 0.14, 0.021, 0.0);
    cat.insert("SCR-AL-55", "Aluminium Screw 5.5x55 c/w Saddle", "Pcs", 0.11, 0.010, 0.0);
    cat.insert("SCR-ST-22", "Stitch Screw 5.5x22", "Pcs", 0.04, 0.007, 0.0);
    cat.insert("BMASTIC", "Bead Mastic Sealant Roll 15m", "Roll", 4.2, 1.1, 0.0);

    cat.insert("TRIM-RIDGE-AZ", "Ridge Cap Aluzinc 0.5", "m", 4.8, 2.6, 0.0);
    cat.insert("TRIM-RIDGE-AL", "Ridge Cap Aluminium 0.7", "m", 8.6, 1.2, 0.0);
    cat.insert("TRIM-RIDGE-SWP", "Ridge Cap Sandwich Panel", "m", 9.4, 3.1, 0.0);
    cat.insert("TRIM-EAVE-AZ", "Eave Trim Aluzinc 0.5", "m", 3.9, 2.1, 0.0);
    cat.insert("TRIM-EAVE-AL", "Eave Trim Aluminium 0.7", "m", 7.1, 1.0, 0.0);
    cat.insert("TRIM-EAVE-SWP", "Eave Trim Sandwich Panel", "m", 8.2, 2.7, 0.0);
    cat.insert("TRIM-GABLE-AZ", "Gable Trim Aluzinc 0.5", "m", 3.9, 2.1, 0.0);
    cat.insert("TRIM-GABLE-AL", "Gable Trim Aluminium 0.7", "m", 7.1, 1.0, 0.0);
    cat.insert("TRIM-GABLE-SWP", "Gable Trim Sandwich Panel", "m", 8.2, 2.7, 0.0);
    cat.insert("TRIM-CORNER-AZ", "Corner Trim Aluzinc 0.5", "m", 3.5, 1.9, 0.0);
    cat.insert("TRIM-CORNER-AL", "Corner Trim Aluminium 0.7", "m", 6.6, 0.9, 0.0);
    cat.insert("TRIM-CORNER-SWP", "Corner Trim Sandwich Panel", "m", 7.8, 2.5, 0.0);
    cat.insert("TRIM-BASE-AZ", "Base Trim Aluzinc 0.5", "m", 3.2, 1.7, 0.0);
    cat.insert("TRIM-BASE-AL", "Base Trim Aluminium 0.7", "m", 6.2, 0.8, 0.0);
    cat.insert("TRIM-BASE-SWP", "Base Trim Sandwich Panel", "m", 7.4, 2.3, 0.0);
    cat.insert("TRIM-VALLEY-AZ", "Valley Gutter Aluzinc 1.0", "m", 11.6, 6.3, 0.0);
    cat.insert("GUTTER", "Eave Gutter Aluzinc 0.6", "m", 7.4, 3.4, 0.0);
    cat.insert("DSPOUT", "Downspout PVC 160mm c/w Brackets", "Pcs", 26.0, 4.8, 0.0);

    cat.insert("INS-FG-50", "Fiberglass Insulation 50mm WMSK", "m2", 2.3, 0.8, 0.0);
    cat.insert("INS-FG-100", "Fiberglass Insulation 100mm WMSK", "m2", 3.6, 1.2, 0.0);

    cat.insert("PAINT-PRIMER", "Red Oxide Primer", "Ltr", 3.1, 1.3, 0.0);
    cat.insert("PAINT-HB", "High Build Primer", "Ltr", 5.4, 1.4, 0.0);
    cat.insert("PAINT-EPOXY", "Epoxy Top Coat", "Ltr", 8.9, 1.5, 0.0);

    cat.insert("TURBOVENT", "Turbo Ventilator 600mm c/w Base", "Pcs", 95.0, 14.0, 0.0);
    cat.insert("SKY-3660", "Skylight Panel 3660mm GRP", "Pcs", 48.0, 5.5, 0.0);
    cat.insert("PD-3070", "Personnel Door 900x2100 c/w Frame", "Pcs", 420.0, 65.0, 0.0);
    cat.insert("SLD-4045", "Sliding Door Leaf 4.0x4.5", "Pcs", 980.0, 410.0, 0.0);
    cat.insert("LOUVER-11", "Fixed Louver 1.0x1.0", "Pcs", 130.0, 16.0, 0.0);

    cat.insert("FREIGHT", "Freight Per Truck Load", "Load", 550.0, 0.0, 0.0);
    cat.insert("CSKID", "Container Skid Set", "Pcs", 85.0, 120.0, 0.0);
    cat.insert("LOADS", "Total Trailer Loads", "Load", 0.0, 0.0, 0.0);

    // ------------------------------------------------------------------
    // Design-option lists (ordered as on the entry sheet)
    // ------------------------------------------------------------------
    cat.insert_options(
        "frame_type",
        &[
            ("CS", "Clear Span"),
            ("MS", "Multi Span"),
            ("LT", "Lean To"),
            ("RS", "Roof System"),
        ],
    );
    cat.insert_options("base_type", &[("PB", "Pinned Base"), ("FB", "Fixed Base")]);
    cat.insert_options(
        "bracing_type",
        &[
            ("CAB", "Cable"),
            ("ROD", "Rod"),
            ("ANG", "Angle"),
            ("POR", "Portal"),
            ("NON", "None"),
        ],
    );
    cat.insert_options(
        "paint_system",
        &[
            ("STD", "Standard Primer"),
            ("HB", "High Build"),
            ("EPX", "Epoxy"),
            ("NON", "None"),
        ],
    );

    cat
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_code() {
        let cat = MemoryCatalog::builtin();
        let p = cat.lookup("Z20015").unwrap();
        assert_eq!(p.unit, "m");
        assert!((p.weight_per_unit - 4.7).abs() < 1e-12);
    }

    #[test]
    fn test_miss_degrades_to_zero_record() {
        let cat = MemoryCatalog::builtin();
        assert!(cat.lookup("NO-SUCH-CODE").is_none());
        let p = cat.lookup_or_zero("NO-SUCH-CODE");
        assert_eq!(p.description, "NO-SUCH-CODE");
        assert_eq!(p.weight_per_unit, 0.0);
        assert_eq!(p.rate, 0.0);
    }

    #[test]
    fn test_lookup_weight_zero_on_miss() {
        assert_eq!(MemoryCatalog::builtin().lookup_weight("NOPE"), 0.0);
    }

    #[test]
    fn test_options_preserve_order() {
        let opts = MemoryCatalog::builtin().lookup_options("frame_type");
        assert_eq!(opts[0].1, "Clear Span");
        assert_eq!(opts[1].1, "Multi Span");
        assert!(MemoryCatalog::builtin().lookup_options("nope").is_empty());
    }

    #[test]
    fn test_repeated_lookup_identical() {
        let cat = MemoryCatalog::builtin();
        assert_eq!(cat.lookup("BU-FRAME"), cat.lookup("BU-FRAME"));
    }
}
