//! # Estimation Service
//!
//! The calculation entry point: runs the full pipeline over one
//! [`BuildingInput`] and returns every derived artifact in a single
//! [`EstimationResult`]. The fixed pass order matters:
//!
//! 1. parse dimensions ([`ParsedBuilding`])
//! 2. detail generation (the bill-of-material passage)
//! 3. roof monitor, then paint (both append detail lines)
//! 4. FCPBS pre-freight pass (freight needs category weights settled)
//! 5. freight (appends Freight/Container Skid lines)
//! 6. FCPBS final pass (picks up what freight appended)
//! 7. SAL / BOQ / JAF / RawMat reports off the final numbers
//!
//! The service is re-entrant: all state lives in the per-call generator,
//! and the catalog is shared read-only, so concurrent calculations over the
//! same catalog are safe.
//!
//! ## Example
//!
//! ```rust
//! use est_core::catalog::MemoryCatalog;
//! use est_core::input::BuildingInput;
//! use est_core::service;
//!
//! let input = BuildingInput {
//!     spans: "1@24".to_string(),
//!     bays: "4@6".to_string(),
//!     ..BuildingInput::default()
//! };
//! let result = service::calculate(&input, MemoryCatalog::builtin(), None);
//! assert!(result.total_weight > 0.0);
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::building::ParsedBuilding;
use crate::catalog::ReferenceCatalog;
use crate::detail::{calculate_total_weight, DetailGenerator, DetailItem};
use crate::fcpbs::{self, FcpbsReport, Markups};
use crate::freight::{self, FreightBreakdown};
use crate::input::BuildingInput;
use crate::monitor::{self, MonitorSummary};
use crate::paint::{self, PaintSummary};
use crate::reports::{boq, erp, jaf, rawmat, sal};
use crate::reports::{BoqReport, ErpJob, JafReport, RawMatReport, SalReport};

/// Everything one calculation produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    /// Run identifier
    pub id: Uuid,

    /// When the calculation ran (UTC)
    pub generated_at: DateTime<Utc>,

    pub quote_number: String,
    pub customer: String,

    /// Derived geometry and loads
    pub building: ParsedBuilding,

    /// The full bill-of-material, headers included
    pub detail: Vec<DetailItem>,

    /// Cost breakdown before the freight lines landed; freight sizing and
    /// reconciliation reporting both read this one
    pub fcpbs_pre_freight: FcpbsReport,

    /// Final cost breakdown, freight included
    pub fcpbs: FcpbsReport,

    pub freight: FreightBreakdown,
    pub paint: PaintSummary,
    pub monitor: MonitorSummary,

    pub sal: SalReport,
    pub boq: BoqReport,
    pub jaf: JafReport,
    pub rawmat: RawMatReport,

    /// Detail weight total, kg
    pub total_weight: f64,

    /// FOB selling price (steel + panels)
    pub fob_price: f64,
}

/// Run the full estimation pipeline.
///
/// `markups` falls back to the standard steel/panel markups when `None`.
/// Never fails for business-data reasons: unparsable dimension lists and
/// unknown catalog codes degrade to zeros inside the generators.
pub fn calculate(
    input: &BuildingInput,
    catalog: &dyn ReferenceCatalog,
    markups: Option<Markups>,
) -> EstimationResult {
    let markups = markups.unwrap_or_else(|| Markups::from_input(input));
    let building = ParsedBuilding::from_input(input);

    let mut gen = DetailGenerator::new(catalog);
    gen.generate(input, &building);

    let monitor = monitor::generate(&mut gen, input, &building);
    let paint = paint::generate(&mut gen, input);

    let fcpbs_pre_freight = fcpbs::generate(gen.items(), &markups);
    let freight = freight::generate(&mut gen, input);
    let fcpbs = fcpbs::generate(gen.items(), &markups);

    let sal = sal::generate(gen.items());
    let boq = boq::generate(&fcpbs);
    let jaf = jaf::generate(input, &building, &fcpbs);
    let rawmat = rawmat::generate(gen.items());

    let detail = gen.into_items();
    let total_weight = calculate_total_weight(&detail);
    let fob_price = fcpbs.fob_price;

    EstimationResult {
        id: Uuid::new_v4(),
        generated_at: Utc::now(),
        quote_number: input.quote_number.clone(),
        customer: input.customer.clone(),
        building,
        detail,
        fcpbs_pre_freight,
        fcpbs,
        freight,
        paint,
        monitor,
        sal,
        boq,
        jaf,
        rawmat,
        total_weight,
        fob_price,
    }
}

/// ERP export text for a finished calculation, pulling job fields from the
/// input (FOB price stands in for a missing contract value).
pub fn export_erp(result: &EstimationResult, input: &BuildingInput) -> String {
    let job = ErpJob::from_input(input, result.fob_price);
    erp::export_erp(&result.fcpbs, &job)
}
