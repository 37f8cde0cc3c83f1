//! # Report Generators
//!
//! Pure reshapes of the detail list and FCPBS breakdown into the
//! customer-facing structures:
//!
//! - [`boq`] - nine-line bill of quantities composed from FCPBS categories
//! - [`sal`] - sales analysis by sales-code bucket with proportional
//!   allocation of other charges
//! - [`jaf`] - job approval form summary figures
//! - [`rawmat`] - raw material tonnage by product-code prefix
//! - [`erp`] - fixed-width CSV export for the ERP interface
//!
//! None of these hold state; correctness is defined entirely by the mapping
//! tables in each module, which mirror the legacy sheet verbatim.

pub mod boq;
pub mod erp;
pub mod jaf;
pub mod rawmat;
pub mod sal;

pub use boq::{BoqLine, BoqReport};
pub use erp::{export_erp, ErpJob};
pub use jaf::JafReport;
pub use rawmat::{RawMatLine, RawMatReport};
pub use sal::{SalLine, SalReport};
