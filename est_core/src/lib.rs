//! # est_core - Pre-Engineered Steel Building Estimation Engine
//!
//! `est_core` turns a building enquiry - dimensions in spacing notation,
//! frame and sheeting selections, openings and accessories - into a full
//! bill of material with weights, costed category breakdowns and the
//! customer/ERP reports derived from them. All inputs and outputs are
//! JSON-serializable, so frontends only ever exchange plain data.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: one [`service::calculate`] call per estimation; no
//!   shared mutable state between runs
//! - **JSON-First**: every type implements Serialize/Deserialize
//! - **Hard to kill**: bad spacing notation and unknown product codes
//!   degrade to documented zeros instead of erroring mid-calculation
//! - **Catalog behind a trait**: pricing data is a [`catalog::ReferenceCatalog`],
//!   swappable for testing or live price feeds
//!
//! ## Quick Start
//!
//! ```rust
//! use est_core::catalog::MemoryCatalog;
//! use est_core::input::BuildingInput;
//! use est_core::service;
//!
//! let input = BuildingInput {
//!     quote_number: "Q-2026-001".to_string(),
//!     spans: "2@15".to_string(),
//!     bays: "5@7.6".to_string(),
//!     ..BuildingInput::default()
//! };
//!
//! let result = service::calculate(&input, MemoryCatalog::builtin(), None);
//! println!("{:.0} kg, FOB {:.2}", result.total_weight, result.fob_price);
//! ```
//!
//! ## Modules
//!
//! - [`input`] - the enquiry as entered ([`input::BuildingInput`])
//! - [`parser`] - spacing-list notation, slope profiles, code selection
//! - [`building`] - derived geometry and governing loads
//! - [`quickest`] - calibrated weight formulas and selection tables
//! - [`catalog`] - product reference data behind [`catalog::ReferenceCatalog`]
//! - [`detail`] - the bill-of-material generator
//! - [`paint`], [`monitor`], [`freight`] - side generators appending lines
//! - [`fcpbs`] - factory cost / price breakdown by category
//! - [`reports`] - BOQ, SAL, JAF, raw-material and ERP outputs
//! - [`csv_import`] - detail-sheet CSV round-trip
//! - [`service`] - the pipeline entry point
//! - [`errors`] - structured boundary errors

pub mod building;
pub mod catalog;
pub mod csv_import;
pub mod detail;
pub mod errors;
pub mod fcpbs;
pub mod freight;
pub mod input;
pub mod monitor;
pub mod paint;
pub mod parser;
pub mod quickest;
pub mod reports;
pub mod service;

// Re-export commonly used types at crate root for convenience
pub use catalog::{MemoryCatalog, ProductRecord, ReferenceCatalog};
pub use errors::{EstError, EstResult};
pub use input::BuildingInput;
pub use service::{calculate, export_erp, EstimationResult};
