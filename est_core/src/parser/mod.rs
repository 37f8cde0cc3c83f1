//! # Input Parser
//!
//! Pure parsing functions for the legacy quotation-sheet notation:
//!
//! - [`list`] - spacing/list notation (`"1@6+2@9"`), building dimensions
//! - [`slope`] - roof slope profiles, rafter lengths, column heights
//! - [`codes`] - connection-type, base-type, panel/screw/trim code lookups
//!
//! Everything here is stateless and total: malformed input degrades to
//! documented defaults (count = 1, value 0 dropped) rather than erroring.
//! All arithmetic is IEEE double; no rounding happens during parsing -
//! rounding is a presentation concern owned by the generators.

pub mod codes;
pub mod list;
pub mod slope;

pub use list::{fix_separators, get_building_dimension, get_list, BuildingDimension, ParsedList};
pub use slope::{calculate_column_heights, calculate_slope_profile, SlopeProfile, SlopeSegment};
