//! Detail-line CSV import.
//!
//! Reads a previously exported (or hand-edited) bill-of-material back into
//! [`DetailItem`] rows. Columns are matched by header name,
//! case-insensitively and in any order. A missing required column aborts
//! the import; bad rows are skipped and reported alongside the rows that
//! did parse.
//!
//! ## Example
//!
//! ```rust,ignore
//! use est_core::csv_import::import_detail_csv;
//!
//! let text = std::fs::read_to_string("detail.csv")?;
//! let result = import_detail_csv(&text)?;
//! println!("{} items, {} bad rows", result.items.len(), result.errors.len());
//! ```

use serde::{Deserialize, Serialize};

use crate::detail::DetailItem;
use crate::errors::{EstError, EstResult};

/// Outcome of an import: the rows that parsed plus per-row errors for the
/// rows that did not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ImportResult {
    pub items: Vec<DetailItem>,
    pub errors: Vec<String>,

    /// Data rows seen, including skipped ones
    pub row_count: usize,
}

/// Parse detail lines from CSV text.
///
/// Required columns: `description`, `code`, `sales_code`, `cost_code`,
/// `size`, `qty`, `unit`, `weight_per_unit`, `rate`. `size` and `qty` must
/// be numeric; `weight_per_unit` and `rate` fall back to 0 when blank or
/// unparsable. Rows with too few fields are skipped with a recorded error.
pub fn import_detail_csv(text: &str) -> EstResult<ImportResult> {
    let mut lines = text.lines();

    let header_line = lines
        .next()
        .ok_or_else(|| EstError::malformed_row(0, "CSV text is empty"))?;
    let headers: Vec<&str> = header_line.split(',').map(str::trim).collect();
    let col_index = |name: &str| -> EstResult<usize> {
        headers
            .iter()
            .position(|h| h.eq_ignore_ascii_case(name))
            .ok_or_else(|| EstError::missing_column(name))
    };

    let desc_idx = col_index("description")?;
    let code_idx = col_index("code")?;
    let sales_idx = col_index("sales_code")?;
    let cost_idx = col_index("cost_code")?;
    let size_idx = col_index("size")?;
    let qty_idx = col_index("qty")?;
    let unit_idx = col_index("unit")?;
    let wpu_idx = col_index("weight_per_unit")?;
    let rate_idx = col_index("rate")?;
    let min_fields = [
        desc_idx, code_idx, sales_idx, cost_idx, size_idx, qty_idx, unit_idx, wpu_idx, rate_idx,
    ]
    .into_iter()
    .max()
    .unwrap_or(0)
        + 1;

    let mut result = ImportResult::default();
    let mut row = 1;

    for line in lines {
        row += 1;
        if line.trim().is_empty() {
            continue;
        }
        result.row_count += 1;

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        if fields.len() < min_fields {
            result.errors.push(format!(
                "row {}: expected at least {} fields, found {}",
                row,
                min_fields,
                fields.len()
            ));
            continue;
        }

        let size = match parse_strict_f64(fields[size_idx]) {
            Some(v) => v,
            None => {
                result.errors.push(format!(
                    "row {}: size '{}' must be numeric",
                    row, fields[size_idx]
                ));
                continue;
            }
        };
        let qty = match parse_strict_f64(fields[qty_idx]) {
            Some(v) => v,
            None => {
                result.errors.push(format!(
                    "row {}: qty '{}' must be numeric",
                    row, fields[qty_idx]
                ));
                continue;
            }
        };

        let code = fields[code_idx].to_string();
        result.items.push(DetailItem {
            description: fields[desc_idx].to_string(),
            is_header: code.is_empty(),
            code,
            sales_code: fields[sales_idx].to_string(),
            cost_code: fields[cost_idx].to_string(),
            size,
            qty,
            unit: fields[unit_idx].to_string(),
            weight_per_unit: parse_strict_f64(fields[wpu_idx]).unwrap_or(0.0),
            rate: parse_strict_f64(fields[rate_idx]).unwrap_or(0.0),
            surface_area: 0.0,
            sort_order: result.items.len() as u32,
        });
    }

    Ok(result)
}

/// Parse a numeric field. Empty strings count as zero; anything else must
/// parse as f64.
fn parse_strict_f64(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "description,code,sales_code,cost_code,size,qty,unit,weight_per_unit,rate";

    #[test]
    fn test_basic_import() {
        let text = format!(
            "{}\nBuilt-Up Rigid Frame Steel,BU-FRAME,ST,10111,0,4500,Kg,1.0,0.85\n",
            HEADER
        );
        let result = import_detail_csv(&text).unwrap();
        assert_eq!(result.row_count, 1);
        assert!(result.errors.is_empty());
        assert_eq!(result.items.len(), 1);
        let item = &result.items[0];
        assert_eq!(item.code, "BU-FRAME");
        assert_eq!(item.qty, 4500.0);
        assert!((item.total_weight() - 4500.0).abs() < 1e-9);
        assert!(!item.is_header);
    }

    #[test]
    fn test_columns_matched_case_insensitively_any_order() {
        let text = "Code,QTY,rate,Description,SIZE,unit,sales_code,cost_code,Weight_Per_Unit\n\
                    Z20015,120,1.1,Purlin Z200x1.5,7.6,m,ST,12111,4.7\n";
        let result = import_detail_csv(text).unwrap();
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].code, "Z20015");
        assert_eq!(result.items[0].size, 7.6);
        assert_eq!(result.items[0].weight_per_unit, 4.7);
    }

    #[test]
    fn test_missing_column_aborts() {
        let text = "description,code,sales_code,cost_code,size,unit,weight_per_unit,rate\n";
        let err = import_detail_csv(text).unwrap_err();
        match err {
            EstError::MissingColumn { column } => assert_eq!(column, "qty"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_short_row_skipped_with_error() {
        let text = format!("{}\nonly,three,fields\n", HEADER);
        let result = import_detail_csv(&text).unwrap();
        assert_eq!(result.row_count, 1);
        assert!(result.items.is_empty());
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("row 2"));
    }

    #[test]
    fn test_non_numeric_qty_reported() {
        let text = format!(
            "{}\nPurlin,Z20015,ST,12111,7.6,twelve,m,4.7,1.1\n",
            HEADER
        );
        let result = import_detail_csv(&text).unwrap();
        assert!(result.items.is_empty());
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("must be numeric"));
    }

    #[test]
    fn test_blank_weight_and_rate_default_to_zero() {
        let text = format!("{}\nFreight Per Truck Load,FREIGHT,OT,40111,0,4,Load,,\n", HEADER);
        let result = import_detail_csv(&text).unwrap();
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].weight_per_unit, 0.0);
        assert_eq!(result.items[0].rate, 0.0);
    }

    #[test]
    fn test_header_rows_round_trip() {
        let text = format!("{}\nMAIN FRAMES,,,,0,0,,0,0\n", HEADER);
        let result = import_detail_csv(&text).unwrap();
        assert_eq!(result.items.len(), 1);
        assert!(result.items[0].is_header);
    }

    #[test]
    fn test_empty_lines_ignored() {
        let text = format!(
            "{}\n\nBuilt-Up Rigid Frame Steel,BU-FRAME,ST,10111,0,100,Kg,1.0,0.85\n\n",
            HEADER
        );
        let result = import_detail_csv(&text).unwrap();
        assert_eq!(result.row_count, 1);
        assert_eq!(result.items.len(), 1);
    }
}
