//! ERP export: the fixed-width CSV text the ERP interface ingests.
//!
//! Line endings are `\r\n`. Line type `1` is the job header; line type `2`
//! repeats per FCPBS category. Categories with ERP code 0 or a
//! non-positive selling price are omitted. Weight-bearing categories ship
//! as metric tons with per-MT rates and costs; zero-weight ("lump sum")
//! categories force quantity 1 and carry their costs directly.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::fcpbs::{FcpbsCategory, FcpbsReport};
use crate::input::BuildingInput;

/// ERP account code per FCPBS category. Category T has no ERP account and
/// is never exported.
pub fn erp_code(key: char) -> u32 {
    match key {
        'A' => 100100,
        'B' => 100200,
        'C' => 100300,
        'D' => 100400,
        'F' => 200100,
        'G' => 200200,
        'H' => 200300,
        'I' => 200400,
        'J' => 200500,
        'M' => 300100,
        'O' => 400100,
        'Q' => 500100,
        _ => 0,
    }
}

/// Job fields for the export header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ErpJob {
    pub fiscal_year: u32,
    pub job_number: String,
    pub building_id: String,
    pub contract_value: f64,

    /// dd-mm-yyyy; empty takes today's date at export time
    pub contract_date: String,
}

impl ErpJob {
    /// Job fields from an input, with the FOB price standing in for a
    /// missing contract value.
    pub fn from_input(input: &BuildingInput, fob_price: f64) -> Self {
        ErpJob {
            fiscal_year: input.fiscal_year,
            job_number: input.job_number.clone(),
            building_id: input.building_id.clone(),
            contract_value: if input.contract_value > 0.0 {
                input.contract_value
            } else {
                fob_price
            },
            contract_date: input.contract_date.clone(),
        }
    }
}

fn pad_left(text: &str, width: usize) -> String {
    let truncated: String = text.chars().take(width).collect();
    format!("{:<width$}", truncated, width = width)
}

fn header_line(job: &ErpJob) -> String {
    let date = if job.contract_date.is_empty() {
        Utc::now().format("%d-%m-%Y").to_string()
    } else {
        job.contract_date.clone()
    };
    format!(
        "1,{},{},{},{},{:>15.2}\r\n",
        job.fiscal_year,
        pad_left(&job.building_id, 10),
        date,
        pad_left(&job.job_number, 9),
        job.contract_value,
    )
}

fn category_line(fiscal_year: u32, code: u32, category: &FcpbsCategory) -> String {
    let (qty, rate, mat, prod, oh) = if category.weight_kg > 0.0 {
        // weight-bearing: MT quantities, per-MT rates and costs
        let qty = category.weight_kg / 1000.0;
        (
            qty,
            category.selling_price / qty,
            category.material_cost / qty,
            category.manufacturing_cost / qty,
            category.overhead_cost / qty,
        )
    } else {
        // lump sum: unit quantity, costs carried directly
        (
            1.0,
            category.selling_price,
            category.material_cost,
            category.manufacturing_cost,
            category.overhead_cost,
        )
    };
    format!(
        "2,{},{:06},{:>15.4},{:>15.2},{:>15.2},{:>15.2},{:>15.2},{:>15.4}\r\n",
        fiscal_year, code, qty, rate, mat, prod, oh, qty,
    )
}

/// Render the export text for a breakdown.
pub fn export_erp(fcpbs: &FcpbsReport, job: &ErpJob) -> String {
    let mut out = header_line(job);
    for category in &fcpbs.categories {
        let code = erp_code(category.key);
        if code == 0 || category.selling_price <= 0.0 {
            continue;
        }
        out.push_str(&category_line(job.fiscal_year, code, category));
    }
    out
}
