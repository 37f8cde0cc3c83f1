//! # SteelQuote CLI
//!
//! Runs one estimation from a `BuildingInput` JSON file (or a built-in
//! demo building when no path is given) and prints the bill of material,
//! the FCPBS category breakdown and the headline figures. Pass `--erp` as
//! a second argument to also emit the ERP export text.

use std::env;
use std::fs;
use std::process::ExitCode;

use est_core::catalog::MemoryCatalog;
use est_core::input::BuildingInput;
use est_core::service;

fn demo_input() -> BuildingInput {
    BuildingInput {
        quote_number: "Q-DEMO-001".to_string(),
        customer: "CLI Demo".to_string(),
        spans: "2@15".to_string(),
        bays: "5@7.6".to_string(),
        ..BuildingInput::default()
    }
}

fn load_input(path: &str) -> Result<BuildingInput, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("cannot read {}: {}", path, e))?;
    serde_json::from_str(&text).map_err(|e| format!("cannot parse {}: {}", path, e))
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    let want_erp = args.iter().any(|a| a == "--erp");

    let input = match args.iter().skip(1).find(|a| !a.starts_with("--")) {
        Some(path) => match load_input(path) {
            Ok(input) => input,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            println!("No input file given, running built-in demo building...");
            println!();
            demo_input()
        }
    };

    let result = service::calculate(&input, MemoryCatalog::builtin(), None);

    println!("═══════════════════════════════════════════════════════════");
    println!("  ESTIMATION {}", result.quote_number);
    println!("═══════════════════════════════════════════════════════════");
    println!();
    println!(
        "Building: {:.1}m x {:.1}m, eaves {:.1}/{:.1}m, {} bays",
        result.building.width,
        result.building.length,
        result.building.back_eave,
        result.building.front_eave,
        result.building.num_bays
    );
    println!();

    println!("Bill of Material:");
    for item in &result.detail {
        if item.is_header {
            if !item.description.is_empty() {
                println!("  {}", item.description);
            }
        } else {
            println!(
                "    {:<14} {:>10.2} {:<5} {:>9.0} kg  {:>10.2}",
                item.code,
                item.effective_qty(),
                item.unit,
                item.total_weight(),
                item.total_cost()
            );
        }
    }
    println!();

    println!("FCPBS Breakdown:");
    for category in &result.fcpbs.categories {
        if category.selling_price == 0.0 && category.weight_kg == 0.0 {
            continue;
        }
        println!(
            "  {} {:<22} {:>9.0} kg  {:>12.2}  ({:.1}%)",
            category.key,
            category.name,
            category.weight_kg,
            category.selling_price,
            category.price_pct
        );
    }
    println!();

    println!("═══════════════════════════════════════════════════════════");
    println!(
        "  Total weight: {:>10.0} kg    Trailer loads: {:.0}",
        result.total_weight, result.freight.total_loads
    );
    println!(
        "  FOB price:    {:>10.2}     Total selling: {:.2}",
        result.fob_price, result.fcpbs.total_selling
    );
    println!("═══════════════════════════════════════════════════════════");

    if want_erp {
        println!();
        println!("ERP Export:");
        print!("{}", service::export_erp(&result, &input));
    }

    ExitCode::SUCCESS
}
