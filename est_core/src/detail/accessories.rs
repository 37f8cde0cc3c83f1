//! Accessory pass: buy-out items requested by code. Unknown codes degrade
//! to zero-valued lines (the description falls back to the code), keeping
//! the estimate alive on a stale catalog.

use crate::detail::{cost_code, sales_code, DetailGenerator};
use crate::input::BuildingInput;

pub fn accessories(gen: &mut DetailGenerator, input: &BuildingInput) {
    gen.insert_code("Accessories", "-", "", 0.0, 0.0, "");

    for request in &input.accessories {
        if request.code.is_empty() || request.qty <= 0.0 {
            continue;
        }
        gen.insert_code(
            &request.description,
            &request.code,
            sales_code::ACCESSORIES,
            0.0,
            request.qty,
            cost_code::ACCESSORIES,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalog;
    use crate::input::AccessoryRequest;

    #[test]
    fn test_accessory_lines_with_optional_description_header() {
        let mut input = BuildingInput::default();
        input.accessories = vec![
            AccessoryRequest {
                code: "TURBOVENT".to_string(),
                qty: 6.0,
                description: String::new(),
            },
            AccessoryRequest {
                code: "SKY-3660".to_string(),
                qty: 12.0,
                description: "Ridge Skylights".to_string(),
            },
        ];

        let mut gen = DetailGenerator::new(MemoryCatalog::builtin());
        accessories(&mut gen, &input);

        let items = gen.items();
        // section header, vent line, skylight header + line
        assert_eq!(items.len(), 4);
        assert_eq!(items[1].code, "TURBOVENT");
        assert!(items[2].is_header);
        assert_eq!(items[2].description, "Ridge Skylights");
        assert_eq!(items[3].code, "SKY-3660");
    }

    #[test]
    fn test_unknown_code_degrades() {
        let mut input = BuildingInput::default();
        input.accessories = vec![AccessoryRequest {
            code: "GADGET-X".to_string(),
            qty: 1.0,
            description: String::new(),
        }];

        let mut gen = DetailGenerator::new(MemoryCatalog::builtin());
        accessories(&mut gen, &input);

        let line = gen.items().iter().find(|i| i.code == "GADGET-X").unwrap();
        assert_eq!(line.description, "GADGET-X");
        assert_eq!(line.weight_per_unit, 0.0);
    }

    #[test]
    fn test_zero_qty_skipped() {
        let mut input = BuildingInput::default();
        input.accessories = vec![AccessoryRequest {
            code: "TURBOVENT".to_string(),
            qty: 0.0,
            description: String::new(),
        }];

        let mut gen = DetailGenerator::new(MemoryCatalog::builtin());
        accessories(&mut gen, &input);
        assert_eq!(gen.items().len(), 1);
    }
}
