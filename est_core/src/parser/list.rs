//! # List Notation Parsing
//!
//! The quotation sheet writes repeated spacings as `count@value` groups:
//! `"1@6+2@9"` is one 6 m bay followed by two 9 m bays. Users also type
//! `:` for `@`, and any of `+ ; / ' &` as the group separator, and `x`/`X`
//! as a multiplication sign; [`fix_separators`] normalizes all of these
//! before tokenizing.
//!
//! ## Example
//!
//! ```rust
//! use est_core::parser::list::get_list;
//!
//! let list = get_list("1@6+2@9");
//! assert_eq!(list.group_count, 2);
//! assert_eq!(list.total_count, 3.0);
//! assert_eq!(list.total(), 24.0); // 1*6 + 2*9
//! ```

use serde::{Deserialize, Serialize};

/// One `count@value` group from a spacing list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ListGroup {
    /// Repetition count (fractional counts allowed; slope lists use the
    /// count position for segment widths)
    pub count: f64,

    /// The repeated value (bay width, span, slope, ...)
    pub value: f64,
}

/// Normalized spacing list.
///
/// Invariant: `total_count` equals the sum of `count` across `groups`.
/// Groups whose value parsed to exactly 0 are dropped during parsing and
/// never counted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ParsedList {
    /// Number of surviving groups
    pub group_count: usize,

    /// Total repetitions across all surviving groups
    pub total_count: f64,

    /// The groups, in input order
    pub groups: Vec<ListGroup>,
}

impl ParsedList {
    /// Sum of `count * value` over all groups (e.g. total building length
    /// from a bay list).
    pub fn total(&self) -> f64 {
        self.groups.iter().map(|g| g.count * g.value).sum()
    }

    /// Sum of counts over all groups (equals `total_count` by construction).
    pub fn count(&self) -> f64 {
        self.groups.iter().map(|g| g.count).sum()
    }

    /// Largest group value, 0.0 for an empty list.
    pub fn max_value(&self) -> f64 {
        self.groups.iter().map(|g| g.value).fold(0.0, f64::max)
    }

    /// Value of the first group, 0.0 for an empty list.
    pub fn first_value(&self) -> f64 {
        self.groups.first().map(|g| g.value).unwrap_or(0.0)
    }
}

/// Normalize user separator variants to the canonical `count@value,...` form.
///
/// `:` becomes `@`; each of `+ ; / ' &` becomes `,`; `x`/`X` becomes `@`.
/// The x/X replacement must run last so it only sees characters the earlier
/// passes left alone.
pub fn fix_separators(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            ':' => out.push('@'),
            '+' | ';' | '/' | '\'' | '&' => out.push(','),
            _ => out.push(ch),
        }
    }
    // Second pass: multiplication signs. Kept separate to preserve the
    // legacy replacement order.
    out.chars()
        .map(|ch| if ch == 'x' || ch == 'X' { '@' } else { ch })
        .collect()
}

/// Parse one token of the form `count@value` or bare `value`.
///
/// Missing or unparsable count defaults to 1; unparsable value yields 0
/// (which the caller drops). Never errors.
fn parse_group(token: &str) -> ListGroup {
    let token = token.trim();
    match token.split_once('@') {
        Some((count_str, value_str)) => ListGroup {
            count: count_str.trim().parse().unwrap_or(1.0),
            value: value_str.trim().parse().unwrap_or(0.0),
        },
        None => ListGroup {
            count: 1.0,
            value: token.parse().unwrap_or(0.0),
        },
    }
}

/// Parse a spacing list into its normalized form.
///
/// Zero-value groups are silently dropped and do not count toward
/// `group_count` or `total_count`.
pub fn get_list(text: &str) -> ParsedList {
    let fixed = fix_separators(text);
    let mut groups = Vec::new();
    for token in fixed.split(',') {
        if token.trim().is_empty() {
            continue;
        }
        let group = parse_group(token);
        if group.value != 0.0 {
            groups.push(group);
        }
    }
    ParsedList {
        group_count: groups.len(),
        total_count: groups.iter().map(|g| g.count).sum(),
        groups,
    }
}

/// Dimension summary extracted from one spacing field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct BuildingDimension {
    /// Total extent, sum of `count * value` (building width from spans,
    /// length from bays)
    pub total: f64,

    /// Number of repetitions (bay count, span count)
    pub bay_count: f64,

    /// Largest single value (governing span for frame sizing)
    pub max_span: f64,

    /// Typical spacing: the first group's value
    pub bay_spacing: f64,
}

/// Extract dimensions from a spacing field.
///
/// Three parse modes:
/// 1. list separators present (comma class) - full list parse;
/// 2. an `@`-class character but no separator - single group;
/// 3. bare number - `max_span` only, everything else 0.
pub fn get_building_dimension(text: &str) -> BuildingDimension {
    let fixed = fix_separators(text);
    if fixed.contains(',') || fixed.contains('@') {
        let list = get_list(&fixed);
        BuildingDimension {
            total: list.total(),
            bay_count: list.count(),
            max_span: list.max_value(),
            bay_spacing: list.first_value(),
        }
    } else {
        BuildingDimension {
            total: 0.0,
            bay_count: 0.0,
            max_span: fixed.trim().parse().unwrap_or(0.0),
            bay_spacing: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_separators_all_variants() {
        assert_eq!(fix_separators("1:6+2:9"), "1@6,2@9");
        assert_eq!(fix_separators("3x7;2x8"), "3@7,2@8");
        assert_eq!(fix_separators("1@6/2@9&1@5"), "1@6,2@9,1@5");
    }

    #[test]
    fn test_get_list_roundtrip() {
        let list = get_list("1@6+2@9");
        assert_eq!(list.group_count, 2);
        assert_eq!(list.total_count, 3.0);
        assert_eq!(list.total(), 24.0);
        assert_eq!(list.count(), 3.0);
    }

    #[test]
    fn test_zero_value_groups_vanish() {
        let list = get_list("1@0,1@5");
        assert_eq!(list.group_count, 1);
        assert_eq!(list.total_count, 1.0);
        assert_eq!(list.groups[0].value, 5.0);
    }

    #[test]
    fn test_missing_count_defaults_to_one() {
        let list = get_list("6,2@9");
        assert_eq!(list.groups[0].count, 1.0);
        assert_eq!(list.groups[0].value, 6.0);
        assert_eq!(list.total(), 24.0);
    }

    #[test]
    fn test_unparsable_count_defaults_to_one() {
        let list = get_list("abc@9");
        assert_eq!(list.group_count, 1);
        assert_eq!(list.groups[0].count, 1.0);
        assert_eq!(list.groups[0].value, 9.0);
    }

    #[test]
    fn test_count_invariant_holds() {
        let list = get_list("2@6,1@0,3@7.5,1@9");
        assert!((list.total_count - list.count()).abs() < 1e-12);
        assert_eq!(list.group_count, 3);
    }

    #[test]
    fn test_dimension_list_mode() {
        let dim = get_building_dimension("4@6");
        assert_eq!(dim.total, 24.0);
        assert_eq!(dim.bay_count, 4.0);
        assert_eq!(dim.max_span, 6.0);
        assert_eq!(dim.bay_spacing, 6.0);
    }

    #[test]
    fn test_dimension_bare_number_mode() {
        let dim = get_building_dimension("24");
        assert_eq!(dim.total, 0.0);
        assert_eq!(dim.bay_count, 0.0);
        assert_eq!(dim.max_span, 24.0);
        assert_eq!(dim.bay_spacing, 0.0);
    }

    #[test]
    fn test_dimension_multi_group() {
        let dim = get_building_dimension("1@6+2@9");
        assert_eq!(dim.total, 24.0);
        assert_eq!(dim.bay_count, 3.0);
        assert_eq!(dim.max_span, 9.0);
        assert_eq!(dim.bay_spacing, 6.0);
    }

    #[test]
    fn test_garbage_degrades_to_zero() {
        let dim = get_building_dimension("hello");
        assert_eq!(dim.max_span, 0.0);
        assert_eq!(get_list("???").group_count, 0);
    }
}
