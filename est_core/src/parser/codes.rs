//! # Classification & Code Lookups
//!
//! Small deterministic tables mapping building inputs to connection classes,
//! anchor-bolt codes, sandwich-panel codes and fastener/trim codes. All
//! thresholds use inclusive upper bounds and fall back to the highest tier,
//! so every function is total.

/// Connection-type bucket (1-5) for a frame span.
///
/// Drives connection-bolt counting in the main-frame generator: wider spans
/// carry deeper rafters and more end-plate rows.
pub fn get_connection_type(span: f64) -> u8 {
    const TIERS: [(f64, u8); 4] = [(12.0, 1), (18.0, 2), (24.0, 3), (30.0, 4)];
    first_match(&TIERS, span).unwrap_or(5)
}

/// Anchor-bolt code for a base type and eave height.
///
/// Fixed bases develop moment at the foundation and step up one bolt size
/// relative to pinned bases at the same eave height.
pub fn get_fixed_base_type(base_type: &str, eave_height: f64) -> &'static str {
    const PINNED: [(f64, &str); 2] = [(6.0, "AB-M20-450"), (9.0, "AB-M24-600")];
    const FIXED: [(f64, &str); 2] = [(6.0, "AB-M24-600"), (9.0, "AB-M30-750")];
    if base_type == "Fixed Base" {
        first_match(&FIXED, eave_height).unwrap_or("AB-M36-900")
    } else {
        first_match(&PINNED, eave_height).unwrap_or("AB-M30-750")
    }
}

/// Sandwich-panel product code for a core thickness in mm.
///
/// Thickness snaps up to the next stocked core (50/75/100/150).
pub fn generate_swp_code(thickness: f64) -> &'static str {
    const TIERS: [(f64, &str); 3] = [(50.0, "SWP050"), (75.0, "SWP075"), (100.0, "SWP100")];
    first_match(&TIERS, thickness).unwrap_or("SWP150")
}

/// Fastener codes for a skin selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrewCodes {
    /// Main self-drilling fastener (panel to purlin/girt)
    pub fastener: &'static str,

    /// Stitch screw (panel side-lap)
    pub stitch: &'static str,
}

/// Fastener codes by material prefix. Sandwich-panel (SWP) codes take
/// priority over single-skin codes; the single-skin pair is the default.
pub fn get_screw_codes(skin: &str) -> ScrewCodes {
    if skin.starts_with("SWP") {
        ScrewCodes {
            fastener: "SCR-SWP-115",
            stitch: "SCR-ST-22",
        }
    } else if skin.starts_with("ALU") {
        ScrewCodes {
            fastener: "SCR-AL-55",
            stitch: "SCR-ST-22",
        }
    } else {
        ScrewCodes {
            fastener: "SCR-SD-55",
            stitch: "SCR-ST-22",
        }
    }
}

/// Trim product-code suffix by material prefix. SWP before single-skin;
/// aluzinc is the default finish.
pub fn get_trim_suffix(skin: &str) -> &'static str {
    if skin.starts_with("SWP") {
        "-SWP"
    } else if skin.starts_with("ALU") {
        "-AL"
    } else {
        "-AZ"
    }
}

/// First-match-wins threshold scan: returns the value of the first tier
/// whose inclusive upper bound admits `index`, or None past the table.
pub(crate) fn first_match<T: Copy>(tiers: &[(f64, T)], index: f64) -> Option<T> {
    tiers.iter().find(|(bound, _)| index <= *bound).map(|(_, v)| *v)
}
