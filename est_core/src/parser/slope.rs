//! # Slope Profiles
//!
//! A roof slope list is written as `width@slope` groups, slope expressed as
//! rise per 10 units of run ("1@1" is a 1:10 pitch). Two legacy conventions
//! carry over exactly:
//!
//! - a group *width* of exactly 1 is a sentinel meaning "half the building
//!   width" (the common symmetric-gable shorthand);
//! - if the listed groups cover less than the building width, a final
//!   synthetic segment is appended that closes the profile down (or up) to
//!   the front eave height.
//!
//! The accumulated profile yields the rafter length, the endwall sheeting
//! area (trapezoid rule per segment) and the peak/valley counts used by the
//! trim generators.

use serde::{Deserialize, Serialize};

use crate::parser::list::ParsedList;

/// One roof segment, left (back eave) to right (front eave).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlopeSegment {
    /// Horizontal run of this segment, meters
    pub width: f64,

    /// Vertical rise over the segment (negative sloping down), meters
    pub rise: f64,

    /// Roof height at the segment's right end, meters
    pub height: f64,
}

/// Derived roof geometry for one building cross-section.
///
/// Invariant: segment widths sum to the building width (the parser truncates
/// overshooting groups and appends a closing segment for undershooting ones).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SlopeProfile {
    /// Segments in order from the back eave
    pub slopes: Vec<SlopeSegment>,

    /// Total sloped rafter length across the width, meters
    pub rafter_length: f64,

    /// Endwall area under the roof line, m² (trapezoid rule)
    pub endwall_area: f64,

    /// Highest point of the roof line, meters
    pub peak_height: f64,

    /// Ridge count: joints where the rise sign flips positive to negative
    pub num_peaks: usize,

    /// Valley count: joints where the rise sign flips negative to positive
    pub num_valleys: usize,
}

/// Build the slope profile for a building cross-section.
///
/// `back_eave` is the roof height at x = 0; `front_eave` is the boundary
/// height used to close an incomplete profile at x = `width`.
pub fn calculate_slope_profile(
    slope_list: &ParsedList,
    width: f64,
    back_eave: f64,
    front_eave: f64,
) -> SlopeProfile {
    let mut profile = SlopeProfile::default();
    let mut covered = 0.0;
    let mut height = back_eave;
    profile.peak_height = back_eave;

    for group in &slope_list.groups {
        // Width 1 is the legacy half-width sentinel.
        let mut seg_width = if group.count == 1.0 {
            width / 2.0
        } else {
            group.count
        };
        // Truncate groups overshooting the building width.
        if covered + seg_width > width {
            seg_width = width - covered;
        }
        if seg_width <= 0.0 {
            continue;
        }
        let rise = seg_width * group.value / 10.0;
        push_segment(&mut profile, &mut covered, &mut height, seg_width, rise);
    }

    // Close an incomplete profile using the front eave as boundary height.
    if covered < width - 1e-9 {
        let seg_width = width - covered;
        let rise = front_eave - height;
        push_segment(&mut profile, &mut covered, &mut height, seg_width, rise);
    }

    for pair in profile.slopes.windows(2) {
        if pair[0].rise > 0.0 && pair[1].rise < 0.0 {
            profile.num_peaks += 1;
        } else if pair[0].rise < 0.0 && pair[1].rise > 0.0 {
            profile.num_valleys += 1;
        }
    }

    profile
}

fn push_segment(
    profile: &mut SlopeProfile,
    covered: &mut f64,
    height: &mut f64,
    seg_width: f64,
    rise: f64,
) {
    let prev_height = *height;
    *height += rise;
    *covered += seg_width;
    profile.rafter_length += (seg_width * seg_width + rise * rise).sqrt();
    profile.endwall_area += seg_width * (prev_height + *height) / 2.0;
    profile.peak_height = profile.peak_height.max(*height);
    profile.slopes.push(SlopeSegment {
        width: seg_width,
        rise,
        height: *height,
    });
}

/// Roof height at each given cross-section position, by linear interpolation
/// along the profile. Positions past the profile hold the last height.
///
/// Drives endwall column lengths: positions are the cumulative span
/// boundaries across the width.
pub fn calculate_column_heights(
    profile: &SlopeProfile,
    back_eave: f64,
    positions: &[f64],
) -> Vec<f64> {
    positions
        .iter()
        .map(|&x| height_at(profile, back_eave, x))
        .collect()
}

fn height_at(profile: &SlopeProfile, back_eave: f64, x: f64) -> f64 {
    let mut seg_start = 0.0;
    let mut height = back_eave;
    for seg in &profile.slopes {
        if x <= seg_start + seg.width {
            let frac = if seg.width > 0.0 {
                (x - seg_start) / seg.width
            } else {
                0.0
            };
            return height + seg.rise * frac;
        }
        seg_start += seg.width;
        height = seg.height;
    }
    height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::list::get_list;

    #[test]
    fn test_symmetric_gable_closes_to_width() {
        // "1@1": half the width at 1:10, closed back down to the front eave.
        let profile = calculate_slope_profile(&get_list("1@1"), 24.0, 6.0, 6.0);
        let total: f64 = profile.slopes.iter().map(|s| s.width).sum();
        assert!((total - 24.0).abs() < 1e-9);
        assert_eq!(profile.slopes.len(), 2);
        assert!((profile.peak_height - 7.2).abs() < 1e-9);
        assert_eq!(profile.num_peaks, 1);
        assert_eq!(profile.num_valleys, 0);
    }

    #[test]
    fn test_incomplete_profile_is_closed() {
        // 8 m at 1:10 on a 30 m building: a 22 m closing segment follows.
        let profile = calculate_slope_profile(&get_list("8@1"), 30.0, 6.0, 6.0);
        let total: f64 = profile.slopes.iter().map(|s| s.width).sum();
        assert!((total - 30.0).abs() < 1e-9);
        assert!((profile.slopes[1].height - 6.0).abs() < 1e-9);
        assert!(profile.slopes[1].rise < 0.0);
    }

    #[test]
    fn test_endwall_area_trapezoid() {
        // Flat roof at eave 6 over 20 m: a single synthetic flat segment.
        let profile = calculate_slope_profile(&get_list(""), 20.0, 6.0, 6.0);
        assert!((profile.endwall_area - 120.0).abs() < 1e-9);
        assert!((profile.rafter_length - 20.0).abs() < 1e-9);
        assert_eq!(profile.num_peaks, 0);
    }

    #[test]
    fn test_double_gable_counts_peaks_and_valley() {
        // Up-down-up-down over 40 m: two peaks, one valley.
        let profile = calculate_slope_profile(&get_list("10@1,10@-1,10@1"), 40.0, 6.0, 6.0);
        assert_eq!(profile.num_peaks, 2);
        assert_eq!(profile.num_valleys, 1);
    }

    #[test]
    fn test_single_slope_higher_front_eave() {
        // Mono-slope closed up to a taller front eave.
        let profile = calculate_slope_profile(&get_list(""), 18.0, 5.0, 7.0);
        assert!((profile.slopes[0].rise - 2.0).abs() < 1e-9);
        assert!((profile.peak_height - 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_column_heights_interpolate() {
        let profile = calculate_slope_profile(&get_list("1@1"), 24.0, 6.0, 6.0);
        let heights = calculate_column_heights(&profile, 6.0, &[0.0, 6.0, 12.0, 18.0, 24.0]);
        assert!((heights[0] - 6.0).abs() < 1e-9);
        assert!((heights[1] - 6.6).abs() < 1e-9);
        assert!((heights[2] - 7.2).abs() < 1e-9);
        assert!((heights[3] - 6.6).abs() < 1e-9);
        assert!((heights[4] - 6.0).abs() < 1e-9);
    }
}
