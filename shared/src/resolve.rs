use std::f64::consts::{FRAC_PI_2, TAU};

use crate::sectors::slice_angle;

/// Fixed pointer position: the top of the wheel, in the same rotation
/// convention the canvas transform uses. Shared by the renderer and the
/// resolver.
pub const POINTER_ANGLE: f64 = -FRAC_PI_2;

// Guards floor() against landings exactly on a sector edge.
const EPS: f64 = 1e-10;

/// Maps any angle, including negative and multi-turn ones, into [0, 2*pi).
pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(TAU)
}

/// Sector index sitting under the pointer once the wheel has settled.
///
/// Inverts the render transform: the wheel is rotated by `final_angle`, so in
/// the wheel's own frame the pointer sits at `POINTER_ANGLE - final_angle`,
/// and the index falls out of a division by the slice width. The epsilon
/// before the floor plus the clamp keep the index valid on edge landings.
pub fn resolve_index(final_angle: f64, sector_count: usize) -> usize {
    debug_assert!(sector_count > 0);
    let slice = slice_angle(sector_count);
    let rel = normalize_angle(POINTER_ANGLE - normalize_angle(final_angle));
    let index = ((rel + EPS) / slice).floor() as usize;
    index.min(sector_count - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Rotation that parks the pointer exactly on the midpoint of sector `i`.
    fn angle_landing_on(index: usize, sector_count: usize) -> f64 {
        let rel = (index as f64 + 0.5) * slice_angle(sector_count);
        POINTER_ANGLE - rel
    }

    #[test]
    fn test_resolver_inverts_render_rotation() {
        for sector_count in [2, 4, 6, 8, 12, 20] {
            for index in 0..sector_count {
                let final_angle = angle_landing_on(index, sector_count);
                assert_eq!(resolve_index(final_angle, sector_count), index);
                // The same landing shifted by whole turns resolves identically.
                assert_eq!(resolve_index(final_angle + 5.0 * TAU, sector_count), index);
                assert_eq!(resolve_index(final_angle - 3.0 * TAU, sector_count), index);
            }
        }
    }

    #[test]
    fn test_two_prize_wheel_example() {
        // Four sectors, slice = pi/2. A landing with pointer-relative angle
        // just past pi/2 falls into sector 1, the first losing slice.
        let final_angle = POINTER_ANGLE - (FRAC_PI_2 + 0.01);
        assert_eq!(resolve_index(final_angle, 4), 1);

        let sectors =
            crate::sectors::build_sectors(&["A".to_string(), "B".to_string()]).unwrap();
        assert!(!sectors[resolve_index(final_angle, sectors.len())].is_win);
    }

    #[test]
    fn test_edge_landing_stays_in_range() {
        for sector_count in [2, 4, 8] {
            let slice = slice_angle(sector_count);
            for boundary in 0..sector_count {
                // Pointer exactly on the separator between two sectors.
                let final_angle = POINTER_ANGLE - boundary as f64 * slice;
                let index = resolve_index(final_angle, sector_count);
                assert!(index < sector_count);
                assert_eq!(index, boundary % sector_count);
            }
        }
    }

    #[test]
    fn test_normalize_angle() {
        assert_eq!(normalize_angle(0.0), 0.0);
        assert!((normalize_angle(TAU + 1.0) - 1.0).abs() < 1e-12);
        assert!((normalize_angle(-1.0) - (TAU - 1.0)).abs() < 1e-12);
        assert!(normalize_angle(-4.0 * TAU).abs() < 1e-12);
    }
}
