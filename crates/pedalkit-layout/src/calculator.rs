//! Core layout arithmetic shared by both enclosure variants.
//!
//! Pure functions of their numeric inputs. None of them validate: callers
//! are expected to run `DesignConfig::validate_geometry` first. In
//! particular [`footswitch_row`] will happily place holes outside the panel
//! if the row is wider than the panel.

use crate::directive::{FingerSegment, Point2, Point3, Shape3, Size3};

/// Center `count` evenly spaced circular features of `cap_diameter` along a
/// row of `panel_length`, returning the x offset of each feature center.
///
/// Offsets are strictly increasing, spaced `cap_diameter + spacing` apart,
/// and symmetric about `panel_length / 2`.
pub fn footswitch_row(count: usize, cap_diameter: f64, spacing: f64, panel_length: f64) -> Vec<f64> {
    let n = count as f64;
    let total_width = n * cap_diameter + (n - 1.0) * spacing;
    let start_x = (panel_length - total_width) / 2.0 + cap_diameter / 2.0;
    (0..count)
        .map(|i| start_x + i as f64 * (cap_diameter + spacing))
        .collect()
}

/// The four corner-inset points of a `panel_length` x `panel_width` panel.
///
/// Order is fixed: near-origin, +x, +y, diagonal. Used identically for lid
/// screws and board standoffs with different `offset` values.
pub fn corner_positions(panel_length: f64, panel_width: f64, offset: f64) -> [Point2; 4] {
    [
        Point2::new(offset, offset),
        Point2::new(panel_length - offset, offset),
        Point2::new(offset, panel_width - offset),
        Point2::new(panel_length - offset, panel_width - offset),
    ]
}

/// The two cuboids whose set-difference yields a hollow wall shell with a
/// floor: the outer envelope, and an inner void inset by `wall_thickness` on
/// every lateral face and raised by `wall_thickness` off the floor.
pub fn wall_shell(length: f64, width: f64, height: f64, wall_thickness: f64) -> (Shape3, Shape3) {
    let outer = Shape3::cuboid(Point3::new(0.0, 0.0, 0.0), Size3::new(length, width, height));
    let inner = Shape3::cuboid(
        Point3::new(wall_thickness, wall_thickness, wall_thickness),
        Size3::new(
            length - 2.0 * wall_thickness,
            width - 2.0 * wall_thickness,
            height - wall_thickness,
        ),
    );
    (outer, inner)
}

/// Divide an edge of `length` into `floor(length / joint_size)` finger-joint
/// segments, alternating tab and slot starting with the parity given by
/// `is_male`. The division remainder is split as an equal margin on both
/// ends.
///
/// Tabs carry `depth = thickness`; slots carry `depth = 0`. The segments are
/// positional metadata only; nothing cuts them into a panel outline.
pub fn finger_joint_segments(
    length: f64,
    thickness: f64,
    joint_size: f64,
    is_male: bool,
) -> Vec<FingerSegment> {
    let num_joints = (length / joint_size) as usize;
    let remaining = length - num_joints as f64 * joint_size;
    let start_offset = remaining / 2.0;

    (0..num_joints)
        .map(|i| {
            let tab = (i % 2 == 0) == is_male;
            FingerSegment {
                offset: start_offset + i as f64 * joint_size,
                depth: if tab { thickness } else { 0.0 },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footswitch_row_reference_values() {
        // Seven 16mm caps with 15mm gaps on a 150mm panel. The row is wider
        // than the panel, so the first offsets land left of the origin; the
        // calculator does not clamp.
        let xs = footswitch_row(7, 16.0, 15.0, 150.0);
        assert_eq!(xs.len(), 7);
        assert!((xs[0] - (-18.0)).abs() < 1e-9);
        assert!((xs[6] - 168.0).abs() < 1e-9);
    }

    #[test]
    fn test_footswitch_row_spacing_and_symmetry() {
        let xs = footswitch_row(5, 16.0, 10.0, 150.0);
        for pair in xs.windows(2) {
            assert!((pair[1] - pair[0] - 26.0).abs() < 1e-9);
            assert!(pair[1] > pair[0]);
        }
        // Symmetric about the panel midpoint.
        let mid = 150.0 / 2.0;
        for (left, right) in xs.iter().zip(xs.iter().rev()) {
            assert!((left - mid + (right - mid)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_footswitch_row_single() {
        let xs = footswitch_row(1, 16.0, 15.0, 150.0);
        assert_eq!(xs, vec![75.0]);
    }

    #[test]
    fn test_corner_positions_reference_values() {
        let corners = corner_positions(150.0, 100.0, 5.0);
        assert_eq!(
            corners,
            [
                Point2::new(5.0, 5.0),
                Point2::new(145.0, 5.0),
                Point2::new(5.0, 95.0),
                Point2::new(145.0, 95.0),
            ]
        );
    }

    #[test]
    fn test_wall_shell_insets() {
        let (outer, inner) = wall_shell(150.0, 100.0, 30.0, 2.0);
        match outer {
            Shape3::Cuboid { origin, size } => {
                assert_eq!(origin, Point3::new(0.0, 0.0, 0.0));
                assert_eq!(size, Size3::new(150.0, 100.0, 30.0));
            }
            _ => panic!("expected cuboid"),
        }
        match inner {
            Shape3::Cuboid { origin, size } => {
                assert_eq!(origin, Point3::new(2.0, 2.0, 2.0));
                assert_eq!(size, Size3::new(146.0, 96.0, 28.0));
            }
            _ => panic!("expected cuboid"),
        }
    }

    #[test]
    fn test_finger_joint_segments_exact_division() {
        // 150mm edge with 10mm joints divides evenly: 15 segments, no margin.
        let segments = finger_joint_segments(150.0, 3.0, 10.0, true);
        assert_eq!(segments.len(), 15);
        assert_eq!(segments[0].offset, 0.0);
        for (i, seg) in segments.iter().enumerate() {
            assert!((seg.offset - i as f64 * 10.0).abs() < 1e-9);
            if i % 2 == 0 {
                assert_eq!(seg.depth, 3.0);
                assert!(seg.is_tab());
            } else {
                assert_eq!(seg.depth, 0.0);
                assert!(!seg.is_tab());
            }
        }
    }

    #[test]
    fn test_finger_joint_segments_female_parity() {
        let segments = finger_joint_segments(150.0, 3.0, 10.0, false);
        assert!(!segments[0].is_tab());
        assert!(segments[1].is_tab());
    }

    #[test]
    fn test_finger_joint_segments_remainder_margin() {
        // 104mm edge with 10mm joints: 10 segments with 2mm margins.
        let segments = finger_joint_segments(104.0, 3.0, 10.0, true);
        assert_eq!(segments.len(), 10);
        assert!((segments[0].offset - 2.0).abs() < 1e-9);
        let last = segments.last().unwrap();
        assert!((last.offset + 10.0 - 102.0).abs() < 1e-9);
    }
}
