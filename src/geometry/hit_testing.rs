use egui::Pos2;

use crate::curve::{ControlPoint, Curve};

/// Find the control point under `pos`.
///
/// A point is hit when its squared distance to `pos` is strictly less than
/// `radius²`. Control points are checked in creation order (start, mid, end)
/// and the first hit wins, so coincident points resolve to the earlier one.
pub fn hit_test(curve: &Curve, pos: Pos2, radius: f32) -> Option<ControlPoint> {
    let radius_sq = radius * radius;

    curve
        .control_points()
        .into_iter()
        .find(|(_, point)| point.distance_sq(pos) < radius_sq)
        .map(|(control, _)| control)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn test_curve() -> Curve {
        Curve::from_endpoints(pos2(0.0, 0.0), pos2(100.0, 0.0))
    }

    #[test]
    fn test_hits_each_control_point() {
        let curve = test_curve();
        assert_eq!(hit_test(&curve, pos2(1.0, 1.0), 6.0), Some(ControlPoint::Start));
        assert_eq!(hit_test(&curve, pos2(50.0, -2.0), 6.0), Some(ControlPoint::Mid));
        assert_eq!(hit_test(&curve, pos2(97.0, 0.0), 6.0), Some(ControlPoint::End));
    }

    #[test]
    fn test_miss_between_points() {
        assert_eq!(hit_test(&test_curve(), pos2(25.0, 0.0), 6.0), None);
    }

    #[test]
    fn test_radius_boundary_is_exclusive() {
        let curve = test_curve();
        assert_eq!(hit_test(&curve, pos2(6.0, 0.0), 6.0), None);
        assert_eq!(hit_test(&curve, pos2(5.9, 0.0), 6.0), Some(ControlPoint::Start));
    }

    #[test]
    fn test_coincident_points_prefer_start() {
        let mut curve = test_curve();
        curve.set_point(ControlPoint::Mid, curve.start);
        assert_eq!(hit_test(&curve, pos2(2.0, 2.0), 6.0), Some(ControlPoint::Start));
    }
}
