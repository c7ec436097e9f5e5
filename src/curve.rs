use egui::Pos2;

use crate::geometry;

/// Names one of the three control points of a [`Curve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPoint {
    Start,
    Mid,
    End,
}

impl ControlPoint {
    /// All control points in creation order. Hit testing walks this order.
    pub const ALL: [ControlPoint; 3] = [ControlPoint::Start, ControlPoint::Mid, ControlPoint::End];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Mid => "mid",
            Self::End => "end",
        }
    }
}

/// The single editable curve, defined by three control points in canvas space.
///
/// `mid` starts out as the midpoint of `start` and `end` and is moved
/// independently afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Curve {
    pub start: Pos2,
    pub mid: Pos2,
    pub end: Pos2,
}

impl Curve {
    /// Create a curve from its endpoints, deriving `mid`.
    pub fn from_endpoints(start: Pos2, end: Pos2) -> Self {
        Self {
            start,
            mid: geometry::midpoint(start, end),
            end,
        }
    }

    pub fn point(&self, control: ControlPoint) -> Pos2 {
        match control {
            ControlPoint::Start => self.start,
            ControlPoint::Mid => self.mid,
            ControlPoint::End => self.end,
        }
    }

    /// Move one control point, leaving the other two untouched.
    pub fn set_point(&mut self, control: ControlPoint, pos: Pos2) {
        match control {
            ControlPoint::Start => self.start = pos,
            ControlPoint::Mid => self.mid = pos,
            ControlPoint::End => self.end = pos,
        }
    }

    /// Control points paired with their names, in creation order.
    pub fn control_points(&self) -> [(ControlPoint, Pos2); 3] {
        ControlPoint::ALL.map(|control| (control, self.point(control)))
    }

    /// The point on the rendered curve at its parametric midpoint.
    pub fn on_curve_point(&self) -> Pos2 {
        geometry::on_curve_point(self.start, self.mid, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_from_endpoints_derives_mid() {
        let curve = Curve::from_endpoints(pos2(0.0, 0.0), pos2(10.0, 0.0));
        assert_eq!(curve.mid, pos2(5.0, 0.0));
    }

    #[test]
    fn test_set_point_only_touches_target() {
        let mut curve = Curve::from_endpoints(pos2(0.0, 0.0), pos2(10.0, 0.0));
        curve.set_point(ControlPoint::End, pos2(20.0, 4.0));

        assert_eq!(curve.start, pos2(0.0, 0.0));
        assert_eq!(curve.mid, pos2(5.0, 0.0));
        assert_eq!(curve.end, pos2(20.0, 4.0));
    }

    #[test]
    fn test_control_points_order() {
        let curve = Curve::from_endpoints(pos2(1.0, 1.0), pos2(3.0, 3.0));
        let names: Vec<_> = curve.control_points().iter().map(|(cp, _)| cp.name()).collect();
        assert_eq!(names, ["start", "mid", "end"]);
    }
}
