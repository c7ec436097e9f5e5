use egui::Pos2;

pub mod hit_testing;

pub use hit_testing::hit_test;

/// Point halfway between `a` and `b`.
pub fn midpoint(a: Pos2, b: Pos2) -> Pos2 {
    Pos2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// Point on the quadratic curve `start`-`mid`-`end` at parameter 0.5.
///
/// One step of de Casteljau subdivision: average each leg, then average the
/// two results.
pub fn on_curve_point(start: Pos2, mid: Pos2, end: Pos2) -> Pos2 {
    let m1 = midpoint(start, mid);
    let m2 = midpoint(mid, end);
    midpoint(m1, m2)
}
