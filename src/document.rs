use egui::Pos2;

use crate::curve::Curve;
use crate::state::EditorState;

/// Owns the (at most one) curve and the pending first point of a curve being placed.
#[derive(Debug, Default)]
pub struct CurveStore {
    state: EditorState,
}

impl CurveStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn has_pending_point(&self) -> bool {
        self.state.pending_point().is_some()
    }

    pub fn pending_point(&self) -> Option<Pos2> {
        self.state.pending_point()
    }

    /// Record the first point of a new curve. Ignored once a curve exists.
    pub fn set_pending_point(&mut self, pos: Pos2) {
        if self.state.curve().is_some() {
            log::debug!("Ignoring pending point {:?}: a curve already exists", pos);
            return;
        }
        self.state = EditorState::AwaitingSecondPoint { pending: pos };
    }

    pub fn clear_pending_point(&mut self) {
        if self.has_pending_point() {
            self.state = EditorState::Idle;
        }
    }

    /// Store a curve running from `start` to `end` with a derived mid point.
    ///
    /// Returns `None` without touching the store when a curve already exists,
    /// and `None` without storing anything when `start == end`.
    pub fn commit_curve(&mut self, start: Pos2, end: Pos2) -> Option<Curve> {
        if let Some(existing) = self.state.curve() {
            log::debug!("Rejecting second curve, keeping {:?}", existing);
            return None;
        }
        if start == end {
            log::debug!("Degenerate curve at {:?} discarded", start);
            return None;
        }

        let curve = Curve::from_endpoints(start, end);
        self.state = EditorState::CurveEditing { curve };
        log::info!("Committed curve {:?}", curve);
        Some(curve)
    }

    pub fn curve(&self) -> Option<&Curve> {
        self.state.curve()
    }

    pub fn curve_mut(&mut self) -> Option<&mut Curve> {
        self.state.curve_mut()
    }

    /// Drop the curve and any pending point.
    pub fn clear(&mut self) {
        self.state = EditorState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_new_store_is_empty() {
        let store = CurveStore::new();
        assert!(!store.has_pending_point());
        assert!(store.curve().is_none());
    }

    #[test]
    fn test_pending_point_lifecycle() {
        let mut store = CurveStore::new();
        store.set_pending_point(pos2(3.0, 4.0));
        assert!(store.has_pending_point());
        assert_eq!(store.pending_point(), Some(pos2(3.0, 4.0)));

        store.clear_pending_point();
        assert!(!store.has_pending_point());
        store.clear_pending_point();
        assert!(store.state().is_idle());
    }

    #[test]
    fn test_commit_derives_mid() {
        let mut store = CurveStore::new();
        let curve = store.commit_curve(pos2(0.0, 0.0), pos2(10.0, 0.0)).unwrap();
        assert_eq!(curve.mid, pos2(5.0, 0.0));
        assert_eq!(store.curve(), Some(&curve));
    }

    #[test]
    fn test_commit_clears_pending_point() {
        let mut store = CurveStore::new();
        store.set_pending_point(pos2(0.0, 0.0));
        store.commit_curve(pos2(0.0, 0.0), pos2(4.0, 4.0));
        assert!(!store.has_pending_point());
    }

    #[test]
    fn test_degenerate_commit() {
        let mut store = CurveStore::new();
        assert!(store.commit_curve(pos2(5.0, 5.0), pos2(5.0, 5.0)).is_none());
        assert!(store.curve().is_none());
    }

    #[test]
    fn test_second_commit_rejected() {
        let mut store = CurveStore::new();
        let first = store.commit_curve(pos2(0.0, 0.0), pos2(10.0, 0.0)).unwrap();

        assert!(store.commit_curve(pos2(1.0, 1.0), pos2(30.0, 40.0)).is_none());
        assert_eq!(store.curve(), Some(&first));
    }

    #[test]
    fn test_pending_point_ignored_while_curve_exists() {
        let mut store = CurveStore::new();
        store.commit_curve(pos2(0.0, 0.0), pos2(10.0, 0.0));
        store.set_pending_point(pos2(50.0, 50.0));
        assert!(!store.has_pending_point());
        assert!(store.curve().is_some());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut store = CurveStore::new();
        store.commit_curve(pos2(0.0, 0.0), pos2(10.0, 0.0));
        store.clear();
        assert!(store.curve().is_none());
        assert!(!store.has_pending_point());

        store.set_pending_point(pos2(1.0, 2.0));
        store.clear();
        assert!(store.curve().is_none());
        assert!(!store.has_pending_point());
    }
}
