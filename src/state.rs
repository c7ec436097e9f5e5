use egui::Pos2;

use crate::curve::Curve;

/// Where the editing session currently is.
///
/// A pending point and a committed curve can never coexist: placing a curve
/// moves from `AwaitingSecondPoint` straight into `CurveEditing`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EditorState {
    /// Nothing placed yet
    #[default]
    Idle,
    /// First point placed, waiting for the second one
    AwaitingSecondPoint { pending: Pos2 },
    /// A curve exists and its control points can be dragged
    CurveEditing { curve: Curve },
}

impl EditorState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn pending_point(&self) -> Option<Pos2> {
        match self {
            Self::AwaitingSecondPoint { pending } => Some(*pending),
            _ => None,
        }
    }

    pub fn curve(&self) -> Option<&Curve> {
        match self {
            Self::CurveEditing { curve } => Some(curve),
            _ => None,
        }
    }

    pub fn curve_mut(&mut self) -> Option<&mut Curve> {
        match self {
            Self::CurveEditing { curve } => Some(curve),
            _ => None,
        }
    }

    /// Short label for status display and logging
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::AwaitingSecondPoint { .. } => "AwaitingSecondPoint",
            Self::CurveEditing { .. } => "CurveEditing",
        }
    }
}
