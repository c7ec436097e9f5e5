use egui::{PointerButton, Pos2};

use crate::curve::Curve;
use crate::document::CurveStore;
use crate::geometry::hit_test;
use crate::input::InputEvent;
use crate::renderer::{MarkerColor, Surface};
use crate::state::EditorState;

/// One curve-editing session.
///
/// Turns pointer events into placement of a new curve or dragging of an
/// existing curve's control points, and repaints the surface after every
/// visible change. Each session owns its own store, so independent editors
/// never share state.
#[derive(Debug)]
pub struct CurveEditor {
    store: CurveStore,
    /// Same as the marker radius so the draggable area matches what is drawn
    hit_radius: f32,
}

impl CurveEditor {
    pub fn new(hit_radius: f32) -> Self {
        Self {
            store: CurveStore::new(),
            hit_radius,
        }
    }

    pub fn store(&self) -> &CurveStore {
        &self.store
    }

    pub fn state(&self) -> &EditorState {
        self.store.state()
    }

    pub fn set_hit_radius(&mut self, radius: f32) {
        self.hit_radius = radius;
    }

    /// Dispatch a canvas event. Only the primary button places or drags;
    /// events outside the canvas are ignored.
    pub fn handle_event(&mut self, event: &InputEvent, surface: &mut dyn Surface) {
        if !event.is_in_canvas() {
            return;
        }
        match event {
            InputEvent::PointerDown { location, button: PointerButton::Primary } => {
                self.pointer_down(location.position, surface);
            }
            InputEvent::PointerUp { location, button: PointerButton::Primary } => {
                self.pointer_up(location.position, surface);
            }
            InputEvent::PointerMove { location, held_buttons } => {
                let held = held_buttons.contains(&PointerButton::Primary);
                self.pointer_move(location.position, held, surface);
            }
            _ => {}
        }
    }

    pub fn pointer_down(&mut self, pos: Pos2, surface: &mut dyn Surface) {
        self.register_point(pos, surface);
    }

    /// Releases place points just like presses, whichever a device fires first.
    pub fn pointer_up(&mut self, pos: Pos2, surface: &mut dyn Surface) {
        self.register_point(pos, surface);
    }

    fn register_point(&mut self, pos: Pos2, surface: &mut dyn Surface) {
        let state = *self.store.state();
        match state {
            EditorState::CurveEditing { .. } => {
                log::debug!("Curve already exists, ignoring point {:?}", pos);
            }
            EditorState::Idle => {
                self.store.set_pending_point(pos);
                surface.draw_marker(pos, MarkerColor::Green);
                log::debug!("Pending point placed at {:?}", pos);
            }
            EditorState::AwaitingSecondPoint { pending } => {
                match self.store.commit_curve(pending, pos) {
                    Some(curve) => {
                        surface.clear();
                        surface.draw_background();
                        surface.draw_curve(curve.start, curve.mid, curve.end);
                        draw_control_markers(&curve, surface);
                    }
                    None => {
                        // Second click on the first one: a dot, not a curve
                        self.store.clear_pending_point();
                    }
                }
            }
        }
    }

    /// Pointer motion. Only acts while the button is held.
    pub fn pointer_move(&mut self, pos: Pos2, held: bool, surface: &mut dyn Surface) {
        if !held {
            return;
        }

        let state = *self.store.state();
        match state {
            EditorState::Idle => {}
            EditorState::AwaitingSecondPoint { pending } => {
                // Straight preview: the control point sits on the moving end
                surface.clear();
                surface.draw_background();
                surface.draw_curve(pending, pos, pos);
                surface.draw_marker(pending, MarkerColor::Green);
            }
            EditorState::CurveEditing { curve } => {
                let Some(target) = hit_test(&curve, pos, self.hit_radius) else {
                    return;
                };
                log::trace!("Dragging {} to {:?}", target.name(), pos);

                if let Some(curve) = self.store.curve_mut() {
                    curve.set_point(target, pos);
                    let curve = *curve;
                    paint_editing(&curve, surface);
                }
            }
        }
    }

    /// Drop the curve and any pending point, leaving only the background.
    pub fn reset(&mut self, surface: &mut dyn Surface) {
        log::info!("Resetting curve editor (was {})", self.store.state().name());
        self.store.clear();
        surface.clear();
        surface.draw_background();
    }

    /// Full repaint of whatever the session currently holds.
    pub fn repaint(&self, surface: &mut dyn Surface) {
        let state = *self.store.state();
        match state {
            EditorState::Idle => {
                surface.clear();
                surface.draw_background();
            }
            EditorState::AwaitingSecondPoint { pending } => {
                surface.clear();
                surface.draw_background();
                surface.draw_marker(pending, MarkerColor::Green);
            }
            EditorState::CurveEditing { curve } => paint_editing(&curve, surface),
        }
    }
}

fn draw_control_markers(curve: &Curve, surface: &mut dyn Surface) {
    for (_, point) in curve.control_points() {
        surface.draw_marker(point, MarkerColor::Green);
    }
}

fn paint_editing(curve: &Curve, surface: &mut dyn Surface) {
    surface.clear();
    surface.draw_background();
    surface.draw_curve(curve.start, curve.mid, curve.end);
    draw_control_markers(curve, surface);
    surface.draw_marker(curve.on_curve_point(), MarkerColor::Gold);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::input::InputLocation;
    use crate::renderer::{DrawCommand, Renderer};
    use egui::pos2;

    fn location(x: f32, y: f32, is_in_canvas: bool) -> InputLocation {
        InputLocation { position: pos2(x, y), is_in_canvas }
    }

    #[test]
    fn test_secondary_button_does_not_place() {
        let mut editor = CurveEditor::new(6.0);
        let mut renderer = Renderer::new(&EditorConfig::default());
        let event = InputEvent::PointerDown {
            location: location(1.0, 1.0, true),
            button: PointerButton::Secondary,
        };
        editor.handle_event(&event, &mut renderer);
        assert!(editor.state().is_idle());
    }

    #[test]
    fn test_events_outside_canvas_ignored() {
        let mut editor = CurveEditor::new(6.0);
        let mut renderer = Renderer::new(&EditorConfig::default());
        let event = InputEvent::PointerDown {
            location: location(-5.0, 1.0, false),
            button: PointerButton::Primary,
        };
        editor.handle_event(&event, &mut renderer);
        assert!(editor.state().is_idle());
        assert!(renderer.commands().is_empty());
    }

    #[test]
    fn test_move_uses_primary_held_flag() {
        let mut editor = CurveEditor::new(6.0);
        let mut renderer = Renderer::new(&EditorConfig::default());
        editor.pointer_down(pos2(0.0, 0.0), &mut renderer);

        let hover = InputEvent::PointerMove {
            location: location(5.0, 5.0, true),
            held_buttons: vec![PointerButton::Secondary],
        };
        editor.handle_event(&hover, &mut renderer);
        assert_eq!(renderer.commands().len(), 1);

        let drag = InputEvent::PointerMove {
            location: location(5.0, 5.0, true),
            held_buttons: vec![PointerButton::Primary],
        };
        editor.handle_event(&drag, &mut renderer);
        assert_eq!(
            renderer.commands(),
            &[
                DrawCommand::Curve { p0: pos2(0.0, 0.0), ctrl: pos2(5.0, 5.0), p1: pos2(5.0, 5.0) },
                DrawCommand::Marker { pos: pos2(0.0, 0.0), color: MarkerColor::Green },
            ]
        );
    }

    #[test]
    fn test_hit_radius_follows_setting() {
        let mut editor = CurveEditor::new(6.0);
        let mut renderer = Renderer::new(&EditorConfig::default());
        editor.pointer_down(pos2(0.0, 0.0), &mut renderer);
        editor.pointer_up(pos2(100.0, 0.0), &mut renderer);

        editor.set_hit_radius(2.0);
        editor.pointer_move(pos2(100.0, 4.0), true, &mut renderer);
        assert_eq!(editor.store().curve().map(|c| c.end), Some(pos2(100.0, 0.0)));

        editor.set_hit_radius(5.0);
        editor.pointer_move(pos2(100.0, 4.0), true, &mut renderer);
        assert_eq!(editor.store().curve().map(|c| c.end), Some(pos2(100.0, 4.0)));
    }
}
