use egui::{Context, PointerButton, Pos2, Rect};

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputLocation {
    /// The position in canvas coordinates (relative to the canvas origin)
    pub position: Pos2,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

/// Pointer events, already converted into canvas space
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed
    PointerDown {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse button was released
    PointerUp {
        location: InputLocation,
        button: PointerButton,
    },
    /// Mouse moved (with or without buttons pressed)
    PointerMove {
        location: InputLocation,
        /// Buttons that are currently held down
        held_buttons: Vec<PointerButton>,
    },
}

impl InputEvent {
    pub fn location(&self) -> &InputLocation {
        match self {
            InputEvent::PointerDown { location, .. }
            | InputEvent::PointerUp { location, .. }
            | InputEvent::PointerMove { location, .. } => location,
        }
    }

    /// Helper to check if an input event occurred within the canvas
    pub fn is_in_canvas(&self) -> bool {
        self.location().is_in_canvas
    }
}

/// Handles converting raw egui input into canvas-space InputEvents
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
    /// False while something else (a popup, a window) covers the canvas under the pointer
    canvas_hovered: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
            canvas_hovered: true,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Whether the canvas widget itself has the pointer this frame
    pub fn set_canvas_hovered(&mut self, hovered: bool) {
        self.canvas_hovered = hovered;
    }

    /// Convert a screen position into canvas coordinates.
    ///
    /// egui already reports positions in logical points, so the only
    /// difference left is the canvas origin.
    pub fn to_canvas(&self, screen_pos: Pos2) -> Pos2 {
        (screen_pos - self.canvas_rect.min).to_pos2()
    }

    fn make_location(&self, screen_pos: Pos2) -> InputLocation {
        InputLocation {
            position: self.to_canvas(screen_pos),
            is_in_canvas: self.canvas_hovered && self.canvas_rect.contains(screen_pos),
        }
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let Some(pos) = input.pointer.hover_pos() else {
                self.last_pointer_pos = None;
                return;
            };

            // Presses first so a press-and-drag in one frame places before it previews
            for button in [PointerButton::Primary, PointerButton::Secondary, PointerButton::Middle] {
                if input.pointer.button_pressed(button) {
                    events.push(InputEvent::PointerDown {
                        location: self.make_location(pos),
                        button,
                    });
                }
            }

            if Some(pos) != self.last_pointer_pos {
                let held_buttons = [PointerButton::Primary, PointerButton::Secondary, PointerButton::Middle]
                    .into_iter()
                    .filter(|button| input.pointer.button_down(*button))
                    .collect();
                events.push(InputEvent::PointerMove {
                    location: self.make_location(pos),
                    held_buttons,
                });
            }
            self.last_pointer_pos = Some(pos);

            for button in [PointerButton::Primary, PointerButton::Secondary, PointerButton::Middle] {
                if input.pointer.button_released(button) {
                    events.push(InputEvent::PointerUp {
                        location: self.make_location(pos),
                        button,
                    });
                }
            }
        });

        events
    }
}
