// src/renderer.rs
use egui::{Color32, Pos2, Rect, Stroke, Vec2};

use crate::config::EditorConfig;

/// Semantic marker colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerColor {
    /// A control point placed or dragged by the user
    Green,
    /// The derived on-curve midpoint
    Gold,
}

impl MarkerColor {
    pub fn color32(&self) -> Color32 {
        match self {
            Self::Green => Color32::from_rgb(0, 128, 0),
            Self::Gold => Color32::from_rgb(255, 215, 0),
        }
    }
}

/// The drawing capabilities the curve editor needs from a surface.
///
/// A full repaint is `clear`, `draw_background`, `draw_curve`, then the markers,
/// so markers always end up on top of the curve.
pub trait Surface {
    /// Erase everything drawn so far.
    fn clear(&mut self);

    /// Draw the background image scaled to fit. Does nothing until a background is ready.
    fn draw_background(&mut self);

    /// Stroke a curve from `p0` to `p1` shaped by `ctrl`.
    fn draw_curve(&mut self, p0: Pos2, ctrl: Pos2, p1: Pos2);

    /// Draw a filled, outlined circular marker at `pos`.
    fn draw_marker(&mut self, pos: Pos2, color: MarkerColor);
}

/// One recorded drawing operation, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Background,
    Curve { p0: Pos2, ctrl: Pos2, p1: Pos2 },
    Marker { pos: Pos2, color: MarkerColor },
}

/// Where a background of `image_size` lands on a canvas of `canvas_size`.
///
/// The image is scaled uniformly by the smaller of the two axis ratios, so it
/// fits entirely, and anchored at the canvas origin.
pub fn fit_background(image_size: Vec2, canvas_size: Vec2) -> Rect {
    if image_size.x <= 0.0 || image_size.y <= 0.0 {
        return Rect::NOTHING;
    }
    let ratio = (canvas_size.x / image_size.x).min(canvas_size.y / image_size.y);
    Rect::from_min_size(Pos2::ZERO, image_size * ratio)
}

/// egui-backed drawing surface.
///
/// Drawing calls are recorded into a display list which is replayed into the
/// painter every frame, giving canvas-like "draw until cleared" behavior on
/// top of egui's immediate mode.
pub struct Renderer {
    commands: Vec<DrawCommand>,
    background: Option<egui::TextureHandle>,
    marker_radius: f32,
    curve_width: f32,
    curve_color: Color32,
    outline_color: Color32,
}

impl Renderer {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            commands: Vec::new(),
            background: None,
            marker_radius: config.marker_radius,
            curve_width: config.curve_width,
            curve_color: config.curve_color,
            outline_color: config.outline_color,
        }
    }

    /// Take over the visual settings of `config`.
    pub fn apply_config(&mut self, config: &EditorConfig) {
        self.marker_radius = config.marker_radius;
        self.curve_width = config.curve_width;
        self.curve_color = config.curve_color;
        self.outline_color = config.outline_color;
    }

    /// Signal that the background image is ready to be drawn.
    pub fn set_background(&mut self, texture: egui::TextureHandle) {
        log::info!("Background ready: {:?}", texture.size());
        self.background = Some(texture);
    }

    pub fn has_background(&self) -> bool {
        self.background.is_some()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Replay the display list into `rect`. Canvas coordinates are relative to `rect.min`.
    pub fn render(&self, painter: &egui::Painter, rect: Rect) {
        painter.rect_filled(rect, 0.0, Color32::WHITE);

        let to_screen = |p: Pos2| rect.min + p.to_vec2();

        for command in &self.commands {
            match *command {
                DrawCommand::Background => {
                    if let Some(texture) = &self.background {
                        let target = fit_background(texture.size_vec2(), rect.size())
                            .translate(rect.min.to_vec2());
                        let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                        painter.image(texture.id(), target, uv, Color32::WHITE);
                    }
                }
                DrawCommand::Curve { p0, ctrl, p1 } => {
                    let shape = egui::epaint::QuadraticBezierShape::from_points_stroke(
                        [to_screen(p0), to_screen(ctrl), to_screen(p1)],
                        false,
                        Color32::TRANSPARENT,
                        Stroke::new(self.curve_width, self.curve_color),
                    );
                    painter.add(shape);
                }
                DrawCommand::Marker { pos, color } => {
                    painter.circle(
                        to_screen(pos),
                        self.marker_radius,
                        color.color32(),
                        Stroke::new(1.0, self.outline_color),
                    );
                }
            }
        }
    }
}

impl Surface for Renderer {
    fn clear(&mut self) {
        self.commands.clear();
    }

    fn draw_background(&mut self) {
        if self.background.is_some() {
            self.commands.push(DrawCommand::Background);
        }
    }

    fn draw_curve(&mut self, p0: Pos2, ctrl: Pos2, p1: Pos2) {
        self.commands.push(DrawCommand::Curve { p0, ctrl, p1 });
    }

    fn draw_marker(&mut self, pos: Pos2, color: MarkerColor) {
        self.commands.push(DrawCommand::Marker { pos, color });
    }
}
