use std::path::PathBuf;

use crate::background::load_background;
use crate::config::EditorConfig;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::state::EditorState;
use crate::tools::CurveEditor;

pub struct CurveApp {
    config: EditorConfig,
    editor: CurveEditor,
    renderer: Renderer,
    input_handler: InputHandler,
}

impl Default for CurveApp {
    fn default() -> Self {
        Self::from_config(EditorConfig::default())
    }
}

impl CurveApp {
    /// Called once before the first frame.
    ///
    /// `background` overrides the persisted background image path.
    pub fn new(cc: &eframe::CreationContext<'_>, background: Option<PathBuf>) -> Self {
        // Only the settings are persisted, never the curve
        let config: EditorConfig = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        let mut app = Self::from_config(config.with_background(background));
        app.init_background(&cc.egui_ctx);
        app
    }

    fn from_config(config: EditorConfig) -> Self {
        let config = config.validated();
        Self {
            editor: CurveEditor::new(config.marker_radius),
            renderer: Renderer::new(&config),
            input_handler: InputHandler::new(egui::Rect::NOTHING),
            config,
        }
    }

    fn init_background(&mut self, ctx: &egui::Context) {
        let Some(path) = self.config.background_path.clone() else {
            log::info!("No background image configured");
            return;
        };

        match load_background(&path) {
            Ok(image) => {
                let texture = ctx.load_texture("background", image, egui::TextureOptions::LINEAR);
                self.renderer.set_background(texture);
                self.editor.repaint(&mut self.renderer);
            }
            Err(err) => log::error!("{}", err),
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Apply new settings to the renderer and the hit testing.
    pub fn apply_config(&mut self, config: EditorConfig) {
        self.config = config.validated();
        self.renderer.apply_config(&self.config);
        self.editor.set_hit_radius(self.config.marker_radius);
    }

    pub fn editor_state(&self) -> &EditorState {
        self.editor.state()
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// The external "clear" action.
    pub fn reset(&mut self) {
        self.editor.reset(&mut self.renderer);
    }

    /// Route this frame's pointer input on `canvas_rect` to the editor.
    ///
    /// `canvas_hovered` is false while another layer covers the canvas under the pointer.
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect, canvas_hovered: bool) {
        self.input_handler.set_canvas_rect(canvas_rect);
        self.input_handler.set_canvas_hovered(canvas_hovered);
        for event in self.input_handler.process_input(ctx) {
            self.editor.handle_event(&event, &mut self.renderer);
        }
    }
}

impl eframe::App for CurveApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.config);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
