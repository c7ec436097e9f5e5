#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod background;
pub mod config;
pub mod curve;
pub mod document;
pub mod error;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod tools;

pub use app::CurveApp;
pub use config::EditorConfig;
pub use curve::{ControlPoint, Curve};
pub use document::CurveStore;
pub use input::{InputEvent, InputHandler, InputLocation};
pub use renderer::{DrawCommand, MarkerColor, Renderer, Surface};
pub use state::EditorState;
pub use tools::CurveEditor;
