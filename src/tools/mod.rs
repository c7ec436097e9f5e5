// Tool implementations
mod curve_tool;
pub use curve_tool::CurveEditor;
