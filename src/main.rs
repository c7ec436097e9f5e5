#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use std::path::PathBuf;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional background image path as the first argument
    let background = std::env::args_os().nth(1).map(PathBuf::from);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([300.0, 220.0])
            .with_title("Curve Editor"),
        ..Default::default()
    };

    eframe::run_native(
        "eframe curve",
        native_options,
        Box::new(|cc| Ok(Box::new(eframe_curve::CurveApp::new(cc, background)))),
    )
}
