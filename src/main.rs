#![warn(clippy::all, rust_2018_idioms)]
// hide console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use eframe_sketchpad::{PaintApp, SketchConfig};

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SketchConfig::from_env().unwrap_or_else(|err| {
        log::warn!("{}; using default settings", err);
        SketchConfig::default()
    });

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.as_str())
            .with_inner_size([config.width as f32 + 40.0, config.height as f32 + 110.0])
            .with_min_inner_size([320.0, 240.0]),
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| {
            let app = PaintApp::new(cc, &config)?;
            Ok(Box::new(app))
        }),
    )
}
