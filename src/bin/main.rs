extern crate nalgebra_glm as glm;

mod app_state;
mod config;
mod drawing;

use crate::config::CONFIG;
use eframe::egui;

fn main() -> eframe::Result<()> {
    let mut logger = pretty_env_logger::formatted_builder();
    logger.filter_level(CONFIG.general.log_level.to_level_filter());
    logger.parse_default_env();
    logger.init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Munro Map")
            .with_inner_size([1600.0, 1000.0])
            .with_min_inner_size([640.0, 480.0]),
        renderer: eframe::Renderer::Wgpu,
        ..Default::default()
    };

    eframe::run_native(
        "Munro Map",
        options,
        Box::new(|cc| Ok(Box::new(drawing::MunroApp::new(cc)))),
    )
}
