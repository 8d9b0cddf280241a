use eframe::egui;
use log::{error, info};

use config::AppConfig;
use gui::PollApp;

mod config;
mod error;
mod gui;
mod models;
mod store;

fn main() -> eframe::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::load().unwrap_or_else(|e| {
        error!("Falling back to default config: {:#}", e);
        AppConfig::default()
    });

    let builder = egui::ViewportBuilder::default()
        .with_title(config.window.title.clone())
        .with_inner_size(egui::vec2(config.window.width, config.window.height));

    let options = eframe::NativeOptions {
        viewport: builder,
        ..Default::default()
    };

    let app_name = config.window.title.clone();
    info!("Starting {}", app_name);
    eframe::run_native(
        &app_name,
        options,
        Box::new(|cc| Ok(Box::new(PollApp::new(cc, config)))),
    )
}
