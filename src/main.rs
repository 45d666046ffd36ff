//! Towers GUI
//!
//! A graphical interface for playing Towers against the AI or another player.

use towers::ui::TowersApp;
use towers::AppConfig;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load_from_env().unwrap_or_else(|e| {
        warn!("Invalid config ({e}), using defaults");
        AppConfig::default()
    });
    info!(
        strategy = %config.ai.to_strategy(),
        human = ?config.game.human_color,
        "starting towers"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([960.0, 720.0])
            .with_min_inner_size([760.0, 560.0])
            .with_title("Towers"),
        ..Default::default()
    };

    eframe::run_native(
        "Towers",
        options,
        Box::new(|cc| Ok(Box::new(TowersApp::new(cc, config)))),
    )
}
