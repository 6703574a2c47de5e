use anyhow::Result;
use revlift::config::Config;
use revlift::interfaces::app::ImpactApp;
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Setup logging
    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Revlift {} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::from_env()?;
    info!("Referral endpoint: {}", config.api.endpoint);

    let app = ImpactApp::new(config);

    // Run UI (blocks the main thread)
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_title("Revlift Impact Analysis"),
        ..Default::default()
    };

    eframe::run_native(
        "Revlift Impact Analysis",
        native_options,
        Box::new(|_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
