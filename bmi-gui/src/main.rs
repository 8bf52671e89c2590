//! Native entry point for the BMI calculator.

use bmi_gui::{AppConfig, AppError, BmiApp};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "bmi_gui=info,bmi_shared=info";

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = AppConfig::load()?;
    tracing::info!(
        width = config.window_width,
        height = config.window_height,
        "starting {}",
        config.window_title
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size([config.window_width, config.window_height])
            .with_position([config.window_x, config.window_y]),
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(BmiApp::from_creation_context(cc, &config)))),
    )?;

    Ok(())
}
