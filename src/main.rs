//! ExpenseGuard - Transaction Fraud Review & Spend Forecast Client
//!
//! Uploads a transaction file for fraud analysis, shows the flagged
//! transactions and charts a 30-day spend forecast.

mod charts;
mod config;
mod data;
mod error;
mod gui;
mod logging;
mod service;
mod session;
mod workflow;

use clap::Parser;
use config::Config;
use eframe::egui;
use gui::ExpenseGuardApp;
use service::HttpService;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    if let Err(err) = logging::init() {
        eprintln!("{err}");
    }

    let service = HttpService::new(&config)?;
    tracing::info!(
        upload = %service.upload_url(),
        forecast = %service.forecast_url(),
        "Using analysis server"
    );

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.width, config.height])
            .with_min_inner_size([900.0, 600.0])
            .with_title("ExpenseGuard"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "ExpenseGuard",
        options,
        Box::new(move |cc| Ok(Box::new(ExpenseGuardApp::new(cc, service)))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to start window: {e}"))
}
