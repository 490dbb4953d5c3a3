use eframe::egui;
use log::{error, info};

mod ui;

use ui::app_state::LoanTrackerApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    info!("Starting Loan Tracker egui application");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 500.0])
            .with_min_inner_size([800.0, 400.0])
            .with_title("Loan Tracker")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Loan Tracker",
        options,
        Box::new(|cc| match LoanTrackerApp::new(cc) {
            Ok(app) => {
                info!("Successfully initialized Loan Tracker app");
                Ok(Box::new(app))
            }
            Err(e) => {
                error!("Failed to initialize app: {}", e);
                Err(format!("Failed to initialize app: {}", e).into())
            }
        }),
    )
}
