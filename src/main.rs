mod app;
mod color;
mod data;
mod state;
mod ui;

use app::SalaryExplorerApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional dataset path; the bundled data is used otherwise.
    let path = std::env::args_os().nth(1).map(std::path::PathBuf::from);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 900.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Salary Explorer – Jobs by Year",
        options,
        Box::new(|_cc| Ok(Box::new(SalaryExplorerApp::new(path)))),
    )
}
