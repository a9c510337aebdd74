use eframe::{CreationContext, NativeOptions, egui};
use log::info;

use passgen::app::PassGenApp;
use passgen::settings::AppSettings;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = AppSettings::load();
    info!("starting with default length {}", settings.default_length);

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([380.0, 420.0])
            .with_title("PassGen"),
        ..Default::default()
    };
    eframe::run_native(
        "PassGen",
        native_options,
        Box::new(move |_cc: &CreationContext| Ok(Box::new(PassGenApp::new(settings)))),
    )
}
