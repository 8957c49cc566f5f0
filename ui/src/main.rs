#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use qrgen_business::QrConfig;
use qrgen_ui::QrGenApp;

mod alloc {
    #[global_allocator]
    static MALLOC: mimalloc::MiMalloc = mimalloc::MiMalloc;
}

fn main() -> anyhow::Result<()> {
    // Log to stderr (if you run with `RUST_LOG=debug`).
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_module("egui_winit::clipboard", log::LevelFilter::Off)
        .init();

    let config = QrConfig::init()?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([400.0, 560.0])
            .with_min_inner_size([240.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "QR Gen",
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_theme(egui::ThemePreference::System);
            Ok(Box::new(QrGenApp::new(cc, config)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("eframe failed: {err}"))
}
