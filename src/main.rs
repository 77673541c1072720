mod app;
mod core;
mod events;
mod models;
mod ui;
mod utils;

use eframe::egui;
use eyre::eyre;
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

fn main() -> eyre::Result<()> {
    // Setup file-based logging
    let file_appender = tracing_appender::rolling::never(".", "overchat.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(non_blocking)
        .init();

    let runtime = Runtime::new().expect("Failed to create Tokio runtime");

    let config = runtime.block_on(app::config::load())?;
    if config.channel.is_empty() {
        return Err(eyre!(
            "No channel configured. Set `channel` in app_config.toml or OVERCHAT_CHANNEL."
        ));
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_transparent(true)
            .with_always_on_top()
            .with_inner_size([420.0, 640.0])
            .with_title("Overchat"),
        ..Default::default()
    };

    let handle = runtime.handle().clone();
    eframe::run_native(
        "Overchat",
        native_options,
        Box::new(move |cc| {
            let app = ui::App::new(cc, config, handle);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| eyre!("Overlay window failed: {e}"))
}
