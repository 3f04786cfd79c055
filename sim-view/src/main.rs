//! Application entry point for the 2D contagion viewer.
//!
//! This binary sets up logging and eframe/egui and delegates all
//! interactive logic and rendering to [`Viewer`] from the `viewer` module.

mod viewer;

use contagion_core::Config;
use viewer::Viewer;

/// Starts the native eframe application.
///
/// Logging defaults to `info` unless `RUST_LOG` overrides it. The viewer
/// starts from [`Config::default`]; parameters are edited in its side panel.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .try_init();

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "2D Contagion",
        options,
        Box::new(|_cc| {
            let viewer = Viewer::new(Config::default())?;
            Ok(Box::new(viewer))
        }),
    )
}
