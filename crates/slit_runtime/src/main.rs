//! Slitlab Runtime
//!
//! Interactive double-slit simulation. Optional first argument: path to a
//! JSON settings file.

mod app;

use anyhow::{Context, Result};
use slit_services::Settings;
use std::path::PathBuf;
use winit::event_loop::EventLoop;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    tracing::info!("Slitlab v{}", slit_core::VERSION);

    let settings_path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings =
        Settings::load_or_default(settings_path.as_deref()).context("loading settings")?;

    let event_loop = EventLoop::new().context("creating event loop")?;
    let mut app = app::App::new(settings);

    event_loop.run_app(&mut app).context("running event loop")?;

    app.finish()?;
    tracing::info!("shut down cleanly");
    Ok(())
}
