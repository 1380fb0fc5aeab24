// psd2dash: terminal dashboard for PSD2 Open Banking compliance.

mod app;
mod catalog;
mod config;
mod error;
mod logging;
mod state;
mod ui;

use std::sync::Arc;

use tracing::{info, warn};

use crate::app::App;
use crate::catalog::{Catalog, sample_catalog};
use crate::config::Config;

fn load_catalog(config: &Config) -> error::Result<Catalog> {
    match &config.catalog_path {
        Some(path) => {
            info!(path = %path.display(), "loading catalog");
            Catalog::load(path)
        }
        None => Ok(sample_catalog()),
    }
}

#[tokio::main]
async fn main() -> error::Result<()> {
    let config = Config::load_default()?;

    if let Some(path) = config::log_path() {
        if let Err(e) = logging::init(&path, &config.effective_log_filter()) {
            eprintln!("Logging disabled: {}", e);
        }
    }

    // First run: write the defaults out so they can be edited
    if let Some(path) = config::config_path().filter(|p| !p.exists()) {
        if let Err(e) = config.save(&path) {
            warn!(path = %path.display(), error = %e, "could not write default config");
        }
    }

    let catalog = load_catalog(&config)?;
    info!(
        endpoints = catalog.endpoints.len(),
        stages = catalog.stage_count(),
        "starting dashboard"
    );

    let mut terminal = ratatui::init();
    let mut app = App::new(Arc::new(catalog), &config);
    let result = app.run(&mut terminal).await;
    ratatui::restore();

    result.map_err(|e| {
        warn!(error = %e, "event loop failed");
        e.into()
    })
}
