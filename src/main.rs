use anyhow::Context;
use claims_tracker::app::ClaimsTracker;
use claims_tracker::claims;
use claims_tracker::config::TrackerConfig;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = TrackerConfig::from_env().context("Failed to load configuration")?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let claims = claims::sample_claims()?;
    tracing::info!(
        tick_ms = config.tick_period.as_millis() as u64,
        claims = claims.len(),
        "Starting Claims Tracker"
    );

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_min_inner_size([480.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "VA Claims Status Tracker",
        options,
        Box::new(move |cc| Box::new(ClaimsTracker::new(cc, &config, claims))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run window: {}", e))
}
