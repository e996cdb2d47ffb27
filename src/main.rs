use hike_stats::app_config::AppConfig;
use hike_stats::format::{format_coordinates, format_distance};
use hike_stats::track::TrackSummary;
use hike_stats::track_loader::load_sessions_from;
use tracing::{debug, info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    tracing_subscriber::fmt().with_max_level(config.logging().level()).init();

    info!("🥾 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    info!("✅  Loaded configuration");

    let home = config.map().default_location();
    debug!(
        "📍 Default location: {}",
        format_coordinates(home.latitude, home.longitude, home.altitude_or_zero())
    );

    let sessions = load_sessions_from(config.tracks().directory(), config.tracks().extension()).await?;
    info!("✅  Loaded {} tracking session(s)", sessions.len());

    for session in &sessions {
        match TrackSummary::from_session(session, config.stats().speed_unit()) {
            Ok(summary) => {
                info!("📈 {}", summary);
                if let Some(start) = summary.start() {
                    let distance = format_distance(home.distance_to(start));
                    info!("📍 {} starts {} from the default location", summary.session_id(), distance);
                }
            }
            Err(err) => warn!("⚠️ Skipping session: {}", err),
        }
    }

    info!("🏁 {} summarized {} session(s)", env!("CARGO_PKG_NAME"), sessions.len());
    Ok(())
}
