use dioxus::prelude::*;

use crate::shared::types::DashboardStats;

/// Dashboard payload for the current playlist. One call per page load; the
/// client renders either the full dashboard or the error card from the
/// outcome.
#[server(GetTopTracks)]
pub async fn get_top_tracks() -> Result<DashboardStats, ServerFnError> {
    #[cfg(feature = "server")]
    {
        use crate::backend::{demo, spotify, stats};

        let cfg = match spotify::Config::from_env() {
            Ok(cfg) if !cfg.demo_mode => cfg,
            _ => {
                // No credentials (or DEMO_MODE set): serve generated data so
                // the dashboard is usable without a Spotify app.
                tracing::info!("serving demo dashboard data");
                return Ok(stats::build_dashboard_stats(demo::demo_tracks(60)));
            }
        };

        let tracks = spotify::get_playlist_tracks(&cfg, 100).await.map_err(|e| -> ServerFnError {
            tracing::error!("failed to fetch playlist tracks: {e:#}");
            ServerFnError::ServerError(format!("failed to load playlist data: {e}"))
        })?;

        Ok(stats::build_dashboard_stats(tracks))
    }
    #[cfg(not(feature = "server"))]
    {
        Ok(DashboardStats::default())
    }
}
