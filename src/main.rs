use dioxus::prelude::*;

mod api;
mod app;
mod components;
mod shared;
mod theme;
mod utils;

#[cfg(feature = "server")]
mod backend;

pub const FAVICON: Asset = asset!("/assets/favicon.ico");
pub const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        use dotenvy::dotenv;

        backend::init_tracing();
        dotenv().ok();

        match backend::spotify::Config::from_env() {
            Ok(cfg) => {
                tracing::info!("Spotify configured for playlist {}", cfg.playlist_id);
            }
            Err(e) => {
                tracing::warn!("Spotify not configured ({e}); serving demo data");
            }
        }
    }
    dioxus::launch(app::App);
}
