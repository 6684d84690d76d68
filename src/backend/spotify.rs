#![cfg(feature = "server")]
use anyhow::{anyhow, Context, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::env;
use tokio::sync::RwLock;

const TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const API_BASE_URL: &str = "https://api.spotify.com/v1";
/// Refresh the cached token this long before it actually expires.
const TOKEN_REFRESH_MARGIN_SECS: i64 = 60;

static CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .connect_timeout(std::time::Duration::from_secs(5))
        .timeout(std::time::Duration::from_secs(15))
        .build()
        .expect("client")
});

static TOKEN_CACHE: Lazy<RwLock<Option<CachedToken>>> = Lazy::new(|| RwLock::new(None));

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub playlist_id: String,
    pub demo_mode: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let client_id = env::var("CLIENT_ID").map_err(|_| anyhow!("CLIENT_ID not set"))?;
        let client_secret =
            env::var("CLIENT_SECRET").map_err(|_| anyhow!("CLIENT_SECRET not set"))?;
        let playlist_id = env::var("PLAYLIST_ID").map_err(|_| anyhow!("PLAYLIST_ID not set"))?;
        let demo_mode = env::var("DEMO_MODE").map(|v| v == "1").unwrap_or(false);
        Ok(Self {
            client_id,
            client_secret,
            playlist_id,
            demo_mode,
        })
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Deserialize)]
struct PlaylistTracksPage {
    #[serde(default)]
    items: Vec<PlaylistItem>,
}

#[derive(Debug, Deserialize)]
struct PlaylistItem {
    track: Option<RawTrack>,
}

/// Track as returned by the playlist-tracks endpoint, narrowed by the
/// `fields` filter below.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTrack {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub artists: Vec<RawArtist>,
    #[serde(default)]
    pub popularity: Option<i32>,
    #[serde(default)]
    pub album: Option<RawAlbum>,
    #[serde(default)]
    pub duration_ms: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawArtist {
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAlbum {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub images: Vec<RawImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawImage {
    pub url: String,
}

/// Client-credentials token, cached until shortly before expiry.
async fn access_token(cfg: &Config) -> Result<String> {
    {
        let cache = TOKEN_CACHE.read().await;
        if let Some(tok) = cache.as_ref() {
            if tok.expires_at > Utc::now() {
                return Ok(tok.access_token.clone());
            }
        }
    }

    let creds = format!("{}:{}", cfg.client_id, cfg.client_secret);
    let auth = format!("Basic {}", STANDARD.encode(creds));

    tracing::debug!("requesting access token");
    let res = CLIENT
        .post(TOKEN_URL)
        .header("Authorization", auth)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .with_context(|| format!("sending POST {TOKEN_URL}"))?;

    if !res.status().is_success() {
        let status = res.status();
        let text = res.text().await.unwrap_or_default();
        tracing::error!("token request failed: status={status} body=\n{text}");
        return Err(anyhow!("POST {TOKEN_URL} failed with status {status}"));
    }

    let tok: TokenResponse = res
        .json()
        .await
        .with_context(|| format!("decoding token response from {TOKEN_URL}"))?;
    let expires_at =
        Utc::now() + Duration::seconds((tok.expires_in - TOKEN_REFRESH_MARGIN_SECS).max(0));

    let mut cache = TOKEN_CACHE.write().await;
    *cache = Some(CachedToken {
        access_token: tok.access_token.clone(),
        expires_at,
    });
    Ok(tok.access_token)
}

async fn fetch_spotify<T: for<'de> Deserialize<'de> + Send + 'static>(
    cfg: &Config,
    path: &str,
    query: &[(&str, String)],
) -> Result<T> {
    let url = format!("{API_BASE_URL}{path}");
    let token = access_token(cfg).await?;
    tracing::debug!("GET {url}");

    let res = CLIENT
        .get(&url)
        .bearer_auth(token)
        .query(query)
        .send()
        .await
        .with_context(|| format!("sending GET {url}"))?;

    if !res.status().is_success() {
        let status = res.status();
        let text = res.text().await.unwrap_or_default();
        tracing::error!("request failed: status={status} body=\n{text}");
        return Err(anyhow!("GET {url} failed with status {status}"));
    }

    let bytes = res
        .bytes()
        .await
        .with_context(|| format!("reading body from GET {url}"))?;
    let data: T = serde_json::from_slice(&bytes).map_err(|e| {
        let snip: String = String::from_utf8_lossy(&bytes).chars().take(300).collect();
        anyhow!("decoding JSON from GET {url} failed: {e}\nBody snippet: {snip}")
    })?;
    Ok(data)
}

/// Up to `limit` tracks of the configured playlist. Items without a track
/// object are dropped here; further validity rules live in the aggregation.
pub async fn get_playlist_tracks(cfg: &Config, limit: u32) -> Result<Vec<RawTrack>> {
    let path = format!("/playlists/{}/tracks", cfg.playlist_id);
    let fields =
        "items(track(name,artists,popularity,album(name,release_date,images),duration_ms))";
    let page: PlaylistTracksPage = fetch_spotify(
        cfg,
        &path,
        &[
            ("limit", limit.to_string()),
            ("fields", fields.to_string()),
        ],
    )
    .await?;

    Ok(page.items.into_iter().filter_map(|it| it.track).collect())
}
