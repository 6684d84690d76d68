use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Wire payload of the `get_top_tracks` server function. Built once per page
/// load on the server, rendered once on the client, never mutated after
/// receipt.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_tracks: u32,
    /// `None` signals "no data" and renders as a placeholder card.
    pub most_popular_track: Option<PopularTrack>,
    pub tracks: Vec<TrackSummary>,
    /// Top artists sorted by track count descending (ties keep first-seen
    /// order). The first entry is the top artist by contract.
    pub artists_count: Vec<ArtistCount>,
    /// Year label -> track count. May contain the `"Unknown"` sentinel, which
    /// the year-keyed charts exclude.
    pub years_count: BTreeMap<String, u32>,
    /// Year label -> average popularity, rounded to one decimal.
    pub avg_popularity_by_year: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularTrack {
    pub name: String,
    pub artist: String,
    pub popularity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackSummary {
    pub name: String,
    pub artist: String,
    /// Spotify popularity score, 0..=100.
    pub popularity: i32,
    /// Four-digit release year, or `"Unknown"`.
    pub year: String,
    /// Track length in minutes, rounded to two decimals.
    pub duration_min: f64,
    pub album: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistCount {
    pub name: String,
    pub count: u32,
}
