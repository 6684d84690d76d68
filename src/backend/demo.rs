#![cfg(feature = "server")]
//! Generated playlist data for running the dashboard without Spotify
//! credentials.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::backend::spotify::{RawAlbum, RawArtist, RawTrack};

const ARTISTS: &[&str] = &[
    "Frank Ocean",
    "Adele",
    "Drake",
    "Rosalía",
    "Tame Impala",
    "Little Simz",
    "Caetano Veloso",
    "Björk",
];

const TITLE_HEADS: &[&str] = &[
    "Midnight", "Golden", "Paper", "Silver", "Broken", "Electric", "Quiet", "Neon", "Hollow",
    "Velvet",
];

const TITLE_TAILS: &[&str] = &[
    "Skyline", "Letters", "Tides", "Mirrors", "Gardens", "Static", "Horizon", "Rivers", "Echoes",
    "Motorway",
];

/// `n` plausible raw tracks: clustered artists, popularity 20..=95, release
/// years 1988..=2024 with the occasional missing date so the "Unknown"
/// bucket shows up too.
pub fn demo_tracks(n: usize) -> Vec<RawTrack> {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|_| {
            let artist = *ARTISTS.choose(&mut rng).expect("artist pool");
            let head = *TITLE_HEADS.choose(&mut rng).expect("title pool");
            let tail = *TITLE_TAILS.choose(&mut rng).expect("title pool");
            let release_date = if rng.gen_ratio(1, 20) {
                None
            } else {
                let year: i32 = rng.gen_range(1988..=2024);
                Some(format!("{year}-01-01"))
            };
            RawTrack {
                name: Some(format!("{head} {tail}")),
                artists: vec![RawArtist {
                    name: artist.to_string(),
                }],
                popularity: Some(rng.gen_range(20..=95)),
                album: Some(RawAlbum {
                    name: Some(format!("{head} {tail} LP")),
                    release_date,
                    images: Vec::new(),
                }),
                duration_ms: Some(rng.gen_range(120_000..=360_000)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::stats::build_dashboard_stats;

    #[test]
    fn demo_tracks_satisfy_the_payload_invariants() {
        let stats = build_dashboard_stats(demo_tracks(60));
        assert_eq!(stats.total_tracks, 60);
        assert!(stats.most_popular_track.is_some());
        assert!(stats
            .tracks
            .iter()
            .all(|t| (0..=100).contains(&t.popularity)));
        assert!(stats.artists_count.len() <= 10);
        assert!(stats
            .artists_count
            .windows(2)
            .all(|w| w[0].count >= w[1].count));
    }
}
