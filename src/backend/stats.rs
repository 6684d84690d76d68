#![cfg(feature = "server")]
//! Aggregation of raw playlist tracks into the dashboard payload.

use std::collections::{BTreeMap, HashMap};

use crate::backend::spotify::RawTrack;
use crate::shared::types::{ArtistCount, DashboardStats, PopularTrack, TrackSummary};
use crate::utils::series::UNKNOWN_YEAR;

/// Artists kept in the payload (most frequent first).
const TOP_ARTISTS_LIMIT: usize = 10;

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn release_year(release_date: Option<&str>) -> String {
    match release_date {
        Some(d) if !d.is_empty() => d.chars().take(4).collect(),
        _ => UNKNOWN_YEAR.to_string(),
    }
}

/// Builds the full dashboard payload from raw playlist tracks. Tracks without
/// any artist are skipped entirely; they count nowhere.
pub fn build_dashboard_stats(raw: Vec<RawTrack>) -> DashboardStats {
    let mut tracks = Vec::new();
    let mut artist_order: Vec<ArtistCount> = Vec::new();
    let mut artist_index: HashMap<String, usize> = HashMap::new();
    let mut years_count: BTreeMap<String, u32> = BTreeMap::new();
    let mut popularity_by_year: BTreeMap<String, Vec<i32>> = BTreeMap::new();

    for track in raw {
        let Some(artist) = track.artists.first() else {
            continue;
        };
        let artist_name = artist.name.clone();
        let name = track.name.unwrap_or_else(|| "Unknown".to_string());
        let popularity = track.popularity.unwrap_or(0);
        let album = track.album.unwrap_or_default();
        let year = release_year(album.release_date.as_deref());
        let duration_min = track
            .duration_ms
            .filter(|ms| *ms > 0)
            .map(|ms| round2(ms as f64 / 60_000.0))
            .unwrap_or(0.0);

        tracks.push(TrackSummary {
            name,
            artist: artist_name.clone(),
            popularity,
            year: year.clone(),
            duration_min,
            album: album.name.unwrap_or_else(|| "Unknown".to_string()),
            image: album.images.first().map(|img| img.url.clone()),
        });

        match artist_index.get(&artist_name) {
            Some(&i) => artist_order[i].count += 1,
            None => {
                artist_index.insert(artist_name.clone(), artist_order.len());
                artist_order.push(ArtistCount {
                    name: artist_name,
                    count: 1,
                });
            }
        }

        *years_count.entry(year.clone()).or_insert(0) += 1;
        popularity_by_year.entry(year).or_default().push(popularity);
    }

    let avg_popularity_by_year: BTreeMap<String, f64> = popularity_by_year
        .into_iter()
        .filter(|(_, pops)| !pops.is_empty())
        .map(|(year, pops)| {
            let avg = pops.iter().map(|p| *p as f64).sum::<f64>() / pops.len() as f64;
            (year, round1(avg))
        })
        .collect();

    // Stable sort: artists tied on count keep first-seen order.
    let mut artists_count = artist_order;
    artists_count.sort_by(|a, b| b.count.cmp(&a.count));
    artists_count.truncate(TOP_ARTISTS_LIMIT);

    // First track attaining the maximum popularity wins.
    let most_popular_track = tracks
        .iter()
        .fold(None::<&TrackSummary>, |best, t| match best {
            Some(b) if b.popularity >= t.popularity => Some(b),
            _ => Some(t),
        })
        .map(|t| PopularTrack {
            name: t.name.clone(),
            artist: t.artist.clone(),
            popularity: t.popularity,
        });

    DashboardStats {
        total_tracks: tracks.len() as u32,
        most_popular_track,
        tracks,
        artists_count,
        years_count,
        avg_popularity_by_year,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::spotify::{RawAlbum, RawArtist, RawImage};

    fn raw(name: &str, artist: Option<&str>, popularity: i32, release_date: Option<&str>) -> RawTrack {
        RawTrack {
            name: Some(name.to_string()),
            artists: artist
                .map(|a| {
                    vec![RawArtist {
                        name: a.to_string(),
                    }]
                })
                .unwrap_or_default(),
            popularity: Some(popularity),
            album: Some(RawAlbum {
                name: Some("Album".to_string()),
                release_date: release_date.map(|d| d.to_string()),
                images: vec![RawImage {
                    url: "https://img.example/cover.jpg".to_string(),
                }],
            }),
            duration_ms: Some(214_000),
        }
    }

    #[test]
    fn artistless_tracks_are_skipped_everywhere() {
        let stats = build_dashboard_stats(vec![
            raw("a", Some("Adele"), 50, Some("2015-11-20")),
            raw("ghost", None, 99, Some("2015-11-20")),
        ]);
        assert_eq!(stats.total_tracks, 1);
        assert_eq!(stats.years_count.get("2015"), Some(&1));
        // The skipped track must not win most-popular either.
        assert_eq!(stats.most_popular_track.unwrap().name, "a");
    }

    #[test]
    fn missing_release_date_buckets_under_unknown() {
        let stats = build_dashboard_stats(vec![
            raw("a", Some("Adele"), 50, None),
            raw("b", Some("Adele"), 70, Some("")),
            raw("c", Some("Adele"), 30, Some("1999-03-01")),
        ]);
        assert_eq!(stats.years_count.get("Unknown"), Some(&2));
        assert_eq!(stats.years_count.get("1999"), Some(&1));
        // Unknown still participates in the aggregates.
        assert_eq!(stats.total_tracks, 3);
        assert_eq!(stats.avg_popularity_by_year.get("Unknown"), Some(&60.0));
    }

    #[test]
    fn averages_round_to_one_decimal() {
        let stats = build_dashboard_stats(vec![
            raw("a", Some("X"), 10, Some("2001-01-01")),
            raw("b", Some("X"), 11, Some("2001-01-01")),
            raw("c", Some("X"), 12, Some("2001-01-01")),
        ]);
        assert_eq!(stats.avg_popularity_by_year.get("2001"), Some(&11.0));

        let stats = build_dashboard_stats(vec![
            raw("a", Some("X"), 10, Some("2001-01-01")),
            raw("b", Some("X"), 10, Some("2001-01-01")),
            raw("c", Some("X"), 11, Some("2001-01-01")),
        ]);
        // 31 / 3 = 10.333.. -> 10.3
        assert_eq!(stats.avg_popularity_by_year.get("2001"), Some(&10.3));

        let stats = build_dashboard_stats(vec![
            raw("a", Some("X"), 10, Some("2001-01-01")),
            raw("b", Some("X"), 11, Some("2001-01-01")),
        ]);
        assert_eq!(stats.avg_popularity_by_year.get("2001"), Some(&10.5));
    }

    #[test]
    fn first_maximum_wins_most_popular() {
        let stats = build_dashboard_stats(vec![
            raw("first", Some("A"), 80, Some("2010-01-01")),
            raw("second", Some("B"), 80, Some("2011-01-01")),
            raw("third", Some("C"), 40, Some("2012-01-01")),
        ]);
        assert_eq!(stats.most_popular_track.unwrap().name, "first");
    }

    #[test]
    fn top_artists_sorted_descending_with_stable_ties() {
        let mut input = Vec::new();
        for _ in 0..3 {
            input.push(raw("t", Some("Beta"), 10, Some("2020-01-01")));
        }
        for _ in 0..5 {
            input.push(raw("t", Some("Gamma"), 10, Some("2020-01-01")));
        }
        // Alpha ties with Beta but is seen later, so Beta stays ahead.
        for _ in 0..3 {
            input.push(raw("t", Some("Alpha"), 10, Some("2020-01-01")));
        }
        let stats = build_dashboard_stats(input);
        let names: Vec<&str> = stats.artists_count.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Gamma", "Beta", "Alpha"]);
        assert_eq!(stats.artists_count[0].count, 5);
    }

    #[test]
    fn artists_truncate_to_top_ten() {
        let mut input = Vec::new();
        for i in 0..14 {
            for _ in 0..=i {
                input.push(raw("t", Some(&format!("artist-{i}")), 10, Some("2020-01-01")));
            }
        }
        let stats = build_dashboard_stats(input);
        assert_eq!(stats.artists_count.len(), 10);
        assert_eq!(stats.artists_count[0].name, "artist-13");
    }

    #[test]
    fn empty_playlist_yields_a_zeroed_payload() {
        let stats = build_dashboard_stats(Vec::new());
        assert_eq!(stats.total_tracks, 0);
        assert!(stats.most_popular_track.is_none());
        assert!(stats.tracks.is_empty());
        assert!(stats.artists_count.is_empty());
        assert!(stats.years_count.is_empty());
        assert!(stats.avg_popularity_by_year.is_empty());
    }

    #[test]
    fn duration_rounds_to_two_decimals() {
        let stats = build_dashboard_stats(vec![raw("a", Some("X"), 10, Some("2001-01-01"))]);
        // 214_000 ms -> 3.5666.. -> 3.57
        assert_eq!(stats.tracks[0].duration_min, 3.57);
    }
}
