use dioxus::prelude::*;

use crate::shared::types::DashboardStats;
use crate::utils::format::truncate_chars;

/// Display length limit for the most-popular-track card.
const TRACK_NAME_LIMIT: usize = 30;

/// Card line for the most popular track: (track line, artist line).
fn popular_track_lines(stats: &DashboardStats) -> (String, String) {
    match &stats.most_popular_track {
        Some(track) => (
            truncate_chars(&track.name, TRACK_NAME_LIMIT),
            track.artist.clone(),
        ),
        None => ("-".to_string(), "No tracks found".to_string()),
    }
}

/// The top artist is the first entry: the payload is sorted by count
/// descending, so first-entry-wins is the correct pick here.
fn top_artist(stats: &DashboardStats) -> String {
    stats
        .artists_count
        .first()
        .map(|a| a.name.clone())
        .unwrap_or_else(|| "-".to_string())
}

#[allow(non_snake_case)]
#[component]
pub fn StatsCards(stats: DashboardStats) -> Element {
    let (track_line, artist_line) = popular_track_lines(&stats);
    let top = top_artist(&stats);

    rsx! {
        div { class: "stats-grid",
            div { class: "stat-card",
                span { class: "stat-label", "Total Tracks" }
                strong { id: "totalTracks", class: "stat-value", "{stats.total_tracks}" }
            }
            div { class: "stat-card",
                span { class: "stat-label", "Most Popular Track" }
                strong { id: "mostPopularTrack", class: "stat-value stat-value-small", "{track_line}" }
                span { id: "mostPopularArtist", class: "stat-meta", "{artist_line}" }
            }
            div { class: "stat-card",
                span { class: "stat-label", "Top Artist" }
                strong { id: "topArtist", class: "stat-value stat-value-small", "{top}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::types::{ArtistCount, PopularTrack};

    fn stats_with_artists(entries: &[(&str, u32)]) -> DashboardStats {
        DashboardStats {
            artists_count: entries
                .iter()
                .map(|(name, count)| ArtistCount {
                    name: name.to_string(),
                    count: *count,
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn absent_popular_track_renders_placeholders() {
        let stats = DashboardStats::default();
        let (track, artist) = popular_track_lines(&stats);
        assert_eq!(track, "-");
        assert_eq!(artist, "No tracks found");
    }

    #[test]
    fn long_track_name_is_shortened_to_thirty_chars() {
        let stats = DashboardStats {
            most_popular_track: Some(PopularTrack {
                name: "x".repeat(45),
                artist: "Frank Ocean".to_string(),
                popularity: 92,
            }),
            ..Default::default()
        };
        let (track, artist) = popular_track_lines(&stats);
        assert_eq!(track, format!("{}...", "x".repeat(30)));
        assert_eq!(artist, "Frank Ocean");
    }

    #[test]
    fn short_track_name_is_untouched() {
        let stats = DashboardStats {
            most_popular_track: Some(PopularTrack {
                name: "Nights".to_string(),
                artist: "Frank Ocean".to_string(),
                popularity: 90,
            }),
            ..Default::default()
        };
        assert_eq!(popular_track_lines(&stats).0, "Nights");
    }

    #[test]
    fn top_artist_is_the_first_entry() {
        let stats = stats_with_artists(&[("Drake", 5), ("Adele", 3)]);
        assert_eq!(top_artist(&stats), "Drake");

        // Order decides, not the count.
        let stats = stats_with_artists(&[("Adele", 9), ("Drake", 1)]);
        assert_eq!(top_artist(&stats), "Adele");
    }

    #[test]
    fn no_artists_renders_a_dash() {
        assert_eq!(top_artist(&DashboardStats::default()), "-");
    }
}
