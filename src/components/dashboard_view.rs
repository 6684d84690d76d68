use dioxus::prelude::*;

use crate::api::get_top_tracks;
use crate::components::{
    ArtistsChart, PopularityChart, PopularityYearChart, StatsCards, YearsChart,
};
use crate::theme::SPOTIFY_THEME;

/// Copy for the failed-load state: the message shown and the target of the
/// recovery link.
fn error_card_copy() -> (&'static str, &'static str) {
    (
        "❌ Failed to load dashboard data. Try logging in again.",
        "/login",
    )
}

/// The dashboard proper: one fetch on mount, then a single transition from
/// the loading skeleton to either the populated view or the error card.
#[allow(non_snake_case)]
#[component]
pub fn DashboardView() -> Element {
    let stats = use_resource(|| async move { get_top_tracks().await });
    let stats_v = stats.read_unchecked();
    let theme = SPOTIFY_THEME;

    rsx! {
        div { class: "dashboard",
            {
                match &*stats_v {
                    // Data available
                    Some(Ok(data)) => rsx! {
                        div { id: "dashboardContent", class: "dashboard-content",
                            StatsCards { stats: data.clone() }
                            div { class: "chart-grid",
                                section { class: "chart-card",
                                    h2 { "Top 10 Tracks by Popularity" }
                                    PopularityChart { tracks: data.tracks.clone(), theme }
                                }
                                section { class: "chart-card",
                                    h2 { "Tracks by Artist" }
                                    ArtistsChart { artists: data.artists_count.clone(), theme }
                                }
                                section { class: "chart-card",
                                    h2 { "Tracks by Release Year" }
                                    YearsChart { years: data.years_count.clone(), theme }
                                }
                                section { class: "chart-card",
                                    h2 { "Average Popularity by Year" }
                                    PopularityYearChart { averages: data.avg_popularity_by_year.clone(), theme }
                                }
                            }
                        }
                    },
                    // Any failure (transport, non-2xx, decode, server error)
                    // collapses into one static error card; the only recovery
                    // offered is reconnecting.
                    Some(Err(_e)) => {
                        let (message, login_href) = error_card_copy();
                        rsx! {
                            div { class: "error-card",
                                p { class: "error-message", "{message}" }
                                a { class: "error-link", href: "{login_href}", "Reconnect" }
                            }
                        }
                    },
                    // Fetch still in flight
                    None => rsx! {
                        div { id: "loading", class: "loading",
                            div { class: "spinner" }
                            p { "Loading your listening stats..." }
                        }
                    },
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_card_names_the_failure_and_links_to_login() {
        let (message, login_href) = error_card_copy();
        assert!(message.contains("Failed to load dashboard data"));
        assert_eq!(login_href, "/login");
    }
}
