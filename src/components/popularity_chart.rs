use dioxus::prelude::*;

use crate::shared::types::TrackSummary;
use crate::theme::ChartTheme;
use crate::utils::format::truncate_chars;

/// Bars shown in the top-tracks chart.
const BAR_LIMIT: usize = 10;
/// Display length limit for track names on the category axis.
const LABEL_LIMIT: usize = 25;

/// The `min(10, n)` most popular tracks, highest first.
fn top_by_popularity(tracks: &[TrackSummary], limit: usize) -> Vec<TrackSummary> {
    let mut sorted = tracks.to_vec();
    sorted.sort_by(|a, b| b.popularity.cmp(&a.popularity));
    sorted.truncate(limit);
    sorted
}

/// Horizontal bar chart of the ten most popular tracks, highest at the top,
/// with the popularity value printed at the end of each bar.
#[allow(non_snake_case)]
#[component]
pub fn PopularityChart(tracks: Vec<TrackSummary>, theme: ChartTheme) -> Element {
    let top = top_by_popularity(&tracks, BAR_LIMIT);

    // Visual params
    let width = 600.0f32;
    let label_w = 190.0f32;
    let padding = 12.0f32;
    let row_h = 30.0f32;
    let bar_h = 18.0f32;
    let bar_span = width - label_w - padding - 46.0;
    let height = (top.len().max(1) as f32) * row_h + padding * 2.0;
    let view_box = format!("0 0 {} {}", width, height);

    rsx! {
        div { id: "popularityChart", class: "chart-surface",
            if top.is_empty() {
                p { class: "chart-empty", "No tracks to chart" }
            } else {
                svg { class: "block", view_box: "{view_box}", width: "100%",
                    {
                        top.iter().enumerate().map(|(i, t)| {
                            let y = padding + (i as f32) * row_h;
                            let bar_y = y + (row_h - bar_h) / 2.0;
                            // popularity is 0..=100, scale against the full range
                            let w = (t.popularity.clamp(0, 100) as f32) / 100.0 * bar_span;
                            let label = truncate_chars(&t.name, LABEL_LIMIT);
                            let text_y = bar_y + bar_h - 4.0;
                            let value_x = label_w + w + 6.0;
                            rsx! {
                                g { key: "{i}",
                                    text {
                                        x: "{label_w - 8.0}",
                                        y: "{text_y}",
                                        style: "text-anchor:end;font-size:12px",
                                        fill: "{theme.light_gray}",
                                        "{label}"
                                    }
                                    rect {
                                        x: "{label_w}",
                                        y: "{bar_y}",
                                        width: "{w}",
                                        height: "{bar_h}",
                                        rx: "4",
                                        fill: "{theme.green}",
                                    }
                                    text {
                                        x: "{value_x}",
                                        y: "{text_y}",
                                        style: "font-size:12px;font-weight:bold",
                                        fill: "{theme.white}",
                                        "{t.popularity}"
                                    }
                                }
                            }
                        })
                    }
                }
            }
        }
    }
}
