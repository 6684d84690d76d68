use dioxus::prelude::*;

use crate::shared::types::ArtistCount;
use crate::theme::ChartTheme;
use crate::utils::svg::{donut_wedge_path, polar};

/// Angle spans (degrees, starting at `start`) for one slice per count, in the
/// given order. Every entry gets a slice; there is no "other" bucket.
fn slice_spans(counts: &[u32], start: f32) -> Vec<(f32, f32)> {
    let total: u32 = counts.iter().sum();
    if total == 0 {
        return Vec::new();
    }
    let mut spans = Vec::with_capacity(counts.len());
    let mut a = start;
    for &c in counts {
        let sweep = 360.0 * (c as f32) / (total as f32);
        spans.push((a, a + sweep));
        a += sweep;
    }
    spans
}

/// Donut chart of track counts per artist, one slice per payload entry in
/// payload order, colored from the theme's series cycle.
#[allow(non_snake_case)]
#[component]
pub fn ArtistsChart(artists: Vec<ArtistCount>, theme: ChartTheme) -> Element {
    let mut hovered = use_signal(|| Option::<usize>::None);

    // Visual params
    let size = 340.0f32;
    let c = size / 2.0;
    let r_outer = size * 0.35;
    let r_inner = size * 0.20;
    let view_box = format!("0 0 {} {}", size, size);

    let counts: Vec<u32> = artists.iter().map(|a| a.count).collect();
    let spans = slice_spans(&counts, -90.0);

    rsx! {
        div { id: "artistsChart", class: "chart-surface",
            if artists.is_empty() {
                p { class: "chart-empty", "No artists to chart" }
            } else {
                svg { class: "block", view_box: "{view_box}", width: "100%",
                    {
                        artists.iter().zip(spans.iter()).enumerate().map(|(i, (artist, &(a0, a1)))| {
                            // A full circle would collapse the arc; stop just short.
                            let a1 = if (a1 - a0) >= 360.0 { a0 + 359.9 } else { a1 };
                            let grow = if *hovered.read() == Some(i) { 6.0 } else { 0.0 };
                            let d = donut_wedge_path(c, c, r_outer + grow, r_inner, a0, a1);
                            let mid = (a0 + a1) / 2.0;
                            let (lx, ly) = polar(c, c, r_outer + 16.0, mid);
                            let anchor = if mid.to_radians().cos() < 0.0 { "end" } else { "start" };
                            let color = theme.series_color(i);
                            rsx! {
                                g { key: "{i}",
                                    path {
                                        d: "{d}",
                                        fill: "{color}",
                                        stroke: "{theme.black}",
                                        stroke_width: "2",
                                        onmouseenter: move |_| *hovered.write() = Some(i),
                                        onmouseleave: move |_| *hovered.write() = None,
                                    }
                                    text {
                                        x: "{lx}",
                                        y: "{ly}",
                                        style: "text-anchor:{anchor};font-size:11px",
                                        fill: "{theme.white}",
                                        "{artist.name}: {artist.count}"
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
