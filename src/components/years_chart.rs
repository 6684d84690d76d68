use std::collections::BTreeMap;

use dioxus::prelude::*;

use crate::theme::ChartTheme;
use crate::utils::series::year_series;

/// Vertical bar chart of track counts per release year, in year-label order,
/// with the `"Unknown"` sentinel left out. Hovering a bar shows a tooltip
/// with the exact count.
#[allow(non_snake_case)]
#[component]
pub fn YearsChart(years: BTreeMap<String, u32>, theme: ChartTheme) -> Element {
    let series = year_series(&years);
    // Hovered bar index (for tooltip)
    let mut hovered = use_signal(|| Option::<usize>::None);

    // Visual params
    let width = 600.0f32;
    let height = 240.0f32;
    let padding = 28.0f32;
    let n = series.len().max(1) as f32;
    let step = (width - padding * 2.0) / n;
    let bar_w = (step * 0.6).min(40.0);
    let max_count = series.iter().map(|(_, c)| *c).max().unwrap_or(1).max(1) as f32;
    let view_box = format!("0 0 {} {}", width, height + padding * 2.0);

    rsx! {
        div { id: "yearsChart", class: "chart-surface",
            if series.is_empty() {
                p { class: "chart-empty", "No release years to chart" }
            } else {
                svg { class: "block", view_box: "{view_box}", width: "100%",
                    line {
                        x1: "{padding}",
                        y1: "{padding + height}",
                        x2: "{width - padding}",
                        y2: "{padding + height}",
                        stroke: "{theme.gray}",
                        stroke_width: "1",
                    }
                    {
                        series.iter().enumerate().map(|(i, (year, count))| {
                            let x = padding + (i as f32) * step + (step - bar_w) / 2.0;
                            let h = (*count as f32) / max_count * height;
                            let y = padding + (height - h);
                            let label_x = x + bar_w / 2.0;
                            let label_y = height + padding + 16.0;
                            rsx! {
                                g { key: "{i}",
                                    rect {
                                        x: "{x}",
                                        y: "{y}",
                                        width: "{bar_w}",
                                        height: "{h}",
                                        rx: "3",
                                        fill: "{theme.green}",
                                        onmouseenter: move |_| *hovered.write() = Some(i),
                                        onmouseleave: move |_| *hovered.write() = None,
                                        ontouchstart: move |_| *hovered.write() = Some(i),
                                        ontouchend: move |_| *hovered.write() = None,
                                    }
                                    text {
                                        x: "{label_x}",
                                        y: "{label_y}",
                                        style: "text-anchor:middle;font-size:10px",
                                        fill: "{theme.light_gray}",
                                        "{year}"
                                    }
                                }
                            }
                        })
                    }
                    {
                        match *hovered.read() {
                            Some(i) if i < series.len() => {
                                let (year, count) = &series[i];
                                let x = padding + (i as f32) * step + step / 2.0;
                                let h = (*count as f32) / max_count * height;
                                let y = padding + (height - h);
                                let tip_label = format!("{year}: {count}");
                                let cw = 7.0f32; // approx char width at 11px
                                let tip_w = (tip_label.len() as f32) * cw + 12.0;
                                let tip_h = 22.0f32;
                                let tip_x = (x - tip_w / 2.0).clamp(padding, (width - padding) - tip_w);
                                let tip_y = (y - 8.0 - tip_h).max(4.0);
                                rsx! {
                                    g { key: "tooltip",
                                        rect {
                                            x: "{tip_x}",
                                            y: "{tip_y}",
                                            width: "{tip_w}",
                                            height: "{tip_h}",
                                            rx: "5",
                                            fill: "{theme.dark_gray}",
                                            stroke: "{theme.green}",
                                            stroke_width: "1",
                                        }
                                        text {
                                            x: "{tip_x + 6.0}",
                                            y: "{tip_y + 15.0}",
                                            style: "font-size:11px",
                                            fill: "{theme.white}",
                                            "{tip_label}"
                                        }
                                    }
                                }
                            }
                            _ => rsx! { Fragment {} }
                        }
                    }
                }
            }
        }
    }
}
