use std::collections::BTreeMap;

use dioxus::prelude::*;

use crate::theme::ChartTheme;
use crate::utils::format::format_value;
use crate::utils::series::year_series;
use crate::utils::svg::{area_path, smooth_line_path};

/// Smoothed line of average track popularity per release year with a
/// translucent fill beneath, using the same order/filter policy as the years
/// chart.
#[allow(non_snake_case)]
#[component]
pub fn PopularityYearChart(averages: BTreeMap<String, f64>, theme: ChartTheme) -> Element {
    let series = year_series(&averages);
    let mut hovered = use_signal(|| Option::<usize>::None);

    // Visual params
    let width = 600.0f32;
    let height = 240.0f32;
    let padding = 28.0f32;
    let n = series.len().max(1) as f32;
    let step = (width - padding * 2.0) / n;
    let max_avg = series
        .iter()
        .map(|(_, v)| *v)
        .fold(0.0f64, f64::max)
        .max(1.0) as f32;
    let baseline = padding + height;
    let view_box = format!("0 0 {} {}", width, height + padding * 2.0);

    let points: Vec<(f32, f32)> = series
        .iter()
        .enumerate()
        .map(|(i, (_, avg))| {
            let x = padding + (i as f32) * step + step / 2.0;
            let y = padding + height - (*avg as f32) / max_avg * height;
            (x, y)
        })
        .collect();

    let line_d = smooth_line_path(&points);
    let fill_d = area_path(&points, baseline);
    let fill_color = "rgba(29, 185, 84, 0.25)";

    rsx! {
        div { id: "popularityYearChart", class: "chart-surface",
            if series.is_empty() {
                p { class: "chart-empty", "No release years to chart" }
            } else {
                svg { class: "block", view_box: "{view_box}", width: "100%",
                    line {
                        x1: "{padding}",
                        y1: "{baseline}",
                        x2: "{width - padding}",
                        y2: "{baseline}",
                        stroke: "{theme.gray}",
                        stroke_width: "1",
                    }
                    path { d: "{fill_d}", fill: "{fill_color}" }
                    path {
                        d: "{line_d}",
                        fill: "none",
                        stroke: "{theme.green}",
                        stroke_width: "3",
                        stroke_linecap: "round",
                    }
                    {
                        points.iter().enumerate().map(|(i, (x, y))| {
                            let (year, _) = &series[i];
                            let label_y = height + padding + 16.0;
                            rsx! {
                                g { key: "{i}",
                                    circle {
                                        cx: "{x}",
                                        cy: "{y}",
                                        r: "5",
                                        fill: "{theme.green}",
                                        stroke: "{theme.black}",
                                        stroke_width: "1",
                                        onmouseenter: move |_| *hovered.write() = Some(i),
                                        onmouseleave: move |_| *hovered.write() = None,
                                    }
                                    text {
                                        x: "{x}",
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
                                let (year, avg) = &series[i];
                                let (x, y) = points[i];
                                let tip_label = format!("{year}: {}", format_value(*avg));
                                let cw = 7.0f32;
                                let tip_w = (tip_label.len() as f32) * cw + 12.0;
                                let tip_h = 22.0f32;
                                let tip_x = (x - tip_w / 2.0).clamp(padding, (width - padding) - tip_w);
                                let tip_y = (y - 10.0 - tip_h).max(4.0);
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
