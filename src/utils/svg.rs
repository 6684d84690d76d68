//! Small SVG path builders shared by the chart components.

pub fn polar(cx: f32, cy: f32, r: f32, deg: f32) -> (f32, f32) {
    let rad = deg.to_radians();
    (cx + r * rad.cos(), cy + r * rad.sin())
}

/// Filled donut wedge between `a0` and `a1` degrees (clockwise), with outer
/// radius `r_outer` and inner radius `r_inner`.
pub fn donut_wedge_path(
    cx: f32,
    cy: f32,
    r_outer: f32,
    r_inner: f32,
    a0: f32,
    a1: f32,
) -> String {
    let (ox0, oy0) = polar(cx, cy, r_outer, a0);
    let (ox1, oy1) = polar(cx, cy, r_outer, a1);
    let (ix0, iy0) = polar(cx, cy, r_inner, a0);
    let (ix1, iy1) = polar(cx, cy, r_inner, a1);
    let large_arc = if (a1 - a0).abs() >= 180.0 { 1 } else { 0 };
    format!(
        "M {ox0:.3} {oy0:.3} \
         A {r_outer:.3} {r_outer:.3} 0 {large_arc} 1 {ox1:.3} {oy1:.3} \
         L {ix1:.3} {iy1:.3} \
         A {r_inner:.3} {r_inner:.3} 0 {large_arc} 0 {ix0:.3} {iy0:.3} Z"
    )
}

/// Smooth open path through `pts` using Catmull-Rom derived cubic Béziers.
/// Falls back to a line/point for fewer than three points.
pub fn smooth_line_path(pts: &[(f32, f32)]) -> String {
    match pts {
        [] => String::new(),
        [(x, y)] => format!("M {x:.3} {y:.3}"),
        [(x0, y0), (x1, y1)] => format!("M {x0:.3} {y0:.3} L {x1:.3} {y1:.3}"),
        _ => {
            let mut d = format!("M {:.3} {:.3}", pts[0].0, pts[0].1);
            let n = pts.len();
            for i in 0..n - 1 {
                let p_prev = pts[i.saturating_sub(1)];
                let p0 = pts[i];
                let p1 = pts[i + 1];
                let p_next = pts[(i + 2).min(n - 1)];
                let c1 = (p0.0 + (p1.0 - p_prev.0) / 6.0, p0.1 + (p1.1 - p_prev.1) / 6.0);
                let c2 = (p1.0 - (p_next.0 - p0.0) / 6.0, p1.1 - (p_next.1 - p0.1) / 6.0);
                d.push_str(&format!(
                    " C {:.3} {:.3} {:.3} {:.3} {:.3} {:.3}",
                    c1.0, c1.1, c2.0, c2.1, p1.0, p1.1
                ));
            }
            d
        }
    }
}

/// Closed fill region under a smoothed line, dropped to `baseline_y`.
pub fn area_path(pts: &[(f32, f32)], baseline_y: f32) -> String {
    if pts.is_empty() {
        return String::new();
    }
    let line = smooth_line_path(pts);
    let first_x = pts[0].0;
    let last_x = pts[pts.len() - 1].0;
    format!("{line} L {last_x:.3} {baseline_y:.3} L {first_x:.3} {baseline_y:.3} Z")
}
