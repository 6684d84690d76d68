/// Truncates `s` to at most `max` characters, appending an ellipsis when
/// something was actually cut off.
pub fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() > max {
        let head: String = s.chars().take(max).collect();
        format!("{head}...")
    } else {
        s.to_string()
    }
}

/// Compact display form for axis/tooltip values, e.g. `62.5` -> "62.5" and
/// `62.0` -> "62".
pub fn format_value(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        format!("{v:.1}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_keeps_short_names_unmodified() {
        assert_eq!(truncate_chars("Nikes", 30), "Nikes");
        let exactly_30 = "a".repeat(30);
        assert_eq!(truncate_chars(&exactly_30, 30), exactly_30);
    }

    #[test]
    fn truncate_cuts_to_limit_plus_ellipsis() {
        let long = "a".repeat(31);
        let out = truncate_chars(&long, 30);
        assert_eq!(out.chars().count(), 33);
        assert_eq!(out, format!("{}...", "a".repeat(30)));
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        // Multi-byte characters must not be split.
        let name = "é".repeat(31);
        let out = truncate_chars(&name, 30);
        assert_eq!(out, format!("{}...", "é".repeat(30)));
    }

    #[test]
    fn format_value_drops_trailing_zero() {
        assert_eq!(format_value(62.0), "62");
        assert_eq!(format_value(62.5), "62.5");
        assert_eq!(format_value(0.0), "0");
    }
}
