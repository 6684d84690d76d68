use std::collections::BTreeMap;

/// Placeholder year label for tracks whose album has no release date.
pub const UNKNOWN_YEAR: &str = "Unknown";

/// Year-keyed entries in lexicographic label order with the `"Unknown"`
/// sentinel removed. Both year charts use this policy; the sentinel still
/// counts toward the aggregate totals upstream.
pub fn year_series<T: Copy>(map: &BTreeMap<String, T>) -> Vec<(String, T)> {
    map.iter()
        .filter(|(year, _)| year.as_str() != UNKNOWN_YEAR)
        .map(|(year, v)| (year.clone(), *v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, u32)]) -> BTreeMap<String, u32> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    #[test]
    fn unknown_sentinel_is_excluded() {
        let m = map(&[("2019", 4), ("Unknown", 99), ("2021", 2)]);
        let series = year_series(&m);
        assert_eq!(series.len(), 2);
        assert!(series.iter().all(|(y, _)| y != UNKNOWN_YEAR));
    }

    #[test]
    fn entries_come_out_in_label_order() {
        let m = map(&[("2021", 1), ("1999", 3), ("2005", 2)]);
        let years: Vec<String> = year_series(&m).into_iter().map(|(y, _)| y).collect();
        assert_eq!(years, vec!["1999", "2005", "2021"]);
    }

    #[test]
    fn empty_map_yields_empty_series() {
        let m: BTreeMap<String, u32> = BTreeMap::new();
        assert!(year_series(&m).is_empty());
    }
}
