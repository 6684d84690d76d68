/// Spotify-flavored palette shared by the cards and charts. Passed into each
/// chart component as an explicit prop rather than read as a global.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartTheme {
    pub green: &'static str,
    pub black: &'static str,
    pub dark_gray: &'static str,
    pub gray: &'static str,
    pub light_gray: &'static str,
    pub white: &'static str,
    /// Cycle used for categorical series (pie slices).
    pub series: &'static [&'static str],
}

pub const SPOTIFY_THEME: ChartTheme = ChartTheme {
    green: "#1DB954",
    black: "#191414",
    dark_gray: "#282828",
    gray: "#535353",
    light_gray: "#b3b3b3",
    white: "#FFFFFF",
    series: &[
        "#1DB954", "#1ed760", "#1fdf64", "#169c46", "#117a37", "#ff6b6b", "#4ecdc4", "#45b7d1",
        "#f9ca24", "#6c5ce7",
    ],
};

impl ChartTheme {
    /// Color for the i-th categorical series entry, cycling when the data has
    /// more entries than the palette.
    pub fn series_color(&self, i: usize) -> &'static str {
        self.series[i % self.series.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_colors_cycle() {
        let n = SPOTIFY_THEME.series.len();
        assert_eq!(SPOTIFY_THEME.series_color(0), SPOTIFY_THEME.series[0]);
        assert_eq!(SPOTIFY_THEME.series_color(n), SPOTIFY_THEME.series[0]);
        assert_eq!(SPOTIFY_THEME.series_color(n + 3), SPOTIFY_THEME.series[3]);
    }
}
