pub mod artists_chart;
pub mod dashboard_view;
pub mod popularity_chart;
pub mod popularity_year_chart;
pub mod stats_cards;
pub mod years_chart;

pub use artists_chart::ArtistsChart;
pub use dashboard_view::DashboardView;
pub use popularity_chart::PopularityChart;
pub use popularity_year_chart::PopularityYearChart;
pub use stats_cards::StatsCards;
pub use years_chart::YearsChart;
