pub mod format;
pub mod series;
pub mod svg;
