pub mod quiz;
pub mod report;
pub mod summary;
pub mod welcome;
