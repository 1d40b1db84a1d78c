pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod explanation;
pub mod model;
pub mod options;
pub mod progress;
pub mod report;
pub mod session;
pub mod summary;
pub mod text;
pub mod topics;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
pub use config::QuizConfig;
