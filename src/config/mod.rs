//! Runtime configuration: process settings and keyword tables.

pub mod app;
pub mod keywords;

pub use app::{AppConfig, LogFormat};
pub use keywords::KeywordTables;
