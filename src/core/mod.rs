pub mod app;
pub mod config;
pub mod content;
pub mod toml_file;
