//! Application service layer - use cases, config, backup and export

pub mod app;
pub mod config;
pub mod repository;
