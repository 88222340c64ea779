//! Domain layer - due-status model, service calculator, and store abstraction

pub mod model;
pub mod repository;
pub mod service;
