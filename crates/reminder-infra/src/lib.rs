//! Infrastructure layer - file formats outside the record store

pub mod service_csv;
