//! Record store implementations

pub mod memory;
pub mod records;

pub use memory::MemoryStore;
pub use records::JsonFileStore;
