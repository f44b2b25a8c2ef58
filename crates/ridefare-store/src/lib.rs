//! Ridefare Store - Booking ledger and profile persistence.

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStore;
pub use memory::{MemoryLedger, MemoryProfileStore};
