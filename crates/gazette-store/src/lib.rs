//! # Gazette Store
//!
//! The in-memory storage adapter for the ports defined in
//! `gazette-core`, plus the demo content set the server and tests load.

pub mod memory;
pub mod seed;

pub use memory::MemoryContentStore;
pub use seed::{SeedData, demo_content};

#[cfg(test)]
mod tests;
