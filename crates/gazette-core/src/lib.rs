//! # Gazette Core
//!
//! The domain layer of the Gazette content engine.
//! This crate contains pure content logic with zero infrastructure
//! dependencies: entities, the enriched read model, store ports, and the
//! query, pagination and stats machinery.

pub mod domain;
pub mod error;
pub mod page;
pub mod ports;
pub mod query;
pub mod stats;
pub mod text;

pub use error::DomainError;
