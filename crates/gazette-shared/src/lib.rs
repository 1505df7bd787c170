//! # Gazette Shared
//!
//! Wire types shared between the API server and its clients: response
//! envelopes and request parameter shapes.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
