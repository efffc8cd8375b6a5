//! HTTP protocol layer module
//!
//! Protocol-level helpers shared by the request handler: MIME resolution
//! and status response builders, decoupled from specific business logic.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_403_response, build_404_response, build_405_response, build_500_response,
    build_file_response, build_options_response,
};
