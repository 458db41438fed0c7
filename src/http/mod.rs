//! HTTP protocol layer module
//!
//! Provides HTTP response builders shared by the request router and the
//! post handlers, decoupled from the blog logic itself.

pub mod response;

// Re-export commonly used types
pub use response::{
    build_404_response, build_405_response, build_500_response, build_health_response,
    build_json_response, build_options_response,
};
