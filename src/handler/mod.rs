//! Request handler module
//!
//! Responsible for request routing dispatch. The blog endpoints themselves
//! live in the `api` module.

pub mod router;

// Re-export main entry point
pub use router::handle_request;
