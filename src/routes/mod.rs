//! Routes Module
//!
//! Router assembly: the API route table and the top-level router with
//! the access gate and tracing layers applied.

pub mod api_routes;
pub mod router;

pub use router::create_router;
