//! Middleware Module
//!
//! HTTP middleware applied to the router before requests reach handlers.
//!
//! - **`auth`** - The access gate protecting authenticated routes

pub mod auth;

pub use auth::{route_guard, PROTECTED_PREFIXES};
