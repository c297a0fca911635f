//! Error Module
//!
//! Defines the application error taxonomy and its conversion to HTTP
//! responses.
//!
//! # Architecture
//!
//! - **`types`** - Error type definitions and status-code mapping
//! - **`conversion`** - `IntoResponse` implementation
//!
//! Every public action handles errors at its boundary: validation failures,
//! authentication failures, and authorization failures each carry a
//! user-facing message, while internal persistence and crypto errors are
//! logged and normalized to a generic response. Nothing internal (SQL
//! constraint details, bcrypt errors, token parse errors) leaks to the
//! client verbatim.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::AppError;
