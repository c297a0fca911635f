//! Events Module
//!
//! Event records, database operations, and the HTTP handlers for
//! submitting and browsing events.
//!
//! - **`types`** - The event kind enumeration and wire types
//! - **`db`** - Row types and database operations
//! - **`handlers`** - HTTP handlers
//!
//! Events are created by authenticated users and readable by anyone.
//! There is no update or delete path.

pub mod db;
pub mod handlers;
pub mod types;

pub use types::EventKind;
