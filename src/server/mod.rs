//! Server Module
//!
//! Configuration loading, application state, and server initialization.
//!
//! - **`config`** - Typed configuration loaded once from the environment
//! - **`state`** - `AppState` shared by all handlers
//! - **`init`** - Database connection, migrations, and router assembly

pub mod config;
pub mod init;
pub mod state;

pub use config::ServerConfig;
pub use state::AppState;
