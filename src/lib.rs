//! EventHub - Main Library
//!
//! EventHub is the backend for a tech-event discovery platform. Users
//! register, log in, submit events (hackathons, tech talks, workshops),
//! and browse the listing.
//!
//! # Module Structure
//!
//! - **`auth`** - Credential hashing, session tokens, session resolution,
//!   and the HTTP handlers for registration, login, and profile updates
//! - **`events`** - Event records, database operations, and handlers
//! - **`middleware`** - The access gate protecting authenticated routes
//! - **`server`** - Configuration, application state, and initialization
//! - **`error`** - Error taxonomy and HTTP response conversion
//! - **`routes`** - Router assembly
//!
//! # Usage
//!
//! ```rust,no_run
//! use eventhub::server::config::ServerConfig;
//! use eventhub::server::init::create_app;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod error;
pub mod events;
pub mod middleware;
pub mod routes;
pub mod server;
