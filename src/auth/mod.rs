//! Authentication Module
//!
//! This module handles user authentication, registration, and session
//! management. It provides HTTP handlers for the authentication endpoints
//! and manages user data and session tokens.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`password`** - One-way credential hashing and verification
//! - **`sessions`** - Session token issuance and validation
//! - **`cookie`** - The session cookie contract
//! - **`resolver`** - Recovering the authenticated user from a request
//! - **`users`** - User data model and database operations
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Authentication Flow
//!
//! 1. **Register**: validate input, hash the password, create the user,
//!    issue a token, set the session cookie
//! 2. **Login**: verify credentials, issue a token, set the session cookie
//! 3. **Authenticated request**: the cookie travels with every request;
//!    the access gate checks token integrity, and handlers that need user
//!    data resolve the full session
//! 4. **Logout**: clear the cookie; the stateless token simply ages out
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (random salt, fixed cost) before
//!   storage and never returned in responses
//! - Session tokens are HMAC-SHA256 signed with a 7-day expiry and are
//!   not stored server-side
//! - Invalid credentials and invalid tokens are never distinguished for
//!   the client

pub mod cookie;
pub mod handlers;
pub mod password;
pub mod resolver;
pub mod sessions;
pub mod users;

pub use resolver::{require_session, resolve_session, SessionUser};
pub use sessions::TokenService;
