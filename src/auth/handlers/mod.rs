//! HTTP handlers for authentication endpoints
//!
//! - **`types`** - Request/response types shared by the handlers
//! - **`register`** - `POST /api/auth/register`
//! - **`login`** - `POST /api/auth/login`
//! - **`logout`** - `POST /api/auth/logout`
//! - **`me`** - `GET /api/auth/me`
//! - **`profile`** - `PUT /api/profile`, `PUT /api/profile/password`
//!
//! Every handler validates its input before touching the hasher, the
//! token service, or the store, and returns `AppError` variants from the
//! application taxonomy.

pub mod login;
pub mod logout;
pub mod me;
pub mod profile;
pub mod register;
pub mod types;

pub use login::login;
pub use logout::logout;
pub use me::get_me;
pub use profile::{update_password, update_profile};
pub use register::register;
pub use types::{AuthResponse, LoginRequest, RegisterRequest};
