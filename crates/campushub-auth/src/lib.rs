//! # campushub-auth
//!
//! Authentication primitives for CampusHub.
//!
//! ## Modules
//!
//! - `jwt` — HS256 JWT creation and validation
//! - `password` — Argon2id password hashing and verification

pub mod jwt;
pub mod password;

pub use jwt::{Claims, TokenDecoder, TokenEncoder};
pub use password::PasswordHasher;
