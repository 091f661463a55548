//! # campushub-entity
//!
//! Domain entity models for CampusHub. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.
//!
//! Relationships between entities are plain foreign-key id fields; joins
//! happen in the repository layer, never through object graphs.

pub mod leave;
pub mod location;
pub mod roll_call;
pub mod user;
