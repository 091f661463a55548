//! # campushub-api
//!
//! HTTP API layer for CampusHub built on Axum.
//!
//! Provides all REST endpoints, role-gated per route family, plus the
//! extractors, DTOs, and error mapping that back them.

pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
