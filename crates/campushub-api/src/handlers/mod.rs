//! HTTP handlers, one module per route family.

pub mod admin;
pub mod auth;
pub mod common;
pub mod health;
pub mod instructor;
pub mod student;
