//! Cross-cutting HTTP concerns — CORS and role gating.

pub mod cors;
pub mod rbac;
