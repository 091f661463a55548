//! Shared value types used across crates.

pub mod pagination;

pub use pagination::Page;
