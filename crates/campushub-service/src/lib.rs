//! # campushub-service
//!
//! Business logic service layer for CampusHub. Each service orchestrates
//! repositories and authentication primitives to implement
//! application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod leave;
pub mod location;
pub mod roll_call;
pub mod stats;
pub mod user;

pub use auth::AuthService;
pub use leave::LeaveRequestService;
pub use location::LocationService;
pub use roll_call::RollCallService;
pub use stats::StatsService;
pub use user::UserService;
