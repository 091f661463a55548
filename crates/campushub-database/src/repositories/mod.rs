//! Repository implementations for all CampusHub entities.

pub mod leave_request;
pub mod location;
pub mod roll_call;
pub mod user;

pub use leave_request::LeaveRequestRepository;
pub use location::LocationRepository;
pub use roll_call::RollCallRepository;
pub use user::UserRepository;
