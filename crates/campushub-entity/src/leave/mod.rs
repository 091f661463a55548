//! Leave request domain entities.

pub mod model;
pub mod status;

pub use model::{CreateLeaveRequest, LeaveRequest};
pub use status::LeaveStatus;
