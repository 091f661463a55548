//! Roll call domain entities.

pub mod model;
pub mod status;

pub use model::{CreateRollCall, MarkAttendance, RollCall, RollCallEntry};
pub use status::AttendanceStatus;
