pub mod id;

pub use id::{InvalidId, LeaveId, UserId};
