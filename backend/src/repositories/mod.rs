pub mod common;
pub mod leave;
pub mod user;

pub use common::*;
pub use leave::{LeaveFilter, LeaveRepository, LeaveRepositoryTrait};
pub use user::{UserRepository, UserRepositoryTrait};
