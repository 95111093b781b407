mod auth;
pub mod client;
mod leaves;
pub mod types;

pub use client::*;
pub use types::*;
