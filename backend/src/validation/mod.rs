//! Validation rules for request payloads.
//!
//! Field-level checks live in [`rules`] and are wired in through
//! `#[validate(custom(...))]` / `#[validate(schema(...))]` attributes.

pub mod rules;

pub use validator::Validate;
