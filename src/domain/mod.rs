//! Domain layer - core business entities.
//!
//! Contains the user record and its input type, independent of
//! infrastructure concerns.

pub mod user;

pub use user::{User, UserInput};
