//! Infrastructure layer - external systems integration.
//!
//! This module handles the external collaborator concerns:
//! - Database connection and migrations
//! - Repositories over the record store

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
