//! SeaORM entity models.

pub mod user;
