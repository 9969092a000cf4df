//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// User domain entity.
///
/// The id is assigned by the store on creation and never changes. All four
/// text fields are stored trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// The caller-supplied text fields for create and update.
///
/// All four fields are required; empty strings are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct UserInput {
    /// Display name
    #[schema(example = "Alice Example")]
    pub name: String,
    /// Email address; the uniqueness key at creation time
    #[schema(example = "alice@example.com")]
    pub email: String,
    /// Phone number
    #[schema(example = "555-0100")]
    pub phone: String,
    /// Postal address
    #[schema(example = "1 Main St")]
    pub address: String,
}

impl UserInput {
    /// Strip leading and trailing whitespace from every field.
    pub fn trimmed(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            address: self.address.trim().to_string(),
        }
    }
}
