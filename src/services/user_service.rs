//! User service - business rules for creating, listing, and updating users.
//!
//! Enforces email uniqueness on create and trims all caller-supplied text
//! before it reaches the store. Holds no state of its own; every operation
//! issues a fresh store request through the injected repository.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{User, UserInput};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// List all users in the store's natural order
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get a user by id
    async fn get_user(&self, id: Uuid) -> AppResult<User>;

    /// Create a user; fails with `DuplicateEmail` when the email is taken
    async fn create_user(&self, input: UserInput) -> AppResult<User>;

    /// Overwrite all four text fields of an existing user.
    ///
    /// Fails with `NotFound` when no record matches the id. No uniqueness
    /// re-check is performed on the new email.
    async fn update_user(&self, id: Uuid, input: UserInput) -> AppResult<()>;
}

/// Concrete implementation of UserService backed by a repository.
pub struct UserManager {
    users: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create a new user service with an injected repository
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.users.list().await
    }

    async fn get_user(&self, id: Uuid) -> AppResult<User> {
        self.users.find_by_id(id).await?.ok_or(AppError::NotFound)
    }

    async fn create_user(&self, input: UserInput) -> AppResult<User> {
        let input = input.trimmed();

        // Fast-path duplicate check. The unique index on email catches the
        // race where a concurrent create lands between this lookup and the
        // insert.
        if self.users.find_by_email(&input.email).await?.is_some() {
            return Err(AppError::DuplicateEmail(input.email));
        }

        self.users.insert(input).await
    }

    async fn update_user(&self, id: Uuid, input: UserInput) -> AppResult<()> {
        let matched = self.users.update(id, input.trimmed()).await?;
        if !matched {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockUserRepository;

    fn input(name: &str, email: &str, phone: &str, address: &str) -> UserInput {
        UserInput {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            address: address.to_string(),
        }
    }

    fn stored(id: Uuid, fields: UserInput) -> User {
        User {
            id,
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            address: fields.address,
        }
    }

    #[tokio::test]
    async fn create_trims_before_lookup_and_insert() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email == "alice@example.com")
            .returning(|_| Ok(None));
        repo.expect_insert()
            .withf(|fields| {
                fields.name == "Alice"
                    && fields.email == "alice@example.com"
                    && fields.phone == "555-0100"
                    && fields.address == "1 Main St"
            })
            .returning(|fields| Ok(stored(Uuid::new_v4(), fields)));

        let service = UserManager::new(Arc::new(repo));
        let user = service
            .create_user(input(" Alice ", " alice@example.com ", " 555-0100 ", " 1 Main St "))
            .await
            .unwrap();

        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.name, "Alice");
    }

    #[tokio::test]
    async fn create_with_taken_email_fails_without_insert() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(|email| Ok(Some(stored(Uuid::new_v4(), input("Alice", email, "", "")))));
        repo.expect_insert().never();

        let service = UserManager::new(Arc::new(repo));
        let result = service
            .create_user(input("Bob", "alice@example.com", "555", "2 Side St"))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::DuplicateEmail(_)));
    }

    #[tokio::test]
    async fn create_surfaces_store_level_duplicate() {
        // The pre-check passes but the unique index rejects the insert
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().returning(|_| Ok(None));
        repo.expect_insert()
            .returning(|fields| Err(AppError::DuplicateEmail(fields.email)));

        let service = UserManager::new(Arc::new(repo));
        let result = service
            .create_user(input("Alice", "alice@example.com", "", ""))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::DuplicateEmail(_)));
    }

    #[tokio::test]
    async fn get_user_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let service = UserManager::new(Arc::new(repo));
        let result = service.get_user(Uuid::new_v4()).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }

    #[tokio::test]
    async fn update_user_trims_fields() {
        let id = Uuid::new_v4();
        let mut repo = MockUserRepository::new();
        repo.expect_update()
            .withf(move |candidate, fields| *candidate == id && fields.name == "Bob2")
            .returning(|_, _| Ok(true));

        let service = UserManager::new(Arc::new(repo));
        let result = service
            .update_user(id, input(" Bob2 ", "b2@example.com", "555", "new addr"))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn update_missing_user_is_not_found() {
        let mut repo = MockUserRepository::new();
        repo.expect_update().returning(|_, _| Ok(false));

        let service = UserManager::new(Arc::new(repo));
        let result = service
            .update_user(Uuid::new_v4(), input("Bob", "b@example.com", "", ""))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound));
    }
}
