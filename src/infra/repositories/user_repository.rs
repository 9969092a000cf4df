//! User repository - data access for user records.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr,
};
use uuid::Uuid;

use super::entities::user::{self, Entity as Users};
use crate::domain::{User, UserInput};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by id
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>>;

    /// Find a user by exact email
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// List all users in the store's natural order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Insert a new record; the repository assigns the id
    async fn insert(&self, input: UserInput) -> AppResult<User>;

    /// Overwrite all four text fields; returns whether a record matched
    async fn update(&self, id: Uuid, input: UserInput) -> AppResult<bool>;
}

/// SeaORM-backed repository over the `users` table.
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create a repository owning the given connection handle
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<User>> {
        let found = Users::find_by_id(id).one(&self.db).await?;
        Ok(found.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let found = Users::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;
        Ok(found.map(User::from))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = Users::find().all(&self.db).await?;
        Ok(models.into_iter().map(User::from).collect())
    }

    async fn insert(&self, input: UserInput) -> AppResult<User> {
        let email = input.email.clone();
        let record = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            email: Set(input.email),
            phone: Set(input.phone),
            address: Set(input.address),
        };

        match record.insert(&self.db).await {
            Ok(model) => Ok(model.into()),
            // The unique index on email is the authoritative duplicate
            // signal; a concurrent create can pass the service's pre-check.
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    Err(AppError::DuplicateEmail(email))
                }
                _ => Err(err.into()),
            },
        }
    }

    async fn update(&self, id: Uuid, input: UserInput) -> AppResult<bool> {
        let result = Users::update_many()
            .col_expr(user::Column::Name, Expr::value(input.name))
            .col_expr(user::Column::Email, Expr::value(input.email))
            .col_expr(user::Column::Phone, Expr::value(input.phone))
            .col_expr(user::Column::Address, Expr::value(input.address))
            .filter(user::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
