use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::users::{
    entity::User,
    error::{UserError, UserResult},
};

/// Persistence operations for [`User`] records.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> UserResult<()>;

    /// `Ok(None)` when no user has this id.
    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>>;

    /// `Ok(None)` when no user has this email.
    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>>;

    /// Writes `name` and `updated_at`; other columns are left untouched.
    async fn update(&self, user: &User) -> UserResult<()>;

    async fn delete(&self, id: Uuid) -> UserResult<()>;

    /// Every user, newest first.
    async fn list_all(&self) -> UserResult<Vec<User>>;
}

#[derive(Clone)]
pub struct PgUserRepository {
    db: PgPool,
}

impl PgUserRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn create(&self, user: &User) -> UserResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, email, name, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.name)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.db)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                UserError::AlreadyExists(user.email.clone())
            } else {
                UserError::Io(e)
            }
        })?;
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> UserResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, name, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn get_by_email(&self, email: &str) -> UserResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, name, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn update(&self, user: &User) -> UserResult<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET name = $1, updated_at = $2
            WHERE id = $3
            "#,
        )
        .bind(&user.name)
        .bind(user.updated_at)
        .bind(user.id)
        .execute(&self.db)
        .await?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> UserResult<()> {
        sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(())
    }

    async fn list_all(&self) -> UserResult<Vec<User>> {
        let rows = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, name, created_at, updated_at
            FROM users
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}

#[cfg(test)]
pub use memory::InMemoryUserRepository;
