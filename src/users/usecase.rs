use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::users::{
    entity::User,
    error::{UserError, UserResult},
    repo::UserRepository,
    services::UserService,
};

/// Application operations on users: existence checks, sanitizing and
/// validation around the repository calls.
#[derive(Clone)]
pub struct UserUseCase {
    repo: Arc<dyn UserRepository>,
    service: UserService,
}

impl UserUseCase {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self {
            repo,
            service: UserService::new(),
        }
    }

    /// The email lookup and the insert are separate calls; a concurrent
    /// duplicate is caught by the `users.email` unique constraint instead.
    pub async fn create(&self, email: &str, name: &str) -> UserResult<User> {
        if self.repo.get_by_email(email).await?.is_some() {
            warn!("email already registered");
            return Err(UserError::AlreadyExists(email.to_string()));
        }

        let name = self.service.sanitize_name(name);
        let user = User::new(email, name);
        self.service.validate(&user)?;

        self.repo.create(&user).await?;
        info!(user_id = %user.id, "user created");
        Ok(user)
    }

    pub async fn get_by_id(&self, id: Uuid) -> UserResult<User> {
        self.find(id).await
    }

    pub async fn update(&self, id: Uuid, name: &str) -> UserResult<User> {
        let mut user = self.find(id).await?;

        let name = self.service.sanitize_name(name);
        user.rename(name);
        self.service.validate(&user)?;

        self.repo.update(&user).await?;
        info!(user_id = %user.id, "user updated");
        Ok(user)
    }

    pub async fn delete(&self, id: Uuid) -> UserResult<()> {
        self.find(id).await?;
        self.repo.delete(id).await?;
        info!(user_id = %id, "user deleted");
        Ok(())
    }

    pub async fn list_all(&self) -> UserResult<Vec<User>> {
        self.repo.list_all().await
    }

    async fn find(&self, id: Uuid) -> UserResult<User> {
        self.repo.get_by_id(id).await?.ok_or_else(|| {
            warn!(user_id = %id, "user not found");
            UserError::NotFound(id)
        })
    }
}
