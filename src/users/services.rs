use crate::users::{
    entity::User,
    error::{UserError, UserResult},
};

/// Stateless validation rules for user records.
#[derive(Debug, Clone, Copy, Default)]
pub struct UserService;

impl UserService {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, user: &User) -> UserResult<()> {
        if user.email.is_empty() {
            return Err(UserError::Validation("email is required".into()));
        }

        if user.name.is_empty() {
            return Err(UserError::Validation("name is required".into()));
        }

        if !is_valid_email(&user.email) {
            return Err(UserError::Validation("invalid email format".into()));
        }

        Ok(())
    }

    pub fn sanitize_name(&self, name: &str) -> String {
        name.trim().to_string()
    }
}

// Shape check only: needs an '@' and a '.' somewhere.
pub(crate) fn is_valid_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}
