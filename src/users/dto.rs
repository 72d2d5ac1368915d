use serde::Deserialize;

/// Request body for `POST /api/v1/users`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub name: String,
}

/// Request body for `PUT /api/v1/users/:id`.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
}
