mod dto;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod repo;
pub mod services;
pub mod usecase;

use crate::state::AppState;
use axum::Router;

pub fn router() -> Router<AppState> {
    handlers::user_routes()
}
