use axum::Router;

use crate::state::AppState;

pub(crate) mod dto;
pub mod handlers;
pub mod policy;
pub mod query;
pub mod repo;

pub fn router() -> Router<AppState> {
    handlers::exercise_routes()
}
