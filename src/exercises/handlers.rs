use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::jwt::{AuthUser, OptionalAuthUser},
    error::ApiError,
    exercises::{
        dto::{CreateExerciseRequest, ListParams, MessageResponse, UpdateExerciseRequest},
        policy,
        repo::Exercise,
    },
    state::AppState,
};

pub fn exercise_routes() -> Router<AppState> {
    Router::new()
        .route("/exercises", post(create_exercise).get(list_exercises))
        .route(
            "/exercises/:id",
            get(get_exercise).put(update_exercise).delete(delete_exercise),
        )
}

#[instrument(skip(state, payload))]
pub async fn create_exercise(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(payload): Json<CreateExerciseRequest>,
) -> Result<(StatusCode, Json<Exercise>), ApiError> {
    let exercise = Exercise::insert(
        &state.db,
        &payload.name,
        payload.description.as_deref(),
        payload.difficulty.as_deref(),
        payload.is_public.unwrap_or(true),
        user_id,
    )
    .await?;

    info!(exercise_id = %exercise.id, user_id = %user_id, "exercise created");
    Ok((StatusCode::CREATED, Json(exercise)))
}

#[instrument(skip(state))]
pub async fn list_exercises(
    State(state): State<AppState>,
    OptionalAuthUser(caller): OptionalAuthUser,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Exercise>>, ApiError> {
    let rows = Exercise::list(
        &state.db,
        caller,
        params.filter.as_deref(),
        params.sort.as_deref(),
    )
    .await?;
    Ok(Json(rows))
}

#[instrument(skip(state))]
pub async fn get_exercise(
    State(state): State<AppState>,
    OptionalAuthUser(caller): OptionalAuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Exercise>, ApiError> {
    let exercise = Exercise::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Exercise"))?;
    policy::authorize_view(caller, &exercise)?;
    Ok(Json(exercise))
}

#[instrument(skip(state, payload))]
pub async fn update_exercise(
    State(state): State<AppState>,
    OptionalAuthUser(caller): OptionalAuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateExerciseRequest>,
) -> Result<Json<Exercise>, ApiError> {
    let exercise = Exercise::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Exercise"))?;

    let patch = policy::plan_update(caller, &payload, &exercise)?;
    let updated = Exercise::apply_patch(&state.db, id, &patch).await?;

    info!(exercise_id = %id, caller = ?caller, "exercise updated");
    Ok(Json(updated))
}

#[instrument(skip(state))]
pub async fn delete_exercise(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let exercise = Exercise::find_by_id(&state.db, id)
        .await?
        .ok_or(ApiError::NotFound("Exercise"))?;

    policy::authorize_delete(Some(user_id), &exercise)?;
    Exercise::delete(&state.db, id).await?;

    info!(exercise_id = %id, user_id = %user_id, "exercise deleted");
    Ok(Json(MessageResponse {
        message: "Exercise deleted successfully".into(),
    }))
}
