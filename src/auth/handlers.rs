use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{
            LoginRequest, LoginResponse, PublicUser, RefreshRequest, RefreshResponse,
            SignupRequest, SignupResponse,
        },
        jwt::JwtKeys,
        password,
        repo::User,
    },
    error::ApiError,
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/auth/refresh", post(refresh))
}

fn is_valid_username(username: &str) -> bool {
    lazy_static! {
        static ref USERNAME_RE: Regex = Regex::new(r"^[A-Za-z0-9_.-]+$").unwrap();
    }
    USERNAME_RE.is_match(username)
}

pub(crate) fn validate_signup(username: &str, password: &str) -> Result<(), ApiError> {
    if username.is_empty() {
        return Err(ApiError::Validation("Username is required".into()));
    }
    if !is_valid_username(username) {
        return Err(ApiError::Validation(
            "Username may only contain letters, numbers, and ._-".into(),
        ));
    }
    if password.len() < 6 {
        return Err(ApiError::Validation(
            "Password must be at least 6 characters".into(),
        ));
    }
    Ok(())
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    Json(mut payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    payload.username = payload.username.trim().to_string();
    validate_signup(&payload.username, &payload.password)?;

    if User::find_by_username(&state.db, &payload.username)
        .await?
        .is_some()
    {
        warn!(username = %payload.username, "username already taken");
        return Err(ApiError::Conflict("Username already taken"));
    }

    let hash = password::hash_password(&payload.password)?;
    let user = User::create(&state.db, &payload.username, &hash).await?;

    info!(user_id = %user.id, username = %user.username, "user signed up");
    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            success: true,
            user: PublicUser {
                id: user.id,
                username: user.username,
            },
        }),
    ))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = User::find_by_username(&state.db, &payload.username)
        .await?
        .ok_or_else(|| {
            warn!(username = %payload.username, "login with unknown username");
            ApiError::InvalidCredentials
        })?;

    if !password::verify_password(&payload.password, &user.password_hash)? {
        warn!(user_id = %user.id, "login with invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    let keys = JwtKeys::from_ref(&state);
    let access_token = keys.sign_access(user.id)?;
    let refresh_token = keys.sign_refresh(user.id)?;

    info!(user_id = %user.id, "user logged in");
    Ok(Json(LoginResponse {
        access_token,
        refresh_token,
        user_id: user.id,
    }))
}

/// Mints a fresh access token from a valid refresh token. The refresh token
/// itself is not rotated and stays valid until its own expiry; the user id
/// in the claims is trusted without a lookup.
#[instrument(skip(state, payload))]
pub async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshRequest>,
) -> Result<Json<RefreshResponse>, ApiError> {
    let keys = JwtKeys::from_ref(&state);
    let claims = keys
        .verify_refresh(&payload.refresh_token)
        .map_err(|_| ApiError::InvalidRefreshToken)?;

    let access_token = keys.sign_access(claims.sub)?;
    info!(user_id = %claims.sub, "access token refreshed");
    Ok(Json(RefreshResponse {
        access_token,
        user_id: claims.sub,
    }))
}
