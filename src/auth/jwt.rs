use std::time::Duration;

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::{debug, warn};

use crate::{config::JwtConfig, error::ApiError, state::AppState};

/// JWT payload. `sub` is the user id; nothing else identifies the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub iat: usize,
    pub exp: usize,
}

/// Signing and verification material for both token families. Access and
/// refresh tokens use independent secrets, so a token from one family can
/// never verify under the other.
#[derive(Clone)]
pub struct JwtKeys {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        Self::from_config(&state.config.jwt)
    }
}

impl JwtKeys {
    pub fn from_config(cfg: &JwtConfig) -> Self {
        Self {
            access_encoding: EncodingKey::from_secret(cfg.access_secret.as_bytes()),
            access_decoding: DecodingKey::from_secret(cfg.access_secret.as_bytes()),
            refresh_encoding: EncodingKey::from_secret(cfg.refresh_secret.as_bytes()),
            refresh_decoding: DecodingKey::from_secret(cfg.refresh_secret.as_bytes()),
            access_ttl: Duration::from_secs((cfg.access_ttl_minutes as u64) * 60),
            refresh_ttl: Duration::from_secs((cfg.refresh_ttl_days as u64) * 24 * 3600),
        }
    }

    fn sign(&self, user_id: i64, key: &EncodingKey, ttl: Duration) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + TimeDuration::seconds(ttl.as_secs() as i64);
        let claims = Claims {
            sub: user_id,
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
        };
        let token = encode(&Header::default(), &claims, key)?;
        debug!(user_id = %user_id, "jwt signed");
        Ok(token)
    }

    pub fn sign_access(&self, user_id: i64) -> anyhow::Result<String> {
        self.sign(user_id, &self.access_encoding, self.access_ttl)
    }

    pub fn sign_refresh(&self, user_id: i64) -> anyhow::Result<String> {
        self.sign(user_id, &self.refresh_encoding, self.refresh_ttl)
    }

    fn verify(&self, token: &str, key: &DecodingKey) -> anyhow::Result<Claims> {
        let data = decode::<Claims>(token, key, &Validation::default())?;
        debug!(user_id = %data.claims.sub, "jwt verified");
        Ok(data.claims)
    }

    pub fn verify_access(&self, token: &str) -> anyhow::Result<Claims> {
        self.verify(token, &self.access_decoding)
    }

    pub fn verify_refresh(&self, token: &str) -> anyhow::Result<Claims> {
        self.verify(token, &self.refresh_decoding)
    }
}

/// Extracts and validates the bearer token, rejecting the request with 401
/// before the handler runs.
pub struct AuthUser(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or(ApiError::Unauthenticated)?;
        let keys = JwtKeys::from_ref(state);
        match keys.verify_access(&token) {
            Ok(claims) => Ok(AuthUser(claims.sub)),
            Err(_) => {
                warn!("invalid or expired access token");
                Err(ApiError::InvalidToken)
            }
        }
    }
}

/// Like [`AuthUser`], but a missing Authorization header resolves to an
/// anonymous caller instead of a rejection. A header that is present but
/// does not carry a valid access token is still rejected.
pub struct OptionalAuthUser(pub Option<i64>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .is_none()
        {
            return Ok(OptionalAuthUser(None));
        }
        let AuthUser(user_id) = AuthUser::from_request_parts(parts, state).await?;
        Ok(OptionalAuthUser(Some(user_id)))
    }
}

fn bearer_token(parts: &Parts) -> Option<String> {
    let header = parts
        .headers
        .get(axum::http::header::AUTHORIZATION)?
        .to_str()
        .ok()?;
    let token = header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))?;
    Some(token.to_string())
}


#[cfg(test)]
mod gate_tests {
    use super::*;
    use axum::{body::Body, http::Request, routing::get, Router};
    use tower::ServiceExt;

    async fn whoami(AuthUser(user_id): AuthUser) -> String {
        user_id.to_string()
    }

    async fn maybe_whoami(OptionalAuthUser(user_id): OptionalAuthUser) -> String {
        match user_id {
            Some(id) => id.to_string(),
            None => "anonymous".to_string(),
        }
    }

    fn test_app() -> (Router, JwtKeys) {
        let state = AppState::fake();
        let keys = JwtKeys::from_ref(&state);
        let app = Router::new()
            .route("/whoami", get(whoami))
            .route("/maybe", get(maybe_whoami))
            .with_state(state);
        (app, keys)
    }

    async fn body_string(response: axum::response::Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn missing_header_is_rejected() {
        let (app, _) = test_app();
        let response = app
            .oneshot(Request::builder().uri("/whoami").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::UNAUTHORIZED);
        assert!(body_string(response).await.contains("Access denied"));
    }

    #[tokio::test]
    async fn invalid_token_is_rejected() {
        let (app, _) = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/whoami")
                    .header("Authorization", "Bearer garbage")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::UNAUTHORIZED);
        assert!(body_string(response).await.contains("Invalid token"));
    }

    #[tokio::test]
    async fn valid_token_reaches_handler() {
        let (app, keys) = test_app();
        let token = keys.sign_access(42).unwrap();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/whoami")
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::OK);
        assert_eq!(body_string(response).await, "42");
    }

    #[tokio::test]
    async fn refresh_token_is_not_an_access_token() {
        let (app, keys) = test_app();
        let token = keys.sign_refresh(42).unwrap();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/whoami")
                    .header("Authorization", format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn optional_gate_allows_anonymous() {
        let (app, _) = test_app();
        let response = app
            .oneshot(Request::builder().uri("/maybe").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::OK);
        assert_eq!(body_string(response).await, "anonymous");
    }

    #[tokio::test]
    async fn optional_gate_still_rejects_bad_tokens() {
        let (app, _) = test_app();
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/maybe")
                    .header("Authorization", "Bearer garbage")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::UNAUTHORIZED);
    }
}
