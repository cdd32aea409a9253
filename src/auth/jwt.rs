use std::time::Duration;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::{debug, error};

use super::claims::Claims;
use crate::{
    config::JwtConfig,
    error::{ServiceError, ServiceResult},
    state::AppState,
};

/// HMAC keys plus the validity window applied to every issued token.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl JwtKeys {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    pub fn from_config(cfg: &JwtConfig) -> ServiceResult<Self> {
        let secs = u64::try_from(cfg.ttl_minutes)
            .ok()
            .and_then(|minutes| minutes.checked_mul(60))
            .ok_or(ServiceError::TokenLifetime)?;
        Ok(Self::new(cfg.secret.as_bytes(), Duration::from_secs(secs)))
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn sign(&self, user_id: i64) -> ServiceResult<String> {
        self.sign_at(user_id, OffsetDateTime::now_utc())
    }

    pub fn sign_at(&self, user_id: i64, issued_at: OffsetDateTime) -> ServiceResult<String> {
        let exp = i64::try_from(self.ttl.as_secs())
            .ok()
            .and_then(|secs| issued_at.checked_add(TimeDuration::seconds(secs)))
            .ok_or(ServiceError::TokenLifetime)?;
        let claims = Claims {
            sub: user_id.to_string(),
            iat: issued_at.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?;
        debug!(user_id, "jwt signed");
        Ok(token)
    }

    /// Checks algorithm family, signature and expiry, then returns the subject as a user id.
    pub fn verify(&self, token: &str) -> ServiceResult<i64> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        let user_id = data
            .claims
            .sub
            .parse::<i64>()
            .map_err(|_| ServiceError::InvalidSubject)?;
        debug!(user_id, "jwt verified");
        Ok(user_id)
    }
}

/// Splits an `Authorization` value of the exact form `Bearer <token>`.
pub fn bearer_token(header: &str) -> Option<&str> {
    let mut parts = header.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) if !token.is_empty() => Some(token),
        _ => None,
    }
}

/// Verified caller of a protected route; carries the user id from the token subject.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub i64);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .ok_or_else(|| {
                error!(handler = "authMiddleware", problem = "empty auth header");
                StatusCode::UNAUTHORIZED
            })?
            .to_str()
            .map_err(|e| {
                error!(
                    handler = "authMiddleware",
                    problem = "invalid auth header",
                    error = %e
                );
                StatusCode::UNAUTHORIZED
            })?;

        let token = bearer_token(header).ok_or_else(|| {
            error!(handler = "authMiddleware", problem = "invalid auth header");
            StatusCode::UNAUTHORIZED
        })?;

        let user_id = state.users.parse_token(token).await.map_err(|e| {
            error!(handler = "authMiddleware", problem = "service error", error = %e);
            StatusCode::UNAUTHORIZED
        })?;

        Ok(AuthUser(user_id))
    }
}
