use std::sync::Arc;

use async_trait::async_trait;
use time::OffsetDateTime;
use tracing::info;

use crate::auth::{
    dto::{SignInRequest, SignUpRequest},
    jwt::JwtKeys,
    password::PasswordHasher,
    repo::UsersRepository,
    repo_types::NewUser,
};
use crate::error::ServiceResult;

#[async_trait]
pub trait UsersService: Send + Sync {
    async fn sign_up(&self, input: SignUpRequest) -> ServiceResult<()>;

    /// Returns a signed bearer token for the matching user.
    async fn sign_in(&self, input: SignInRequest) -> ServiceResult<String>;

    /// Verifies a bearer token and returns the user id it was issued for.
    async fn parse_token(&self, token: &str) -> ServiceResult<i64>;
}

pub struct Users {
    repo: Arc<dyn UsersRepository>,
    hasher: Arc<dyn PasswordHasher>,
    keys: JwtKeys,
}

impl Users {
    pub fn new(
        repo: Arc<dyn UsersRepository>,
        hasher: Arc<dyn PasswordHasher>,
        keys: JwtKeys,
    ) -> Self {
        Self { repo, hasher, keys }
    }
}

#[async_trait]
impl UsersService for Users {
    async fn sign_up(&self, input: SignUpRequest) -> ServiceResult<()> {
        let password = self.hasher.hash(&input.password)?;
        let user = NewUser {
            name: input.name,
            email: input.email,
            password,
            registered_at: OffsetDateTime::now_utc(),
        };
        let email = user.email.clone();
        self.repo.create(user).await?;
        info!(%email, "user registered");
        Ok(())
    }

    async fn sign_in(&self, input: SignInRequest) -> ServiceResult<String> {
        let password = self.hasher.hash(&input.password)?;
        let user = self.repo.get_by_credentials(&input.email, &password).await?;
        let token = self.keys.sign(user.id)?;
        info!(user_id = user.id, "user signed in");
        Ok(token)
    }

    async fn parse_token(&self, token: &str) -> ServiceResult<i64> {
        self.keys.verify(token)
    }
}
