use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::{
    jwt::JwtKeys,
    password::Argon2Hasher,
    repo::PgUsersRepository,
    services::{Users, UsersService},
};
use crate::config::AppConfig;
use crate::phones::{
    repo::PgPhonesRepository,
    services::{Phones, PhonesService},
};

#[derive(Clone)]
pub struct AppState {
    pub phones: Arc<dyn PhonesService>,
    pub users: Arc<dyn UsersService>,
}

impl AppState {
    /// Wires the Postgres-backed repositories and services.
    pub fn init(db: PgPool, config: &AppConfig) -> anyhow::Result<Self> {
        let hasher = Arc::new(Argon2Hasher::new(&config.password_salt)?);
        let keys = JwtKeys::from_config(&config.jwt)?;
        tracing::info!(ttl_secs = keys.ttl().as_secs(), "token validity window");

        let phones = Arc::new(Phones::new(Arc::new(PgPhonesRepository::new(db.clone()))));
        let users = Arc::new(Users::new(
            Arc::new(PgUsersRepository::new(db)),
            hasher,
            keys,
        ));

        Ok(Self::from_parts(phones, users))
    }

    pub fn from_parts(phones: Arc<dyn PhonesService>, users: Arc<dyn UsersService>) -> Self {
        Self { phones, users }
    }
}
