use anyhow::{bail, Context};
use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Longest token validity window accepted from `JWT_TTL_MINUTES` (one year).
pub const MAX_TTL_MINUTES: i64 = 60 * 24 * 365;

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
    pub ssl_mode: PgSslMode,
    pub max_connections: u32,
}

impl DbConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(self.ssl_mode)
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db: DbConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub password_salt: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes the process environment.
    pub fn from_vars<F>(var: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db = DbConfig {
            host: var("DB_HOST").unwrap_or_else(|| "localhost".into()),
            port: parse_or(&var, "DB_PORT", 5432)?,
            username: var("DB_USERNAME").unwrap_or_else(|| "postgres".into()),
            password: var("DB_PASSWORD").unwrap_or_default(),
            name: var("DB_NAME").unwrap_or_else(|| "postgres".into()),
            ssl_mode: var("DB_SSLMODE")
                .unwrap_or_else(|| "disable".into())
                .parse::<PgSslMode>()
                .context("DB_SSLMODE")?,
            max_connections: parse_or(&var, "DB_MAX_CONNECTIONS", 10)?,
        };

        let server = ServerConfig {
            host: var("APP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: parse_or(&var, "APP_PORT", 8080)?,
        };

        let jwt = JwtConfig {
            secret: var("JWT_SECRET").context("JWT_SECRET must be set")?,
            ttl_minutes: parse_or(&var, "JWT_TTL_MINUTES", 15)?,
        };
        if !(1..=MAX_TTL_MINUTES).contains(&jwt.ttl_minutes) {
            bail!("JWT_TTL_MINUTES must be between 1 and {MAX_TTL_MINUTES}");
        }

        let password_salt = var("PASSWORD_SALT").context("PASSWORD_SALT must be set")?;
        // argon2 wants at least 8 salt bytes; the b64 salt string tops out at 48 raw bytes
        if !(8..=48).contains(&password_salt.len()) {
            bail!("PASSWORD_SALT must be between 8 and 48 bytes");
        }

        Ok(Self {
            db,
            server,
            jwt,
            password_salt,
        })
    }
}

fn parse_or<F, T>(var: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match var(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("invalid value for {key}: {raw:?}")),
        None => Ok(default),
    }
}
