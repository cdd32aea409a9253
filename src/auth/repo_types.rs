use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;

/// User record in the database.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String, // Argon2 hash, not exposed in JSON
    pub registered_at: OffsetDateTime,
}

/// Row to insert at sign-up; the id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub registered_at: OffsetDateTime,
}
