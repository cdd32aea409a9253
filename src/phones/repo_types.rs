use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Phone row as stored in `phones`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Phone {
    pub id: i64,
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub os: String,
    pub processor: String,
}
