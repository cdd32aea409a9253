use async_trait::async_trait;
use sqlx::PgPool;

use super::{dto::PhoneInput, repo_types::Phone};
use crate::error::{ServiceError, ServiceResult};

#[async_trait]
pub trait PhonesRepository: Send + Sync {
    async fn get_by_id(&self, id: i64) -> ServiceResult<Phone>;
    async fn get_all(&self) -> ServiceResult<Vec<Phone>>;
    async fn create(&self, input: PhoneInput) -> ServiceResult<Phone>;
    /// `NotFound` when no row has this id; never inserts.
    async fn update_by_id(&self, id: i64, input: PhoneInput) -> ServiceResult<()>;
    async fn delete_by_id(&self, id: i64) -> ServiceResult<()>;
}

pub struct PgPhonesRepository {
    db: PgPool,
}

impl PgPhonesRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PhonesRepository for PgPhonesRepository {
    async fn get_by_id(&self, id: i64) -> ServiceResult<Phone> {
        sqlx::query_as::<_, Phone>(
            r#"
            SELECT id, brand, model, year, os, processor
            FROM phones
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or(ServiceError::NotFound)
    }

    async fn get_all(&self) -> ServiceResult<Vec<Phone>> {
        let rows = sqlx::query_as::<_, Phone>(
            r#"
            SELECT id, brand, model, year, os, processor
            FROM phones
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn create(&self, input: PhoneInput) -> ServiceResult<Phone> {
        let phone = sqlx::query_as::<_, Phone>(
            r#"
            INSERT INTO phones (brand, model, year, os, processor)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, brand, model, year, os, processor
            "#,
        )
        .bind(&input.brand)
        .bind(&input.model)
        .bind(input.year)
        .bind(&input.os)
        .bind(&input.processor)
        .fetch_one(&self.db)
        .await?;
        Ok(phone)
    }

    async fn update_by_id(&self, id: i64, input: PhoneInput) -> ServiceResult<()> {
        let res = sqlx::query(
            r#"
            UPDATE phones
               SET brand = $1, model = $2, year = $3, os = $4, processor = $5
             WHERE id = $6
            "#,
        )
        .bind(&input.brand)
        .bind(&input.model)
        .bind(input.year)
        .bind(&input.os)
        .bind(&input.processor)
        .bind(id)
        .execute(&self.db)
        .await?;

        if res.rows_affected() == 0 {
            return Err(ServiceError::NotFound);
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: i64) -> ServiceResult<()> {
        let res = sqlx::query("DELETE FROM phones WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        if res.rows_affected() == 0 {
            return Err(ServiceError::NotFound);
        }
        Ok(())
    }
}
