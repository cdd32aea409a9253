use async_trait::async_trait;
use sqlx::PgPool;

use crate::auth::repo_types::{NewUser, User};
use crate::error::{ServiceError, ServiceResult};

#[async_trait]
pub trait UsersRepository: Send + Sync {
    async fn create(&self, user: NewUser) -> ServiceResult<()>;

    /// Exact match on email and password hash; `NotFound` when nothing matches.
    async fn get_by_credentials(&self, email: &str, password_hash: &str) -> ServiceResult<User>;
}

pub struct PgUsersRepository {
    db: PgPool,
}

impl PgUsersRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UsersRepository for PgUsersRepository {
    async fn create(&self, user: NewUser) -> ServiceResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (name, email, password, registered_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(user.registered_at)
        .execute(&self.db)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                ServiceError::DuplicateEmail
            }
            other => ServiceError::Store(other),
        })?;
        Ok(())
    }

    async fn get_by_credentials(&self, email: &str, password_hash: &str) -> ServiceResult<User> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password, registered_at
            FROM users
            WHERE email = $1 AND password = $2
            "#,
        )
        .bind(email)
        .bind(password_hash)
        .fetch_optional(&self.db)
        .await?
        .ok_or(ServiceError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestDatabase;
    use time::OffsetDateTime;

    fn new_user(email: &str, password: &str) -> NewUser {
        NewUser {
            name: "Ann".into(),
            email: email.into(),
            password: password.into(),
            registered_at: OffsetDateTime::now_utc(),
        }
    }

    #[tokio::test]
    #[ignore = "needs a docker daemon"]
    async fn lookup_matches_email_and_hash_together() {
        let db = TestDatabase::new().await;
        let repo = PgUsersRepository::new(db.pool.clone());

        repo.create(new_user("ann@example.com", "hash-1")).await.unwrap();

        let user = repo
            .get_by_credentials("ann@example.com", "hash-1")
            .await
            .unwrap();
        assert!(user.id > 0);
        assert_eq!(user.name, "Ann");
        assert_eq!(user.email, "ann@example.com");

        assert!(matches!(
            repo.get_by_credentials("ann@example.com", "hash-2").await,
            Err(ServiceError::NotFound)
        ));
        assert!(matches!(
            repo.get_by_credentials("bob@example.com", "hash-1").await,
            Err(ServiceError::NotFound)
        ));
    }

    #[tokio::test]
    #[ignore = "needs a docker daemon"]
    async fn second_registration_with_same_email_is_a_duplicate() {
        let db = TestDatabase::new().await;
        let repo = PgUsersRepository::new(db.pool.clone());

        repo.create(new_user("ann@example.com", "hash-1")).await.unwrap();
        assert!(matches!(
            repo.create(new_user("ann@example.com", "hash-2")).await,
            Err(ServiceError::DuplicateEmail)
        ));
    }
}
