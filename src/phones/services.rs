use std::sync::Arc;

use async_trait::async_trait;

use super::{dto::PhoneInput, repo::PhonesRepository, repo_types::Phone};
use crate::error::ServiceResult;

#[async_trait]
pub trait PhonesService: Send + Sync {
    async fn get_phone_by_id(&self, id: i64) -> ServiceResult<Phone>;
    async fn get_all_phones(&self) -> ServiceResult<Vec<Phone>>;
    async fn create_phone(&self, input: PhoneInput) -> ServiceResult<Phone>;
    async fn update_phone_by_id(&self, id: i64, input: PhoneInput) -> ServiceResult<()>;
    async fn delete_phone_by_id(&self, id: i64) -> ServiceResult<()>;
}

pub struct Phones {
    repo: Arc<dyn PhonesRepository>,
}

impl Phones {
    pub fn new(repo: Arc<dyn PhonesRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl PhonesService for Phones {
    async fn get_phone_by_id(&self, id: i64) -> ServiceResult<Phone> {
        self.repo.get_by_id(id).await
    }

    async fn get_all_phones(&self) -> ServiceResult<Vec<Phone>> {
        self.repo.get_all().await
    }

    async fn create_phone(&self, input: PhoneInput) -> ServiceResult<Phone> {
        self.repo.create(input).await
    }

    async fn update_phone_by_id(&self, id: i64, input: PhoneInput) -> ServiceResult<()> {
        self.repo.update_by_id(id, input).await
    }

    async fn delete_phone_by_id(&self, id: i64) -> ServiceResult<()> {
        self.repo.delete_by_id(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ServiceError;
    use crate::testing::{phone_from, InMemoryPhonesRepository};

    fn service() -> Phones {
        Phones::new(Arc::new(InMemoryPhonesRepository::default()))
    }

    fn input(model: &str) -> PhoneInput {
        PhoneInput {
            brand: "Acme".into(),
            model: model.into(),
            year: 2023,
            os: "AcmeOS".into(),
            processor: "A1".into(),
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_same_fields() {
        let phones = service();
        let created = phones.create_phone(input("X1")).await.expect("create");
        let fetched = phones.get_phone_by_id(created.id).await.expect("get");
        assert_eq!(fetched, phone_from(created.id, input("X1")));
    }

    #[tokio::test]
    async fn missing_id_is_not_found() {
        let phones = service();
        let err = phones.get_phone_by_id(999).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound));
    }

    #[tokio::test]
    async fn update_reflects_new_values() {
        let phones = service();
        let created = phones.create_phone(input("X1")).await.expect("create");
        phones
            .update_phone_by_id(created.id, input("X2"))
            .await
            .expect("update");
        let fetched = phones.get_phone_by_id(created.id).await.expect("get");
        assert_eq!(fetched.model, "X2");
    }

    #[tokio::test]
    async fn update_of_missing_id_creates_nothing() {
        let phones = service();
        let err = phones.update_phone_by_id(5, input("X1")).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound));
        assert!(phones.get_all_phones().await.expect("list").is_empty());
        assert!(phones.get_phone_by_id(5).await.is_err());
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let phones = service();
        let created = phones.create_phone(input("X1")).await.expect("create");
        phones.delete_phone_by_id(created.id).await.expect("delete");
        assert!(matches!(
            phones.get_phone_by_id(created.id).await,
            Err(ServiceError::NotFound)
        ));
        assert!(matches!(
            phones.delete_phone_by_id(created.id).await,
            Err(ServiceError::NotFound)
        ));
    }

    #[tokio::test]
    async fn list_returns_all_in_id_order() {
        let phones = service();
        phones.create_phone(input("X1")).await.expect("create");
        phones.create_phone(input("X2")).await.expect("create");
        let all = phones.get_all_phones().await.expect("list");
        let models: Vec<_> = all.iter().map(|p| p.model.as_str()).collect();
        assert_eq!(models, ["X1", "X2"]);
    }
}
