use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of create and update requests: every phone attribute except the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PhoneInput {
    pub brand: String,
    pub model: String,
    pub year: i32,
    pub os: String,
    pub processor: String,
}

impl PhoneInput {
    pub fn validate(&self) -> Result<(), &'static str> {
        let text_fields = [&self.brand, &self.model, &self.os, &self.processor];
        if text_fields.iter().any(|f| f.trim().is_empty()) {
            return Err("blank field");
        }
        if self.year <= 0 {
            return Err("year must be positive");
        }
        Ok(())
    }
}
