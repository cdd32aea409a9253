use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const MIN_NAME_LEN: usize = 2;
const MIN_PASSWORD_LEN: usize = 6;

fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Request body for `POST /api/users/sign-up`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignUpRequest {
    pub fn validate(&mut self) -> Result<(), &'static str> {
        self.email = normalize_email(&self.email);
        if self.name.trim().chars().count() < MIN_NAME_LEN {
            return Err("name too short");
        }
        if !is_valid_email(&self.email) {
            return Err("invalid email");
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err("password too short");
        }
        Ok(())
    }
}

/// Request body for `POST /api/users/sign-in`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

impl SignInRequest {
    pub fn validate(&mut self) -> Result<(), &'static str> {
        self.email = normalize_email(&self.email);
        if !is_valid_email(&self.email) {
            return Err("invalid email");
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err("password too short");
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}
