use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::auth::{
    dto::{SignInRequest, SignUpRequest, TokenResponse},
    handlers as users,
};
use crate::phones::{dto::PhoneInput, handlers as phones, repo_types::Phone};

/// OpenAPI document served next to the Swagger UI.
#[derive(OpenApi)]
#[openapi(
    info(title = "Phones API", description = "Phone catalog behind bearer-token auth"),
    paths(
        users::sign_up,
        users::sign_in,
        phones::create_phone,
        phones::get_all_phones,
        phones::get_phone_by_id,
        phones::update_phone_by_id,
        phones::delete_phone_by_id,
    ),
    components(schemas(Phone, PhoneInput, SignUpRequest, SignInRequest, TokenResponse)),
    modifiers(&BearerAuth),
    tags(
        (name = "users", description = "Registration and sign-in"),
        (name = "phones", description = "Phone catalog, token required")
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
