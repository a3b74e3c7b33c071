use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::multimedia::adapter::incoming::web::routes::UploadResponse;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Backend API",
        version = "1.0.0",
        description = "Content, upload and chat API behind the portfolio site and its admin dashboard",
        contact(
            name = "API Support",
            email = "hello@alexcarter.dev"
        )
    ),
    paths(
        // Health
        crate::health::health,

        // Public content
        crate::content::adapter::incoming::web::routes::get_public_entries_handler,

        // Admin content (same shape per collection; documented by example)
        // get_entries_handler,
        // create_entry_handler,
        // update_entry_handler,
        // delete_entry_handler,

        // Media
        crate::multimedia::adapter::incoming::web::routes::upload_file_handler,

        // Chat
        // chat_handler (raw streamed body, not representable here)
        crate::chat::adapter::incoming::web::routes::export_sessions_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            UploadResponse,
        )
    ),
    modifiers(&SessionTokenSecurity),
    tags(
        (name = "public", description = "Unauthenticated site reads"),
        (name = "admin", description = "Session-gated content management"),
        (name = "chat", description = "Chatbot relay and session export"),
        (name = "health", description = "Probes")
    )
)]
pub struct ApiDoc;

pub struct SessionTokenSecurity;

impl utoipa::Modify for SessionTokenSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_session",
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
