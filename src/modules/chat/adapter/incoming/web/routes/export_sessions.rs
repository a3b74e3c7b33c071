use actix_web::{get, http::header, web, HttpResponse, Responder};

use crate::api::schemas::ErrorResponse;
use crate::chat::application::ports::incoming::use_cases::ExportSessionsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Chat session export
///
/// The widget's "export transcript" feature downloads this CSV; one row
/// per logged session.
#[utoipa::path(
    get,
    path = "/api/chat/export",
    tag = "chat",
    responses(
        (status = 200, description = "CSV attachment of all logged sessions", content_type = "text/csv"),
        (status = 500, description = "Session log unreadable", body = ErrorResponse)
    )
)]
#[get("/api/chat/export")]
pub async fn export_sessions_handler(data: web::Data<AppState>) -> impl Responder {
    match data.chat.export.execute().await {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"chat_sessions.csv\"",
            ))
            .body(csv),
        Err(ExportSessionsError::LogError(msg)) => {
            tracing::error!("Failed to export chat sessions: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
