use actix_web::{post, web, HttpResponse, Responder};
use futures::StreamExt;
use serde::Deserialize;

use crate::chat::application::domain::entities::{ChatMessage, MessageRole};
use crate::chat::application::ports::incoming::use_cases::{
    RespondCommand, RespondCommandError, RespondError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub messages: Vec<ChatMessageDto>,
    pub session_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatMessageDto {
    pub role: String,
    pub content: String,
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

/// The chat relay: body in, raw streamed text out. The response is not
/// wrapped in the JSON envelope; the widget renders chunks as they come.
#[post("/api/chat")]
pub async fn chat_handler(
    payload: web::Json<ChatRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = payload.into_inner();

    let mut messages = Vec::with_capacity(payload.messages.len());
    for dto in payload.messages {
        match MessageRole::from_wire(&dto.role) {
            Some(role) => messages.push(ChatMessage {
                role,
                content: dto.content,
            }),
            None => {
                return ApiResponse::bad_request(
                    "INVALID_ROLE",
                    &format!("Unknown message role: {}", dto.role),
                );
            }
        }
    }

    let command = match RespondCommand::new(payload.session_id, messages) {
        Ok(command) => command,
        Err(err) => return map_command_error(err),
    };

    match data.chat.respond.execute(command).await {
        Ok(stream) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .streaming(stream.map(|item| {
                item.map(web::Bytes::from)
                    .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))
            })),
        Err(err) => map_respond_error(err),
    }
}

fn map_command_error(err: RespondCommandError) -> HttpResponse {
    match err {
        RespondCommandError::MissingSessionId => {
            ApiResponse::bad_request("MISSING_SESSION_ID", "Session id is required")
        }
        RespondCommandError::EmptyConversation => {
            ApiResponse::bad_request("EMPTY_CONVERSATION", "Conversation cannot be empty")
        }
    }
}

fn map_respond_error(err: RespondError) -> HttpResponse {
    match err {
        RespondError::ContextUnavailable(msg) => ApiResponse::store_error(&msg),
        RespondError::Upstream(e) => ApiResponse::bad_gateway("UPSTREAM_ERROR", &e.to_string()),
    }
}
