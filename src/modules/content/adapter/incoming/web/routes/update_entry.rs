use actix_web::{put, web, Responder};

use super::{map_validation_error, parse_collection};
use crate::auth::adapter::incoming::web::extractors::session::AdminUser;
use crate::content::application::domain::presentation;
use crate::content::application::ports::incoming::use_cases::{
    UpdateEntryCommand, UpdateEntryCommandError, UpdateEntryError,
};
use crate::content::application::ports::outgoing::FieldMap;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Admin update: the body carries the id plus the fields to overwrite;
/// everything else on the entry is left as stored.
#[put("/api/admin/{collection}")]
pub async fn update_entry_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    payload: web::Json<FieldMap>,
    data: web::Data<AppState>,
) -> impl Responder {
    let collection = match parse_collection(&path) {
        Ok(collection) => collection,
        Err(response) => return response,
    };

    let command = match UpdateEntryCommand::new(collection, payload.into_inner()) {
        Ok(command) => command,
        Err(err) => return map_command_error(err),
    };

    match data.content.update.execute(command).await {
        Ok(row) => ApiResponse::success(presentation::row_to_json(&row)),
        Err(err) => map_update_error(err),
    }
}

fn map_command_error(err: UpdateEntryCommandError) -> actix_web::HttpResponse {
    match err {
        UpdateEntryCommandError::MissingId => {
            ApiResponse::bad_request("MISSING_ID", "Entry id is required")
        }
        UpdateEntryCommandError::InvalidId => {
            ApiResponse::bad_request("INVALID_ID", "Entry id is not a valid UUID")
        }
        UpdateEntryCommandError::Invalid(err) => map_validation_error(err),
    }
}

fn map_update_error(err: UpdateEntryError) -> actix_web::HttpResponse {
    match err {
        UpdateEntryError::NotFound => ApiResponse::not_found("NOT_FOUND", "Entry not found"),
        UpdateEntryError::StoreError(msg) => ApiResponse::store_error(&msg),
    }
}
