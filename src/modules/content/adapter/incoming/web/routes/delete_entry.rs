use actix_web::{delete, web, Responder};
use serde::Deserialize;

use super::parse_collection;
use crate::auth::adapter::incoming::web::extractors::session::AdminUser;
use crate::content::application::ports::incoming::use_cases::{
    DeleteEntryCommand, DeleteEntryCommandError, DeleteEntryError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct DeleteParams {
    id: Option<String>,
}

/// Admin delete: the id arrives as a query-string parameter.
#[delete("/api/admin/{collection}")]
pub async fn delete_entry_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    params: web::Query<DeleteParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let collection = match parse_collection(&path) {
        Ok(collection) => collection,
        Err(response) => return response,
    };

    let command = match DeleteEntryCommand::new(collection, params.id.as_deref()) {
        Ok(command) => command,
        Err(err) => return map_command_error(err),
    };

    match data.content.delete.execute(command).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_delete_error(err),
    }
}

fn map_command_error(err: DeleteEntryCommandError) -> actix_web::HttpResponse {
    match err {
        DeleteEntryCommandError::MissingId => {
            ApiResponse::bad_request("MISSING_ID", "Entry id is required")
        }
        DeleteEntryCommandError::InvalidId => {
            ApiResponse::bad_request("INVALID_ID", "Entry id is not a valid UUID")
        }
    }
}

fn map_delete_error(err: DeleteEntryError) -> actix_web::HttpResponse {
    match err {
        DeleteEntryError::NotFound => ApiResponse::not_found("NOT_FOUND", "Entry not found"),
        DeleteEntryError::StoreError(msg) => ApiResponse::store_error(&msg),
    }
}
