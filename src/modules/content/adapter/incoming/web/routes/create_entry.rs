use actix_web::{post, web, Responder};

use super::{map_validation_error, parse_collection};
use crate::auth::adapter::incoming::web::extractors::session::AdminUser;
use crate::content::application::domain::presentation;
use crate::content::application::ports::incoming::use_cases::{
    CreateEntryCommand, CreateEntryError,
};
use crate::content::application::ports::outgoing::FieldMap;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Admin create: the body is the full field set; the store assigns the id
/// and timestamps.
#[post("/api/admin/{collection}")]
pub async fn create_entry_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    payload: web::Json<FieldMap>,
    data: web::Data<AppState>,
) -> impl Responder {
    let collection = match parse_collection(&path) {
        Ok(collection) => collection,
        Err(response) => return response,
    };

    let command = match CreateEntryCommand::new(collection, payload.into_inner()) {
        Ok(command) => command,
        Err(err) => return map_validation_error(err),
    };

    match data.content.create.execute(command).await {
        Ok(row) => ApiResponse::created(presentation::row_to_json(&row)),
        Err(err) => map_create_error(err),
    }
}

fn map_create_error(err: CreateEntryError) -> actix_web::HttpResponse {
    match err {
        CreateEntryError::StoreError(msg) => ApiResponse::store_error(&msg),
    }
}
