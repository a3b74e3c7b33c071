use actix_web::{get, web, Responder};
use serde::Deserialize;

use super::{parse_category, parse_collection};
use crate::auth::adapter::incoming::web::extractors::session::AdminUser;
use crate::content::application::domain::presentation;
use crate::content::application::ports::incoming::use_cases::{ListEntriesError, ListEntriesQuery};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CategoryFilter {
    category: Option<String>,
}

/// Admin list view: the raw ordered rows of one collection, no
/// presentation fallbacks. The editor needs to see the fields as stored.
#[get("/api/admin/{collection}")]
pub async fn get_entries_handler(
    _admin: AdminUser,
    path: web::Path<String>,
    query: web::Query<CategoryFilter>,
    data: web::Data<AppState>,
) -> impl Responder {
    let collection = match parse_collection(&path) {
        Ok(collection) => collection,
        Err(response) => return response,
    };

    let category = match parse_category(query.category.as_deref()) {
        Ok(category) => category,
        Err(response) => return response,
    };

    match data
        .content
        .list
        .execute(ListEntriesQuery {
            collection,
            category,
        })
        .await
    {
        Ok(rows) => {
            let entries: Vec<_> = rows.iter().map(presentation::row_to_json).collect();
            ApiResponse::success(entries)
        }
        Err(err) => map_list_error(err),
    }
}

fn map_list_error(err: ListEntriesError) -> actix_web::HttpResponse {
    match err {
        ListEntriesError::StoreError(msg) => ApiResponse::store_error(&msg),
    }
}
