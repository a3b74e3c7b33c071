mod create_entry;
mod delete_entry;
mod get_entries;
mod get_public_entries;
mod update_entry;

pub use create_entry::create_entry_handler;
pub use delete_entry::delete_entry_handler;
pub use get_entries::get_entries_handler;
// glob: utoipa's generated path item has to be reachable next to the handler
pub use get_public_entries::*;
pub use update_entry::update_entry_handler;

use actix_web::HttpResponse;

use crate::content::application::domain::entities::{Category, Collection};
use crate::content::application::ports::incoming::use_cases::EntryValidationError;
use crate::shared::api::ApiResponse;

//
// ──────────────────────────────────────────────────────────
// Shared request parsing / error mapping
// ──────────────────────────────────────────────────────────
//

fn parse_collection(slug: &str) -> Result<Collection, HttpResponse> {
    Collection::from_slug(slug).ok_or_else(|| {
        ApiResponse::bad_request(
            "UNKNOWN_COLLECTION",
            &format!("Unknown collection: {slug}"),
        )
    })
}

fn parse_category(raw: Option<&str>) -> Result<Option<Category>, HttpResponse> {
    match raw {
        None => Ok(None),
        Some(slug) => Category::from_slug(slug).map(Some).ok_or_else(|| {
            ApiResponse::bad_request("INVALID_CATEGORY", &format!("Unknown category: {slug}"))
        }),
    }
}

fn map_validation_error(err: EntryValidationError) -> HttpResponse {
    match err {
        EntryValidationError::MissingCategory => ApiResponse::bad_request(
            "MISSING_CATEGORY",
            "Category is required for this collection",
        ),
        EntryValidationError::InvalidCategory(slug) => {
            ApiResponse::bad_request("INVALID_CATEGORY", &format!("Unknown category: {slug}"))
        }
        EntryValidationError::MissingProficiency => {
            ApiResponse::bad_request("MISSING_PROFICIENCY", "Proficiency is required for skills")
        }
        EntryValidationError::InvalidProficiency => ApiResponse::bad_request(
            "INVALID_PROFICIENCY",
            "Proficiency must be an integer between 1 and 10",
        ),
        EntryValidationError::InvalidDisplayOrder => {
            ApiResponse::bad_request("INVALID_DISPLAY_ORDER", "display_order must be an integer")
        }
    }
}
