mod create_entry_service;
mod delete_entry_service;
mod list_entries_service;
mod public_content_service;
mod update_entry_service;

pub use create_entry_service::CreateEntryService;
pub use delete_entry_service::DeleteEntryService;
pub use list_entries_service::ListEntriesService;
pub use public_content_service::PublicContentService;
pub use update_entry_service::UpdateEntryService;

use crate::content::application::domain::entities::Category;
use crate::content::application::ports::outgoing::FieldMap;

/// Splits the column-backed attributes out of a validated field bag; the
/// remainder is stored verbatim as the entry's field bag.
pub(crate) fn split_store_columns(
    mut fields: FieldMap,
) -> (Option<Category>, Option<i32>, FieldMap) {
    let category = fields
        .remove("category")
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(Category::from_slug);

    let display_order = fields
        .remove("display_order")
        .as_ref()
        .and_then(serde_json::Value::as_i64)
        .map(|n| n as i32);

    (category, display_order, fields)
}
