use serde_json::Value;

use crate::content::application::domain::entities::{Category, Collection};
use crate::content::application::ports::outgoing::FieldMap;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum EntryValidationError {
    #[error("Category is required for this collection")]
    MissingCategory,

    #[error("Unknown category: {0}")]
    InvalidCategory(String),

    #[error("Proficiency is required for skills")]
    MissingProficiency,

    #[error("Proficiency must be an integer between 1 and 10")]
    InvalidProficiency,

    #[error("display_order must be an integer")]
    InvalidDisplayOrder,
}

/// Edit-boundary validation shared by create and update commands.
///
/// The enum constraints only apply where a value is supplied; `creating`
/// additionally enforces the attributes a brand-new entry must carry.
/// Everything else in the field bag is passed through untouched.
pub(super) fn validate_entry_fields(
    collection: Collection,
    fields: &FieldMap,
    creating: bool,
) -> Result<(), EntryValidationError> {
    match fields.get("category") {
        Some(Value::String(slug)) => {
            if Category::from_slug(slug).is_none() {
                return Err(EntryValidationError::InvalidCategory(slug.clone()));
            }
        }
        Some(Value::Null) | None => {
            if creating && collection.requires_category() {
                return Err(EntryValidationError::MissingCategory);
            }
        }
        Some(other) => {
            return Err(EntryValidationError::InvalidCategory(other.to_string()));
        }
    }

    if collection == Collection::Skills {
        match fields.get("proficiency") {
            Some(value) => {
                let level = value
                    .as_i64()
                    .ok_or(EntryValidationError::InvalidProficiency)?;
                if !(1..=10).contains(&level) {
                    return Err(EntryValidationError::InvalidProficiency);
                }
            }
            None => {
                if creating {
                    return Err(EntryValidationError::MissingProficiency);
                }
            }
        }
    }

    if let Some(value) = fields.get("display_order") {
        if value.as_i64().is_none() {
            return Err(EntryValidationError::InvalidDisplayOrder);
        }
    }

    Ok(())
}
