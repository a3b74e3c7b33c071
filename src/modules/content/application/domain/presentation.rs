use serde_json::{json, Map, Value};

use crate::content::application::domain::entities::{Category, Collection, DEFAULT_ENTRY_IMAGE};
use crate::content::application::ports::outgoing::ContentRow;

//
// ──────────────────────────────────────────────────────────
// Row flattening
// ──────────────────────────────────────────────────────────
//

/// Flattens a stored row into the wire shape: the field bag plus the
/// id/ordering/timestamp columns. Column values win over stray bag keys.
pub fn row_to_json(row: &ContentRow) -> Value {
    let mut map = row.fields.clone();

    map.insert("id".to_string(), json!(row.id));
    if row.collection.requires_category() {
        map.insert(
            "category".to_string(),
            row.category.clone().map(Value::String).unwrap_or(Value::Null),
        );
    }
    map.insert("display_order".to_string(), json!(row.display_order));
    map.insert("created_at".to_string(), json!(row.created_at.to_rfc3339()));
    map.insert("updated_at".to_string(), json!(row.updated_at.to_rfc3339()));

    Value::Object(map)
}

//
// ──────────────────────────────────────────────────────────
// Public-read normalization
// ──────────────────────────────────────────────────────────
//

/// Applies the presentation fallbacks of the public read path: legacy
/// field names coalesced into their canonical spelling, and a display
/// image resolved for project-shaped entries.
pub fn normalize_entry(row: &ContentRow) -> Value {
    let mut value = row_to_json(row);

    let Value::Object(ref mut map) = value else {
        return value;
    };

    match row.collection {
        Collection::Education => {
            coalesce_alias(map, "school", "institution");
        }
        Collection::Projects | Collection::SideQuests => {
            coalesce_alias(map, "name", "title");
            resolve_display_image(map, row);
        }
        _ => {}
    }

    value
}

fn is_non_empty_string(value: &Value) -> bool {
    value.as_str().is_some_and(|s| !s.trim().is_empty())
}

fn coalesce_alias(map: &mut Map<String, Value>, legacy: &str, canonical: &str) {
    let canonical_present = map.get(canonical).is_some_and(is_non_empty_string);

    if !canonical_present {
        if let Some(value) = map.get(legacy).cloned() {
            if is_non_empty_string(&value) {
                map.insert(canonical.to_string(), value);
            }
        }
    }

    map.remove(legacy);
}

/// image → images[0] → category default path.
fn resolve_display_image(map: &mut Map<String, Value>, row: &ContentRow) {
    let has_image = map.get("image").is_some_and(is_non_empty_string);
    if has_image {
        return;
    }

    let from_list = map
        .get("images")
        .and_then(Value::as_array)
        .and_then(|images| images.first())
        .filter(|first| is_non_empty_string(first))
        .cloned();

    let resolved = from_list.unwrap_or_else(|| {
        let default = row
            .category
            .as_deref()
            .and_then(Category::from_slug)
            .map(|c| c.default_image_path())
            .unwrap_or(DEFAULT_ENTRY_IMAGE);
        Value::String(default.to_string())
    });

    map.insert("image".to_string(), resolved);
}

//
// ──────────────────────────────────────────────────────────
// Collection-specific shapes
// ──────────────────────────────────────────────────────────
//

/// Groups normalized skills by category slug. Null or unknown categories
/// land in the fallback group, so every skill appears in exactly one.
pub fn group_skills(entries: &[Value]) -> std::collections::BTreeMap<String, Vec<Value>> {
    let mut grouped: std::collections::BTreeMap<String, Vec<Value>> = Default::default();

    for entry in entries {
        let category = entry
            .get("category")
            .and_then(Value::as_str)
            .and_then(Category::from_slug)
            .unwrap_or(Category::FALLBACK);

        grouped
            .entry(category.slug().to_string())
            .or_default()
            .push(entry.clone());
    }

    grouped
}

/// Substitute profile for the degraded-but-non-fatal "no profile row"
/// state; the front end renders these values verbatim.
pub fn placeholder_profile() -> Value {
    json!({
        "name": "Your Name",
        "title": "Your Title",
        "tagline": "",
        "bio": "",
        "email": "",
        "phone": "",
        "location": "",
        "resume_url": "",
        "booking_url": "",
        "github_url": "",
        "linkedin_url": "",
        "chatbot_enabled": false,
        "chatbot_greeting": ""
    })
}
