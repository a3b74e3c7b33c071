use std::fmt::Write;

use serde_json::Value;

use crate::content::application::domain::entities::Collection;
use crate::content::application::ports::outgoing::{
    ContentRow, ContentStore, ContentStoreError, FieldMap,
};

fn text(fields: &FieldMap, key: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}

fn list_line(row: &ContentRow) -> String {
    let mut line = format!("- {}", text(&row.fields, "title"));

    if let Some(category) = &row.category {
        let _ = write!(line, " [{category}]");
    }

    let description = text(&row.fields, "description");
    if !description.is_empty() {
        let _ = write!(line, ": {description}");
    }

    let demo = text(&row.fields, "demo_url");
    if !demo.is_empty() {
        let _ = write!(line, " (demo: {demo})");
    }

    line
}

/// Renders the fixed system-prompt template from the current content.
///
/// The relay memoizes the result for the process lifetime, so content
/// edits only reach the chatbot after a restart.
pub async fn build_system_context(
    store: &dyn ContentStore,
) -> Result<String, ContentStoreError> {
    let profile = store
        .list(Collection::Profile, None)
        .await?
        .into_iter()
        .next()
        .map(|row| row.fields)
        .unwrap_or_default();

    let projects = store.list(Collection::Projects, None).await?;
    let skills = store.list(Collection::Skills, None).await?;
    let side_quests = store.list(Collection::SideQuests, None).await?;

    let name = match text(&profile, "name") {
        n if n.is_empty() => "the site owner".to_string(),
        n => n,
    };
    let booking_url = text(&profile, "booking_url");

    let mut out = String::new();

    let _ = writeln!(
        out,
        "You are the assistant chatbot on {name}'s personal portfolio website. \
         Answer visitor questions about {name} using only the information below. \
         If something is not covered here, say so instead of guessing."
    );

    let _ = writeln!(out, "\n## About");
    for (label, key) in [
        ("Name", "name"),
        ("Title", "title"),
        ("Tagline", "tagline"),
        ("Location", "location"),
        ("Email", "email"),
        ("Bio", "bio"),
    ] {
        let value = text(&profile, key);
        if !value.is_empty() {
            let _ = writeln!(out, "{label}: {value}");
        }
    }

    let _ = writeln!(out, "\n## Projects");
    for project in &projects {
        let _ = writeln!(out, "{}", list_line(project));
    }

    let _ = writeln!(out, "\n## Skills");
    for skill in &skills {
        let level = skill
            .fields
            .get("proficiency")
            .and_then(Value::as_i64)
            .unwrap_or(0);
        let category = skill.category.as_deref().unwrap_or("general");
        let _ = writeln!(
            out,
            "- {} ({category}, {level}/10)",
            text(&skill.fields, "name")
        );
    }

    let _ = writeln!(out, "\n## Side quests");
    for quest in &side_quests {
        let _ = writeln!(out, "{}", list_line(quest));
    }

    let _ = writeln!(
        out,
        "\n## Formatting\n\
         - Answer in short plain-text paragraphs. No markdown tables, no headers.\n\
         - Keep answers under 120 words unless the visitor asks for detail."
    );

    let _ = writeln!(out, "\n## Canned responses");
    if booking_url.is_empty() {
        let _ = writeln!(
            out,
            "- If the visitor asks about availability or scheduling, ask them to \
             leave an email address so {name} can follow up."
        );
    } else {
        let _ = writeln!(
            out,
            "- If the visitor asks about availability or scheduling, point them to \
             the booking page: {booking_url}"
        );
    }
    let _ = writeln!(
        out,
        "- If the visitor asks about internships, reply exactly: \
         \"{name} isn't taking interns at the moment, but leave an email and \
         they'll reach out if that changes.\""
    );

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::tests::support::stubs::InMemoryContentStore;

    #[tokio::test]
    async fn context_contains_profile_projects_and_canned_rules() {
        let store = InMemoryContentStore::new();
        store
            .seed(
                Collection::Profile,
                None,
                0,
                json!({"name": "Alex Carter", "booking_url": "https://cal.com/alex"}),
            )
            .await;
        store
            .seed(
                Collection::Projects,
                Some("code"),
                1,
                json!({"title": "Ledgerline", "description": "budgeting app"}),
            )
            .await;
        store
            .seed(
                Collection::Skills,
                Some("code"),
                1,
                json!({"name": "Rust", "proficiency": 8}),
            )
            .await;

        let context = build_system_context(&store).await.unwrap();

        assert!(context.contains("Alex Carter's personal portfolio website"));
        assert!(context.contains("- Ledgerline [code]: budgeting app"));
        assert!(context.contains("- Rust (code, 8/10)"));
        assert!(context.contains("https://cal.com/alex"));
        assert!(context.contains("internships"));
    }

    #[tokio::test]
    async fn empty_store_still_yields_a_usable_prompt() {
        let store = InMemoryContentStore::new();

        let context = build_system_context(&store).await.unwrap();

        assert!(context.contains("the site owner"));
        assert!(context.contains("## Formatting"));
    }

    #[tokio::test]
    async fn store_errors_propagate() {
        let store = InMemoryContentStore::failing("connection lost");

        let result = build_system_context(&store).await;

        assert!(matches!(result, Err(ContentStoreError::DatabaseError(_))));
    }
}
