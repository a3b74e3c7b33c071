use sea_orm_migration::prelude::*;
use serde_json::json;

use crate::m20260301_000001_create_content_entries_table::ContentEntries;

#[derive(DeriveMigrationName)]
pub struct Migration;

// Starter content for a fresh deployment. The whole wipe-and-insert runs
// inside the migration, so a failure part-way never leaves a collection
// half-populated.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(Query::delete().from_table(ContentEntries::Table).to_owned())
            .await?;

        let mut insert = Query::insert()
            .into_table(ContentEntries::Table)
            .columns([
                ContentEntries::Collection,
                ContentEntries::Category,
                ContentEntries::DisplayOrder,
                ContentEntries::Fields,
            ])
            .to_owned();

        for (collection, category, display_order, fields) in seed_rows() {
            insert.values_panic([
                Expr::val(collection).into(),
                Expr::val(category.map(str::to_string)).into(),
                Expr::val(display_order).into(),
                Expr::val(fields.to_string()).cast_as(Alias::new("jsonb")),
            ]);
        }

        manager.exec_stmt(insert).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .exec_stmt(Query::delete().from_table(ContentEntries::Table).to_owned())
            .await
    }
}

fn seed_rows() -> Vec<(&'static str, Option<&'static str>, i32, serde_json::Value)> {
    vec![
        (
            "profile",
            None,
            0,
            json!({
                "name": "Alex Carter",
                "title": "Product Engineer",
                "tagline": "I build things people actually use.",
                "bio": "Engineer with a product brain. I spend my days shipping web apps and my evenings automating everything else.",
                "email": "hello@alexcarter.dev",
                "phone": "",
                "location": "Berlin, Germany",
                "resume_url": "/files/alex-carter-resume.pdf",
                "booking_url": "https://cal.com/alexcarter/intro",
                "github_url": "https://github.com/alexcarter",
                "linkedin_url": "https://linkedin.com/in/alexcarter",
                "chatbot_enabled": true,
                "chatbot_greeting": "Hi! Ask me anything about Alex's work."
            }),
        ),
        (
            "projects",
            Some("code"),
            1,
            json!({
                "title": "Ledgerline",
                "description": "Self-hosted budgeting app with bank-sync and rule-based categorization.",
                "image": "/images/projects/ledgerline.png",
                "images": ["/images/projects/ledgerline.png"],
                "tags": ["rust", "actix-web", "postgres"],
                "demo_url": "https://ledgerline.alexcarter.dev",
                "repo_url": "https://github.com/alexcarter/ledgerline"
            }),
        ),
        (
            "projects",
            Some("ai"),
            2,
            json!({
                "title": "Clipnote",
                "description": "Meeting transcripts in, searchable summaries out.",
                "image": "",
                "images": ["/images/projects/clipnote-1.png", "/images/projects/clipnote-2.png"],
                "tags": ["llm", "embeddings"],
                "demo_url": "",
                "repo_url": "https://github.com/alexcarter/clipnote"
            }),
        ),
        (
            "projects",
            Some("no-code"),
            3,
            json!({
                "title": "Ops Hub",
                "description": "Internal ops portal stitched together from airtable and zapier.",
                "image": "",
                "images": [],
                "tags": ["airtable", "automation"],
                "demo_url": "",
                "repo_url": ""
            }),
        ),
        (
            "experience",
            None,
            1,
            json!({
                "company": "Brightlayer",
                "role": "Senior Software Engineer",
                "location": "Berlin",
                "period": "2022 - present",
                "description": "Own the billing and reporting surface of a B2B analytics product.",
                "achievements": ["Cut invoice generation time from 40s to 2s", "Led migration to event-driven exports"],
                "images": []
            }),
        ),
        (
            "experience",
            None,
            2,
            json!({
                "company": "Freelance",
                "role": "Full-stack Developer",
                "location": "Remote",
                "period": "2019 - 2022",
                "description": "Shipped web products for early-stage founders.",
                "achievements": ["Delivered 11 client projects end to end"],
                "images": []
            }),
        ),
        (
            "education",
            None,
            1,
            json!({
                "institution": "TU Berlin",
                "degree": "B.Sc. Computer Science",
                "location": "Berlin",
                "period": "2015 - 2019",
                "gpa": "1.7",
                "coursework": ["Distributed Systems", "Databases", "Machine Learning"],
                "images": []
            }),
        ),
        ("skills", Some("code"), 1, json!({"name": "Rust", "proficiency": 8, "icon": "rust"})),
        ("skills", Some("code"), 2, json!({"name": "TypeScript", "proficiency": 9, "icon": "typescript"})),
        ("skills", Some("code"), 3, json!({"name": "PostgreSQL", "proficiency": 8, "icon": "postgres"})),
        ("skills", Some("ai"), 4, json!({"name": "Prompt Engineering", "proficiency": 7, "icon": "sparkles"})),
        ("skills", Some("ai"), 5, json!({"name": "RAG Pipelines", "proficiency": 6, "icon": "search"})),
        ("skills", Some("no-code"), 6, json!({"name": "Airtable", "proficiency": 8, "icon": "table"})),
        (
            "faqs",
            None,
            1,
            json!({
                "question": "Are you available for freelance work?",
                "answer": "Occasionally. The fastest way to find out is to book a slot through the calendar link."
            }),
        ),
        (
            "faqs",
            None,
            2,
            json!({
                "question": "What stack do you prefer?",
                "answer": "Rust or TypeScript on the backend, Postgres underneath, and whatever the problem needs on top."
            }),
        ),
        (
            "side-quests",
            None,
            1,
            json!({
                "title": "Sourdough telemetry",
                "description": "A Raspberry Pi graphing the rise of my starter.",
                "image": "",
                "images": ["/images/side-quests/sourdough.jpg"],
                "tags": ["raspberry-pi", "grafana"],
                "demo_url": "",
                "repo_url": ""
            }),
        ),
        (
            "side-quests",
            None,
            2,
            json!({
                "title": "Berlin coffee map",
                "description": "Every flat white I've rated since 2021.",
                "image": "",
                "images": [],
                "tags": ["maps"],
                "demo_url": "https://coffee.alexcarter.dev",
                "repo_url": ""
            }),
        ),
    ]
}
