use regex::Regex;
use std::sync::OnceLock;

use super::entities::{ChatMessage, MessageRole, SessionSummary};

//
// ──────────────────────────────────────────────────────────
// Keyword tables
// ──────────────────────────────────────────────────────────
//

/// Topic is additive: every table row whose keyword list matches the
/// conversation contributes its label.
const TOPIC_KEYWORDS: &[(&str, &[&str])] = &[
    ("projects", &["project", "portfolio", "built", "app", "demo"]),
    ("skills", &["skill", "stack", "technolog", "tooling", "framework"]),
    ("experience", &["experience", "job", "career", "company", "worked"]),
    ("education", &["education", "degree", "university", "college", "studied"]),
    ("availability", AVAILABILITY_KEYWORDS),
    ("internship", INTERNSHIP_KEYWORDS),
    ("contact", &["contact", "email", "reach", "call", "meeting"]),
];

/// Intent is exclusive: the first matching rule wins.
const INTENT_RULES: &[(&str, &[&str])] = &[
    ("hiring", &["hire", "hiring", "recruit", "position", "role", "opportunity"]),
    ("internship", INTERNSHIP_KEYWORDS),
    ("collaboration", &["collaborate", "collaboration", "partner", "co-found"]),
    ("pricing", &["rate", "pricing", "cost", "budget", "quote"]),
];

const DEFAULT_INTENT: &str = "general";

const AVAILABILITY_KEYWORDS: &[&str] =
    &["available", "availability", "freelance", "open to work", "book a call"];

const INTERNSHIP_KEYWORDS: &[&str] = &["internship", "intern", "mba"];

//
// ──────────────────────────────────────────────────────────
// Summarization
// ──────────────────────────────────────────────────────────
//

fn matches_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| haystack.contains(keyword))
}

/// Scans the lower-cased concatenation of every message in the
/// conversation, regardless of role.
pub fn summarize(messages: &[ChatMessage]) -> SessionSummary {
    let haystack = messages
        .iter()
        .map(|m| m.content.to_lowercase())
        .collect::<Vec<_>>()
        .join(" ");

    let topics = TOPIC_KEYWORDS
        .iter()
        .filter(|(_, keywords)| matches_any(&haystack, keywords))
        .map(|(topic, _)| topic.to_string())
        .collect();

    let intent = INTENT_RULES
        .iter()
        .find(|(_, keywords)| matches_any(&haystack, keywords))
        .map(|(intent, _)| intent.to_string())
        .unwrap_or_else(|| DEFAULT_INTENT.to_string());

    SessionSummary {
        topics,
        intent,
        has_internship_inquiry: matches_any(&haystack, INTERNSHIP_KEYWORDS),
        has_availability_inquiry: matches_any(&haystack, AVAILABILITY_KEYWORDS),
    }
}

/// Best-effort scrape of an email address from the visitor's messages.
pub fn extract_email(messages: &[ChatMessage]) -> Option<String> {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    let pattern = EMAIL.get_or_init(|| {
        Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap()
    });

    messages
        .iter()
        .filter(|m| m.role == MessageRole::User)
        .find_map(|m| pattern.find(&m.content))
        .map(|m| m.as_str().to_string())
}
