use async_trait::async_trait;
use std::sync::Arc;

use crate::chat::application::domain::entities::{ChatLogRecord, MessageRole};
use crate::chat::application::ports::{
    incoming::use_cases::{ExportSessionsError, ExportSessionsUseCase},
    outgoing::ChatLogStore,
};

const CSV_HEADER: &str =
    "session_id,timestamp,user_email,message_count,topics,intent,internship_inquiry,first_user_message";

pub struct ExportSessionsService {
    log: Arc<dyn ChatLogStore>,
}

impl ExportSessionsService {
    pub fn new(log: Arc<dyn ChatLogStore>) -> Self {
        Self { log }
    }
}

fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn csv_row(record: &ChatLogRecord) -> String {
    let first_user_message = record
        .messages
        .iter()
        .find(|m| m.role == MessageRole::User)
        .map(|m| m.content.as_str())
        .unwrap_or("");

    [
        csv_field(&record.session_id),
        csv_field(&record.timestamp.to_rfc3339()),
        csv_field(record.user_email.as_deref().unwrap_or("")),
        record.messages.len().to_string(),
        csv_field(&record.summary.topics.join(";")),
        csv_field(&record.summary.intent),
        record.summary.has_internship_inquiry.to_string(),
        csv_field(first_user_message),
    ]
    .join(",")
}

#[async_trait]
impl ExportSessionsUseCase for ExportSessionsService {
    async fn execute(&self) -> Result<String, ExportSessionsError> {
        let records = self
            .log
            .read_all()
            .await
            .map_err(|e| ExportSessionsError::LogError(e.to_string()))?;

        let mut out = String::from(CSV_HEADER);
        for record in &records {
            out.push('\n');
            out.push_str(&csv_row(record));
        }
        out.push('\n');

        Ok(out)
    }
}
