pub mod chat_log_file;
pub mod completion_client_anthropic;
