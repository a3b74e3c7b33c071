mod chat_log_store;
mod completion_stream;

pub use chat_log_store::{ChatLogError, ChatLogStore};
pub use completion_stream::{CompletionError, CompletionStream, TokenStream};
