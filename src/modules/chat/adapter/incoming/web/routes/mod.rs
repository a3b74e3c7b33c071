mod export_sessions;
mod post_chat;

// glob: utoipa's generated path item has to be reachable next to the handler
pub use export_sessions::*;
pub use post_chat::chat_handler;
