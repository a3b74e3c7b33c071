mod chat_relay_service;
mod context_builder;
mod export_sessions_service;

pub use chat_relay_service::ChatRelayService;
pub use context_builder::build_system_context;
pub use export_sessions_service::ExportSessionsService;
