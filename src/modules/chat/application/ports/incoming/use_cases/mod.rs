mod export_sessions;
mod respond;

pub use export_sessions::{ExportSessionsError, ExportSessionsUseCase};
pub use respond::{RespondCommand, RespondCommandError, RespondError, RespondUseCase};
