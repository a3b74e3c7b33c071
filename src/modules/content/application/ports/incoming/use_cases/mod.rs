mod create_entry;
mod delete_entry;
mod list_entries;
mod public_content;
mod update_entry;
mod validation;

pub use create_entry::{CreateEntryCommand, CreateEntryError, CreateEntryUseCase};
pub use delete_entry::{
    DeleteEntryCommand, DeleteEntryCommandError, DeleteEntryError, DeleteEntryUseCase,
};
pub use list_entries::{ListEntriesError, ListEntriesQuery, ListEntriesUseCase};
pub use public_content::{
    GetGroupedSkillsUseCase, GetPublicEntriesUseCase, GetPublicProfileUseCase, GroupedSkills,
    PublicContentError,
};
pub use update_entry::{
    UpdateEntryCommand, UpdateEntryCommandError, UpdateEntryError, UpdateEntryUseCase,
};
pub use validation::EntryValidationError;
