mod content_store;

pub use content_store::{
    ContentPatch, ContentRow, ContentStore, ContentStoreError, FieldMap, NewContentRow,
};
