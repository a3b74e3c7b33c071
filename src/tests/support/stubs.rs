//! Hand-rolled stubs shared by route and service tests.

use async_trait::async_trait;
use chrono::{DateTime, Duration, FixedOffset, Utc};
use futures::stream;
use serde_json::Value;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::auth::application::ports::outgoing::{SessionClaims, SessionError, SessionVerifier};
use crate::chat::application::domain::entities::{ChatLogRecord, ChatMessage};
use crate::chat::application::ports::incoming::use_cases::{
    ExportSessionsError, ExportSessionsUseCase, RespondCommand, RespondError, RespondUseCase,
};
use crate::chat::application::ports::outgoing::{
    ChatLogError, ChatLogStore, CompletionError, CompletionStream, TokenStream,
};
use crate::content::application::domain::entities::{Category, Collection};
use crate::content::application::ports::incoming::use_cases::{
    CreateEntryCommand, CreateEntryError, CreateEntryUseCase, DeleteEntryCommand,
    DeleteEntryError, DeleteEntryUseCase, GetGroupedSkillsUseCase, GetPublicEntriesUseCase,
    GetPublicProfileUseCase, GroupedSkills, ListEntriesError, ListEntriesQuery,
    ListEntriesUseCase, PublicContentError, UpdateEntryCommand, UpdateEntryError,
    UpdateEntryUseCase,
};
use crate::content::application::ports::outgoing::{
    ContentPatch, ContentRow, ContentStore, ContentStoreError, NewContentRow,
};
use crate::multimedia::application::ports::incoming::use_cases::{
    StoreUploadCommand, StoreUploadError, StoreUploadUseCase,
};
use crate::multimedia::application::ports::outgoing::StoredObject;

// ============================================================
// Session Verifier Stub
// ============================================================

/// Accepts exactly the token "test-token".
pub struct StubSessionVerifier;

impl SessionVerifier for StubSessionVerifier {
    fn verify(&self, token: &str) -> Result<SessionClaims, SessionError> {
        if token == "test-token" {
            Ok(SessionClaims {
                subject: "admin".to_string(),
            })
        } else {
            Err(SessionError::InvalidToken)
        }
    }
}

// ============================================================
// In-memory Content Store (real semantics)
// ============================================================

/// Behaves like the managed store: equality filter, `display_order ASC,
/// created_at DESC` ordering, merge-updates, id-keyed deletes. Inserts
/// advance a logical clock so tie-breaks are deterministic.
#[derive(Clone)]
pub struct InMemoryContentStore {
    rows: Arc<Mutex<Vec<ContentRow>>>,
    base: DateTime<FixedOffset>,
    clock: Arc<AtomicI64>,
    list_calls: Arc<AtomicUsize>,
    failure: Option<String>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(Mutex::new(Vec::new())),
            base: Utc::now().fixed_offset(),
            clock: Arc::new(AtomicI64::new(0)),
            list_calls: Arc::new(AtomicUsize::new(0)),
            failure: None,
        }
    }

    /// Every operation fails with the given message.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::new()
        }
    }

    pub fn list_call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.list_calls)
    }

    fn next_timestamp(&self) -> DateTime<FixedOffset> {
        let tick = self.clock.fetch_add(1, Ordering::SeqCst);
        self.base + Duration::seconds(tick)
    }

    fn check_failure(&self) -> Result<(), ContentStoreError> {
        match &self.failure {
            Some(message) => Err(ContentStoreError::DatabaseError(message.clone())),
            None => Ok(()),
        }
    }

    /// Direct insert for test setup; returns the generated id.
    pub async fn seed(
        &self,
        collection: Collection,
        category: Option<&str>,
        display_order: i32,
        fields: Value,
    ) -> Uuid {
        let id = Uuid::new_v4();
        let now = self.next_timestamp();

        self.rows.lock().await.push(ContentRow {
            id,
            collection,
            category: category.map(str::to_string),
            display_order,
            fields: fields.as_object().cloned().unwrap_or_default(),
            created_at: now,
            updated_at: now,
        });

        id
    }
}

impl Default for InMemoryContentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn list(
        &self,
        collection: Collection,
        category: Option<Category>,
    ) -> Result<Vec<ContentRow>, ContentStoreError> {
        self.check_failure()?;
        self.list_calls.fetch_add(1, Ordering::SeqCst);

        let mut rows: Vec<ContentRow> = self
            .rows
            .lock()
            .await
            .iter()
            .filter(|row| row.collection == collection)
            .filter(|row| match category {
                Some(category) => row.category.as_deref() == Some(category.slug()),
                None => true,
            })
            .cloned()
            .collect();

        rows.sort_by(|a, b| {
            a.display_order
                .cmp(&b.display_order)
                .then(b.created_at.cmp(&a.created_at))
        });

        Ok(rows)
    }

    async fn insert(&self, data: NewContentRow) -> Result<ContentRow, ContentStoreError> {
        self.check_failure()?;

        let now = self.next_timestamp();
        let row = ContentRow {
            id: Uuid::new_v4(),
            collection: data.collection,
            category: data.category.map(|c| c.slug().to_string()),
            display_order: data.display_order,
            fields: data.fields,
            created_at: now,
            updated_at: now,
        };

        self.rows.lock().await.push(row.clone());

        Ok(row)
    }

    async fn update(
        &self,
        collection: Collection,
        id: Uuid,
        patch: ContentPatch,
    ) -> Result<ContentRow, ContentStoreError> {
        self.check_failure()?;

        let now = self.next_timestamp();
        let mut rows = self.rows.lock().await;

        let row = rows
            .iter_mut()
            .find(|row| row.id == id && row.collection == collection)
            .ok_or(ContentStoreError::NotFound)?;

        for (key, value) in patch.fields {
            row.fields.insert(key, value);
        }
        if let Some(category) = patch.category {
            row.category = Some(category.slug().to_string());
        }
        if let Some(display_order) = patch.display_order {
            row.display_order = display_order;
        }
        row.updated_at = now;

        Ok(row.clone())
    }

    async fn delete(&self, collection: Collection, id: Uuid) -> Result<(), ContentStoreError> {
        self.check_failure()?;

        let mut rows = self.rows.lock().await;
        let before = rows.len();
        rows.retain(|row| !(row.id == id && row.collection == collection));

        if rows.len() == before {
            return Err(ContentStoreError::NotFound);
        }

        Ok(())
    }
}

// ============================================================
// Content Use Case Stubs
// ============================================================

pub struct StubListEntriesUseCase {
    result: Result<Vec<ContentRow>, ListEntriesError>,
}

impl StubListEntriesUseCase {
    pub fn success(rows: Vec<ContentRow>) -> Self {
        Self { result: Ok(rows) }
    }

    pub fn store_error(msg: &str) -> Self {
        Self {
            result: Err(ListEntriesError::StoreError(msg.to_string())),
        }
    }
}

#[async_trait]
impl ListEntriesUseCase for StubListEntriesUseCase {
    async fn execute(
        &self,
        _query: ListEntriesQuery,
    ) -> Result<Vec<ContentRow>, ListEntriesError> {
        self.result.clone()
    }
}

/// Echoes the command back as a freshly persisted row.
pub struct StubCreateEntryUseCase;

#[async_trait]
impl CreateEntryUseCase for StubCreateEntryUseCase {
    async fn execute(&self, command: CreateEntryCommand) -> Result<ContentRow, CreateEntryError> {
        let now = Utc::now().fixed_offset();
        Ok(ContentRow {
            id: Uuid::new_v4(),
            collection: command.collection(),
            category: None,
            display_order: 0,
            fields: command.into_fields(),
            created_at: now,
            updated_at: now,
        })
    }
}

pub enum StubUpdateEntryUseCase {
    Echo,
    NotFound,
}

impl StubUpdateEntryUseCase {
    pub fn success_echo() -> Self {
        Self::Echo
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}

#[async_trait]
impl UpdateEntryUseCase for StubUpdateEntryUseCase {
    async fn execute(&self, command: UpdateEntryCommand) -> Result<ContentRow, UpdateEntryError> {
        match self {
            Self::Echo => {
                let now = Utc::now().fixed_offset();
                Ok(ContentRow {
                    id: command.id(),
                    collection: command.collection(),
                    category: None,
                    display_order: 0,
                    fields: command.into_fields(),
                    created_at: now,
                    updated_at: now,
                })
            }
            Self::NotFound => Err(UpdateEntryError::NotFound),
        }
    }
}

pub struct StubDeleteEntryUseCase {
    result: Result<(), DeleteEntryError>,
}

impl StubDeleteEntryUseCase {
    pub fn ok() -> Self {
        Self { result: Ok(()) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(DeleteEntryError::NotFound),
        }
    }
}

#[async_trait]
impl DeleteEntryUseCase for StubDeleteEntryUseCase {
    async fn execute(&self, _command: DeleteEntryCommand) -> Result<(), DeleteEntryError> {
        self.result.clone()
    }
}

pub struct StubPublicEntriesUseCase {
    result: Result<Vec<Value>, PublicContentError>,
}

impl StubPublicEntriesUseCase {
    pub fn success(entries: Vec<Value>) -> Self {
        Self {
            result: Ok(entries),
        }
    }

    pub fn store_error(msg: &str) -> Self {
        Self {
            result: Err(PublicContentError::StoreError(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetPublicEntriesUseCase for StubPublicEntriesUseCase {
    async fn execute(
        &self,
        _collection: Collection,
        _category: Option<Category>,
    ) -> Result<Vec<Value>, PublicContentError> {
        self.result.clone()
    }
}

pub struct StubGroupedSkillsUseCase {
    result: Result<GroupedSkills, PublicContentError>,
}

impl StubGroupedSkillsUseCase {
    pub fn success(skills: GroupedSkills) -> Self {
        Self { result: Ok(skills) }
    }

    pub fn empty() -> Self {
        Self {
            result: Ok(GroupedSkills {
                data: Vec::new(),
                grouped: Default::default(),
            }),
        }
    }
}

#[async_trait]
impl GetGroupedSkillsUseCase for StubGroupedSkillsUseCase {
    async fn execute(&self) -> Result<GroupedSkills, PublicContentError> {
        self.result.clone()
    }
}

pub struct StubPublicProfileUseCase {
    result: Result<Value, PublicContentError>,
}

impl StubPublicProfileUseCase {
    pub fn success(profile: Value) -> Self {
        Self {
            result: Ok(profile),
        }
    }
}

#[async_trait]
impl GetPublicProfileUseCase for StubPublicProfileUseCase {
    async fn execute(&self) -> Result<Value, PublicContentError> {
        self.result.clone()
    }
}

// ============================================================
// Chat Stubs
// ============================================================

/// Completion port stub: fixed chunks, optionally followed or replaced by
/// an error.
pub struct StubCompletionStream {
    chunks: Vec<String>,
    mid_error: Option<CompletionError>,
    connect_error: Option<CompletionError>,
}

impl StubCompletionStream {
    pub fn chunks(chunks: Vec<&str>) -> Self {
        Self {
            chunks: chunks.into_iter().map(str::to_string).collect(),
            mid_error: None,
            connect_error: None,
        }
    }

    pub fn chunks_then_error(chunks: Vec<&str>, error: CompletionError) -> Self {
        Self {
            chunks: chunks.into_iter().map(str::to_string).collect(),
            mid_error: Some(error),
            connect_error: None,
        }
    }

    pub fn connect_error(error: CompletionError) -> Self {
        Self {
            chunks: Vec::new(),
            mid_error: None,
            connect_error: Some(error),
        }
    }
}

#[async_trait]
impl CompletionStream for StubCompletionStream {
    async fn stream_completion(
        &self,
        _system_prompt: &str,
        _messages: &[ChatMessage],
    ) -> Result<TokenStream, CompletionError> {
        if let Some(error) = &self.connect_error {
            return Err(error.clone());
        }

        let mut items: Vec<Result<String, CompletionError>> =
            self.chunks.iter().cloned().map(Ok).collect();
        if let Some(error) = &self.mid_error {
            items.push(Err(error.clone()));
        }

        Ok(Box::pin(stream::iter(items)))
    }
}

/// Chat log stub that records appended entries in memory.
pub struct InMemoryChatLog {
    records: Mutex<Vec<ChatLogRecord>>,
    fail: bool,
}

impl InMemoryChatLog {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub async fn records(&self) -> Vec<ChatLogRecord> {
        self.records.lock().await.clone()
    }
}

impl Default for InMemoryChatLog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatLogStore for InMemoryChatLog {
    async fn append(&self, record: ChatLogRecord) -> Result<(), ChatLogError> {
        if self.fail {
            return Err(ChatLogError::Io("log unavailable".to_string()));
        }
        self.records.lock().await.push(record);
        Ok(())
    }

    async fn read_all(&self) -> Result<Vec<ChatLogRecord>, ChatLogError> {
        if self.fail {
            return Err(ChatLogError::Io("log unavailable".to_string()));
        }
        Ok(self.records.lock().await.clone())
    }
}

pub enum StubRespondUseCase {
    Chunks(Vec<String>),
    UpstreamError(CompletionError),
}

impl StubRespondUseCase {
    pub fn chunks(chunks: Vec<&str>) -> Self {
        Self::Chunks(chunks.into_iter().map(str::to_string).collect())
    }

    pub fn upstream_error(error: CompletionError) -> Self {
        Self::UpstreamError(error)
    }
}

#[async_trait]
impl RespondUseCase for StubRespondUseCase {
    async fn execute(&self, _command: RespondCommand) -> Result<TokenStream, RespondError> {
        match self {
            Self::Chunks(chunks) => {
                let items: Vec<Result<String, CompletionError>> =
                    chunks.iter().cloned().map(Ok).collect();
                Ok(Box::pin(stream::iter(items)))
            }
            Self::UpstreamError(error) => Err(RespondError::Upstream(error.clone())),
        }
    }
}

pub struct StubExportSessionsUseCase {
    result: Result<String, ExportSessionsError>,
}

impl StubExportSessionsUseCase {
    pub fn success(csv: &str) -> Self {
        Self {
            result: Ok(csv.to_string()),
        }
    }

    pub fn log_error(msg: &str) -> Self {
        Self {
            result: Err(ExportSessionsError::LogError(msg.to_string())),
        }
    }
}

#[async_trait]
impl ExportSessionsUseCase for StubExportSessionsUseCase {
    async fn execute(&self) -> Result<String, ExportSessionsError> {
        self.result.clone()
    }
}

// ============================================================
// Upload Stubs
// ============================================================

pub struct StubStoreUploadUseCase {
    result: Result<StoredObject, StoreUploadError>,
}

impl StubStoreUploadUseCase {
    pub fn success(stored: StoredObject) -> Self {
        Self { result: Ok(stored) }
    }

    pub fn storage_error(msg: &str) -> Self {
        Self {
            result: Err(StoreUploadError::StorageError(msg.to_string())),
        }
    }
}

#[async_trait]
impl StoreUploadUseCase for StubStoreUploadUseCase {
    async fn execute(
        &self,
        _command: StoreUploadCommand,
    ) -> Result<StoredObject, StoreUploadError> {
        self.result.clone()
    }
}
