use actix_web::web;
use serde_json::json;
use std::sync::Arc;

use crate::chat::application::ports::incoming::use_cases::{
    ExportSessionsUseCase, RespondUseCase,
};
use crate::content::application::ports::incoming::use_cases::{
    CreateEntryUseCase, DeleteEntryUseCase, GetGroupedSkillsUseCase, GetPublicEntriesUseCase,
    GetPublicProfileUseCase, ListEntriesUseCase, UpdateEntryUseCase,
};
use crate::multimedia::application::domain::policies::UploadPolicy;
use crate::multimedia::application::ports::incoming::use_cases::StoreUploadUseCase;
use crate::multimedia::application::ports::outgoing::StoredObject;
use crate::tests::support::stubs::*;
use crate::{AppState, ChatUseCases, ContentUseCases};

pub struct TestAppStateBuilder {
    list: Arc<dyn ListEntriesUseCase + Send + Sync>,
    create: Arc<dyn CreateEntryUseCase + Send + Sync>,
    update: Arc<dyn UpdateEntryUseCase + Send + Sync>,
    delete: Arc<dyn DeleteEntryUseCase + Send + Sync>,
    public_entries: Arc<dyn GetPublicEntriesUseCase + Send + Sync>,
    grouped_skills: Arc<dyn GetGroupedSkillsUseCase + Send + Sync>,
    public_profile: Arc<dyn GetPublicProfileUseCase + Send + Sync>,
    respond: Arc<dyn RespondUseCase + Send + Sync>,
    export: Arc<dyn ExportSessionsUseCase + Send + Sync>,
    store_upload: Arc<dyn StoreUploadUseCase + Send + Sync>,
    upload_policy: UploadPolicy,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            list: Arc::new(StubListEntriesUseCase::success(vec![])),
            create: Arc::new(StubCreateEntryUseCase),
            update: Arc::new(StubUpdateEntryUseCase::success_echo()),
            delete: Arc::new(StubDeleteEntryUseCase::ok()),
            public_entries: Arc::new(StubPublicEntriesUseCase::success(vec![])),
            grouped_skills: Arc::new(StubGroupedSkillsUseCase::empty()),
            public_profile: Arc::new(StubPublicProfileUseCase::success(json!({}))),
            respond: Arc::new(StubRespondUseCase::chunks(vec![])),
            export: Arc::new(StubExportSessionsUseCase::success("")),
            store_upload: Arc::new(StubStoreUploadUseCase::success(StoredObject {
                url: "https://storage.googleapis.com/test-bucket/uploads/x.png".to_string(),
                path: "uploads/x.png".to_string(),
            })),
            upload_policy: UploadPolicy::new("test-bucket"),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_list_entries(mut self, uc: impl ListEntriesUseCase + Send + Sync + 'static) -> Self {
        self.list = Arc::new(uc);
        self
    }

    pub fn with_create_entry(mut self, uc: impl CreateEntryUseCase + Send + Sync + 'static) -> Self {
        self.create = Arc::new(uc);
        self
    }

    pub fn with_update_entry(mut self, uc: impl UpdateEntryUseCase + Send + Sync + 'static) -> Self {
        self.update = Arc::new(uc);
        self
    }

    pub fn with_delete_entry(mut self, uc: impl DeleteEntryUseCase + Send + Sync + 'static) -> Self {
        self.delete = Arc::new(uc);
        self
    }

    pub fn with_public_entries(
        mut self,
        uc: impl GetPublicEntriesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.public_entries = Arc::new(uc);
        self
    }

    pub fn with_grouped_skills(
        mut self,
        uc: impl GetGroupedSkillsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.grouped_skills = Arc::new(uc);
        self
    }

    pub fn with_public_profile(
        mut self,
        uc: impl GetPublicProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.public_profile = Arc::new(uc);
        self
    }

    pub fn with_respond(mut self, uc: impl RespondUseCase + Send + Sync + 'static) -> Self {
        self.respond = Arc::new(uc);
        self
    }

    pub fn with_export_sessions(
        mut self,
        uc: impl ExportSessionsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.export = Arc::new(uc);
        self
    }

    pub fn with_store_upload(
        mut self,
        uc: impl StoreUploadUseCase + Send + Sync + 'static,
    ) -> Self {
        self.store_upload = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            content: ContentUseCases {
                list: self.list,
                create: self.create,
                update: self.update,
                delete: self.delete,
                public_entries: self.public_entries,
                grouped_skills: self.grouped_skills,
                public_profile: self.public_profile,
            },
            chat: ChatUseCases {
                respond: self.respond,
                export: self.export,
            },
            store_upload_use_case: self.store_upload,
            upload_policy: self.upload_policy,
        })
    }
}
