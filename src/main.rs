pub mod modules;
pub use modules::auth;
pub use modules::chat;
pub use modules::content;
pub use modules::multimedia;
pub mod api;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::jwt_session_verifier::{JwtSessionConfig, JwtSessionVerifier};
use crate::auth::application::ports::outgoing::SessionVerifier;

use crate::content::adapter::outgoing::content_store_postgres::ContentStorePostgres;
use crate::content::application::ports::incoming::use_cases::{
    CreateEntryUseCase, DeleteEntryUseCase, GetGroupedSkillsUseCase, GetPublicEntriesUseCase,
    GetPublicProfileUseCase, ListEntriesUseCase, UpdateEntryUseCase,
};
use crate::content::application::ports::outgoing::ContentStore;
use crate::content::application::services::{
    CreateEntryService, DeleteEntryService, ListEntriesService, PublicContentService,
    UpdateEntryService,
};

use crate::chat::adapter::outgoing::chat_log_file::ChatLogFile;
use crate::chat::adapter::outgoing::completion_client_anthropic::AnthropicCompletionClient;
use crate::chat::application::ports::incoming::use_cases::{
    ExportSessionsUseCase, RespondUseCase,
};
use crate::chat::application::ports::outgoing::{ChatLogStore, CompletionStream};
use crate::chat::application::services::{ChatRelayService, ExportSessionsService};

use crate::multimedia::adapter::outgoing::cloud_storage::object_storage_gcs::GcsObjectStorage;
use crate::multimedia::application::domain::policies::UploadPolicy;
use crate::multimedia::application::ports::incoming::use_cases::StoreUploadUseCase;
use crate::multimedia::application::ports::outgoing::ObjectStorage;
use crate::multimedia::application::services::StoreUploadService;

use actix_web::{web, App, HttpServer};
use sea_orm::{ConnectOptions, Database};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct ContentUseCases {
    pub list: Arc<dyn ListEntriesUseCase + Send + Sync>,
    pub create: Arc<dyn CreateEntryUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateEntryUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteEntryUseCase + Send + Sync>,
    pub public_entries: Arc<dyn GetPublicEntriesUseCase + Send + Sync>,
    pub grouped_skills: Arc<dyn GetGroupedSkillsUseCase + Send + Sync>,
    pub public_profile: Arc<dyn GetPublicProfileUseCase + Send + Sync>,
}

#[derive(Clone)]
pub struct ChatUseCases {
    pub respond: Arc<dyn RespondUseCase + Send + Sync>,
    pub export: Arc<dyn ExportSessionsUseCase + Send + Sync>,
}

#[derive(Clone)]
pub struct AppState {
    pub content: ContentUseCases,
    pub chat: ChatUseCases,
    pub store_upload_use_case: Arc<dyn StoreUploadUseCase + Send + Sync>,
    pub upload_policy: UploadPolicy,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environtment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    // Load Env. variables
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL is not set in .env file");
    let host = env::var("HOST").expect("HOST is not set in .env file");
    let port = env::var("PORT").expect("PORT is not set in .env file");
    let anthropic_api_key =
        env::var("ANTHROPIC_API_KEY").expect("ANTHROPIC_API_KEY is not set in .env file");
    let chat_log_path =
        env::var("CHAT_LOG_PATH").unwrap_or_else(|_| "data/chat_sessions.json".to_string());

    let server_url = format!("{host}:{port}");
    println!("Server run on: {}", server_url);

    // Database connection
    let mut opt = ConnectOptions::new(db_url);
    opt.max_connections(50)
        .min_connections(10)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .expect("Failed to connect to database");

    let db_arc = Arc::new(conn);

    // Content store and the CRUD services on top of it
    let store = ContentStorePostgres::new(Arc::clone(&db_arc));

    let list_entries_use_case = ListEntriesService::new(store.clone());
    let create_entry_use_case = CreateEntryService::new(store.clone());
    let update_entry_use_case = UpdateEntryService::new(store.clone());
    let delete_entry_use_case = DeleteEntryService::new(store.clone());
    let public_content_service = Arc::new(PublicContentService::new(store.clone()));

    // Chat relay
    let content_store_arc: Arc<dyn ContentStore> = Arc::new(store.clone());
    let completions: Arc<dyn CompletionStream> =
        Arc::new(AnthropicCompletionClient::new(anthropic_api_key));
    let chat_log: Arc<dyn ChatLogStore> = Arc::new(ChatLogFile::new(chat_log_path));

    let chat_relay_use_case =
        ChatRelayService::new(content_store_arc, completions, Arc::clone(&chat_log));
    let export_sessions_use_case = ExportSessionsService::new(chat_log);

    // Upload
    let object_storage: Arc<dyn ObjectStorage> = Arc::new(GcsObjectStorage::new());
    let store_upload_use_case = StoreUploadService::new(object_storage);

    let state = AppState {
        content: ContentUseCases {
            list: Arc::new(list_entries_use_case),
            create: Arc::new(create_entry_use_case),
            update: Arc::new(update_entry_use_case),
            delete: Arc::new(delete_entry_use_case),
            public_entries: public_content_service.clone(),
            grouped_skills: public_content_service.clone(),
            public_profile: public_content_service,
        },
        chat: ChatUseCases {
            respond: Arc::new(chat_relay_use_case),
            export: Arc::new(export_sessions_use_case),
        },
        store_upload_use_case: Arc::new(store_upload_use_case),
        upload_policy: UploadPolicy::from_env(),
    };

    // Session check against the external auth provider's tokens
    let session_verifier: Arc<dyn SessionVerifier + Send + Sync> =
        Arc::new(JwtSessionVerifier::new(JwtSessionConfig::from_env()));

    // Clone db_arc for use in HttpServer closure
    let db_for_server = Arc::clone(&db_arc);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&session_verifier)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(shared::api::custom_json_config())
            .configure(init_routes)
    })
    .bind(server_url)?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Public content
    cfg.service(crate::content::adapter::incoming::web::routes::get_public_entries_handler);
    // Media (before the dynamic /api/admin/{collection} routes, so
    // "upload" is never read as a collection slug)
    cfg.service(crate::multimedia::adapter::incoming::web::routes::upload_file_handler);
    // Admin content
    cfg.service(crate::content::adapter::incoming::web::routes::get_entries_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::create_entry_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::update_entry_handler);
    cfg.service(crate::content::adapter::incoming::web::routes::delete_entry_handler);
    // Chat
    cfg.service(crate::chat::adapter::incoming::web::routes::chat_handler);
    cfg.service(crate::chat::adapter::incoming::web::routes::export_sessions_handler);
    // OpenAPI
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}")
            .url("/api-docs/openapi.json", crate::api::openapi::ApiDoc::openapi()),
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
