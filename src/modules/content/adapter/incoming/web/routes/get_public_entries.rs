use actix_web::{get, web, Responder};
use serde::Deserialize;

use super::{parse_category, parse_collection};
use crate::api::schemas::ErrorResponse;
use crate::content::application::domain::entities::Collection;
use crate::content::application::ports::incoming::use_cases::PublicContentError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CategoryFilter {
    category: Option<String>,
}

/// Public content read
///
/// One endpoint serves all seven collections. Profile answers with a
/// single object (placeholder when absent); skills without a category
/// filter answer with `{data, grouped}`; everything else is an ordered,
/// normalized array.
#[utoipa::path(
    get,
    path = "/api/public/{collection}",
    tag = "public",
    params(
        ("collection" = String, Path, description = "Collection slug (profile, projects, experience, education, skills, faqs, side-quests)"),
        ("category" = Option<String>, Query, description = "Optional category filter (no-code, code, ai)")
    ),
    responses(
        (status = 200, description = "Ordered, normalized entries"),
        (status = 400, description = "Unknown collection or category", body = ErrorResponse)
    )
)]
#[get("/api/public/{collection}")]
pub async fn get_public_entries_handler(
    path: web::Path<String>,
    query: web::Query<CategoryFilter>,
    data: web::Data<AppState>,
) -> impl Responder {
    let collection = match parse_collection(&path) {
        Ok(collection) => collection,
        Err(response) => return response,
    };

    let category = match parse_category(query.category.as_deref()) {
        Ok(category) => category,
        Err(response) => return response,
    };

    match collection {
        Collection::Profile => match data.content.public_profile.execute().await {
            Ok(profile) => ApiResponse::success(profile),
            Err(err) => map_public_error(err),
        },

        Collection::Skills if category.is_none() => {
            match data.content.grouped_skills.execute().await {
                Ok(skills) => ApiResponse::success(skills),
                Err(err) => map_public_error(err),
            }
        }

        _ => match data.content.public_entries.execute(collection, category).await {
            Ok(entries) => ApiResponse::success(entries),
            Err(err) => map_public_error(err),
        },
    }
}

fn map_public_error(err: PublicContentError) -> actix_web::HttpResponse {
    match err {
        PublicContentError::StoreError(msg) => ApiResponse::store_error(&msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    use crate::content::application::ports::incoming::use_cases::GroupedSkills;
    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder,
        stubs::{StubGroupedSkillsUseCase, StubPublicEntriesUseCase, StubPublicProfileUseCase},
    };

    #[actix_web::test]
    async fn projects_come_back_as_a_bare_array() {
        let state = TestAppStateBuilder::default()
            .with_public_entries(StubPublicEntriesUseCase::success(vec![
                json!({"title": "A"}),
                json!({"title": "B"}),
            ]))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_public_entries_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/public/projects?category=code")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn skills_without_filter_answer_with_both_shapes() {
        let grouped = GroupedSkills {
            data: vec![json!({"name": "Rust", "category": "code"})],
            grouped: [("code".to_string(), vec![json!({"name": "Rust"})])]
                .into_iter()
                .collect(),
        };

        let state = TestAppStateBuilder::default()
            .with_grouped_skills(StubGroupedSkillsUseCase::success(grouped))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_public_entries_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/public/skills").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["data"]["data"].is_array());
        assert!(body["data"]["grouped"].is_object());
    }

    #[actix_web::test]
    async fn profile_answers_with_a_single_object() {
        let state = TestAppStateBuilder::default()
            .with_public_profile(StubPublicProfileUseCase::success(
                json!({"name": "Alex Carter"}),
            ))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_public_entries_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/public/profile")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["name"], "Alex Carter");
    }

    #[actix_web::test]
    async fn unknown_collection_is_a_bad_request() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_public_entries_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/public/posts").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "UNKNOWN_COLLECTION");
    }

    #[actix_web::test]
    async fn unknown_category_is_a_bad_request() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_public_entries_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/public/projects?category=hardware")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_CATEGORY");
    }

    #[actix_web::test]
    async fn store_failures_keep_the_underlying_message() {
        let state = TestAppStateBuilder::default()
            .with_public_entries(StubPublicEntriesUseCase::store_error("connection lost"))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .service(get_public_entries_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/public/faqs").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "STORE_ERROR");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("connection lost"));
    }
}
