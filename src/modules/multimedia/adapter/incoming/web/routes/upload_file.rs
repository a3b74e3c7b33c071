use actix_multipart::{Field, Multipart, MultipartError};
use actix_web::{post, web, HttpResponse, Responder};
use futures::StreamExt;
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::session::AdminUser;
use crate::multimedia::application::ports::incoming::use_cases::{
    StoreUploadCommand, StoreUploadError, UploadCommandError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    /// Public retrieval URL of the stored object
    #[schema(example = "https://storage.googleapis.com/portfolio-uploads/uploads/a.png")]
    pub url: String,

    /// Object path within the bucket
    #[schema(example = "uploads/a.png")]
    pub path: String,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

struct UploadForm {
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
    bucket: Option<String>,
    path: Option<String>,
}

async fn read_text_field(field: &mut Field) -> Result<String, MultipartError> {
    let mut buf = Vec::new();
    while let Some(chunk) = field.next().await {
        buf.extend_from_slice(&chunk?);
    }
    Ok(String::from_utf8_lossy(&buf).trim().to_string())
}

async fn read_form(payload: &mut Multipart) -> Result<UploadForm, MultipartError> {
    let mut form = UploadForm {
        file_name: String::new(),
        content_type: String::new(),
        bytes: Vec::new(),
        bucket: None,
        path: None,
    };

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let name = field.name().to_string();

        match name.as_str() {
            "file" => {
                form.file_name = field
                    .content_disposition()
                    .get_filename()
                    .unwrap_or("")
                    .to_string();
                form.content_type = field
                    .content_type()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                while let Some(chunk) = field.next().await {
                    form.bytes.extend_from_slice(&chunk?);
                }
            }
            "bucket" => form.bucket = Some(read_text_field(&mut field).await?),
            "path" => form.path = Some(read_text_field(&mut field).await?),
            _ => {
                // drain unknown parts so the stream can continue
                while let Some(chunk) = field.next().await {
                    chunk?;
                }
            }
        }
    }

    Ok(form)
}

/// Image upload
///
/// Multipart form with `file`, an optional `bucket` and an optional
/// `path`; the stored object's public URL comes back for the editor to
/// append to the entry's image list.
#[utoipa::path(
    post,
    path = "/api/admin/upload",
    tag = "admin",
    responses(
        (status = 201, description = "Upload stored", body = inline(SuccessResponse<UploadResponse>)),
        (status = 400, description = "Invalid multipart form or upload policy violation", body = ErrorResponse),
        (status = 502, description = "Object storage unavailable", body = ErrorResponse)
    ),
    security(("bearer_session" = []))
)]
#[post("/api/admin/upload")]
pub async fn upload_file_handler(
    _admin: AdminUser,
    mut payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let form = match read_form(&mut payload).await {
        Ok(form) => form,
        Err(e) => {
            return ApiResponse::bad_request("INVALID_MULTIPART", &e.to_string());
        }
    };

    let command = match StoreUploadCommand::new(
        &data.upload_policy,
        &form.file_name,
        &form.content_type,
        form.bucket,
        form.path,
        form.bytes,
    ) {
        Ok(command) => command,
        Err(e) => return map_command_error(e),
    };

    match data.store_upload_use_case.execute(command).await {
        Ok(stored) => ApiResponse::created(UploadResponse {
            url: stored.url,
            path: stored.path,
        }),

        Err(StoreUploadError::StorageError(msg)) => {
            error!("Storage error while uploading: {}", msg);
            ApiResponse::bad_gateway("STORAGE_ERROR", "Failed to store upload")
        }
    }
}

fn map_command_error(e: UploadCommandError) -> HttpResponse {
    match e {
        UploadCommandError::MissingFile => {
            ApiResponse::bad_request("MISSING_FILE", "No file was supplied")
        }
        UploadCommandError::InvalidFileName => {
            ApiResponse::bad_request("INVALID_FILE_NAME", "Invalid file name")
        }
        UploadCommandError::FileTooLarge {
            max_bytes,
            actual_bytes,
        } => ApiResponse::bad_request(
            "FILE_TOO_LARGE",
            &format!(
                "File too large (max {} bytes, got {} bytes)",
                max_bytes, actual_bytes
            ),
        ),
        UploadCommandError::InvalidMimeType(mime) => {
            ApiResponse::bad_request("INVALID_MIME_TYPE", &format!("Invalid mime type: {}", mime))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use std::sync::Arc;

    use crate::auth::application::ports::outgoing::SessionVerifier;
    use crate::multimedia::application::ports::outgoing::StoredObject;
    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder,
        stubs::{StubSessionVerifier, StubStoreUploadUseCase},
    };

    const BOUNDARY: &str = "----portfolio-test-boundary";

    fn verifier() -> web::Data<Arc<dyn SessionVerifier + Send + Sync>> {
        web::Data::new(Arc::new(StubSessionVerifier) as Arc<dyn SessionVerifier + Send + Sync>)
    }

    fn multipart_body(parts: &[(&str, Option<(&str, &str)>, &str)]) -> String {
        let mut body = String::new();
        for (name, file, value) in parts {
            body.push_str(&format!("--{BOUNDARY}\r\n"));
            match file {
                Some((filename, mime)) => {
                    body.push_str(&format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n"
                    ));
                    body.push_str(&format!("Content-Type: {mime}\r\n\r\n"));
                }
                None => {
                    body.push_str(&format!(
                        "Content-Disposition: form-data; name=\"{name}\"\r\n\r\n"
                    ));
                }
            }
            body.push_str(value);
            body.push_str("\r\n");
        }
        body.push_str(&format!("--{BOUNDARY}--\r\n"));
        body
    }

    fn multipart_request(body: String, authorized: bool) -> actix_web::test::TestRequest {
        let mut req = test::TestRequest::post()
            .uri("/api/admin/upload")
            .insert_header((
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            ))
            .set_payload(body);

        if authorized {
            req = req.insert_header(("Authorization", "Bearer test-token"));
        }

        req
    }

    #[actix_web::test]
    async fn upload_returns_url_and_path() {
        let state = TestAppStateBuilder::default()
            .with_store_upload(StubStoreUploadUseCase::success(StoredObject {
                url: "https://storage.googleapis.com/b/uploads/a.png".to_string(),
                path: "uploads/a.png".to_string(),
            }))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(verifier())
                .service(upload_file_handler),
        )
        .await;

        let body = multipart_body(&[
            ("file", Some(("a.png", "image/png")), "PNGDATA"),
            ("bucket", None, "custom-bucket"),
        ]);
        let resp = test::call_service(&app, multipart_request(body, true).to_request()).await;

        assert_eq!(resp.status(), StatusCode::CREATED);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["path"], "uploads/a.png");
        assert!(json["data"]["url"].as_str().unwrap().starts_with("https://"));
    }

    #[actix_web::test]
    async fn upload_without_session_is_unauthorized() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(verifier())
                .service(upload_file_handler),
        )
        .await;

        let body = multipart_body(&[("file", Some(("a.png", "image/png")), "PNGDATA")]);
        let resp = test::call_service(&app, multipart_request(body, false).to_request()).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn upload_without_file_is_a_bad_request() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(verifier())
                .service(upload_file_handler),
        )
        .await;

        let body = multipart_body(&[("bucket", None, "custom-bucket")]);
        let resp = test::call_service(&app, multipart_request(body, true).to_request()).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "MISSING_FILE");
    }

    #[actix_web::test]
    async fn non_image_upload_is_rejected() {
        let state = TestAppStateBuilder::default().build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(verifier())
                .service(upload_file_handler),
        )
        .await;

        let body = multipart_body(&[(
            "file",
            Some(("resume.pdf", "application/pdf")),
            "PDFDATA",
        )]);
        let resp = test::call_service(&app, multipart_request(body, true).to_request()).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "INVALID_MIME_TYPE");
    }

    #[actix_web::test]
    async fn storage_failure_is_a_bad_gateway() {
        let state = TestAppStateBuilder::default()
            .with_store_upload(StubStoreUploadUseCase::storage_error("GCS unavailable"))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(verifier())
                .service(upload_file_handler),
        )
        .await;

        let body = multipart_body(&[("file", Some(("a.png", "image/png")), "PNGDATA")]);
        let resp = test::call_service(&app, multipart_request(body, true).to_request()).await;

        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "STORAGE_ERROR");
    }
}
