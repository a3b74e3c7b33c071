mod store_upload_service;

pub use store_upload_service::StoreUploadService;
